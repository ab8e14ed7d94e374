//! Scene Query Adapter: the intersection capability the renderer depends on.
//!
//! The renderer only ever sees [`SceneQuery`]. [`Scene`] is a small
//! fixed-geometry implementation (spheres and planes) for tests, demos and
//! the CLI; a host engine plugs in its own physics queries instead.
//!
//! # Invariants
//! - `intersect` returns the nearest hit within `[0, max_distance]`, or `None`.
//! - Returned normals are unit length.

mod filter;
mod query;
mod scene;

pub use filter::ObjectFilter;
pub use query::{Intersection, SceneQuery};
pub use scene::{ObjectId, Scene, SceneDescription, SceneObject, Shape};

pub fn crate_info() -> &'static str {
    "raycam-scene v0.1.0"
}
