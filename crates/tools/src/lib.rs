//! Developer Tooling: debug line geometry for the sampled image grid and its
//! rays, plus read-only grid inspection.
//!
//! # Invariants
//! - Tools only read rays, grids and scenes; they never feed back into a render.

mod inspector;
mod lines;

pub use inspector::{ColorGridSummary, GridInspector, RayGridSummary};
pub use lines::{image_grid_lines, rays_to_image_plane, rays_to_scene, DebugLine, LineSink};

pub fn crate_info() -> &'static str {
    "raycam-tools v0.1.0"
}
