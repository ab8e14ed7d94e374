//! Shared data model for the raycam renderer.
//!
//! # Invariants
//! - Grids are row-major; row 0 is the top sampled row.
//! - Ray directions are a parametrization, not unit vectors.

mod grid;
mod types;

pub use grid::{ColorGrid, Grid, GridError, RayGrid};
pub use types::{Color, Pose, Ray};

pub fn crate_info() -> &'static str {
    "raycam-common v0.1.0"
}
