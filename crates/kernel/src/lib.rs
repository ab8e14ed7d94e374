//! Linear algebra kernel: dynamically-shaped matrix product, per-axis rotation
//! matrices, and Euler-angle composition.
//!
//! # Invariants
//! - A product is either complete or an error; no truncated output.
//! - Every matrix built by [`euler_to_matrix`] is orthonormal.

mod error;
mod matrix;
mod rotation;

pub use error::KernelError;
pub use matrix::{format_matrix, Matrix};
pub use rotation::{
    axis_rotation, axis_rotation_labeled, calculate_direction, euler_to_matrix,
    intersect_line_plane, Axis, EulerOrder,
};

pub fn crate_info() -> &'static str {
    "raycam-kernel v0.1.0"
}
