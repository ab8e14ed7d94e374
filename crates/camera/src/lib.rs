//! Ray Generator: pinhole camera intrinsics and per-pixel view rays.
//!
//! # Invariants
//! - Every ray in a grid shares the camera position as origin.
//! - The grid never exceeds the image-plane width: the column count is the
//!   number of whole pixels of the row pitch that fit.
//! - Degenerate configuration is an error, never an empty or infinite grid.

mod error;
mod intrinsics;
mod rays;

pub use error::CameraError;
pub use intrinsics::{
    calculate_image_dimensions, calculate_pixel_resolution, CameraIntrinsics, ImageDimensions,
    PixelResolution, MAX_PIXELS,
};
pub use rays::{calculate_rays, calculate_rays_with_order, local_ray_direction, CameraBasis};

pub fn crate_info() -> &'static str {
    "raycam-camera v0.1.0"
}
