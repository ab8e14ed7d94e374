//! Rendering: shading resolver, raycast pipeline, and image assembly.
//!
//! # Invariants
//! - Rendering is a pure function of scene, view, and configuration; no
//!   state survives between calls.
//! - The renderer never mutates the scene; it only issues queries.
//! - Every ray is shaded independently and written to its own cell.

mod config;
mod error;
mod image;
mod pipeline;
mod renderer;
mod shading;

pub use config::{RenderConfig, RenderView};
pub use error::RenderError;
pub use image::{to_image_buffer, ImageBuffer};
pub use pipeline::{render, shade_rays};
pub use renderer::{DebugTextRenderer, RaycastRenderer, Renderer};
pub use shading::{light_direction, shade};

pub fn crate_info() -> &'static str {
    "raycam-render v0.1.0"
}
