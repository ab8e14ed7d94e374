use raycam_common::ColorGrid;
use raycam_scene::SceneQuery;

use crate::config::{RenderConfig, RenderView};
use crate::error::RenderError;
use crate::pipeline;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene through queries and a view, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene from the given view.
    fn render(&self, scene: &dyn SceneQuery, view: &RenderView)
        -> Result<Self::Output, RenderError>;
}

/// CPU raycaster producing a color grid.
#[derive(Debug, Clone, Default)]
pub struct RaycastRenderer {
    config: RenderConfig,
}

impl RaycastRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for RaycastRenderer {
    type Output = ColorGrid;

    fn render(&self, scene: &dyn SceneQuery, view: &RenderView) -> Result<ColorGrid, RenderError> {
        pipeline::render(scene, view, &self.config)
    }
}

/// Luminance ramp from dark to bright.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Debug text renderer: the raycast image as ASCII art.
///
/// Useful for CLI output, logging, and testing without an image viewer.
#[derive(Debug, Clone, Default)]
pub struct DebugTextRenderer {
    config: RenderConfig,
}

impl DebugTextRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &dyn SceneQuery, view: &RenderView) -> Result<String, RenderError> {
        let colors = pipeline::render(scene, view, &self.config)?;
        let background = colors
            .as_slice()
            .iter()
            .filter(|c| **c == self.config.miss_color)
            .count();

        let p = view.pose.position;
        let e = view.pose.euler_degrees;
        let mut out = String::new();
        out.push_str(&format!(
            "=== Raycast ({}x{}, order={}) ===\n",
            colors.rows(),
            colors.cols(),
            self.config.order
        ));
        out.push_str(&format!(
            "Camera: pos=({:.2}, {:.2}, {:.2}) euler=({:.1}, {:.1}, {:.1})\n",
            p.x, p.y, p.z, e.x, e.y, e.z
        ));
        out.push_str(&format!("Background: {background}/{}\n", colors.len()));

        for i in 0..colors.rows() {
            let Some(row) = colors.row(i) else { break };
            for c in row {
                let l = c.luminance().clamp(0.0, 1.0);
                let idx = ((l * (RAMP.len() - 1) as f32).round() as usize).min(RAMP.len() - 1);
                out.push(RAMP[idx] as char);
            }
            out.push('\n');
        }

        Ok(out)
    }
}
