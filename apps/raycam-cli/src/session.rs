use std::path::Path;

use anyhow::Context;
use glam::{Vec2, Vec3};
use raycam_camera::CameraIntrinsics;
use raycam_common::{Color, Pose};
use raycam_render::{RenderConfig, RenderView};
use raycam_scene::{SceneDescription, SceneObject, Shape};
use serde::{Deserialize, Serialize};

/// Everything one render needs, as stored in a session JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub view: RenderView,
    pub config: RenderConfig,
    pub scene: SceneDescription,
}

impl Session {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading session file {}", path.display()))?;
        let session = serde_json::from_str(&text)
            .with_context(|| format!("parsing session file {}", path.display()))?;
        tracing::info!("loaded session from {}", path.display());
        Ok(session)
    }

    /// A floor, three spheres, and a camera looking at them.
    pub fn demo() -> Self {
        let sphere = |x: f32, r: f32, color: Color| {
            SceneObject::new(
                Shape::Sphere {
                    center: Vec3::new(x, r, 4.0),
                    radius: r,
                },
                color,
            )
        };

        Self {
            view: RenderView {
                pose: Pose::new(Vec3::new(0.0, 1.5, -4.0), Vec3::new(10.0, 0.0, 0.0)),
                intrinsics: CameraIntrinsics {
                    focal_length: 35.0,
                    sensor_size: Vec2::new(36.0, 24.0),
                    near_distance: 0.3,
                },
                light_orientation: Vec3::new(50.0, -30.0, 0.0),
            },
            config: RenderConfig {
                row_count: 120,
                miss_color: Color::rgb(0.05, 0.05, 0.08),
                ..RenderConfig::default()
            },
            scene: SceneDescription {
                objects: vec![
                    SceneObject::new(
                        Shape::Plane {
                            origin: Vec3::ZERO,
                            normal: Vec3::Y,
                        },
                        Color::rgb(0.7, 0.7, 0.7),
                    ),
                    sphere(-2.2, 0.8, Color::rgb(0.9, 0.2, 0.2)),
                    sphere(0.0, 1.0, Color::rgb(0.2, 0.8, 0.3)),
                    sphere(2.2, 0.6, Color::rgb(0.2, 0.4, 0.9)).with_layers(0b10),
                ],
            },
        }
    }

    /// Resolve `--session`, falling back to the demo scene.
    pub fn load_or_demo(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::demo()),
        }
    }
}
