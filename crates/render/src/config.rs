use glam::Vec3;
use raycam_camera::CameraIntrinsics;
use raycam_common::{Color, Pose};
use raycam_kernel::EulerOrder;
use raycam_scene::ObjectFilter;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Per-call render settings. Built once and passed down the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Number of sampled pixel rows; columns follow from the aspect ratio.
    pub row_count: usize,
    /// Color written for rays that hit nothing.
    pub miss_color: Color,
    /// Farthest hit distance a ray may report.
    pub max_distance: f32,
    /// Which scene layers are intersectable.
    pub filter: ObjectFilter,
    /// Euler composition order for camera and light orientations.
    pub order: EulerOrder,
    /// Shade rows on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            row_count: 64,
            miss_color: Color::BLACK,
            max_distance: 1000.0,
            filter: ObjectFilter::ALL,
            order: EulerOrder::ZXY,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return Err(RenderError::InvalidConfiguration(format!(
                "max distance must be positive, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Camera and light placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderView {
    pub pose: Pose,
    pub intrinsics: CameraIntrinsics,
    /// Euler angles (degrees) of the directional light; it shines along its
    /// local +Z.
    pub light_orientation: Vec3,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            intrinsics: CameraIntrinsics::default(),
            light_orientation: Vec3::new(50.0, -30.0, 0.0),
        }
    }
}
