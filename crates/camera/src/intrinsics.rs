use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Physical camera parameters, in the same length unit throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Lens focal length.
    pub focal_length: f32,
    /// Sensor size as (width, height).
    pub sensor_size: Vec2,
    /// Distance from the pinhole to the image plane.
    pub near_distance: f32,
}

impl Default for CameraIntrinsics {
    fn default() -> Self {
        // 50mm lens on a full-frame sensor, image plane 0.3 units out.
        Self {
            focal_length: 50.0,
            sensor_size: Vec2::new(36.0, 24.0),
            near_distance: 0.3,
        }
    }
}

impl CameraIntrinsics {
    /// All parameters must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), CameraError> {
        require_positive("focal length", self.focal_length)?;
        require_positive("sensor width", self.sensor_size.x)?;
        require_positive("sensor height", self.sensor_size.y)?;
        require_positive("near distance", self.near_distance)
    }

    /// Image-plane size at the near distance.
    pub fn image_dimensions(&self) -> Result<ImageDimensions, CameraError> {
        calculate_image_dimensions(self.focal_length, self.near_distance, self.sensor_size)
    }
}

/// Physical extent of the visible image plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub height: f32,
    pub width: f32,
}

impl ImageDimensions {
    pub fn validate(&self) -> Result<(), CameraError> {
        require_positive("image height", self.height)?;
        require_positive("image width", self.width)
    }
}

/// Sampled grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelResolution {
    pub rows: usize,
    pub cols: usize,
}

/// Image-plane size: `near * sensor / focal` per axis.
pub fn calculate_image_dimensions(
    focal_length: f32,
    near_distance: f32,
    sensor_size: Vec2,
) -> Result<ImageDimensions, CameraError> {
    CameraIntrinsics {
        focal_length,
        sensor_size,
        near_distance,
    }
    .validate()?;

    let dims = ImageDimensions {
        height: near_distance * sensor_size.y / focal_length,
        width: near_distance * sensor_size.x / focal_length,
    };
    tracing::debug!(height = dims.height, width = dims.width, "image plane dimensions");
    Ok(dims)
}

/// Upper bound on sampled pixels per frame (16384 x 16384).
pub const MAX_PIXELS: usize = 1 << 28;

/// Grid size for `row_count` rows of square pixels.
///
/// The pixel pitch is `height / row_count`; columns are however many whole
/// pitches fit in the width. Truncation can leave a sliver of the image plane
/// unsampled when the aspect ratio is not a multiple of the pitch.
pub fn calculate_pixel_resolution(
    dims: ImageDimensions,
    row_count: usize,
) -> Result<PixelResolution, CameraError> {
    dims.validate()?;
    if row_count == 0 {
        return Err(CameraError::InvalidConfiguration(
            "row count must be positive".into(),
        ));
    }

    let pitch = dims.height / row_count as f32;
    let cols = (dims.width / pitch).floor();
    if !cols.is_finite() || cols < 1.0 {
        return Err(CameraError::InvalidConfiguration(format!(
            "image width {} holds no whole pixel of pitch {pitch}",
            dims.width
        )));
    }

    let cols = cols as usize;
    match row_count.checked_mul(cols) {
        Some(cells) if cells <= MAX_PIXELS => Ok(PixelResolution {
            rows: row_count,
            cols,
        }),
        _ => Err(CameraError::InvalidConfiguration(format!(
            "{row_count} rows by {cols} columns exceeds the {MAX_PIXELS} pixel limit"
        ))),
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), CameraError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CameraError::InvalidConfiguration(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_follow_similar_triangles() {
        let dims = calculate_image_dimensions(50.0, 0.5, Vec2::new(36.0, 24.0)).unwrap();
        assert!((dims.height - 0.24).abs() < 1e-6);
        assert!((dims.width - 0.36).abs() < 1e-6);
    }

    #[test]
    fn unit_camera_dimensions() {
        let dims = calculate_image_dimensions(1.0, 1.0, Vec2::new(2.0, 2.0)).unwrap();
        assert_eq!(dims, ImageDimensions { height: 2.0, width: 2.0 });
    }

    #[test]
    fn non_positive_intrinsics_rejected() {
        assert!(calculate_image_dimensions(0.0, 1.0, Vec2::ONE).is_err());
        assert!(calculate_image_dimensions(1.0, -1.0, Vec2::ONE).is_err());
        assert!(calculate_image_dimensions(1.0, 1.0, Vec2::new(0.0, 1.0)).is_err());
        assert!(calculate_image_dimensions(1.0, 1.0, Vec2::new(1.0, f32::NAN)).is_err());
    }

    #[test]
    fn columns_fill_width_with_square_pixels() {
        let dims = ImageDimensions { height: 2.0, width: 3.0 };
        let res = calculate_pixel_resolution(dims, 4).unwrap();
        assert_eq!(res, PixelResolution { rows: 4, cols: 6 });
    }

    #[test]
    fn columns_truncate_toward_zero() {
        // pitch 0.5, width 1.9 → 3.8 pitches → 3 columns
        let dims = ImageDimensions { height: 1.0, width: 1.9 };
        let res = calculate_pixel_resolution(dims, 2).unwrap();
        assert_eq!(res.cols, 3);
    }

    #[test]
    fn zero_rows_rejected() {
        let dims = ImageDimensions { height: 1.0, width: 1.0 };
        assert!(matches!(
            calculate_pixel_resolution(dims, 0),
            Err(CameraError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn oversized_grid_rejected() {
        let dims = ImageDimensions { height: 1.0, width: 2.0 };
        assert!(matches!(
            calculate_pixel_resolution(dims, usize::MAX),
            Err(CameraError::InvalidConfiguration(_))
        ));
        // 16385 x 16385 is one row and column past the limit
        let square = ImageDimensions { height: 1.0, width: 1.0 };
        assert!(calculate_pixel_resolution(square, 16_384).is_ok());
        assert!(calculate_pixel_resolution(square, 16_385).is_err());
    }

    #[test]
    fn too_narrow_for_one_column_rejected() {
        let dims = ImageDimensions { height: 10.0, width: 1.0 };
        assert!(calculate_pixel_resolution(dims, 1).is_err());
    }

    #[test]
    fn default_intrinsics_are_valid() {
        let cam = CameraIntrinsics::default();
        cam.validate().unwrap();
        let dims = cam.image_dimensions().unwrap();
        assert!(dims.width > dims.height);
    }
}
