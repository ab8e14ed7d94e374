use glam::Vec3;
use raycam_common::{Pose, Ray, RayGrid};
use raycam_kernel::{calculate_direction, euler_to_matrix, EulerOrder, Matrix};

use crate::error::CameraError;
use crate::intrinsics::{calculate_pixel_resolution, ImageDimensions, PixelResolution};

/// World-space camera axes for a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl CameraBasis {
    pub fn from_pose(pose: &Pose, order: EulerOrder) -> Result<Self, CameraError> {
        let rotation = euler_to_matrix(pose.euler_degrees, order)?;
        Self::from_rotation(&rotation)
    }

    pub fn from_rotation(rotation: &Matrix) -> Result<Self, CameraError> {
        Ok(Self {
            right: calculate_direction(rotation, Vec3::X)?,
            up: calculate_direction(rotation, Vec3::Y)?,
            forward: calculate_direction(rotation, Vec3::Z)?,
        })
    }
}

/// Un-rotated direction through the center of pixel `(row, col)`.
///
/// Row indices grow downward while camera-space y grows upward, hence the
/// sign flip on y. The z component is always 1.
pub fn local_ray_direction(
    row: usize,
    col: usize,
    resolution: PixelResolution,
    dims: ImageDimensions,
    near_distance: f32,
) -> Vec3 {
    let n_rows = resolution.rows as f32;
    let n_cols = resolution.cols as f32;
    let x = (col as f32 - (n_cols - 1.0) * 0.5) * (dims.width / n_cols) / near_distance;
    let y = -(row as f32 - (n_rows - 1.0) * 0.5) * (dims.height / n_rows) / near_distance;
    Vec3::new(x, y, 1.0)
}

/// One view ray per pixel for a camera at `pose`, using the default
/// [`EulerOrder::ZXY`] composition.
pub fn calculate_rays(
    pose: &Pose,
    near_distance: f32,
    dims: ImageDimensions,
    row_count: usize,
) -> Result<RayGrid, CameraError> {
    calculate_rays_with_order(pose, near_distance, dims, row_count, EulerOrder::ZXY)
}

/// [`calculate_rays`] with an explicit Euler composition order.
pub fn calculate_rays_with_order(
    pose: &Pose,
    near_distance: f32,
    dims: ImageDimensions,
    row_count: usize,
    order: EulerOrder,
) -> Result<RayGrid, CameraError> {
    if !(near_distance.is_finite() && near_distance > 0.0) {
        return Err(CameraError::InvalidConfiguration(format!(
            "near distance must be positive, got {near_distance}"
        )));
    }
    let resolution = calculate_pixel_resolution(dims, row_count)?;
    let rotation = euler_to_matrix(pose.euler_degrees, order)?;
    tracing::debug!(
        rows = resolution.rows,
        cols = resolution.cols,
        %order,
        "generating ray grid"
    );

    let mut cells = Vec::with_capacity(resolution.rows * resolution.cols);
    for i in 0..resolution.rows {
        for j in 0..resolution.cols {
            let local = local_ray_direction(i, j, resolution, dims, near_distance);
            let direction = calculate_direction(&rotation, local)?;
            cells.push(Ray::new(pose.position, direction));
        }
    }

    RayGrid::from_vec(resolution.rows, resolution.cols, cells)
        .map_err(|e| CameraError::InvalidConfiguration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::intrinsics::calculate_image_dimensions;

    const EPS: f32 = 1e-5;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    fn unit_dims() -> ImageDimensions {
        calculate_image_dimensions(1.0, 1.0, Vec2::new(2.0, 2.0)).unwrap()
    }

    #[test]
    fn two_by_two_grid_hits_quadrant_centers() {
        let rays = calculate_rays(&Pose::default(), 1.0, unit_dims(), 2).unwrap();
        assert_eq!(rays.rows(), 2);
        assert_eq!(rays.cols(), 2);

        assert_vec_near(rays[(0, 0)].direction, Vec3::new(-0.5, 0.5, 1.0));
        assert_vec_near(rays[(0, 1)].direction, Vec3::new(0.5, 0.5, 1.0));
        assert_vec_near(rays[(1, 0)].direction, Vec3::new(-0.5, -0.5, 1.0));
        assert_vec_near(rays[(1, 1)].direction, Vec3::new(0.5, -0.5, 1.0));
    }

    #[test]
    fn single_row_looks_straight_ahead() {
        let dims = ImageDimensions { height: 1.0, width: 1.0 };
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 90.0, 0.0));
        let rays = calculate_rays(&pose, 0.5, dims, 1).unwrap();
        assert_eq!(rays.rows(), 1);
        assert_eq!(rays.cols(), 1);
        let ray = rays[(0, 0)];
        assert_eq!(ray.origin, pose.position);
        // local +Z yawed 90 degrees lands on +X
        assert_vec_near(ray.direction, Vec3::X);
    }

    #[test]
    fn all_rays_share_camera_origin() {
        let pose = Pose::new(Vec3::new(-4.0, 1.0, 7.5), Vec3::new(15.0, -30.0, 5.0));
        let rays = calculate_rays(&pose, 1.0, unit_dims(), 5).unwrap();
        assert!(rays.iter_cells().all(|(_, _, r)| r.origin == pose.position));
    }

    #[test]
    fn rotation_preserves_local_direction_length() {
        let pose = Pose::new(Vec3::ZERO, Vec3::new(33.0, 61.0, -12.0));
        let dims = unit_dims();
        let rays = calculate_rays(&pose, 1.0, dims, 3).unwrap();
        let res = PixelResolution { rows: 3, cols: 3 };
        for (i, j, ray) in rays.iter_cells() {
            let local = local_ray_direction(i, j, res, dims, 1.0);
            assert!((ray.direction.length() - local.length()).abs() < EPS);
        }
    }

    #[test]
    fn wide_image_gets_more_columns() {
        let dims = ImageDimensions { height: 1.0, width: 2.5 };
        let rays = calculate_rays(&Pose::default(), 1.0, dims, 2).unwrap();
        assert_eq!(rays.rows(), 2);
        assert_eq!(rays.cols(), 5);
        // symmetric about the optical axis
        let left = rays[(0, 0)].direction;
        let right = rays[(0, 4)].direction;
        assert!((left.x + right.x).abs() < EPS);
    }

    #[test]
    fn degenerate_inputs_rejected() {
        let dims = unit_dims();
        assert!(calculate_rays(&Pose::default(), 0.0, dims, 2).is_err());
        assert!(calculate_rays(&Pose::default(), 1.0, dims, 0).is_err());
        let flat = ImageDimensions { height: 0.0, width: 1.0 };
        assert!(calculate_rays(&Pose::default(), 1.0, flat, 2).is_err());
    }

    #[test]
    fn huge_row_count_is_an_error() {
        let dims = ImageDimensions { height: 1.0, width: 2.0 };
        let err = calculate_rays(&Pose::default(), 1.0, dims, usize::MAX).unwrap_err();
        assert!(matches!(err, CameraError::InvalidConfiguration(_)));
    }

    #[test]
    fn basis_for_identity_pose() {
        let basis = CameraBasis::from_pose(&Pose::default(), EulerOrder::ZXY).unwrap();
        assert_vec_near(basis.right, Vec3::X);
        assert_vec_near(basis.up, Vec3::Y);
        assert_vec_near(basis.forward, Vec3::Z);
    }

    #[test]
    fn basis_for_pitched_pose_looks_down() {
        let pose = Pose::new(Vec3::ZERO, Vec3::new(90.0, 0.0, 0.0));
        let basis = CameraBasis::from_pose(&pose, EulerOrder::ZXY).unwrap();
        assert_vec_near(basis.forward, Vec3::new(0.0, -1.0, 0.0));
        assert_vec_near(basis.up, Vec3::Z);
    }
}
