use glam::Vec3;
use raycam_camera::{calculate_pixel_resolution, CameraBasis, CameraError, ImageDimensions};
use raycam_common::{Color, Pose, RayGrid};
use raycam_kernel::{intersect_line_plane, EulerOrder};
use raycam_scene::{ObjectFilter, SceneQuery};

/// A colored 3-D segment for a debug line sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

impl DebugLine {
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Consumer of debug lines (an editor gizmo layer, a log, a test buffer).
pub trait LineSink {
    fn draw_line(&mut self, line: DebugLine);

    fn draw_all(&mut self, lines: impl IntoIterator<Item = DebugLine>)
    where
        Self: Sized,
    {
        for line in lines {
            self.draw_line(line);
        }
    }
}

impl LineSink for Vec<DebugLine> {
    fn draw_line(&mut self, line: DebugLine) {
        self.push(line);
    }
}

/// Outline of every sampled pixel on the image plane: `rows + 1` horizontal
/// lines followed by `cols + 1` vertical lines.
pub fn image_grid_lines(
    pose: &Pose,
    near_distance: f32,
    dims: ImageDimensions,
    row_count: usize,
    order: EulerOrder,
    color: Color,
) -> Result<Vec<DebugLine>, CameraError> {
    let res = calculate_pixel_resolution(dims, row_count)?;
    let basis = CameraBasis::from_pose(pose, order)?;
    let top_left = pose.position
        + near_distance * basis.forward
        + 0.5 * (basis.up * dims.height - basis.right * dims.width);

    let row_pitch = dims.height / res.rows as f32;
    let col_pitch = dims.width / res.cols as f32;
    let mut lines = Vec::with_capacity(res.rows + res.cols + 2);

    for i in 0..=res.rows {
        let start = top_left - basis.up * (row_pitch * i as f32);
        lines.push(DebugLine {
            start,
            end: start + basis.right * dims.width,
            color,
        });
    }
    for j in 0..=res.cols {
        let start = top_left + basis.right * (col_pitch * j as f32);
        lines.push(DebugLine {
            start,
            end: start - basis.up * dims.height,
            color,
        });
    }

    tracing::debug!(lines = lines.len(), "image grid lines");
    Ok(lines)
}

/// Each ray from the camera to where it pierces the image plane.
pub fn rays_to_image_plane(
    pose: &Pose,
    near_distance: f32,
    rays: &RayGrid,
    order: EulerOrder,
    color: Color,
) -> Result<Vec<DebugLine>, CameraError> {
    let basis = CameraBasis::from_pose(pose, order)?;
    let plane_origin = pose.position + basis.forward * near_distance;
    let plane_normal = -basis.forward;

    Ok(rays
        .as_slice()
        .iter()
        .filter_map(|ray| {
            let t = intersect_line_plane(ray.origin, ray.direction, plane_origin, plane_normal)?;
            Some(DebugLine {
                start: ray.origin,
                end: ray.at(t),
                color,
            })
        })
        .collect())
}

/// Each ray from its origin to its scene hit, or out to `max_distance` along
/// its direction when it misses.
pub fn rays_to_scene(
    rays: &RayGrid,
    scene: &dyn SceneQuery,
    max_distance: f32,
    filter: ObjectFilter,
    color: Color,
) -> Vec<DebugLine> {
    rays.as_slice()
        .iter()
        .map(|ray| {
            let end = match scene.intersect(ray, max_distance, filter) {
                Some(hit) => hit.point,
                None => ray.origin + ray.direction.normalize_or_zero() * max_distance,
            };
            DebugLine {
                start: ray.origin,
                end,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycam_camera::calculate_rays;
    use raycam_scene::{Scene, SceneObject, Shape};

    const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    fn unit_dims() -> ImageDimensions {
        ImageDimensions {
            height: 2.0,
            width: 2.0,
        }
    }

    #[test]
    fn grid_has_one_more_line_than_cells_per_axis() {
        let lines =
            image_grid_lines(&Pose::default(), 1.0, unit_dims(), 4, EulerOrder::ZXY, YELLOW)
                .unwrap();
        assert_eq!(lines.len(), 5 + 5);
        assert!(lines.iter().all(|l| l.color == YELLOW));
    }

    #[test]
    fn grid_lies_on_the_image_plane() {
        let lines =
            image_grid_lines(&Pose::default(), 1.5, unit_dims(), 3, EulerOrder::ZXY, YELLOW)
                .unwrap();
        for l in &lines {
            assert!((l.start.z - 1.5).abs() < 1e-5);
            assert!((l.end.z - 1.5).abs() < 1e-5);
            assert!((l.length() - 2.0).abs() < 1e-5);
        }
        // first horizontal line runs along the top edge, left to right
        assert!((lines[0].start - Vec3::new(-1.0, 1.0, 1.5)).length() < 1e-5);
        assert!((lines[0].end - Vec3::new(1.0, 1.0, 1.5)).length() < 1e-5);
    }

    #[test]
    fn grid_rejects_zero_rows() {
        assert!(
            image_grid_lines(&Pose::default(), 1.0, unit_dims(), 0, EulerOrder::ZXY, YELLOW)
                .is_err()
        );
    }

    #[test]
    fn rays_stop_at_the_image_plane() {
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(10.0, 40.0, 5.0));
        let rays = calculate_rays(&pose, 0.5, unit_dims(), 3).unwrap();
        let lines = rays_to_image_plane(&pose, 0.5, &rays, EulerOrder::ZXY, YELLOW).unwrap();
        assert_eq!(lines.len(), rays.len());

        let basis = CameraBasis::from_pose(&pose, EulerOrder::ZXY).unwrap();
        for l in &lines {
            let depth = (l.end - pose.position).dot(basis.forward);
            assert!((depth - 0.5).abs() < 1e-4, "depth {depth}");
        }
    }

    #[test]
    fn scene_rays_end_at_hit_or_max_distance() {
        let mut scene = Scene::new();
        scene.add(SceneObject::new(
            Shape::Plane {
                origin: Vec3::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
            },
            Color::WHITE,
        ));
        let rays = calculate_rays(&Pose::default(), 1.0, unit_dims(), 2).unwrap();
        let lines = rays_to_scene(&rays, &scene, 50.0, ObjectFilter::ALL, YELLOW);

        let mut sink: Vec<DebugLine> = Vec::new();
        sink.draw_all(lines);
        assert_eq!(sink.len(), 4);

        // top row looks up and misses
        assert!((sink[0].length() - 50.0).abs() < 1e-3);
        // bottom row looks down and hits the floor
        assert!((sink[2].end.y + 1.0).abs() < 1e-4);
        assert!(sink[2].length() < 50.0);
    }
}
