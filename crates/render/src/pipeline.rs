use std::time::Instant;

use glam::Vec3;
use rayon::prelude::*;
use raycam_camera::calculate_rays_with_order;
use raycam_common::{Color, ColorGrid, Ray, RayGrid};
use raycam_scene::SceneQuery;

use crate::config::{RenderConfig, RenderView};
use crate::error::RenderError;
use crate::shading::{light_direction, shade};

/// Query the scene once per ray and shade the result.
///
/// The output has the same shape as `rays`. With `config.parallel` set, rows
/// are spread over the rayon pool; each worker writes only its own row.
pub fn shade_rays(
    rays: &RayGrid,
    scene: &dyn SceneQuery,
    light: Vec3,
    config: &RenderConfig,
) -> ColorGrid {
    let mut colors = ColorGrid::new(rays.rows(), rays.cols(), config.miss_color);
    if rays.is_empty() {
        return colors;
    }

    let shade_row = |i: usize, row_rays: &[Ray], out: &mut [Color]| {
        tracing::trace!(row = i, "shading row");
        for (ray, pixel) in row_rays.iter().zip(out.iter_mut()) {
            let hit = scene.intersect(ray, config.max_distance, config.filter);
            *pixel = shade(hit.as_ref(), light, config.miss_color);
        }
    };

    let cols = rays.cols();
    if config.parallel {
        colors
            .as_mut_slice()
            .par_chunks_mut(cols)
            .zip(rays.as_slice().par_chunks(cols))
            .enumerate()
            .for_each(|(i, (out, row_rays))| shade_row(i, row_rays, out));
    } else {
        for (i, (out, row_rays)) in colors
            .as_mut_slice()
            .chunks_mut(cols)
            .zip(rays.as_slice().chunks(cols))
            .enumerate()
        {
            shade_row(i, row_rays, out);
        }
    }

    colors
}

/// Render one frame: image dimensions, ray grid, scene queries, shading.
pub fn render(
    scene: &dyn SceneQuery,
    view: &RenderView,
    config: &RenderConfig,
) -> Result<ColorGrid, RenderError> {
    let _span = tracing::info_span!("render", rows = config.row_count).entered();
    config.validate()?;

    let dims = view.intrinsics.image_dimensions()?;
    let rays = calculate_rays_with_order(
        &view.pose,
        view.intrinsics.near_distance,
        dims,
        config.row_count,
        config.order,
    )?;
    let light = light_direction(view.light_orientation, config.order)?;
    tracing::debug!(?light, "light direction");

    let start = Instant::now();
    let colors = shade_rays(&rays, scene, light, config);
    tracing::info!(
        rows = colors.rows(),
        cols = colors.cols(),
        parallel = config.parallel,
        elapsed = ?start.elapsed(),
        "frame rendered"
    );
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use raycam_camera::CameraIntrinsics;
    use raycam_common::Pose;
    use raycam_scene::{ObjectFilter, Scene, SceneObject, Shape};

    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    const SKY: Color = Color::rgb(0.2, 0.3, 0.4);

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(SceneObject::new(
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, 5.0),
                radius: 1.0,
            },
            BLUE,
        ));
        scene
    }

    fn square_view() -> RenderView {
        RenderView {
            pose: Pose::default(),
            intrinsics: CameraIntrinsics {
                focal_length: 1.0,
                sensor_size: Vec2::new(2.0, 2.0),
                near_distance: 1.0,
            },
            light_orientation: Vec3::ZERO,
        }
    }

    fn config(rows: usize, parallel: bool) -> RenderConfig {
        RenderConfig {
            row_count: rows,
            miss_color: SKY,
            parallel,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn center_pixel_lit_corners_miss() {
        let colors = render(&sphere_scene(), &square_view(), &config(3, false)).unwrap();
        assert_eq!(colors.rows(), 3);
        assert_eq!(colors.cols(), 3);
        assert_eq!(colors[(1, 1)], BLUE);
        for (i, j) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(colors[(i, j)], SKY);
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let scene = sphere_scene();
        let view = RenderView {
            light_orientation: Vec3::new(20.0, 10.0, 0.0),
            ..square_view()
        };
        let seq = render(&scene, &view, &config(17, false)).unwrap();
        let par = render(&scene, &view, &config(17, true)).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn filter_can_hide_everything() {
        let cfg = RenderConfig {
            filter: ObjectFilter::NONE,
            ..config(5, true)
        };
        let colors = render(&sphere_scene(), &square_view(), &cfg).unwrap();
        assert!(colors.as_slice().iter().all(|c| *c == SKY));
    }

    #[test]
    fn zero_rows_is_an_error() {
        let err = render(&sphere_scene(), &square_view(), &config(0, false)).unwrap_err();
        assert!(matches!(err, RenderError::Camera(_)));
    }

    #[test]
    fn invalid_intrinsics_is_an_error() {
        let mut view = square_view();
        view.intrinsics.focal_length = -1.0;
        assert!(render(&sphere_scene(), &view, &config(4, false)).is_err());
    }

    #[test]
    fn empty_grid_shades_to_empty() {
        let rays = RayGrid::new(0, 0, Ray::new(Vec3::ZERO, Vec3::Z));
        let colors = shade_rays(&rays, &sphere_scene(), Vec3::Z, &config(1, true));
        assert!(colors.is_empty());
    }
}
