use glam::Vec3;
use raycam_common::Color;
use raycam_kernel::{calculate_direction, euler_to_matrix, EulerOrder, KernelError};
use raycam_scene::Intersection;

/// Lambertian shading for one ray.
///
/// `light_direction` points from the light toward the scene. On a hit every
/// channel of the material color, alpha included, is scaled by
/// `clamp(dot(-light, normal), 0, 1)`; there is no ambient or specular term. On a miss `miss_color` is returned as is.
pub fn shade(hit: Option<&Intersection>, light_direction: Vec3, miss_color: Color) -> Color {
    match hit {
        Some(hit) => {
            let k = (-light_direction).dot(hit.normal).clamp(0.0, 1.0);
            hit.color * k
        }
        None => miss_color,
    }
}

/// Direction a directional light travels, from its Euler orientation.
pub fn light_direction(euler_degrees: Vec3, order: EulerOrder) -> Result<Vec3, KernelError> {
    let rotation = euler_to_matrix(euler_degrees, order)?;
    calculate_direction(&rotation, Vec3::Z)
}
