use glam::Vec3;
use raycam_common::{Color, Ray};

use crate::filter::ObjectFilter;
use crate::scene::ObjectId;

/// Nearest surface point found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// World-space hit point.
    pub point: Vec3,
    /// Unit surface normal at the hit point.
    pub normal: Vec3,
    /// World-space distance from the ray origin.
    pub distance: f32,
    /// Base color of the surface material.
    pub color: Color,
    /// Object that was hit.
    pub object: ObjectId,
}

/// Intersection capability the renderer is built against.
///
/// Implementations must be shareable across render worker threads. Any
/// failure inside the query is reported as `None`; the renderer treats that
/// as a miss.
pub trait SceneQuery: Sync {
    /// Nearest intersection along `ray` within `max_distance` (measured along
    /// the normalized ray direction), restricted to objects matching `filter`.
    fn intersect(&self, ray: &Ray, max_distance: f32, filter: ObjectFilter)
        -> Option<Intersection>;
}
