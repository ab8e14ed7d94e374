use glam::Vec3;
use raycam_common::{Color, Ray};
use raycam_kernel::intersect_line_plane;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::ObjectFilter;
use crate::query::{Intersection, SceneQuery};

/// Unique identifier for an object in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Intersectable geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    /// Infinite two-sided plane.
    Plane { origin: Vec3, normal: Vec3 },
}

impl Shape {
    /// Nearest `(distance, outward normal)` along a unit-length `dir`.
    fn hit(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<(f32, Vec3)> {
        match *self {
            Shape::Sphere { center, radius } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return None;
                }
                let oc = origin - center;
                let c = oc.length_squared() - radius * radius;
                if c < 0.0 {
                    // Rays starting inside a solid report no hit.
                    return None;
                }
                let b = oc.dot(dir);
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let t = -b - disc.sqrt();
                if t < 0.0 || t > max_distance {
                    return None;
                }
                let normal = (origin + t * dir - center) / radius;
                Some((t, normal.normalize()))
            }
            Shape::Plane { origin: p0, normal } => {
                let n = normal.try_normalize()?;
                let t = intersect_line_plane(origin, dir, p0, n)?;
                if t < 0.0 || t > max_distance {
                    return None;
                }
                let facing = if n.dot(dir) > 0.0 { -n } else { n };
                Some((t, facing))
            }
        }
    }
}

/// A shape with a material color and a layer mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub shape: Shape,
    pub color: Color,
    #[serde(default = "default_layers")]
    pub layers: u32,
}

fn default_layers() -> u32 {
    1
}

impl SceneObject {
    /// Object on the default layer (bit 0).
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            layers: default_layers(),
        }
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }
}

/// Serializable scene contents, without object ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub objects: Vec<SceneObject>,
}

/// Fixed-geometry scene answering intersection queries by linear search.
///
/// Objects are kept in insertion order; of two equidistant hits the one added
/// first wins. Spheres without a finite positive radius are never hit.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<(ObjectId, SceneObject)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_description(desc: &SceneDescription) -> Self {
        let mut scene = Self::new();
        for obj in &desc.objects {
            scene.add(*obj);
        }
        scene
    }

    pub fn to_description(&self) -> SceneDescription {
        SceneDescription {
            objects: self.objects.iter().map(|(_, obj)| *obj).collect(),
        }
    }

    /// Add an object. Returns its id.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId::new();
        tracing::debug!(?id, "scene object added");
        self.objects.push((id, object));
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|(other, _)| *other == id)?;
        Some(self.objects.remove(index).1)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, obj)| obj)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects with their ids, in insertion order.
    pub fn objects(&self) -> &[(ObjectId, SceneObject)] {
        &self.objects
    }
}

impl SceneQuery for Scene {
    fn intersect(
        &self,
        ray: &Ray,
        max_distance: f32,
        filter: ObjectFilter,
    ) -> Option<Intersection> {
        let dir = ray.direction.try_normalize()?;
        let mut nearest: Option<Intersection> = None;

        for (id, obj) in &self.objects {
            if !filter.matches(obj.layers) {
                continue;
            }
            let limit = nearest.map_or(max_distance, |n| n.distance);
            if let Some((distance, normal)) = obj.shape.hit(ray.origin, dir, limit) {
                if nearest.is_none_or(|n| distance < n.distance) {
                    nearest = Some(Intersection {
                        point: ray.origin + distance * dir,
                        normal,
                        distance,
                        color: obj.color,
                        object: *id,
                    });
                }
            }
        }

        nearest
    }
}
