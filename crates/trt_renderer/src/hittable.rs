//! Ray-object intersection and the nearest-hit search over a scene.

use trt_core::{Checkerboard, Material, Scene, Sphere};
use trt_math::{Ray, Vec3};

/// Hits at or beyond this distance count as escaping the scene.
pub const HORIZON: f32 = 1000.0;

/// Rays whose Y direction is this close to zero never hit the floor.
pub const PARALLEL_EPSILON: f32 = 1e-3;

/// Record of the nearest ray-scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the hit
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal, pointing out of the surface
    pub normal: Vec3,
    /// Material at the hit, copied so floor tiles can carry their own color
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Ray parameter of the nearest non-negative intersection, if any.
    fn hit_distance(&self, ray: &Ray) -> Option<f32>;
}

impl Hittable for Sphere {
    fn hit_distance(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;

        // Origin inside the sphere: take the far root
        if t0 < 0.0 {
            t0 = t1;
        }
        if t0 < 0.0 {
            return None;
        }
        Some(t0)
    }
}

impl Hittable for Checkerboard {
    fn hit_distance(&self, ray: &Ray) -> Option<f32> {
        if ray.direction.y.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = -(ray.origin.y - self.height) / ray.direction.y;
        if t > 0.0 && self.contains(ray.at(t)) {
            Some(t)
        } else {
            None
        }
    }
}

/// Find the nearest intersection of a ray with the scene.
///
/// Spheres are scanned in order and the earliest one wins ties. The floor
/// only wins when it is strictly closer than every sphere. Anything at or
/// beyond `HORIZON` is reported as a miss.
pub fn scene_intersect(ray: &Ray, scene: &Scene) -> Option<HitRecord> {
    let mut spheres_dist = f32::MAX;
    let mut nearest_sphere = None;

    for sphere in &scene.spheres {
        if let Some(t) = sphere.hit_distance(ray) {
            if t < spheres_dist {
                spheres_dist = t;
                nearest_sphere = Some(sphere);
            }
        }
    }

    let mut hit = nearest_sphere.map(|sphere| {
        let point = ray.at(spheres_dist);
        HitRecord {
            t: spheres_dist,
            point,
            normal: (point - sphere.center).normalize(),
            material: *sphere.material,
        }
    });

    if let Some(t) = scene.floor.hit_distance(ray) {
        if t < spheres_dist {
            let point = ray.at(t);
            hit = Some(HitRecord {
                t,
                point,
                normal: Checkerboard::NORMAL,
                material: scene.floor.material_at(point),
            });
        }
    }

    hit.filter(|hit| hit.t < HORIZON)
}
