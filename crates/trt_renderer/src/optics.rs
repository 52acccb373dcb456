//! Reflection, refraction and ray-origin biasing.

use trt_math::Vec3;

/// Refractive index of the medium surrounding every object.
pub const VACUUM_INDEX: f32 = 1.0;

/// Distance a secondary ray origin is pushed off the surface it leaves.
pub const SURFACE_BIAS: f32 = 1e-3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract a ray entering a medium of index `eta_t` from vacuum.
#[inline]
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32) -> Vec3 {
    refract_between(incident, normal, eta_t, VACUUM_INDEX)
}

/// Refract a vector through a surface using Snell's law.
///
/// `eta_t` is the index on the far side of the surface and `eta_i` the index
/// the ray travels in. A ray leaving the object (incident along the normal)
/// is handled by flipping the normal and swapping the two indices.
///
/// Under total internal reflection this returns `Vec3::X`. That direction has
/// no physical meaning; callers trace it like any other refracted ray.
pub fn refract_between(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    if cos_i < 0.0 {
        return refract_between(incident, -normal, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::X
    } else {
        incident * eta + normal * (eta * cos_i - k.sqrt())
    }
}

/// Push `point` off the surface, toward the side `direction` travels into.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    let bias = normal * SURFACE_BIAS;
    if direction.dot(normal) < 0.0 {
        point - bias
    } else {
        point + bias
    }
}
