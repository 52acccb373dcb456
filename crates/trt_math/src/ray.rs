use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Camera rays, secondary (reflected/refracted) rays and shadow rays all
/// use this type. The direction is expected to be normalized by whoever
/// builds the ray; intersection distances are only meaningful in that case.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
