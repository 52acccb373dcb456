// Re-export glam for convenience
pub use glam::*;

// Tracer math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_normalize_is_unit_length() {
        let v = Vec3::new(3.0, 4.0, 12.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 3.0 / 13.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }
}
