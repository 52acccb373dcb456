//! Pinhole camera for primary ray generation.

use trt_math::{Ray, Vec3};

use crate::RenderConfig;

/// Camera at the origin looking down -Z, Y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    /// Vertical field of view in radians
    fov: f32,

    // Cached computed values
    origin: Vec3,
    image_plane_z: f32,
}

impl Camera {
    /// Create a camera for the given resolution and vertical field of view.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        let image_plane_z = -(image_height as f32) / (2.0 * (fov / 2.0).tan());
        Self {
            image_width,
            image_height,
            fov,
            origin: Vec3::ZERO,
            image_plane_z,
        }
    }

    /// Create a camera matching a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, config.fov)
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Generate the ray through the center of pixel (i, j).
    ///
    /// Row 0 is the top of the image, so the Y offset is flipped.
    /// Precondition: `i`, `j` lie inside the image, which keeps the direction
    /// away from zero length.
    pub fn ray(&self, i: u32, j: u32) -> Ray {
        let dir_x = i as f32 + 0.5 - self.image_width as f32 / 2.0;
        let dir_y = -(j as f32 + 0.5) + self.image_height as f32 / 2.0;
        let direction = Vec3::new(dir_x, dir_y, self.image_plane_z).normalize();

        Ray::new(self.origin, direction)
    }
}
