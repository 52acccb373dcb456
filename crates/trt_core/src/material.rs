//! Phong-style surface material.

use serde::{Deserialize, Serialize};
use trt_math::Vec3;

/// Color type alias (linear RGB, may exceed 1 before tone mapping)
pub type Color = Vec3;

/// Surface response parameters shared by one or more spheres.
///
/// `albedo` weights the four contributions that make up a shaded color, in
/// order: diffuse, specular, reflection, refraction. The weights are
/// independent and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Index of refraction (1.0 = vacuum)
    pub refractive_index: f32,

    /// Base color used by the diffuse term
    pub diffuse_color: Color,

    /// Phong exponent of the specular highlight
    pub specular_exponent: f32,

    /// Weights for diffuse, specular, reflected and refracted light
    pub albedo: [f32; 4],
}

impl Default for Material {
    /// Purely diffuse black surface in vacuum.
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
            albedo: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

impl Material {
    pub const IVORY: Material = Material::new(
        1.0,
        [0.6, 0.3, 0.1, 0.0],
        Color::new(0.4, 0.4, 0.3),
        50.0,
    );

    pub const GLASS: Material = Material::new(
        1.5,
        [0.0, 0.5, 0.1, 0.8],
        Color::new(0.6, 0.7, 0.8),
        125.0,
    );

    pub const RED_RUBBER: Material = Material::new(
        1.0,
        [0.9, 0.1, 0.0, 0.0],
        Color::new(0.3, 0.1, 0.1),
        10.0,
    );

    pub const MIRROR: Material = Material::new(
        1.0,
        [0.0, 10.0, 0.8, 0.0],
        Color::new(1.0, 1.0, 1.0),
        1425.0,
    );

    /// Create a new material.
    pub const fn new(
        refractive_index: f32,
        albedo: [f32; 4],
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            diffuse_color,
            specular_exponent,
            albedo,
        }
    }

    /// Copy of this material with a different diffuse color.
    pub fn with_diffuse_color(mut self, diffuse_color: Color) -> Self {
        self.diffuse_color = diffuse_color;
        self
    }

    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo[0]
    }

    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo[1]
    }

    #[inline]
    pub fn reflection_weight(&self) -> f32 {
        self.albedo[2]
    }

    #[inline]
    pub fn refraction_weight(&self) -> f32 {
        self.albedo[3]
    }
}
