//! Scene types for the tracer.
//!
//! A scene is an ordered list of spheres, an ordered list of point lights
//! and a clipped checkerboard floor. It is built once and only read while
//! rendering.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use trt_math::{Interval, Vec3};

use crate::material::{Color, Material};

/// A sphere with a shared material.
///
/// Several spheres may point at the same `Material` allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,

    /// Radius, must be positive
    pub radius: f32,

    pub material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// An isotropic point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// The procedural floor: the plane `y = height` clipped to an open
/// rectangle, colored in alternating 2x2 tiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkerboard {
    /// Plane height along Y
    pub height: f32,

    /// Open X extent of the rectangle
    pub x_range: Interval,

    /// Open Z extent of the rectangle
    pub z_range: Interval,

    /// Tile color where the parity sum is even
    pub even_color: Color,

    /// Tile color where the parity sum is odd
    pub odd_color: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_range: Interval::new(-10.0, 10.0),
            z_range: Interval::new(-30.0, -10.0),
            even_color: Color::new(0.3, 0.3, 0.3),
            odd_color: Color::new(0.3, 0.2, 0.1),
        }
    }
}

impl Checkerboard {
    /// Surface normal of the floor.
    pub const NORMAL: Vec3 = Vec3::Y;

    /// Whether a point on the plane lies inside the clipped rectangle.
    pub fn contains(&self, point: Vec3) -> bool {
        self.x_range.surrounds(point.x) && self.z_range.surrounds(point.z)
    }

    /// Tile color at a point on the plane.
    ///
    /// The X coordinate is offset by 1000 tiles so that the floor never
    /// crosses zero on that axis.
    pub fn color_at(&self, point: Vec3) -> Color {
        let tile_x = (0.5 * f64::from(point.x) + 1000.0).floor() as i64;
        let tile_z = (0.5 * f64::from(point.z)).floor() as i64;

        if (tile_x + tile_z).rem_euclid(2) == 0 {
            self.even_color
        } else {
            self.odd_color
        }
    }

    /// Material of the floor at a point, derived fresh for every hit.
    pub fn material_at(&self, point: Vec3) -> Material {
        Material::default().with_diffuse_color(self.color_at(point))
    }
}

/// Everything the tracer needs to shade a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub floor: Checkerboard,
}

impl Scene {
    /// Create a scene over the default checkerboard floor.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self {
            spheres,
            lights,
            floor: Checkerboard::default(),
        }
    }

    /// Replace the floor.
    pub fn with_floor(mut self, floor: Checkerboard) -> Self {
        self.floor = floor;
        self
    }

    /// The reference scene: ivory, glass, red rubber and mirror spheres
    /// lit by three lights.
    pub fn classic() -> Self {
        let ivory = Arc::new(Material::IVORY);
        let glass = Arc::new(Material::GLASS);
        let red_rubber = Arc::new(Material::RED_RUBBER);
        let mirror = Arc::new(Material::MIRROR);

        let spheres = vec![
            Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory),
            Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass),
            Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, red_rubber),
            Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror),
        ];

        let lights = vec![
            Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
            Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
            Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
        ];

        Self::new(spheres, lights)
    }
}
