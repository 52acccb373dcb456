//! Core recursive ray tracer.
//!
//! Implements Whitted-style shading with:
//! - Phong diffuse and specular terms from point lights, with shadow rays
//! - Recursive reflection and refraction to a fixed depth
//! - Row-parallel rendering of the full frame

use std::f32::consts::FRAC_PI_3;
use std::time::Instant;

use rayon::prelude::*;
use trt_core::{Color, Scene};
use trt_math::Ray;

use crate::hittable::scene_intersect;
use crate::optics::{offset_origin, reflect, refract};
use crate::Camera;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Deepest recursion level that is still shaded
    pub max_depth: u32,
    /// Color returned when a ray escapes the scene or recursion stops
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: FRAC_PI_3,
            max_depth: 4,
            background: Color::new(0.2, 0.7, 0.8),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the deepest shaded recursion level.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Compute the color seen along a ray.
///
/// Every shaded hit spawns one reflected and one refracted ray, whatever the
/// material weights, so the recursion is a full binary tree cut off once
/// `depth` exceeds `config.max_depth`.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let Some(hit) = scene_intersect(ray, scene) else {
        return config.background;
    };
    let material = &hit.material;

    let reflect_dir = reflect(ray.direction, hit.normal).normalize();
    let refract_dir = refract(ray.direction, hit.normal, material.refractive_index).normalize();

    let reflect_ray = Ray::new(offset_origin(hit.point, hit.normal, reflect_dir), reflect_dir);
    let refract_ray = Ray::new(offset_origin(hit.point, hit.normal, refract_dir), refract_dir);

    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1, config);
    let refract_color = cast_ray(&refract_ray, scene, depth + 1, config);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;

    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let light_dir = to_light.normalize();
        let light_distance = to_light.length();

        let shadow_origin = offset_origin(hit.point, hit.normal, light_dir);
        let shadow_ray = Ray::new(shadow_origin, light_dir);
        if let Some(occluder) = scene_intersect(&shadow_ray, scene) {
            if (occluder.point - shadow_origin).length() < light_distance {
                continue;
            }
        }

        diffuse_intensity += light.intensity * light_dir.dot(hit.normal).max(0.0);

        let highlight = (-reflect(-light_dir, hit.normal)).dot(ray.direction).max(0.0);
        let specular = f64::from(highlight).powf(f64::from(material.specular_exponent)) as f32;
        specular_intensity += specular * light.intensity;
    }

    material.diffuse_color * diffuse_intensity * material.diffuse_weight()
        + Color::ONE * specular_intensity * material.specular_weight()
        + reflect_color * material.reflection_weight()
        + refract_color * material.refraction_weight()
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    cast_ray(&camera.ray(x, y), scene, 0, config)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the entire scene, one pixel at a time in row-major order.
pub fn render_serial(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let camera = Camera::from_config(config);
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, render_pixel(&camera, scene, x, y, config));
        }
    }

    image
}

/// Render the entire scene, rows in parallel.
///
/// The scene is only read, and each row owns a disjoint slice of the
/// framebuffer, so the result is identical to `render_serial`.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let camera = Camera::from_config(config);
    let mut image = ImageBuffer::new(config.width, config.height);

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights)",
        config.width,
        config.height,
        scene.spheres.len(),
        scene.lights.len()
    );
    let start = Instant::now();

    image
        .pixels
        .par_chunks_mut(config.width.max(1) as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(&camera, scene, x as u32, y as u32, config);
            }
        });

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
