//! Whitted-style CPU ray tracer.
//!
//! Casts one ray per pixel through a pinhole camera, shades hits with
//! Phong diffuse and specular terms from point lights, and recursively
//! follows reflected and refracted rays to a bounded depth.

mod camera;
mod hittable;
mod optics;
mod output;
mod renderer;

pub use camera::Camera;
pub use hittable::{scene_intersect, HitRecord, Hittable, HORIZON, PARALLEL_EPSILON};
pub use optics::{offset_origin, reflect, refract, refract_between, SURFACE_BIAS, VACUUM_INDEX};
pub use output::{color_to_rgba, tone_map, OutputError, OutputResult};
pub use renderer::{cast_ray, render, render_pixel, render_serial, ImageBuffer, RenderConfig};

/// Re-export scene and math types
pub use trt_core::{Checkerboard, Color, Light, Material, Scene, Sphere};
pub use trt_math::{Interval, Ray, Vec3};
