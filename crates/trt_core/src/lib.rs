//! Scene description for the tiny ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Light`, `Checkerboard`, `Scene`
//! - **Reference scene**: `Scene::classic()`, four spheres over a checkerboard
//!   floor lit by three point lights
//! - **JSON scenes**: `SceneDescription` and `Scene::load_json` (library only)
//!
//! # Example
//!
//! ```ignore
//! use trt_core::Scene;
//!
//! let scene = Scene::classic();
//! println!("{} spheres, {} lights", scene.spheres.len(), scene.lights.len());
//! ```
//!
//! JSON loading (`Scene::load_json`, `Scene::from_json_str`) is a library
//! API for callers that build their own scenes; the `tinyraytracer` binary
//! always renders `Scene::classic()`.

pub mod description;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use description::{SceneDescription, SceneError, SceneResult};
pub use material::{Color, Material};
pub use scene::{Checkerboard, Light, Scene, Sphere};
