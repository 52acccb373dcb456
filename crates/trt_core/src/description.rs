//! JSON scene descriptions.
//!
//! Materials are declared once by name and referenced from spheres, so a
//! loaded scene shares one `Arc<Material>` between every sphere naming it.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trt_math::Vec3;

use crate::material::Material;
use crate::scene::{Checkerboard, Light, Scene, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Material '{name}' has non-positive refractive index {value}")]
    InvalidRefractiveIndex { name: String, value: f32 },

    #[error("Material '{name}' has negative specular exponent {value}")]
    InvalidSpecularExponent { name: String, value: f32 },

    #[error("Light {index} has negative intensity {intensity}")]
    InvalidLightIntensity { index: usize, intensity: f32 },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere as written in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    /// Name of an entry in `SceneDescription::materials`
    pub material: String,
}

/// Serializable form of a `Scene`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub materials: BTreeMap<String, Material>,
    pub spheres: Vec<SphereDescription>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub floor: Checkerboard,
}

impl SceneDescription {
    /// Parse a description from JSON text without validating it.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the description and resolve material names.
    pub fn into_scene(self) -> SceneResult<Scene> {
        let mut materials = BTreeMap::new();
        for (name, material) in self.materials {
            if material.refractive_index <= 0.0 {
                return Err(SceneError::InvalidRefractiveIndex {
                    name,
                    value: material.refractive_index,
                });
            }
            if material.specular_exponent < 0.0 {
                return Err(SceneError::InvalidSpecularExponent {
                    name,
                    value: material.specular_exponent,
                });
            }
            materials.insert(name, Arc::new(material));
        }

        let spheres = self
            .spheres
            .into_iter()
            .enumerate()
            .map(|(index, sphere)| {
                if sphere.radius <= 0.0 {
                    return Err(SceneError::InvalidRadius {
                        index,
                        radius: sphere.radius,
                    });
                }
                let material = materials
                    .get(&sphere.material)
                    .cloned()
                    .ok_or_else(|| SceneError::UnknownMaterial {
                        index,
                        name: sphere.material.clone(),
                    })?;
                Ok(Sphere::new(sphere.center, sphere.radius, material))
            })
            .collect::<SceneResult<Vec<_>>>()?;

        if let Some((index, light)) = self
            .lights
            .iter()
            .enumerate()
            .find(|(_, light)| light.intensity < 0.0)
        {
            return Err(SceneError::InvalidLightIntensity {
                index,
                intensity: light.intensity,
            });
        }

        if self.lights.is_empty() {
            log::warn!("Scene has no lights, only reflections and refractions will be visible");
        }

        log::debug!(
            "Resolved scene: {} materials, {} spheres, {} lights",
            materials.len(),
            spheres.len(),
            self.lights.len()
        );

        Ok(Scene::new(spheres, self.lights).with_floor(self.floor))
    }
}

impl Scene {
    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Scene> {
        SceneDescription::from_json_str(json)?.into_scene()
    }

    /// Load and validate a scene from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SceneResult<Scene> {
        let path = path.as_ref();
        log::debug!("Loading scene from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TWO_SPHERES: &str = r#"{
        "materials": {
            "ivory": {
                "refractive_index": 1.0,
                "diffuse_color": [0.4, 0.4, 0.3],
                "specular_exponent": 50.0,
                "albedo": [0.6, 0.3, 0.1, 0.0]
            }
        },
        "spheres": [
            { "center": [-3.0, 0.0, -16.0], "radius": 2.0, "material": "ivory" },
            { "center": [3.0, 0.0, -16.0], "radius": 1.0, "material": "ivory" }
        ],
        "lights": [
            { "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }
        ]
    }"#;

    fn manifest_path(relative: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    #[test]
    fn test_load_two_spheres_shares_material() {
        let scene = Scene::from_json_str(TWO_SPHERES).expect("failed to parse scene");

        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(Arc::ptr_eq(
            &scene.spheres[0].material,
            &scene.spheres[1].material
        ));
        assert_eq!(*scene.spheres[0].material, Material::IVORY);
        assert_eq!(scene.floor, Checkerboard::default());
    }

    #[test]
    fn test_partial_floor_override() {
        let json = r#"{
            "materials": {},
            "spheres": [],
            "floor": { "height": -2.0 }
        }"#;
        let scene = Scene::from_json_str(json).unwrap();

        assert_eq!(scene.floor.height, -2.0);
        assert_eq!(scene.floor.x_range, Checkerboard::default().x_range);
        assert!(scene.lights.is_empty());
    }

    #[test]
    fn test_unknown_material() {
        let json = TWO_SPHERES.replace(
            r#""radius": 1.0, "material": "ivory""#,
            r#""radius": 1.0, "material": "chalk""#,
        );
        match Scene::from_json_str(&json) {
            Err(SceneError::UnknownMaterial { index, name }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "chalk");
            }
            other => panic!("expected UnknownMaterial, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_radius() {
        let json = TWO_SPHERES.replace(r#""radius": 2.0"#, r#""radius": 0.0"#);
        assert!(matches!(
            Scene::from_json_str(&json),
            Err(SceneError::InvalidRadius { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_refractive_index() {
        let json = TWO_SPHERES.replace(
            r#""refractive_index": 1.0"#,
            r#""refractive_index": -1.5"#,
        );
        assert!(matches!(
            Scene::from_json_str(&json),
            Err(SceneError::InvalidRefractiveIndex { .. })
        ));
    }

    #[test]
    fn test_invalid_specular_exponent() {
        let json = TWO_SPHERES.replace(
            r#""specular_exponent": 50.0"#,
            r#""specular_exponent": -1.0"#,
        );
        assert!(matches!(
            Scene::from_json_str(&json),
            Err(SceneError::InvalidSpecularExponent { .. })
        ));
    }

    #[test]
    fn test_negative_light_intensity() {
        let json = TWO_SPHERES.replace(r#""intensity": 1.5"#, r#""intensity": -1.5"#);
        assert!(matches!(
            Scene::from_json_str(&json),
            Err(SceneError::InvalidLightIntensity { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Scene::from_json_str("{ \"materials\": "),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Scene::load_json(manifest_path("does/not/exist.json")),
            Err(SceneError::Io(_))
        ));
    }

    #[test]
    fn test_classic_json_matches_builtin_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let loaded = Scene::load_json(manifest_path("../../scenes/classic.json"))
            .expect("failed to load classic scene");
        let builtin = Scene::classic();

        assert_eq!(loaded.lights, builtin.lights);
        assert_eq!(loaded.floor, builtin.floor);
        assert_eq!(loaded.spheres.len(), builtin.spheres.len());
        for (a, b) in loaded.spheres.iter().zip(&builtin.spheres) {
            assert_eq!(a.center, b.center);
            assert_eq!(a.radius, b.radius);
            assert_eq!(*a.material, *b.material);
        }
    }
}
