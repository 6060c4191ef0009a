use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::{
    camera::{Camera, CameraConfig, CameraError},
    hit::MaterialId,
    material::Material,
    scene::{Scene, SceneError},
    sphere::Sphere,
    types::Float,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sphere {index} references unknown material {name:?}")]
    UnknownMaterial { index: usize, name: String },
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// Everything a render needs, validated and ready to run.
#[derive(Debug)]
pub struct RenderSetup {
    pub scene: Scene,
    pub camera: Camera,
    pub seed: u64,
}

/// Raw description as found in the JSON file. Every field is optional;
/// missing values fall back to the defaults of [`CameraConfig`], an empty
/// world and seed 0.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDescription {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    camera: CameraDescription,
    #[serde(default)]
    materials: BTreeMap<String, MaterialDescription>,
    #[serde(default)]
    spheres: Vec<SphereDescription>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraDescription {
    aspect_ratio: Option<Float>,
    image_width: Option<usize>,
    vfov: Option<Float>,
    look_from: Option<[Float; 3]>,
    look_at: Option<[Float; 3]>,
    vup: Option<[Float; 3]>,
    samples_per_pixel: Option<u32>,
    max_depth: Option<u32>,
    defocus_angle: Option<Float>,
    focus_dist: Option<Float>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum MaterialDescription {
    Lambertian { albedo: [Float; 3] },
    Metal { albedo: [Float; 3], #[serde(default)] fuzz: Float },
    Dielectric { ior: Float },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereDescription {
    center: [Float; 3],
    radius: Float,
    material: String,
}

pub fn from_json(text: &str) -> Result<RenderSetup, ParseError> {
    build(serde_json::from_str(text)?)
}

/// Built-in fallback world: a lambertian/dielectric/metal trio resting on a
/// large ground sphere.
pub fn demo() -> Result<RenderSetup, ParseError> {
    let text = r#"{
        "camera": {
            "aspect_ratio": 1.7777777777777777,
            "image_width": 400,
            "look_from": [0, 0, 0],
            "look_at": [0, 0, -1],
            "samples_per_pixel": 100,
            "max_depth": 50,
            "focus_dist": 1.0
        },
        "materials": {
            "ground": { "type": "lambertian", "albedo": [0.8, 0.8, 0.0] },
            "center": { "type": "lambertian", "albedo": [0.1, 0.2, 0.5] },
            "left":   { "type": "dielectric", "ior": 1.5 },
            "right":  { "type": "metal", "albedo": [0.8, 0.6, 0.2], "fuzz": 0.3 }
        },
        "spheres": [
            { "center": [ 0.0, -100.5, -1.0], "radius": 100.0, "material": "ground" },
            { "center": [ 0.0,    0.0, -1.2], "radius":   0.5, "material": "center" },
            { "center": [-1.0,    0.0, -1.0], "radius":   0.5, "material": "left" },
            { "center": [ 1.0,    0.0, -1.0], "radius":   0.5, "material": "right" }
        ]
    }"#;
    from_json(text)
}

fn build(description: SceneDescription) -> Result<RenderSetup, ParseError> {
    let mut materials = Vec::with_capacity(description.materials.len());
    let mut ids = BTreeMap::new();
    for (name, material) in &description.materials {
        ids.insert(name.clone(), MaterialId(materials.len()));
        materials.push(match *material {
            MaterialDescription::Lambertian { albedo } => {
                Material::Lambertian { albedo: albedo.into() }
            }
            MaterialDescription::Metal { albedo, fuzz } => {
                Material::Metal { albedo: albedo.into(), fuzz }
            }
            MaterialDescription::Dielectric { ior } => Material::Dielectric { ior },
        });
    }

    let mut spheres = Vec::with_capacity(description.spheres.len());
    for (index, sphere) in description.spheres.iter().enumerate() {
        let Some(material) = ids.get(&sphere.material) else {
            return Err(ParseError::UnknownMaterial { index, name: sphere.material.clone() });
        };
        spheres.push(Sphere {
            center: sphere.center.into(),
            radius: sphere.radius,
            material: *material,
        });
    }

    let defaults = CameraConfig::default();
    let cam = &description.camera;
    let config = CameraConfig {
        aspect_ratio: cam.aspect_ratio.unwrap_or(defaults.aspect_ratio),
        image_width: cam.image_width.unwrap_or(defaults.image_width),
        vfov: cam.vfov.unwrap_or(defaults.vfov),
        look_from: cam.look_from.map_or(defaults.look_from, Into::into),
        look_at: cam.look_at.map_or(defaults.look_at, Into::into),
        vup: cam.vup.map_or(defaults.vup, Into::into),
        samples_per_pixel: cam.samples_per_pixel.unwrap_or(defaults.samples_per_pixel),
        max_depth: cam.max_depth.unwrap_or(defaults.max_depth),
        defocus_angle: cam.defocus_angle.unwrap_or(defaults.defocus_angle),
        focus_dist: cam.focus_dist.unwrap_or(defaults.focus_dist),
    };

    Ok(RenderSetup {
        scene: Scene::new(materials, spheres)?,
        camera: Camera::new(&config)?,
        seed: description.seed.unwrap_or(0),
    })
}
