use thiserror::Error;

use crate::{
    hit::{HitRecord, MaterialId},
    interval::Interval,
    material::Material,
    ray::Ray,
    sphere::Sphere,
};

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("sphere {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f64 },
    #[error("sphere {index} references material {material} but only {count} exist")]
    DanglingMaterial { index: usize, material: usize, count: usize },
    #[error("material {index}: metal fuzz {fuzz} is outside [0, 1]")]
    FuzzOutOfRange { index: usize, fuzz: f64 },
    #[error("material {index}: refractive index {ior} is not positive")]
    NonPositiveIor { index: usize, ior: f64 },
}

/// Immutable world: a material table plus the spheres indexing into it.
#[derive(Debug)]
pub struct Scene {
    materials: Vec<Material>,
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new(materials: Vec<Material>, spheres: Vec<Sphere>) -> Result<Self, SceneError> {
        for (index, material) in materials.iter().enumerate() {
            match *material {
                Material::Metal { fuzz, .. } if !Interval::new(0.0, 1.0).contains(fuzz) => {
                    return Err(SceneError::FuzzOutOfRange { index, fuzz });
                }
                Material::Dielectric { ior } if ior <= 0.0 => {
                    return Err(SceneError::NonPositiveIor { index, ior });
                }
                _ => {}
            }
        }
        for (index, sphere) in spheres.iter().enumerate() {
            if sphere.radius <= 0.0 {
                return Err(SceneError::NonPositiveRadius { index, radius: sphere.radius });
            }
            if sphere.material.0 >= materials.len() {
                return Err(SceneError::DanglingMaterial {
                    index,
                    material: sphere.material.0,
                    count: materials.len(),
                });
            }
        }
        Ok(Self { materials, spheres })
    }

    /// Closest hit across all spheres. The search interval's upper bound
    /// shrinks to each accepted t, so one pass yields the nearest record.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = ray_t;
        let mut nearest: Option<HitRecord> = None;
        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(ray, closest) {
                closest.max = rec.t;
                nearest = Some(rec);
            }
        }
        nearest
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }
}
