use cgmath::{vec3, AbsDiffEq, InnerSpace};
use rand::Rng;

use crate::{
    hit::HitRecord,
    ray::Ray,
    rng,
    types::{Float, Vec3},
};

pub type Attenuation = Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian { albedo: Vec3 },
    Metal { albedo: Vec3, fuzz: Float },
    Dielectric { ior: Float },
}

impl Material {
    /// How a ray continues after striking a surface; `None` means absorbed.
    pub fn scatter(
        &self,
        ray: &Ray,
        rec: &HitRecord,
        gen: &mut impl Rng,
    ) -> Option<(Attenuation, Ray)> {
        match self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(*albedo, rec, gen)),
            Material::Metal { albedo, fuzz } => scatter_metal(*albedo, *fuzz, ray, rec, gen),
            Material::Dielectric { ior } => Some(scatter_dielectric(*ior, ray, rec, gen)),
        }
    }
}

fn scatter_lambertian(albedo: Vec3, rec: &HitRecord, gen: &mut impl Rng) -> (Attenuation, Ray) {
    let mut dir = rec.normal + rng::unit_vector(gen);
    // The sphere sample can cancel the normal almost exactly; a near-zero
    // direction would produce NaNs downstream.
    if dir.abs_diff_eq(&vec3(0.0, 0.0, 0.0), 1e-8) {
        dir = rec.normal;
    }
    (albedo, Ray { origin: rec.point, dir })
}

fn scatter_metal(
    albedo: Vec3,
    fuzz: Float,
    ray: &Ray,
    rec: &HitRecord,
    gen: &mut impl Rng,
) -> Option<(Attenuation, Ray)> {
    let dir = reflect(ray.dir.normalize(), rec.normal) + fuzz * rng::unit_vector(gen);
    if dir.dot(rec.normal) <= 0.0 {
        // Fuzz pushed the reflection into the surface.
        return None;
    }
    Some((albedo, Ray { origin: rec.point, dir }))
}

fn scatter_dielectric(ior: Float, ray: &Ray, rec: &HitRecord, gen: &mut impl Rng) -> (Attenuation, Ray) {
    let ratio = if rec.front_face { 1.0 / ior } else { ior };

    let unit_dir = ray.dir.normalize();
    let cos_theta = (-unit_dir).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ratio * sin_theta > 1.0;
    let dir = if cannot_refract || reflectance(cos_theta, ratio) > gen.gen_range(0.0..1.0) {
        reflect(unit_dir, rec.normal)
    } else {
        refract(unit_dir, rec.normal, ratio)
    };

    // Glass redirects light but absorbs none of it.
    (vec3(1.0, 1.0, 1.0), Ray { origin: rec.point, dir })
}

fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

fn refract(unit_dir: Vec3, n: Vec3, ratio: Float) -> Vec3 {
    let cos_theta = (-unit_dir).dot(n).min(1.0);
    let perpendicular = ratio * (unit_dir + cos_theta * n);
    let parallel = -(1.0 - perpendicular.magnitude2()).abs().sqrt() * n;
    perpendicular + parallel
}

/// Schlick's polynomial approximation of Fresnel reflectance.
fn reflectance(cos_theta: Float, ratio: Float) -> Float {
    let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}
