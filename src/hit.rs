use cgmath::InnerSpace;

use crate::{ray::Ray, types::{Float, Point3, Vec3}};

/// Index into the scene's material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub usize);

/// Result of a successful ray/surface intersection.
///
/// `normal` always opposes the incoming ray; `front_face` records whether
/// the ray struck the outside of the surface, which the dielectric scatter
/// logic needs to pick the refraction ratio.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub point: Point3,
    pub normal: Vec3,
    pub t: Float,
    pub front_face: bool,
    pub material: MaterialId,
}

impl HitRecord {
    /// `outward_normal` must be unit length.
    pub fn new(ray: &Ray, t: Float, outward_normal: Vec3, material: MaterialId) -> Self {
        let front_face = ray.dir.dot(outward_normal) < 0.0;
        Self {
            point: ray.position_at(t),
            normal: if front_face { outward_normal } else { -outward_normal },
            t,
            front_face,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, vec3};

    use super::*;

    #[test]
    fn normal_opposes_the_incoming_ray() {
        let ray = Ray { origin: vec3(0.0, 0.0, 0.0), dir: vec3(0.0, 0.0, -1.0) };

        let front = HitRecord::new(&ray, 1.0, vec3(0.0, 0.0, 1.0), MaterialId(0));
        assert!(front.front_face);
        assert_abs_diff_eq!(front.normal, vec3(0.0, 0.0, 1.0));

        let back = HitRecord::new(&ray, 1.0, vec3(0.0, 0.0, -1.0), MaterialId(0));
        assert!(!back.front_face);
        assert_abs_diff_eq!(back.normal, vec3(0.0, 0.0, 1.0));
    }
}
