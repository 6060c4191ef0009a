use cgmath::InnerSpace;

use crate::{
    hit::{HitRecord, MaterialId},
    interval::Interval,
    ray::Ray,
    types::{Float, Point3},
};

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point3,
    pub radius: Float,
    pub material: MaterialId,
}

impl Sphere {
    /// Solves `a t^2 + 2 h t + c = 0` and returns the nearest root strictly
    /// inside `ray_t`. Trying the roots in ascending order keeps the test
    /// correct for rays starting inside the sphere, where only the far root
    /// is valid.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin - self.center;
        let a = ray.dir.magnitude2();
        let h = oc.dot(ray.dir);
        let c = oc.magnitude2() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let mut root = (-h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.position_at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material))
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, vec3};

    use crate::{interval, types::HIT_EPSILON};

    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere { center: vec3(0.0, 0.0, -2.0), radius: 1.0, material: MaterialId(0) }
    }

    fn forward_interval() -> Interval {
        Interval::new(HIT_EPSILON, Float::INFINITY)
    }

    #[test]
    fn ray_from_outside_takes_the_near_root() {
        let sphere = unit_sphere();
        let ray = Ray { origin: vec3(0.0, 0.0, 0.0), dir: vec3(0.0, 0.0, -1.0) };

        let rec = sphere.hit(&ray, forward_interval()).unwrap();
        assert_abs_diff_eq!(rec.t, 1.0);
        assert!(rec.front_face);
        assert_abs_diff_eq!(rec.normal, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn ray_from_inside_takes_the_far_root() {
        let sphere = unit_sphere();
        let ray = Ray { origin: sphere.center, dir: vec3(0.0, 0.0, -1.0) };

        let rec = sphere.hit(&ray, forward_interval()).unwrap();
        assert_abs_diff_eq!(rec.t, 1.0);
        assert!(!rec.front_face);
        // Flipped to oppose the ray even though it struck the back face.
        assert_abs_diff_eq!(rec.normal, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn missing_ray_produces_no_hit() {
        let sphere = unit_sphere();
        let ray = Ray { origin: vec3(0.0, 5.0, 0.0), dir: vec3(0.0, 0.0, -1.0) };
        assert!(sphere.hit(&ray, forward_interval()).is_none());
    }

    #[test]
    fn hits_behind_the_interval_are_rejected() {
        let sphere = unit_sphere();
        let ray = Ray { origin: vec3(0.0, 0.0, -5.0), dir: vec3(0.0, 0.0, -1.0) };
        // Sphere lies behind the origin along -z; both roots are negative.
        assert!(sphere.hit(&ray, forward_interval()).is_none());
    }

    #[test]
    fn shrunken_interval_excludes_the_near_surface() {
        let sphere = unit_sphere();
        let ray = Ray { origin: vec3(0.0, 0.0, 0.0), dir: vec3(0.0, 0.0, -1.0) };

        // Roots are t=1 and t=3. A max below both rejects the sphere.
        assert!(sphere.hit(&ray, Interval::new(HIT_EPSILON, 0.5)).is_none());

        // A min between the roots skips the near surface and lands on the far one.
        let rec = sphere.hit(&ray, Interval::new(1.5, interval::UNIVERSE.max)).unwrap();
        assert_abs_diff_eq!(rec.t, 3.0);
    }
}
