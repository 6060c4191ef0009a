use crate::types::{Float, Point3, Vec3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn position_at(&self, t: Float) -> Point3 {
        self.origin + self.dir * t
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, vec3};

    use super::*;

    #[test]
    fn position_interpolates_along_direction() {
        let ray = Ray { origin: vec3(1.0, 2.0, 3.0), dir: vec3(0.0, -1.0, 0.5) };
        assert_abs_diff_eq!(ray.position_at(0.0), vec3(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(ray.position_at(2.0), vec3(1.0, 0.0, 4.0));
        assert_abs_diff_eq!(ray.position_at(-1.0), vec3(1.0, 3.0, 2.5));
    }
}
