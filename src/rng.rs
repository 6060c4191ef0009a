use cgmath::{vec3, InnerSpace};
use rand::Rng;

use crate::types::{Float, Vec3};

/// Rejection sampling is overwhelmingly likely to succeed within a few
/// draws; after this many misses the last draw is projected onto the
/// boundary instead so callers can never stall.
const MAX_REJECTIONS: usize = 64;

pub fn in_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    let mut v = vec3_in_cube(rng);
    for _ in 0..MAX_REJECTIONS {
        if v.magnitude2() < 1.0 {
            return v;
        }
        v = vec3_in_cube(rng);
    }
    v.normalize()
}

pub fn unit_vector(rng: &mut impl Rng) -> Vec3 {
    let v = in_unit_sphere(rng);
    if v.magnitude2() > 0.0 { v.normalize() } else { Vec3::unit_y() }
}

#[allow(dead_code)]
pub fn on_hemisphere(normal: &Vec3, rng: &mut impl Rng) -> Vec3 {
    let v = unit_vector(rng);
    if normal.dot(v) < 0.0 { -v } else { v }
}

pub fn in_unit_disk(rng: &mut impl Rng) -> Vec3 {
    let mut v = vec3(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0);
    for _ in 0..MAX_REJECTIONS {
        if v.magnitude2() < 1.0 {
            return v;
        }
        v = vec3(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0);
    }
    v.normalize()
}

fn vec3_in_cube(rng: &mut impl Rng) -> Vec3 {
    let arr: [Float; 3] = rng.gen();
    vec3(arr[0] * 2.0 - 1.0, arr[1] * 2.0 - 1.0, arr[2] * 2.0 - 1.0)
}
