use cgmath::Vector3;

pub type Float = f64;
pub type Vec3 = Vector3<Float>;
pub type Point3 = Vector3<Float>;

pub const PI: Float = std::f64::consts::PI;

/// Hits closer than this are discarded so a scattered ray cannot
/// re-intersect the surface it just left.
pub const HIT_EPSILON: Float = 1e-3;

pub fn degrees_to_radians(degrees: Float) -> Float {
    degrees * PI / 180.0
}
