use cgmath::num_traits::zero;

use crate::types::Float;

pub type RGB = cgmath::Vector3<Float>;

/// Row-major pixel buffer, top row first. Pixels hold linear color;
/// the display transform happens at write-out.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<RGB>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![zero(); width * height] }
    }
}
