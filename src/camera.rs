use std::sync::atomic::{AtomicUsize, Ordering};

use cgmath::InnerSpace;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;
use thiserror::Error;

use crate::{
    image::{Image, RGB},
    ray::Ray,
    rng,
    scene::Scene,
    trace::ray_color,
    types::{degrees_to_radians, Float, Point3, Vec3},
};

#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("aspect ratio must be positive, got {0}")]
    NonPositiveAspectRatio(Float),
    #[error("image width must be positive")]
    ZeroWidth,
    #[error("vertical fov must be in (0, 180) degrees, got {0}")]
    InvalidFov(Float),
    #[error("look_from and look_at coincide")]
    DegenerateView,
    #[error("up vector is zero or parallel to the view direction")]
    DegenerateUp,
    #[error("samples per pixel must be at least 1")]
    ZeroSamples,
    #[error("defocus angle must be in [0, 180) degrees, got {0}")]
    InvalidDefocusAngle(Float),
    #[error("focus distance must be positive, got {0}")]
    NonPositiveFocusDist(Float),
}

/// Plain configuration surface; validated and frozen by [`Camera::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub aspect_ratio: Float,
    pub image_width: usize,
    pub vfov: Float,
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub defocus_angle: Float,
    pub focus_dist: Float,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            vfov: 90.0,
            look_from: Point3::new(0.0, 0.0, -1.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            samples_per_pixel: 10,
            max_depth: 10,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

#[derive(Debug)]
pub struct Camera {
    image_width: usize,
    image_height: usize,
    samples_per_pixel: u32,
    max_depth: u32,
    defocus_angle: Float,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Rejects degenerate geometry up front so no NaN can reach the render
    /// loop, then derives the viewport basis once.
    pub fn new(config: &CameraConfig) -> Result<Self, CameraError> {
        if config.aspect_ratio <= 0.0 {
            return Err(CameraError::NonPositiveAspectRatio(config.aspect_ratio));
        }
        if config.image_width == 0 {
            return Err(CameraError::ZeroWidth);
        }
        if !(config.vfov > 0.0 && config.vfov < 180.0) {
            return Err(CameraError::InvalidFov(config.vfov));
        }
        if config.samples_per_pixel == 0 {
            return Err(CameraError::ZeroSamples);
        }
        if !(config.defocus_angle >= 0.0 && config.defocus_angle < 180.0) {
            return Err(CameraError::InvalidDefocusAngle(config.defocus_angle));
        }
        if config.focus_dist <= 0.0 {
            return Err(CameraError::NonPositiveFocusDist(config.focus_dist));
        }

        let view = config.look_from - config.look_at;
        if view.magnitude2() == 0.0 {
            return Err(CameraError::DegenerateView);
        }
        let w = view.normalize();
        let up_cross_w = config.vup.cross(w);
        if up_cross_w.magnitude2() == 0.0 {
            return Err(CameraError::DegenerateUp);
        }
        let u = up_cross_w.normalize();
        let v = w.cross(u);

        let image_height = ((config.image_width as Float / config.aspect_ratio) as usize).max(1);

        let theta = degrees_to_radians(config.vfov);
        let viewport_height = 2.0 * (theta / 2.0).tan() * config.focus_dist;
        let viewport_width = viewport_height * (config.image_width as Float / image_height as Float);

        let center = config.look_from;
        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;
        let pixel_delta_u = viewport_u / config.image_width as Float;
        let pixel_delta_v = viewport_v / image_height as Float;

        let viewport_upper_left =
            center - config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius =
            config.focus_dist * degrees_to_radians(config.defocus_angle / 2.0).tan();

        Ok(Self {
            image_width: config.image_width,
            image_height,
            samples_per_pixel: config.samples_per_pixel,
            max_depth: config.max_depth,
            defocus_angle: config.defocus_angle,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
        })
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Averages `samples_per_pixel` recursive estimates per pixel into a
    /// fresh image buffer. Rows render in parallel; every pixel owns a
    /// generator seeded from `seed` and its index, so the output is
    /// byte-identical for a fixed seed no matter how rayon schedules rows.
    pub fn render(&self, scene: &Scene, seed: u64) -> Image {
        let mut image = Image::new(self.image_width, self.image_height);
        let rows_remaining = AtomicUsize::new(self.image_height);

        image
            .pixels
            .par_chunks_mut(self.image_width)
            .enumerate()
            .for_each(|(row, pixels)| {
                for (col, pixel) in pixels.iter_mut().enumerate() {
                    let index = (row * self.image_width + col) as u64;
                    let mut gen = StdRng::seed_from_u64(seed.wrapping_add(index));
                    *pixel = self.pixel_color(col, row, scene, &mut gen);
                }
                let left = rows_remaining.fetch_sub(1, Ordering::Relaxed) - 1;
                eprint!("\rScanlines remaining: {left} ");
            });
        eprintln!();

        image
    }

    fn pixel_color(&self, col: usize, row: usize, scene: &Scene, gen: &mut impl Rng) -> RGB {
        let mut color = RGB::new(0.0, 0.0, 0.0);
        for _ in 0..self.samples_per_pixel {
            let ray = self.get_ray(col, row, gen);
            color += ray_color(&ray, self.max_depth, scene, gen);
        }
        color / self.samples_per_pixel as Float
    }

    /// Ray toward a jittered point in the pixel footprint, starting at the
    /// camera center or, with depth of field, at a defocus-disk sample.
    fn get_ray(&self, col: usize, row: usize, gen: &mut impl Rng) -> Ray {
        let pixel_center = self.pixel00_loc
            + col as Float * self.pixel_delta_u
            + row as Float * self.pixel_delta_v;
        let px: Float = gen.gen_range(-0.5..0.5);
        let py: Float = gen.gen_range(-0.5..0.5);
        let pixel_sample = pixel_center + px * self.pixel_delta_u + py * self.pixel_delta_v;

        let origin = if self.defocus_angle > 0.0 {
            self.defocus_disk_sample(gen)
        } else {
            self.center
        };
        Ray { origin, dir: pixel_sample - origin }
    }

    fn defocus_disk_sample(&self, gen: &mut impl Rng) -> Point3 {
        let p = rng::in_unit_disk(gen);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}
