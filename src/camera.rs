use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    canvas::Canvas,
    math::{Matrix4, Ray, Tuple},
    world::World,
};

/// A pinhole camera. Maps each pixel of a `hsize` x `vsize` image to a ray.
///
/// The canvas sits one unit in front of the eye, and `transform` is the world-to-eye
/// transform (see [`Matrix4::view_transform`]).
#[derive(Clone, Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Matrix4,
    inverse: Matrix4,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// A camera at the origin looking down -z. `field_of_view` is in radians.
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1. {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2. / hsize as f64,
        }
    }

    /// # Panics
    ///
    /// Panics if `transform` is singular.
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self.inverse = transform.inverse();
        self
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The ray from the eye through the center of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;

        // the camera looks towards -z, so +x is to the left
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let pixel = self.inverse * Tuple::point(world_x, world_y, -1.);
        let origin = self.inverse * Tuple::origin();
        Ray::new(origin, (pixel - origin).normalize())
    }

    /// Render `world` as seen from this camera. Pixels are traced in parallel.
    pub fn render(&self, world: &World) -> Canvas {
        let (w, h) = (self.hsize, self.vsize);
        debug!("rendering {}x{} with {} objects", w, h, world.objects().len());
        let start = Instant::now();

        let pixels = (0..(w * h))
            .into_par_iter()
            .map(|i| world.color_at(&self.ray_for_pixel(i % w, i / w)))
            .collect::<Vec<_>>();

        info!("rendered {}x{} in {:.3}s", w, h, start.elapsed().as_secs_f32());
        Canvas::from_pixels(w, h, pixels)
    }
}
