use std::path::Path;

use crate::{error::Error, material::Color};

/// A grid of unclamped colors, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A canvas filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    /// Wrap an already rendered row-major pixel list.
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    /// Convert to an 8-bit image. This is where colors get clamped.
    pub fn to_image(&self) -> image::RgbImage {
        let mut imgbuf: image::RgbImage =
            image::ImageBuffer::new(self.width as u32, self.height as u32);

        for (i, color) in self.pixels.iter().enumerate() {
            imgbuf.put_pixel(
                (i % self.width) as u32,
                (i / self.width) as u32,
                (*color).into(),
            );
        }

        imgbuf
    }

    /// Write the canvas out as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
