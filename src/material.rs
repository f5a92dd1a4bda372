use std::ops::{Add, AddAssign, Mul, Sub};

use crate::{
    math::{approx_eq, lerp, ApproxEq, Lerp, Tuple},
    pattern::Pattern,
};

/// A linear RGB color.
///
/// Components are not clamped. Values outside `0..=1` are legitimate while shading and
/// only get clamped when written out as an image.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }

    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }

    pub fn green() -> Self {
        Self::new(0., 1., 0.)
    }

    pub fn blue() -> Self {
        Self::new(0., 0., 1.)
    }

    /// Instantiate a new Color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Quantize to 8 bits per channel, clamping each component to `0..=1` first.
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0., 1.) * 255.).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl ApproxEq for Color {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

/// Component-wise (Hadamard) product, used to filter one color by another.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Lerp for Color {
    fn lerp(self, other: Self, t: f64) -> Self {
        Color {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_rgb8())
    }
}

/// The surface properties of an object, as consumed by the Phong model.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The flat color of the surface, used when there is no pattern.
    pub color: Color,

    /// When present, overrides `color` with a point-dependent color.
    pub pattern: Option<Pattern>,

    /// Fraction of the light's color reflected regardless of geometry.
    pub ambient: f64,

    /// Strength of the Lambertian term.
    pub diffuse: f64,

    /// Strength of the specular highlight.
    pub specular: f64,

    /// Exponent of the specular highlight. Larger values give a smaller, sharper highlight.
    pub shininess: f64,

    /// How mirror-like the surface is, from 0 (not at all) to 1 (perfect mirror).
    pub reflective: f64,
}

impl Material {
    /// The unlit color of the surface at `world_point`.
    pub fn color_at(&self, world_point: Tuple) -> Color {
        match &self.pattern {
            Some(pattern) => pattern.color_at(world_point),
            None => self.color,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            reflective: 0.,
        }
    }
}
