mod point;

use crate::material::{Color, Material};
use crate::math::Tuple;

pub use point::*;

/// The result of a light's influence on a surface point, split by Phong term.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightShading {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl LightShading {
    pub fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// The final color, `ambient + diffuse + specular`.
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

/// The Phong lighting formula: the summed color of `material` lit by `light`.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Tuple,
    eyev: Tuple,
    normalv: Tuple,
    in_shadow: bool,
) -> Color {
    light
        .shading(material, point, eyev, normalv, in_shadow)
        .total()
}
