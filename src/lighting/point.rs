use crate::{
    material::{Color, Material},
    math::Tuple,
};

use super::LightShading;

/// A point light, which is a light that emits in all directions from a specified position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// The position in space of this light.
    pub position: Tuple,

    /// The color and brightness of this light.
    pub intensity: Color,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Tuple::origin(),
            intensity: Color::white(),
        }
    }
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// Phong shading of `material` at `point`, seen along `eyev` with surface normal
    /// `normalv`. When `in_shadow`, only the ambient term contributes.
    pub fn shading(
        &self,
        material: &Material,
        point: Tuple,
        eyev: Tuple,
        normalv: Tuple,
        in_shadow: bool,
    ) -> LightShading {
        let effective_color = material.color_at(point) * self.intensity;
        let ambient = effective_color * material.ambient;

        if in_shadow {
            return LightShading::new(ambient, Color::black(), Color::black());
        }

        // vector pointing from the point to the light
        let lightv = (self.position - point).normalize();

        let light_dot_normal = lightv.dot(normalv);
        if light_dot_normal < 0. {
            // the light is on the other side of the surface
            return LightShading::new(ambient, Color::black(), Color::black());
        }

        let diffuse = effective_color * (material.diffuse * light_dot_normal);

        let reflect_dot_eye = (-lightv).reflect(normalv).dot(eyev);
        let specular = if reflect_dot_eye <= 0. {
            Color::black()
        } else {
            self.intensity * (material.specular * reflect_dot_eye.powf(material.shininess))
        };

        LightShading::new(ambient, diffuse, specular)
    }
}
