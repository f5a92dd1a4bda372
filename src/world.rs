use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    lighting::PointLight,
    material::{Color, Material},
    math::{Matrix4, Ray, Tuple},
    object::{hit, Computations, Intersection, Object},
};

/// World options. Defaults are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldOptions {
    /// The maximum number of reflection bounces traced from an initial ray. Anything
    /// past this contributes black.
    pub max_depth: u32,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

/// A world: a set of objects lit by a single point light.
///
/// A world is never mutated while it is being rendered, so it is shared by reference
/// across rendering threads.
#[derive(Debug)]
pub struct World {
    light: PointLight,
    objects: Vec<Object>,
    options: WorldOptions,
}

impl World {
    pub fn new(light: PointLight, objects: Vec<Object>) -> Self {
        debug!("world with {} objects, light at {:?}", objects.len(), light.position);
        Self {
            light,
            objects,
            options: WorldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WorldOptions) -> Self {
        self.options = options;
        self
    }

    /// Two concentric spheres, the inner one half the size, lit from `(-10, -10, -10)`.
    pub fn default_world() -> Self {
        let light = PointLight::new(Tuple::point(-10., -10., -10.), Color::white());
        let outer = Object::sphere(
            Matrix4::identity(),
            Material {
                color: Color::new(0.8, 1.0, 0.6),
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            },
        );
        let inner = Object::sphere(Matrix4::scaling(0.5, 0.5, 0.5), Material::default());

        Self::new(light, vec![outer, inner])
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn options(&self) -> &WorldOptions {
        &self.options
    }

    /// Every intersection of `ray` with every object, sorted by ascending `t`.
    ///
    /// Objects are tested in parallel. The result only depends on the `t` values, not on
    /// object order or on which thread finishes first.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        let mut xs: Vec<Intersection<'_>> = self
            .objects
            .par_iter()
            .flat_map(|object| object.intersect(ray))
            .collect();

        xs.sort_by(Intersection::cmp_t);
        xs
    }

    /// The color seen along `ray`, or black if it hits nothing.
    pub fn color_at(&self, ray: &Ray) -> Color {
        self.color_at_depth(ray, self.options.max_depth)
    }

    /// [`World::color_at`] with `remaining` reflection bounces left.
    pub fn color_at_depth(&self, ray: &Ray, remaining: u32) -> Color {
        let xs = self.intersect(ray);
        match hit(&xs) {
            Some(i) => self.shade_hit(&i.prepare_computations(ray), remaining),
            None => Color::black(),
        }
    }

    /// Direct lighting plus reflection at a prepared hit.
    pub fn shade_hit(&self, comps: &Computations<'_>, remaining: u32) -> Color {
        let shadowed = self.is_shadowed(comps.over_point);

        let surface = self
            .light
            .shading(
                comps.object.material(),
                comps.over_point,
                comps.eyev,
                comps.normalv,
                shadowed,
            )
            .total();

        surface + self.reflected_color(comps, remaining)
    }

    /// Whether something lies strictly between `point` and the light.
    ///
    /// A point at the light itself is never shadowed.
    pub fn is_shadowed(&self, point: Tuple) -> bool {
        let v = self.light.position - point;
        let distance = v.magnitude();
        if distance == 0. {
            return false;
        }

        let ray = Ray::new(point, v.normalize());

        let xs = self.intersect(&ray);
        matches!(hit(&xs), Some(h) if h.t < distance)
    }

    /// The color reflected off the hit surface, scaled by its reflectivity.
    ///
    /// Non-reflective surfaces and an exhausted bounce count contribute black.
    pub fn reflected_color(&self, comps: &Computations<'_>, remaining: u32) -> Color {
        let reflective = comps.object.material().reflective;
        if reflective == 0. {
            return Color::black();
        }
        if remaining == 0 {
            trace!("reflection truncated at depth limit");
            return Color::black();
        }

        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        self.color_at_depth(&reflect_ray, remaining - 1) * reflective
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(PointLight::default(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    fn h() -> f64 {
        2f64.sqrt() / 2.
    }

    #[test]
    fn default_world_contents() {
        let w = World::default_world();
        assert_eq!(w.light().position, Tuple::point(-10., -10., -10.));
        assert_eq!(w.light().intensity, Color::white());
        assert_eq!(w.objects().len(), 2);
        assert_eq!(w.objects()[0].material().color, Color::new(0.8, 1.0, 0.6));
        assert_eq!(*w.objects()[1].transform(), Matrix4::scaling(0.5, 0.5, 0.5));
        assert_eq!(w.options().max_depth, 5);
    }

    #[test]
    fn empty_world_is_black() {
        let w = World::default();
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        assert!(w.intersect(&ray).is_empty());
        assert_eq!(w.color_at(&ray), Color::black());
    }

    #[test]
    fn intersect_world_with_ray() {
        let w = World::default_world();
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        let xs = w.intersect(&ray);

        let ts: Vec<f64> = xs.iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![4., 4.5, 5.5, 6.]);
        assert!(xs.windows(2).all(|pair| pair[0].t <= pair[1].t));
    }

    #[test]
    fn intersection_is_independent_of_object_order() {
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        let forward = World::default_world();
        let mut objects = World::default_world().objects;
        objects.reverse();
        let reversed = World::new(*forward.light(), objects);

        let ts = |w: &World| w.intersect(&ray).iter().map(|i| i.t).collect::<Vec<_>>();
        assert_eq!(ts(&forward), ts(&reversed));
    }

    #[test]
    fn shade_intersection_from_outside() {
        let w = World::default_world();
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        let shape = &w.objects()[0];
        let comps = Intersection::new(4., shape).prepare_computations(&ray);

        let c = w.shade_hit(&comps, w.options().max_depth);
        assert_approx_eq!(c, Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn shade_intersection_from_inside() {
        let mut w = World::default_world();
        w.light = PointLight::new(Tuple::point(0., 0.25, 0.), Color::white());
        let ray = Ray::new(Tuple::point(0., 0., 0.), Tuple::vector(0., 0., 1.));
        let shape = &w.objects()[1];
        let comps = Intersection::new(0.5, shape).prepare_computations(&ray);

        let c = w.shade_hit(&comps, w.options().max_depth);
        assert_approx_eq!(c, Color::new(0.90498, 0.90498, 0.90498));
    }

    #[test]
    fn color_when_ray_misses() {
        let w = World::default_world();
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 1., 0.));
        assert_eq!(w.color_at(&ray), Color::black());
    }

    #[test]
    fn color_when_ray_hits() {
        let w = World::default_world();
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        assert_approx_eq!(w.color_at(&ray), Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn color_with_intersection_behind_ray() {
        let light = PointLight::new(Tuple::point(-10., -10., -10.), Color::white());
        let full_ambient = |color| Material {
            color,
            ambient: 1.,
            ..Default::default()
        };
        let outer = Object::sphere(Matrix4::identity(), full_ambient(Color::new(0.8, 1.0, 0.6)));
        let inner = Object::sphere(Matrix4::scaling(0.5, 0.5, 0.5), full_ambient(Color::white()));
        let w = World::new(light, vec![outer, inner]);

        // starts between the spheres, looking at the inner one
        let ray = Ray::new(Tuple::point(0., 0., 0.75), Tuple::vector(0., 0., -1.));
        assert_approx_eq!(w.color_at(&ray), Color::white());
    }

    #[test]
    fn no_shadow_when_nothing_is_collinear() {
        let w = World::default_world();
        assert!(!w.is_shadowed(Tuple::point(0., 10., 0.)));
    }

    #[test]
    fn shadow_when_object_between_point_and_light() {
        let w = World::default_world();
        assert!(w.is_shadowed(Tuple::point(10., 10., 10.)));
    }

    #[test]
    fn no_shadow_when_object_behind_light() {
        let w = World::default_world();
        assert!(!w.is_shadowed(Tuple::point(-20., -20., -20.)));
    }

    #[test]
    fn no_shadow_when_object_behind_point() {
        let w = World::default_world();
        assert!(!w.is_shadowed(Tuple::point(-2., -2., -2.)));
    }

    #[test]
    fn no_shadow_at_light_position() {
        let mut w = World::default_world();
        w.light = PointLight::new(Tuple::origin(), Color::white());
        assert!(!w.is_shadowed(Tuple::origin()));

        // the outer sphere still blocks the light from far away
        assert!(w.is_shadowed(Tuple::point(-10., -10., -10.)));
    }

    #[test]
    fn shade_hit_in_shadow() {
        let light = PointLight::new(Tuple::point(0., 0., -10.), Color::white());
        let s1 = Object::sphere(Matrix4::identity(), Material::default());
        let s2 = Object::sphere(Matrix4::translation(0., 0., 10.), Material::default());
        let w = World::new(light, vec![s1, s2]);

        let ray = Ray::new(Tuple::point(0., 0., 5.), Tuple::vector(0., 0., 1.));
        let comps = Intersection::new(4., &w.objects()[1]).prepare_computations(&ray);
        assert_approx_eq!(w.shade_hit(&comps, 5), Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn reflected_color_of_nonreflective_material() {
        let light = PointLight::new(Tuple::point(-10., -10., -10.), Color::white());
        let outer = World::default_world().objects.remove(0);
        let inner = Object::sphere(
            Matrix4::scaling(0.5, 0.5, 0.5),
            Material {
                ambient: 1.,
                ..Default::default()
            },
        );
        let w = World::new(light, vec![outer, inner]);

        let ray = Ray::new(Tuple::point(0., 0., 0.), Tuple::vector(0., 0., 1.));
        let comps = Intersection::new(1., &w.objects()[1]).prepare_computations(&ray);
        assert_eq!(w.reflected_color(&comps, 5), Color::black());
    }

    fn world_with_mirror_floor_lit_from(light: Tuple) -> World {
        let mut objects = World::default_world().objects;
        objects.push(Object::plane(
            Matrix4::translation(0., -1., 0.),
            Material {
                reflective: 0.5,
                ..Default::default()
            },
        ));
        World::new(PointLight::new(light, Color::white()), objects)
    }

    /// The light sits below the floor, so only ambient light reaches the reflection.
    fn world_with_mirror_floor() -> World {
        world_with_mirror_floor_lit_from(Tuple::point(-10., -10., -10.))
    }

    #[test]
    fn reflected_color_with_light_above_floor() {
        let w = world_with_mirror_floor_lit_from(Tuple::point(-10., 10., -10.));
        let ray = Ray::new(Tuple::point(0., 0., -3.), Tuple::vector(0., -h(), h()));
        let comps = Intersection::new(2f64.sqrt(), &w.objects()[2]).prepare_computations(&ray);

        assert_approx_eq!(w.reflected_color(&comps, 5), Color::new(0.19033, 0.23792, 0.14275));
        assert_approx_eq!(w.shade_hit(&comps, 5), Color::new(0.87676, 0.92434, 0.82917));
    }

    #[test]
    fn reflected_color_of_reflective_material() {
        let w = world_with_mirror_floor();
        let ray = Ray::new(Tuple::point(0., 0., -3.), Tuple::vector(0., -h(), h()));
        let comps = Intersection::new(2f64.sqrt(), &w.objects()[2]).prepare_computations(&ray);

        assert_approx_eq!(w.reflected_color(&comps, 5), Color::new(0.04, 0.05, 0.03));
    }

    #[test]
    fn shade_hit_includes_reflection() {
        let w = world_with_mirror_floor();
        let ray = Ray::new(Tuple::point(0., 0., -3.), Tuple::vector(0., -h(), h()));
        let comps = Intersection::new(2f64.sqrt(), &w.objects()[2]).prepare_computations(&ray);

        assert_approx_eq!(w.shade_hit(&comps, 5), Color::new(0.14, 0.15, 0.13));
    }

    #[test]
    fn reflected_color_at_depth_limit() {
        let w = world_with_mirror_floor();
        let ray = Ray::new(Tuple::point(0., 0., -3.), Tuple::vector(0., -h(), h()));
        let comps = Intersection::new(2f64.sqrt(), &w.objects()[2]).prepare_computations(&ray);

        assert_eq!(w.reflected_color(&comps, 0), Color::black());
    }

    #[test]
    fn mutually_reflective_surfaces_terminate() {
        let mirror = || Material {
            reflective: 1.,
            ..Default::default()
        };
        let lower = Object::plane(Matrix4::translation(0., -1., 0.), mirror());
        let upper = Object::plane(Matrix4::translation(0., 1., 0.), mirror());
        let w = World::new(PointLight::new(Tuple::origin(), Color::white()), vec![lower, upper]);

        let ray = Ray::new(Tuple::origin(), Tuple::vector(0., 1., 0.));
        let c = w.color_at(&ray);
        assert!(c.r.is_finite() && c.g.is_finite() && c.b.is_finite());
        assert_approx_eq!(c, Color::new(11.4, 11.4, 11.4));

        // fewer bounces, less light
        let shallow = World::new(
            PointLight::new(Tuple::origin(), Color::white()),
            w.objects,
        )
        .with_options(WorldOptions { max_depth: 1 });
        assert!(shallow.color_at(&ray).r < c.r);
    }
}
