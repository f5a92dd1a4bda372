mod intersection;
mod plane;
mod sphere;

use std::fmt::Debug;

use crate::{
    material::Material,
    math::{Matrix4, Ray, Tuple},
};

pub use intersection::*;
pub use plane::*;
pub use sphere::*;

/// The geometry of a primitive, in its own local space.
///
/// Implementors only deal with the canonical, untransformed shape. [`Object`] handles the
/// mapping between world space and local space.
pub trait Shape: Debug + Send + Sync {
    /// The `t` values at which a local-space ray meets this shape, in ascending order.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;

    /// The surface normal at a local-space point on this shape.
    fn local_normal_at(&self, point: Tuple) -> Tuple;
}

/// A scene object: a shape placed in the world by a transform, with a material.
///
/// Intersections borrow the object they hit, so identity is by reference, not by value.
#[derive(Debug)]
pub struct Object {
    shape: Box<dyn Shape>,
    transform: Matrix4,
    inverse: Matrix4,
    material: Material,
}

impl Object {
    /// Place `shape` in the world.
    ///
    /// If the material carries a pattern, the pattern is bound to this object's transform.
    ///
    /// # Panics
    ///
    /// Panics if `transform` is singular.
    pub fn new(shape: impl Shape + 'static, transform: Matrix4, mut material: Material) -> Self {
        let inverse = transform.inverse();
        if let Some(pattern) = material.pattern.as_mut() {
            pattern.bind_object(transform, inverse);
        }

        Self {
            shape: Box::new(shape),
            transform,
            inverse,
            material,
        }
    }

    pub fn sphere(transform: Matrix4, material: Material) -> Self {
        Self::new(Sphere, transform, material)
    }

    pub fn plane(transform: Matrix4, material: Material) -> Self {
        Self::new(Plane, transform, material)
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Every intersection of a world-space ray with this object, in ascending `t` order.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        let local_ray = ray.transform(&self.inverse);
        self.shape
            .local_intersect(&local_ray)
            .into_iter()
            .map(|t| Intersection::new(t, self))
            .collect()
    }

    /// The world-space surface normal at a world-space point on this object.
    pub fn normal_at(&self, world_point: Tuple) -> Tuple {
        let local_point = self.inverse * world_point;
        let local_normal = self.shape.local_normal_at(local_point);

        // normals go through the transpose of the inverse; the translation part leaks
        // into w, which has to be discarded
        let mut world_normal = self.inverse.transpose() * local_normal;
        world_normal.w = 0.;
        world_normal.normalize()
    }
}
