use crate::math::{Ray, Tuple, EPSILON};

use super::Shape;

/// The xz plane through the local origin, facing +y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl Shape for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        // parallel or coplanar rays never register a hit
        if ray.direction.y.abs() < EPSILON {
            return vec![];
        }

        vec![-ray.origin.y / ray.direction.y]
    }

    fn local_normal_at(&self, _point: Tuple) -> Tuple {
        Tuple::vector(0., 1., 0.)
    }
}
