use crate::math::{Ray, Tuple};

use super::Shape;

/// The unit sphere centered at the local origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere;

impl Shape for Sphere {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let sphere_to_ray = ray.origin - Tuple::origin();

        let a = ray.direction.dot(ray.direction);
        let b = 2. * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return vec![];
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2. * a);
        let t1 = (-b + sqrtd) / (2. * a);
        vec![t0, t1]
    }

    fn local_normal_at(&self, point: Tuple) -> Tuple {
        point - Tuple::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    fn hits(origin: Tuple) -> Vec<f64> {
        Sphere.local_intersect(&Ray::new(origin, Tuple::vector(0., 0., 1.)))
    }

    #[test]
    fn ray_through_center() {
        assert_eq!(hits(Tuple::point(0., 0., -5.)), vec![4., 6.]);
    }

    #[test]
    fn ray_at_tangent_gives_two_equal_hits() {
        assert_eq!(hits(Tuple::point(0., 1., -5.)), vec![5., 5.]);
    }

    #[test]
    fn ray_misses() {
        assert!(hits(Tuple::point(0., 2., -5.)).is_empty());
    }

    #[test]
    fn ray_originates_inside() {
        assert_eq!(hits(Tuple::point(0., 0., 0.)), vec![-1., 1.]);
    }

    #[test]
    fn sphere_behind_ray() {
        assert_eq!(hits(Tuple::point(0., 0., 5.)), vec![-6., -4.]);
    }

    #[test]
    fn normals_point_away_from_center() {
        assert_eq!(
            Sphere.local_normal_at(Tuple::point(1., 0., 0.)),
            Tuple::vector(1., 0., 0.)
        );
        assert_eq!(
            Sphere.local_normal_at(Tuple::point(0., 0., 1.)),
            Tuple::vector(0., 0., 1.)
        );
        let k = 3f64.sqrt() / 3.;
        let n = Sphere.local_normal_at(Tuple::point(k, k, k));
        assert_approx_eq!(n, Tuple::vector(k, k, k));
        assert_approx_eq!(n, n.normalize());
    }
}
