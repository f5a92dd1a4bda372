use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use super::{approx_eq, ApproxEq};

/// A homogeneous 4-component tuple.
///
/// A tuple with `w == 1` is a point, one with `w == 0` is a vector. Arithmetic keeps
/// `w` consistent as long as the operands are combined sensibly (point - point is a
/// vector, point + vector is a point); mixing them any other way is a caller error and
/// is not checked.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    /// Instantiate a new Tuple from all four components.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// A point in space (`w = 1`).
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.)
    }

    /// A direction (`w = 0`).
    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.)
    }

    /// The point at the origin.
    pub fn origin() -> Self {
        Self::point(0., 0., 0.)
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.
    }

    /// Find the dot product between two Tuples.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross two vectors. The result is always a vector.
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Find the magnitude of this Tuple. Only meaningful for vectors.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + self.w.powi(2)).sqrt()
    }

    /// Normalize this Tuple by dividing it by its own magnitude.
    ///
    /// The caller must guarantee a non-zero length.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        debug_assert!(magnitude != 0., "normalized a zero-length vector");
        self / magnitude
    }

    /// Reflect this vector around `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2. * self.dot(normal))
    }
}

impl ApproxEq for Tuple {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl AddAssign for Tuple {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn point_and_vector_are_told_apart_by_w() {
        let p = Tuple::point(4.3, -4.2, 3.1);
        assert!(p.is_point());
        assert!(!p.is_vector());

        let v = Tuple::vector(4.3, -4.2, 3.1);
        assert!(v.is_vector());
        assert!(!v.is_point());
    }

    #[test]
    fn arithmetic_preserves_w() {
        let p = Tuple::point(3., 2., 1.);
        let q = Tuple::point(5., 6., 7.);
        let v = Tuple::vector(5., 6., 7.);

        assert_eq!(p - q, Tuple::vector(-2., -4., -6.));
        assert_eq!(p - v, Tuple::point(-2., -4., -6.));
        assert_eq!(p + v, Tuple::point(8., 8., 8.));
        assert_eq!(v + v, Tuple::vector(10., 12., 14.));
    }

    #[test]
    fn negate_and_scale() {
        let a = Tuple::new(1., -2., 3., -4.);
        assert_eq!(-a, Tuple::new(-1., 2., -3., 4.));
        assert_eq!(a * 3.5, Tuple::new(3.5, -7., 10.5, -14.));
        assert_eq!(a * 0.5, Tuple::new(0.5, -1., 1.5, -2.));
        assert_eq!(a / 2., Tuple::new(0.5, -1., 1.5, -2.));
    }

    #[test]
    fn magnitude_and_normalize() {
        assert_eq!(Tuple::vector(1., 0., 0.).magnitude(), 1.);
        assert_eq!(Tuple::vector(1., 2., 3.).magnitude(), 14f64.sqrt());
        assert_eq!(Tuple::vector(-1., -2., -3.).magnitude(), 14f64.sqrt());

        assert_eq!(Tuple::vector(4., 0., 0.).normalize(), Tuple::vector(1., 0., 0.));
        let n = Tuple::vector(1., 2., 3.).normalize();
        assert_approx_eq!(n, Tuple::vector(0.26726, 0.53452, 0.80178));
        assert!(approx_eq(n.magnitude(), 1.));
    }

    #[test]
    fn dot_and_cross() {
        let a = Tuple::vector(1., 2., 3.);
        let b = Tuple::vector(2., 3., 4.);
        assert_eq!(a.dot(b), 20.);
        assert_eq!(a.cross(b), Tuple::vector(-1., 2., -1.));
        assert_eq!(b.cross(a), Tuple::vector(1., -2., 1.));
    }

    #[test]
    fn reflect_off_slanted_surface() {
        let v = Tuple::vector(1., -1., 0.);
        let n = Tuple::vector(0., 1., 0.);
        assert_eq!(v.reflect(n), Tuple::vector(1., 1., 0.));

        let v = Tuple::vector(0., -1., 0.);
        let n = Tuple::vector(2f64.sqrt() / 2., 2f64.sqrt() / 2., 0.);
        assert_approx_eq!(v.reflect(n), Tuple::vector(1., 0., 0.));
    }
}
