mod matrix;
mod ray;
mod tuple;

pub use matrix::*;
pub use ray::*;
pub use tuple::*;

/// Tolerance for floating point comparisons, and the distance hit points are nudged off
/// a surface before casting secondary rays.
pub const EPSILON: f64 = 0.00001;

/// Whether two floats are within [`EPSILON`] of each other.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Linearly interpolate between two values.
pub fn lerp(a: f64, b: f64, c: f64) -> f64 {
    a + (b - a) * c
}

/// A type that can be linearly interpolated between two values of itself.
pub trait Lerp {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        lerp(self, other, t)
    }
}

/// Component-wise comparison within [`EPSILON`].
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

/// Assert that two [`ApproxEq`] values are equal within [`EPSILON`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            $crate::math::ApproxEq::approx_eq(left, right),
            "assertion failed: `left ≈ right`\n  left: `{:?}`\n right: `{:?}`",
            left,
            right,
        );
    }};
}
