use crate::{
    material::Color,
    math::{Lerp, Matrix4, Tuple},
};

/// The function a [`Pattern`] evaluates in its own local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Unit-width stripes along x, alternating `a` and `b`.
    Stripe,

    /// Linear blend from `a` to `b` across every unit interval of x.
    Gradient,

    /// Concentric unit-width rings around the y axis.
    Ring,

    /// A 3D checkerboard of unit cubes.
    Checker,
}

/// A two-color pattern with its own transform.
///
/// A world-space point is first moved into the owning object's space, then into the
/// pattern's space, and only then is the pattern function evaluated. The object transform
/// is bound when the material is attached to an [`Object`](crate::object::Object); until
/// then it is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub a: Color,
    pub b: Color,
    transform: Matrix4,
    inverse: Matrix4,
    object_transform: Matrix4,
    object_inverse: Matrix4,
}

impl Pattern {
    /// # Panics
    ///
    /// Panics if `transform` is singular.
    pub fn new(kind: PatternKind, a: Color, b: Color, transform: Matrix4) -> Self {
        Self {
            kind,
            a,
            b,
            transform,
            inverse: transform.inverse(),
            object_transform: Matrix4::identity(),
            object_inverse: Matrix4::identity(),
        }
    }

    pub fn stripe(a: Color, b: Color, transform: Matrix4) -> Self {
        Self::new(PatternKind::Stripe, a, b, transform)
    }

    pub fn gradient(a: Color, b: Color, transform: Matrix4) -> Self {
        Self::new(PatternKind::Gradient, a, b, transform)
    }

    pub fn ring(a: Color, b: Color, transform: Matrix4) -> Self {
        Self::new(PatternKind::Ring, a, b, transform)
    }

    pub fn checker(a: Color, b: Color, transform: Matrix4) -> Self {
        Self::new(PatternKind::Checker, a, b, transform)
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    pub fn object_transform(&self) -> &Matrix4 {
        &self.object_transform
    }

    /// Record the transform of the object this pattern is painted on.
    pub(crate) fn bind_object(&mut self, object_transform: Matrix4, object_inverse: Matrix4) {
        self.object_transform = object_transform;
        self.object_inverse = object_inverse;
    }

    /// Same as [`Pattern::bind_object`], but computes the inverse.
    pub fn with_object_transform(mut self, object_transform: Matrix4) -> Self {
        self.bind_object(object_transform, object_transform.inverse());
        self
    }

    /// The color at a world-space point.
    pub fn color_at(&self, world_point: Tuple) -> Color {
        let object_point = self.object_inverse * world_point;
        let pattern_point = self.inverse * object_point;
        self.color_at_local(pattern_point)
    }

    /// The color at a point already in pattern space.
    pub fn color_at_local(&self, point: Tuple) -> Color {
        match self.kind {
            PatternKind::Stripe => {
                // `%` keeps the sign of x, so negative x needs its own condition to keep
                // the stripes symmetric about the origin.
                let m = point.x % 2.;
                if (m >= 1. && point.x >= 0.) || (point.x < 0. && m >= -1.) {
                    self.b
                } else {
                    self.a
                }
            }
            PatternKind::Gradient => self.a.lerp(self.b, point.x - point.x.floor()),
            PatternKind::Ring => {
                let r = (point.x.powi(2) + point.z.powi(2)).sqrt();
                if r.floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Checker => {
                let sum = point.x.floor() + point.y.floor() + point.z.floor();
                if sum as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
        }
    }
}
