use super::{Matrix4, Tuple};

/// A ray, `origin + t * direction`. The origin is a point and the direction a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Instantiate a new Ray. The direction is not required to be normalized.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Map this ray through `transform`. Used to move world-space rays into object space.
    pub fn transform(&self, transform: &Matrix4) -> Ray {
        Ray::new(transform * self.origin, transform * self.direction)
    }
}
