use std::cmp::Ordering;

use crate::math::{Ray, Tuple, EPSILON};

use super::Object;

/// A ray parameter `t` paired with the object struck there.
///
/// `t` may be negative when the object is behind the ray origin. Such intersections are
/// kept in intersection lists but never chosen by [`hit`].
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Object) -> Self {
        Self { t, object }
    }

    /// Ascending order by `t`, for sorting intersection lists.
    pub fn cmp_t(&self, other: &Self) -> Ordering {
        self.t.partial_cmp(&other.t).unwrap_or(Ordering::Equal)
    }

    /// Precompute the shading state for this intersection of `ray`.
    pub fn prepare_computations(&self, ray: &Ray) -> Computations<'a> {
        let point = ray.position(self.t);
        let eyev = -ray.direction;
        let mut normalv = self.object.normal_at(point);

        let inside = normalv.dot(eyev) < 0.;
        if inside {
            normalv = -normalv;
        }

        Computations {
            t: self.t,
            object: self.object,
            point,
            eyev,
            normalv,
            inside,
            reflectv: ray.direction.reflect(normalv),
            over_point: point + normalv * EPSILON,
        }
    }
}

/// Same `t`, same object (by identity).
impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && std::ptr::eq(self.object, other.object)
    }
}

/// The visible intersection: the one with the smallest non-negative `t`.
///
/// Returns `None` when every intersection is behind the ray origin, or there are none.
/// The input does not need to be sorted; among equal `t` values the earliest wins.
pub fn hit<'a, 'b>(intersections: &'b [Intersection<'a>]) -> Option<&'b Intersection<'a>> {
    intersections
        .iter()
        .filter(|i| i.t >= 0.)
        .fold(None, |acc: Option<&Intersection<'a>>, i| match acc {
            Some(best) if best.t <= i.t => Some(best),
            _ => Some(i),
        })
}

/// Shading state derived from an intersection and the ray that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a Object,

    /// World-space point of the intersection.
    pub point: Tuple,

    /// Unit vector from the point back towards the ray origin.
    pub eyev: Tuple,

    /// Surface normal, flipped to face the eye.
    pub normalv: Tuple,

    /// Whether the ray started inside the object.
    pub inside: bool,

    /// The ray direction reflected around the normal.
    pub reflectv: Tuple,

    /// `point` nudged along the normal, so secondary rays cast from it do not hit the
    /// surface they start on.
    pub over_point: Tuple,
}
