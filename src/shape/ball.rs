//! Support mapping based Ball shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A Ball shape, also known as a circle.
///
/// The support mapping of a ball only accounts for its center. The radius acts as a
/// round border added by the collision routines.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball, in the local-space of its body.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius, centered at the local origin.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball {
            center: Point::origin(),
            radius,
        }
    }

    /// Creates a new ball with the given local center and radius.
    #[inline]
    pub fn with_center(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// The area of this ball.
    #[inline]
    pub fn area(&self) -> Real {
        core::f64::consts::PI as Real * self.radius * self.radius
    }

    /// Tests if the point `pt`, expressed in the same frame as `pos`, lies inside of this
    /// ball positioned at `pos`.
    #[inline]
    pub fn contains_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> bool {
        na::distance_squared(&(pos * self.center), pt) <= self.radius * self.radius
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, _: &Vector<Real>) -> Point<Real> {
        self.center
    }

    #[inline]
    fn support_point(&self, m: &Isometry<Real>, _: &Vector<Real>) -> Point<Real> {
        m * self.center
    }
}
