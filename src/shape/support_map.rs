//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Trait implemented by convex shapes representable by a support mapping function.
///
/// The support mapping of a shape associates a direction to the point of the shape that is
/// the farthest along this direction. Shapes with a round border (balls and segments) only
/// expose the support mapping of their core: a ball maps every direction to its center, and
/// a segment to one of its endpoints. The border is accounted for separately by the
/// collision routines through [`Shape::border_radius`](crate::shape::Shape::border_radius).
pub trait SupportMap {
    /// Evaluates the support function of the core of this shape.
    ///
    /// The direction `dir` does not need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Evaluates the support function of the core of this shape transformed by `transform`.
    ///
    /// Both `dir` and the result are expressed in the frame `transform` maps to.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
