//! Definition of the segment shape.

use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;

use core::mem;

/// A segment shape, optionally thickened by a radius.
///
/// Segments are typically attached to static bodies to model the boundaries of the world.
/// Two segments never collide with each other.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
    /// The thickness of the segment on each side of its core.
    pub radius: Real,
}

impl Segment {
    /// Creates a new segment from two points and a zero radius.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b, radius: 0.0 }
    }

    /// Creates a new segment from two points and a radius.
    #[inline]
    pub fn with_radius(a: Point<Real>, b: Point<Real>, radius: Real) -> Segment {
        Segment { a, b, radius }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment, or `None` if it is degenerate.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        UnitVector::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The not-normalized counterclockwise normal of this segment.
    pub fn scaled_normal(&self) -> Vector<Real> {
        let dir = self.scaled_direction();
        Vector::new(dir.y, -dir.x)
    }

    /// The normal of this segment on the right-hand side of `a -> b`.
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        UnitVector::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The middle point of this segment.
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// Applies the isometry `m` to the vertices of this segment and returns the resulting segment.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::with_radius(m * self.a, m * self.b, self.radius)
    }

    /// The area covered by this segment and its radius.
    pub fn area(&self) -> Real {
        let r = self.radius;
        self.length() * 2.0 * r + core::f64::consts::PI as Real * r * r
    }

    /// Projects `pt` onto the core of this segment.
    ///
    /// Returns the projected point and its barycentric parameter `t` such that the
    /// projection equals `a + (b - a) * t`.
    pub fn project_local_point(&self, pt: &Point<Real>) -> (Point<Real>, Real) {
        let ab = self.scaled_direction();
        let sqnab = ab.norm_squared();

        if sqnab <= DEFAULT_EPSILON {
            return (self.a, 0.0);
        }

        let t = ((pt - self.a).dot(&ab) / sqnab).clamp(0.0, 1.0);
        (self.a + ab * t, t)
    }

    /// Tests if the point `pt`, expressed in the same frame as `pos`, lies inside of this
    /// segment (including its radius) positioned at `pos`.
    pub fn contains_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> bool {
        let local_pt = pos.inverse_transform_point(pt);
        let (proj, _) = self.project_local_point(&local_pt);
        na::distance_squared(&proj, &local_pt) <= self.radius * self.radius
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.a.coords.dot(dir) >= self.b.coords.dot(dir) {
            self.a
        } else {
            self.b
        }
    }
}

#[cfg(test)]
mod test {
    use super::Segment;
    use crate::math::{Isometry, Point};

    #[test]
    fn segment_projection_is_clamped_to_endpoints() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        let (proj, t) = seg.project_local_point(&Point::new(3.0, 1.0));
        assert_eq!(proj, Point::new(2.0, 0.0));
        assert_eq!(t, 1.0);

        let (proj, t) = seg.project_local_point(&Point::new(1.0, -1.0));
        assert_eq!(proj, Point::new(1.0, 0.0));
        assert_eq!(t, 0.5);
    }

    #[test]
    fn thick_segment_contains_nearby_points() {
        let seg = Segment::with_radius(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5);
        let pos = Isometry::translation(1.0, 1.0);
        assert!(seg.contains_point(&pos, &Point::new(2.0, 1.4)));
        assert!(!seg.contains_point(&pos, &Point::new(2.0, 1.6)));
    }
}
