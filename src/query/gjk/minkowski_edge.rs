use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::gjk::{self, MinkowskiPoint};

/// An edge of a Minkowski difference `A - B`, together with the closest point of that
/// edge to the origin.
///
/// This is the output of GJK and EPA.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinkowskiEdge {
    /// First endpoint of the edge.
    pub a: MinkowskiPoint,
    /// Second endpoint of the edge.
    pub b: MinkowskiPoint,
    /// The unit normal of the edge, pointing outward of the Minkowski difference.
    ///
    /// This is also the direction from the first shape toward the second shape.
    pub normal: UnitVector<Real>,
    /// The signed distance between the cores of the two shapes.
    ///
    /// Positive if they are separated, negative if they penetrate.
    pub dist: Real,
    /// The barycentric coordinate of the closest point: `closest = a + (b - a) * t`.
    pub t: Real,
}

impl MinkowskiEdge {
    /// Builds the edge `a -> b` of a counterclockwise Minkowski difference boundary.
    ///
    /// The outward normal is the right-hand side perpendicular of `b - a`. For a degenerate
    /// edge, it is the direction from the closest point toward the origin instead.
    pub fn new(a: MinkowskiPoint, b: MinkowskiPoint) -> Self {
        let ab = b - a;
        let sqnab = ab.norm_squared();
        let t = if sqnab > gjk::eps_tol() * gjk::eps_tol() {
            (-a.point.coords.dot(&ab) / sqnab).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let closest = a.point + ab * t;
        let normal = UnitVector::try_new(Vector::new(ab.y, -ab.x), gjk::eps_tol())
            .or_else(|| UnitVector::try_new(-closest.coords, gjk::eps_tol()))
            .unwrap_or_else(Vector::x_axis);

        let dist = if closest.coords.dot(&normal) > 0.0 {
            -closest.coords.norm()
        } else {
            closest.coords.norm()
        };

        MinkowskiEdge {
            a,
            b,
            normal,
            dist,
            t,
        }
    }

    /// The point of this edge closest to the origin.
    #[inline]
    pub fn closest_point(&self) -> Point<Real> {
        self.a.point + (self.b - self.a) * self.t
    }

    /// The world-space points of the two shapes that the closest point is the difference of.
    #[inline]
    pub fn closest_points(&self) -> (Point<Real>, Point<Real>) {
        (
            self.a.orig1 + (self.b.orig1 - self.a.orig1) * self.t,
            self.a.orig2 + (self.b.orig2 - self.a.orig2) * self.t,
        )
    }

    /// Is the closest point one of the endpoints of this edge?
    ///
    /// The normal of such a vertex feature is ambiguous and should be recomputed from the
    /// closest points when the shapes are separated.
    #[inline]
    pub fn is_vertex_feature(&self) -> bool {
        self.t == 0.0 || self.t == 1.0
    }
}

#[cfg(test)]
mod test {
    use super::MinkowskiEdge;
    use crate::math::{Point, Vector};
    use crate::query::gjk::MinkowskiPoint;

    fn mk(x: f64, y: f64) -> MinkowskiPoint {
        MinkowskiPoint::new(Point::new(x as _, y as _), Point::origin())
    }

    #[test]
    fn separated_edge() {
        // The origin is on the right of a -> b.
        let edge = MinkowskiEdge::new(mk(-1.0, 2.0), mk(1.0, 2.0));
        assert_relative_eq!(*edge.normal, -Vector::y());
        assert_relative_eq!(edge.dist, 2.0);
        assert_relative_eq!(edge.t, 0.5);
        assert!(!edge.is_vertex_feature());
    }

    #[test]
    fn penetrating_edge() {
        // The origin is on the left of a -> b, i.e. inside.
        let edge = MinkowskiEdge::new(mk(1.0, 2.0), mk(-1.0, 2.0));
        assert_relative_eq!(*edge.normal, Vector::y());
        assert_relative_eq!(edge.dist, -2.0);
    }

    #[test]
    fn vertex_feature() {
        let edge = MinkowskiEdge::new(mk(2.0, 3.0), mk(1.0, 1.0));
        assert_eq!(edge.t, 1.0);
        assert!(edge.is_vertex_feature());
        assert_relative_eq!(edge.dist, (2.0 as crate::math::Real).sqrt());
        assert_eq!(edge.closest_points().0, Point::new(1.0, 1.0));
    }
}
