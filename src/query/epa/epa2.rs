//! Two-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use crate::math::{Isometry, Real};
use crate::query::gjk::{self, MinkowskiEdge, MinkowskiPoint};
use crate::shape::SupportMap;

/// The maximum number of iterations performed by EPA.
pub const MAX_EPA_ITERATIONS: usize = 29;

/// Computes the boundary edge of the Minkowski difference `g1 - g2` closest to the origin,
/// given a triangle of that difference enclosing the origin.
///
/// The returned edge has a non-positive `dist` whose magnitude is the penetration depth
/// of the two cores. If the polytope stops expanding before convergence, the closest edge
/// found so far is returned.
pub fn closest_edge<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    simplex: [MinkowskiPoint; 3],
) -> MinkowskiEdge
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut hull: Vec<MinkowskiPoint> = Vec::with_capacity(MAX_EPA_ITERATIONS + 3);

    for pt in simplex {
        if !hull
            .iter()
            .any(|v| relative_eq!(v.point, pt.point, epsilon = gjk::eps_tol()))
        {
            hull.push(pt);
        }
    }

    if hull.len() < 3 {
        // Flat simplex: the origin lies on its boundary.
        let b = hull.get(1).copied().unwrap_or(hull[0]);
        return MinkowskiEdge::new(hull[0], b);
    }

    // The boundary must be counterclockwise.
    if (hull[1] - hull[0]).perp(&(hull[2] - hull[0])) < 0.0 {
        hull.swap(1, 2);
    }

    let mut best = closest_hull_edge(&hull);

    for _ in 0..MAX_EPA_ITERATIONS {
        let (i, edge) = best;
        let n = edge.normal;
        let p = MinkowskiPoint::from_shapes(pos1, g1, pos2, g2, &n);

        let already_on_hull = hull
            .iter()
            .any(|v| relative_eq!(v.point, p.point, epsilon = gjk::eps_tol()));
        let progress = n.dot(&p.point.coords) - n.dot(&edge.a.point.coords);

        if already_on_hull || progress <= gjk::eps_tol() {
            return edge;
        }

        hull.insert(i + 1, p);
        best = closest_hull_edge(&hull);
    }

    log::warn!(
        "EPA did not converge after {} iterations, returning the closest edge found.",
        MAX_EPA_ITERATIONS
    );
    best.1
}

/// Finds the edge of `hull` closest to the origin, using the squared point-to-segment
/// distance.
fn closest_hull_edge(hull: &[MinkowskiPoint]) -> (usize, MinkowskiEdge) {
    let mut best = (0, MinkowskiEdge::new(hull[0], hull[1 % hull.len()]));
    let mut best_sqdist = best.1.closest_point().coords.norm_squared();

    for i in 1..hull.len() {
        let edge = MinkowskiEdge::new(hull[i], hull[(i + 1) % hull.len()]);
        let sqdist = edge.closest_point().coords.norm_squared();

        if sqdist < best_sqdist {
            best_sqdist = sqdist;
            best = (i, edge);
        }
    }

    best
}

#[cfg(test)]
mod test {
    use crate::math::{Isometry, Vector};
    use crate::query::gjk::{self, MinkowskiPoint};
    use crate::shape::{ConvexPolygon, SupportMap};

    #[test]
    fn epa_finds_shallowest_axis() {
        let big = ConvexPolygon::cuboid(2.0, 1.0).unwrap();
        let small = ConvexPolygon::cuboid(0.5, 0.5).unwrap();
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(1.0, 0.9);

        let support = |dir: Vector<crate::math::Real>| {
            MinkowskiPoint::new(
                big.support_point(&pos1, &dir),
                small.support_point(&pos2, &-dir),
            )
        };
        let simplex = [
            support(Vector::new(1.0, -1.0)),
            support(Vector::new(0.0, 1.0)),
            support(Vector::new(-1.0, 0.2)),
        ];

        let edge = super::closest_edge(&pos1, &big, &pos2, &small, simplex);

        // Pushing the small box up by 0.6 separates them.
        assert_relative_eq!(edge.dist, -0.6, epsilon = gjk::eps_tol() * 10.0);
        assert_relative_eq!(*edge.normal, Vector::y(), epsilon = 1.0e-5);
        let (p1, p2) = edge.closest_points();
        assert_relative_eq!((p2 - p1).dot(&edge.normal), -0.6, epsilon = 1.0e-4);
        assert_relative_eq!(p1.y, 1.0, epsilon = 1.0e-5);
    }
}
