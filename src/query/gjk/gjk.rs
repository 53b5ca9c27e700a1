//! The Gilbert–Johnson–Keerthi distance algorithm, specialized to 2D edges.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::epa;
use crate::query::gjk::{MinkowskiEdge, MinkowskiPoint};
use crate::shape::SupportMap;
use crate::utils;

/// The maximum number of iterations performed by GJK.
pub const MAX_GJK_ITERATIONS: usize = 16;

/// The absolute tolerance used by GJK and EPA termination tests.
pub fn eps_tol() -> Real {
    let _eps = crate::math::DEFAULT_EPSILON;
    _eps * 100.0
}

/// Computes the edge of the Minkowski difference `g1 - g2` closest to the origin.
///
/// Only the cores of the shapes are considered: round borders must be accounted for by the
/// caller. If the cores are separated, the returned edge has a positive `dist`. If they
/// penetrate, the origin is enclosed and EPA computes the edge of smallest penetration,
/// with a negative `dist`.
///
/// The search starts along the direction perpendicular to `center2 - center1`. If GJK does
/// not converge after [`MAX_GJK_ITERATIONS`], the last edge is returned as a best-effort
/// result.
pub fn closest_edge<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    center1: &Point<Real>,
    pos2: &Isometry<Real>,
    g2: &G2,
    center2: &Point<Real>,
) -> MinkowskiEdge
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let support = |dir: &Vector<Real>| MinkowskiPoint::from_shapes(pos1, g1, pos2, g2, dir);

    let mut dir = utils::skew(&(center2 - center1));
    if dir.norm_squared() <= eps_tol() * eps_tol() {
        dir = Vector::x();
    }

    // Invariant: the origin lies on the right of `v0 -> v1`.
    let (mut v0, mut v1) = oriented(support(&dir), support(&-dir));

    for _ in 0..MAX_GJK_ITERATIONS {
        let edge = MinkowskiEdge::new(v0, v1);
        let closest = edge.closest_point();

        let n = if edge.is_vertex_feature() || (v1 - v0).norm_squared() <= eps_tol() * eps_tol()
        {
            match na::Unit::try_new(-closest.coords, eps_tol()) {
                Some(n) => n,
                // The origin lies on one of the vertices.
                None => return edge,
            }
        } else {
            edge.normal
        };

        let p = support(&*n);

        if p.point.coords.norm_squared() <= eps_tol() * eps_tol() {
            return epa::closest_edge(pos1, g1, pos2, g2, [v0, p, v1]);
        }

        let progress =
            n.dot(&p.point.coords) - n.dot(&v0.point.coords).max(n.dot(&v1.point.coords));

        if progress <= eps_tol() {
            // Nothing farther toward the origin: this is the closest feature.
            return edge;
        }

        // Is the origin on the left of `v0 -> p` and of `p -> v1`? If so, it is enclosed by
        // the counterclockwise triangle `[v0, p, v1]`.
        let left0 = (p - v0).perp(&-v0.point.coords) > 0.0;
        let left1 = (v1 - p).perp(&-p.point.coords) > 0.0;

        match (left0, left1) {
            (true, true) => return epa::closest_edge(pos1, g1, pos2, g2, [v0, p, v1]),
            (false, true) => v1 = p,
            (true, false) => v0 = p,
            (false, false) => {
                let e0 = MinkowskiEdge::new(v0, p);
                let e1 = MinkowskiEdge::new(p, v1);

                if e0.dist <= e1.dist {
                    v1 = p;
                } else {
                    v0 = p;
                }
            }
        }

        (v0, v1) = oriented(v0, v1);
    }

    log::warn!(
        "GJK did not converge after {} iterations, returning the last edge.",
        MAX_GJK_ITERATIONS
    );
    MinkowskiEdge::new(v0, v1)
}

/// Orders two points so that the origin lies on the right of the edge they define.
fn oriented(v0: MinkowskiPoint, v1: MinkowskiPoint) -> (MinkowskiPoint, MinkowskiPoint) {
    if (v1 - v0).perp(&-v0.point.coords) > 0.0 {
        (v1, v0)
    } else {
        (v0, v1)
    }
}
