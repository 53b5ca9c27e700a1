use crate::math::{Point, Real, Vector};
use crate::utils;

/// A pair of points, one on each clipped segment, with the same tangential coordinate.
pub type ClippingPoints = (Point<Real>, Point<Real>);

/// Clips two segments facing each other along `normal`.
///
/// Both segments are projected on the tangent of `normal` and restricted to the overlap of
/// their projections. Returns the two endpoints of that overlap, each as a pair of points on
/// `seg1` and `seg2`, or `None` if the projections do not overlap.
pub fn clip_segment_segment_with_normal(
    seg1: (Point<Real>, Point<Real>),
    seg2: (Point<Real>, Point<Real>),
    normal: &Vector<Real>,
) -> Option<(ClippingPoints, ClippingPoints)> {
    let tangent = utils::skew(normal);
    let (seg1, range1) = sorted_along(seg1, &tangent);
    let (seg2, range2) = sorted_along(seg2, &tangent);

    let lo = range1[0].max(range2[0]);
    let hi = range1[1].min(range2[1]);

    if lo > hi {
        return None;
    }

    let ca = (point_at(&seg1, &range1, lo), point_at(&seg2, &range2, lo));
    let cb = (point_at(&seg1, &range1, hi), point_at(&seg2, &range2, hi));
    Some((ca, cb))
}

/// Orders the endpoints of `seg` by increasing coordinate along `tangent`.
fn sorted_along(
    seg: (Point<Real>, Point<Real>),
    tangent: &Vector<Real>,
) -> ((Point<Real>, Point<Real>), [Real; 2]) {
    let t0 = seg.0.coords.dot(tangent);
    let t1 = seg.1.coords.dot(tangent);

    if t1 < t0 {
        ((seg.1, seg.0), [t1, t0])
    } else {
        (seg, [t0, t1])
    }
}

/// The point of `seg` with the tangential coordinate `t`. Degenerate segments map to their
/// first endpoint.
fn point_at(seg: &(Point<Real>, Point<Real>), range: &[Real; 2], t: Real) -> Point<Real> {
    if t <= range[0] {
        seg.0
    } else if t >= range[1] {
        seg.1
    } else {
        let ratio = (t - range[0]) * utils::inv(range[1] - range[0]);
        seg.0 + (seg.1 - seg.0) * ratio
    }
}
