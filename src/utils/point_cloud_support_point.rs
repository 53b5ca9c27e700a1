use crate::math::{Point, Real, Vector};

/// The index of the point of `points` that lies farthest along `dir`.
///
/// The first of several equally far points wins. Returns `0` for an empty slice.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    points
        .iter()
        .enumerate()
        .fold((0, -Real::MAX), |(best_id, best_dot), (id, pt)| {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                (id, dot)
            } else {
                (best_id, best_dot)
            }
        })
        .0
}

/// The point of the non-empty `points` that lies farthest along `dir`.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    points[point_cloud_support_point_id(dir, points)]
}
