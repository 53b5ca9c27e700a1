use crate::math::{Point, Real};

/// Computes the convex hull of a set of 2d points.
///
/// The computed convex-hull have its points given in counter-clockwise order. Points lying on
/// the interior of a hull edge are discarded.
pub fn convex_hull2(points: &[Point<Real>]) -> Vec<Point<Real>> {
    convex_hull2_idx(points)
        .into_iter()
        .map(|id| points[id])
        .collect()
}

/// Computes the convex hull of a set of 2d points and returns only the indices of the hull
/// vertices, counter-clockwise.
///
/// This uses the monotone chain algorithm in `O(n log n)`.
pub fn convex_hull2_idx(points: &[Point<Real>]) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..points.len()).collect();
    sorted.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then_with(|| points[a].y.total_cmp(&points[b].y))
    });
    sorted.dedup_by(|a, b| points[*a] == points[*b]);

    if sorted.len() < 3 {
        return sorted;
    }

    let turns_left = |hull: &[usize], p: usize| {
        let o = points[hull[hull.len() - 2]];
        let a = points[hull[hull.len() - 1]];
        (a - o).perp(&(points[p] - o)) > 0.0
    };

    let mut hull: Vec<usize> = Vec::with_capacity(sorted.len() + 1);

    // Lower hull.
    for &p in &sorted {
        while hull.len() >= 2 && !turns_left(&hull, p) {
            let _ = hull.pop();
        }
        hull.push(p);
    }

    // Upper hull.
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && !turns_left(&hull, p) {
            let _ = hull.pop();
        }
        hull.push(p);
    }

    // The first point is repeated at the end.
    let _ = hull.pop();
    hull
}

#[cfg(test)]
mod test {
    use super::convex_hull2;
    use crate::math::Point;

    #[test]
    fn interior_and_collinear_points_are_discarded() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(0.5, 0.5),
        ];
        let hull = convex_hull2(&points);

        assert_eq!(
            hull,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ]
        );
    }
}
