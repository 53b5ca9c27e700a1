use crate::math::{Isometry, Point, Real, Vector};
use crate::query::clip;
use crate::query::collision::collide::contact_normal;
use crate::query::collision::{CollisionPoint, CollisionResult};
use crate::query::gjk;
use crate::shape::Shape;

/// Collision test between a convex polygon and a polygon or segment.
///
/// GJK/EPA provides the contact normal. The faces of both shapes that best face each other
/// along that normal are then clipped against each other to produce up to two contact points.
pub fn collide_polygonal(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    pos2: &Isometry<Real>,
    shape2: &Shape,
) -> CollisionResult {
    let center1 = pos1 * shape1.local_center();
    let center2 = pos2 * shape2.local_center();
    let edge = gjk::closest_edge(
        pos1,
        shape1.as_support_map(),
        &center1,
        pos2,
        shape2.as_support_map(),
        &center2,
    );

    let r1 = shape1.border_radius();
    let r2 = shape2.border_radius();
    let separation = edge.dist - r1 - r2;

    if separation >= 0.0 {
        return CollisionResult::separated();
    }

    let (core1, core2) = edge.closest_points();
    let normal = contact_normal(&edge, &core1, &core2);

    let face1 = world_support_face(pos1, shape1, &normal);
    let face2 = world_support_face(pos2, shape2, &-*normal);

    let mut result = CollisionResult::with_normal(normal);

    if let Some((ca, cb)) = clip::clip_segment_segment_with_normal(face1, face2, &normal) {
        let n_clipped = if relative_eq!(ca.0, cb.0, epsilon = gjk::eps_tol()) {
            1
        } else {
            2
        };

        for (p1, p2) in [ca, cb].into_iter().take(n_clipped) {
            let dist = normal.dot(&(p2 - p1)) - r1 - r2;

            if dist <= 0.0 {
                result.points.push(CollisionPoint {
                    point1: p1 + *normal * r1,
                    point2: p2 - *normal * r2,
                    dist,
                });
            }
        }
    }

    if result.points.is_empty() {
        // Vertex contact: the clipped faces do not overlap or do not penetrate.
        result.points.push(CollisionPoint {
            point1: core1 + *normal * r1,
            point2: core2 - *normal * r2,
            dist: separation,
        });
    }

    result
}

/// The world-space face of `shape` that best faces the direction `dir`.
fn world_support_face(
    pos: &Isometry<Real>,
    shape: &Shape,
    dir: &Vector<Real>,
) -> (Point<Real>, Point<Real>) {
    match shape {
        Shape::ConvexPolygon(poly) => {
            let local_dir = pos.inverse_transform_vector(dir);
            let (a, b) = poly.local_support_edge(&local_dir);
            (pos * a, pos * b)
        }
        Shape::Segment(seg) => (pos * seg.a, pos * seg.b),
        Shape::Ball(ball) => {
            let center = pos * ball.center;
            (center, center)
        }
    }
}

#[cfg(test)]
mod test {
    use super::collide_polygonal;
    use crate::math::{Isometry, Point, Real, Vector};
    use crate::shape::{ConvexPolygon, Segment, Shape};

    #[test]
    fn box_resting_on_segment() {
        let ground = Shape::Segment(Segment::new(Point::new(-5.0, 0.0), Point::new(5.0, 0.0)));
        let cuboid = Shape::ConvexPolygon(ConvexPolygon::cuboid(0.5, 0.5).unwrap());

        let res = collide_polygonal(
            &Isometry::translation(1.0, 0.45),
            &cuboid,
            &Isometry::identity(),
            &ground,
        );

        assert!(res.colliding);
        assert_relative_eq!(*res.normal, -Vector::y(), epsilon = 1.0e-5);
        assert_eq!(res.points.len(), 2);

        for pt in &res.points {
            assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-5);
            assert_relative_eq!(pt.point1.y, -0.05, epsilon = 1.0e-5);
            assert_relative_eq!(pt.point2.y, 0.0, epsilon = 1.0e-5);
        }

        let mut xs: Vec<Real> = res.points.iter().map(|pt| pt.point1.x).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(xs[0], 0.5, epsilon = 1.0e-5);
        assert_relative_eq!(xs[1], 1.5, epsilon = 1.0e-5);
    }

    #[test]
    fn stacked_boxes_partial_overlap() {
        let cuboid = Shape::ConvexPolygon(ConvexPolygon::cuboid(0.5, 0.5).unwrap());

        let res = collide_polygonal(
            &Isometry::identity(),
            &cuboid,
            &Isometry::translation(0.6, 0.9),
            &cuboid,
        );

        assert!(res.colliding);
        assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-5);
        assert_eq!(res.points.len(), 2);
        for pt in &res.points {
            assert_relative_eq!(pt.dist, -0.1, epsilon = 1.0e-5);
            assert!(pt.point1.x >= 0.1 - 1.0e-5 && pt.point1.x <= 0.5 + 1.0e-5);
        }
    }

    #[test]
    fn separated_boxes() {
        let cuboid = Shape::ConvexPolygon(ConvexPolygon::cuboid(0.5, 0.5).unwrap());
        let res = collide_polygonal(
            &Isometry::identity(),
            &cuboid,
            &Isometry::translation(0.0, 1.01),
            &cuboid,
        );
        assert!(!res.colliding);
    }
}
