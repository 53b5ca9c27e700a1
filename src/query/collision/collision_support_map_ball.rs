use crate::math::{Isometry, Real};
use crate::query::collision::collide::contact_normal;
use crate::query::collision::{CollisionPoint, CollisionResult};
use crate::query::gjk;
use crate::shape::{Ball, Shape};

/// Collision test between a polygon or segment and a ball.
///
/// The ball is reduced to its center and GJK/EPA computes the closest feature of the other
/// shape. Both round borders are then added back.
pub fn collide_support_map_ball(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    pos2: &Isometry<Real>,
    ball2: &Ball,
) -> CollisionResult {
    let center1 = pos1 * shape1.local_center();
    let center2 = pos2 * ball2.center;
    let edge = gjk::closest_edge(
        pos1,
        shape1.as_support_map(),
        &center1,
        pos2,
        ball2,
        &center2,
    );

    let r1 = shape1.border_radius();
    let r2 = ball2.radius;
    let separation = edge.dist - r1 - r2;

    if separation >= 0.0 {
        return CollisionResult::separated();
    }

    let (core1, core2) = edge.closest_points();
    let normal = contact_normal(&edge, &core1, &core2);

    let mut result = CollisionResult::with_normal(normal);
    result.points.push(CollisionPoint {
        point1: core1 + *normal * r1,
        point2: core2 - *normal * r2,
        dist: separation,
    });
    result
}

#[cfg(test)]
mod test {
    use super::collide_support_map_ball;
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::{Ball, ConvexPolygon, Segment, Shape};

    #[test]
    fn ball_on_box_corner() {
        let cuboid = Shape::ConvexPolygon(ConvexPolygon::cuboid(1.0, 1.0).unwrap());
        let ball = Ball::new(0.5);
        let res = collide_support_map_ball(
            &Isometry::identity(),
            &cuboid,
            &Isometry::translation(1.3, 1.3),
            &ball,
        );

        assert!(res.colliding);
        let expected = Vector::new(1.0, 1.0).normalize();
        assert_relative_eq!(*res.normal, expected, epsilon = 1.0e-5);
        assert_relative_eq!(res.points[0].point1, Point::new(1.0, 1.0), epsilon = 1.0e-5);
        let depth = 0.5 - (0.18 as crate::math::Real).sqrt();
        assert_relative_eq!(res.points[0].dist, -depth, epsilon = 1.0e-5);
    }

    #[test]
    fn ball_center_inside_box() {
        let cuboid = Shape::ConvexPolygon(ConvexPolygon::cuboid(1.0, 1.0).unwrap());
        let ball = Ball::new(0.25);
        let res = collide_support_map_ball(
            &Isometry::identity(),
            &cuboid,
            &Isometry::translation(0.1, 0.8),
            &ball,
        );

        assert!(res.colliding);
        assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(res.points[0].dist, -0.45, epsilon = 1.0e-5);
    }

    #[test]
    fn ball_on_thick_segment() {
        let seg = Shape::Segment(Segment::with_radius(
            Point::new(-5.0, 0.0),
            Point::new(5.0, 0.0),
            0.1,
        ));
        let ball = Ball::new(0.5);

        let res = collide_support_map_ball(
            &Isometry::identity(),
            &seg,
            &Isometry::translation(1.0, 0.55),
            &ball,
        );
        assert!(res.colliding);
        assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(res.points[0].dist, -0.05, epsilon = 1.0e-5);

        let res = collide_support_map_ball(
            &Isometry::identity(),
            &seg,
            &Isometry::translation(1.0, 0.65),
            &ball,
        );
        assert!(!res.colliding);
    }
}
