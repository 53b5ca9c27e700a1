use crate::math::{Isometry, Real, UnitVector, Vector};
use crate::query::collision::{CollisionPoint, CollisionResult};
use crate::shape::Ball;

/// Collision test between two balls.
///
/// The balls collide if the distance between their centers is smaller than the sum of their
/// radii.
#[inline]
pub fn collide_ball_ball(
    pos1: &Isometry<Real>,
    b1: &Ball,
    pos2: &Isometry<Real>,
    b2: &Ball,
) -> CollisionResult {
    let c1 = pos1 * b1.center;
    let c2 = pos2 * b2.center;
    let delta = c2 - c1;
    let distance = delta.norm();
    let sum_radius = b1.radius + b2.radius;

    if distance >= sum_radius {
        return CollisionResult::separated();
    }

    let normal = if distance > 0.0 {
        UnitVector::new_unchecked(delta / distance)
    } else {
        Vector::x_axis()
    };

    let mut result = CollisionResult::with_normal(normal);
    result.points.push(CollisionPoint {
        point1: c1 + *normal * b1.radius,
        point2: c2 - *normal * b2.radius,
        dist: distance - sum_radius,
    });
    result
}

#[cfg(test)]
mod test {
    use super::collide_ball_ball;
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::Ball;

    #[test]
    fn penetrating_balls() {
        let b1 = Ball::new(1.0);
        let b2 = Ball::new(0.5);
        let res = collide_ball_ball(
            &Isometry::translation(0.0, 0.0),
            &b1,
            &Isometry::translation(0.0, 1.2),
            &b2,
        );

        assert!(res.colliding);
        assert_relative_eq!(*res.normal, Vector::y());
        assert_relative_eq!(res.points[0].dist, -0.3, epsilon = 1.0e-6);
        assert_relative_eq!(res.points[0].point1, Point::new(0.0, 1.0));
        assert_relative_eq!(res.points[0].point2, Point::new(0.0, 0.7), epsilon = 1.0e-6);
    }

    #[test]
    fn touching_balls_do_not_collide() {
        let b = Ball::new(1.0);
        let res = collide_ball_ball(
            &Isometry::translation(0.0, 0.0),
            &b,
            &Isometry::translation(2.0, 0.0),
            &b,
        );

        assert!(!res.colliding);
        assert!(res.points.is_empty());
    }
}
