use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::query::collision::{
    collide_ball_ball, collide_polygonal, collide_support_map_ball, CollisionResult,
};
use crate::query::gjk::{self, MinkowskiEdge};
use crate::shape::Shape;

/// Computes the collision between two positioned shapes.
///
/// The normal of the result points from `shape1` toward `shape2`. Swapping the two shapes
/// negates the normal and swaps the points of each contact pair. Two segments never collide.
pub fn collide(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    pos2: &Isometry<Real>,
    shape2: &Shape,
) -> CollisionResult {
    match (shape1, shape2) {
        (Shape::Ball(b1), Shape::Ball(b2)) => collide_ball_ball(pos1, b1, pos2, b2),
        (Shape::Segment(_), Shape::Segment(_)) => CollisionResult::separated(),
        (_, Shape::Ball(b2)) => collide_support_map_ball(pos1, shape1, pos2, b2),
        (Shape::Ball(b1), _) => collide_support_map_ball(pos2, shape2, pos1, b1).flipped(),
        (Shape::ConvexPolygon(_), Shape::Segment(_)) => {
            collide_polygonal(pos1, shape1, pos2, shape2)
        }
        (Shape::Segment(_), Shape::ConvexPolygon(_)) => {
            collide_polygonal(pos2, shape2, pos1, shape1).flipped()
        }
        (Shape::ConvexPolygon(_), Shape::ConvexPolygon(_)) => {
            // Always run the test in the same order for a given pair.
            if polygon_order_key(pos2, shape2) < polygon_order_key(pos1, shape1) {
                collide_polygonal(pos2, shape2, pos1, shape1).flipped()
            } else {
                collide_polygonal(pos1, shape1, pos2, shape2)
            }
        }
    }
}

/// Orders polygons by world-space center, then by their extreme points along `x` and `y` to
/// break ties between coincident centers.
fn polygon_order_key(pos: &Isometry<Real>, shape: &Shape) -> [Real; 6] {
    let center = pos * shape.local_center();
    let sx = shape.as_support_map().support_point(pos, &Vector::x());
    let sy = shape.as_support_map().support_point(pos, &Vector::y());
    [center.x, center.y, sx.x, sx.y, sy.x, sy.y]
}

/// Computes the edge of the Minkowski difference `shape1 - shape2` closest to the origin.
///
/// Round borders are ignored. See [`gjk::closest_edge`].
pub fn closest_edge(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    pos2: &Isometry<Real>,
    shape2: &Shape,
) -> MinkowskiEdge {
    gjk::closest_edge(
        pos1,
        shape1.as_support_map(),
        &(pos1 * shape1.local_center()),
        pos2,
        shape2.as_support_map(),
        &(pos2 * shape2.local_center()),
    )
}

/// The contact normal derived from a GJK/EPA edge and its closest points.
///
/// The normal of a vertex feature is ambiguous. If the cores are separated, it is replaced
/// by the direction between the two closest points.
pub(crate) fn contact_normal(
    edge: &MinkowskiEdge,
    core1: &Point<Real>,
    core2: &Point<Real>,
) -> UnitVector<Real> {
    if edge.is_vertex_feature() && edge.dist > gjk::eps_tol() {
        UnitVector::try_new(core2 - core1, gjk::eps_tol()).unwrap_or(edge.normal)
    } else {
        edge.normal
    }
}
