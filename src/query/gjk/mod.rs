//! The GJK algorithm for distance computation.

pub use self::gjk::{closest_edge, eps_tol, MAX_GJK_ITERATIONS};
pub use self::minkowski_edge::MinkowskiEdge;
pub use self::minkowski_point::MinkowskiPoint;

mod gjk;
mod minkowski_edge;
mod minkowski_point;
