//! Non-persistent geometric queries.
//!
//! The most general functions provided by this module are:
//!
//! * [`query::collide()`](crate::query::collide) to compute the contact normal and up to two
//!   pairs of contact points between two shapes.
//! * [`query::closest_edge()`](crate::query::closest_edge) to compute the closest feature of the
//!   Minkowski difference of two shapes with GJK, and EPA if they penetrate.
//!
//! The functions exported by the `details` submodule are specific versions of `collide` for
//! shape pairs known at compile-time.

pub use self::collision::{closest_edge, collide, CollisionPoint, CollisionResult};

pub(crate) mod clip;
mod collision;
pub mod epa;
pub mod gjk;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::{clip_segment_segment_with_normal, ClippingPoints};
    pub use super::collision::{collide_ball_ball, collide_polygonal, collide_support_map_ball};
}
