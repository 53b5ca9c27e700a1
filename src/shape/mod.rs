//! Shapes supported by spring2d.
//!
//! Shapes are expressed in the local-space of the rigid body they are attached to.

pub use self::ball::Ball;
pub use self::convex_polygon::ConvexPolygon;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeError, ShapeType};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod convex_polygon;
mod segment;
mod shape;
mod support_map;
