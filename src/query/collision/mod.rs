//! Exact collision detection between two positioned shapes.

pub use self::collide::{closest_edge, collide};
pub use self::collision_ball_ball::collide_ball_ball;
pub use self::collision_polygonal::collide_polygonal;
pub use self::collision_result::{CollisionPoint, CollisionResult};
pub use self::collision_support_map_ball::collide_support_map_ball;

mod collide;
mod collision_ball_ball;
mod collision_polygonal;
mod collision_result;
mod collision_support_map_ball;
