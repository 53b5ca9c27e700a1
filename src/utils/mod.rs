//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::cross::{cross_sv, skew};
pub use self::isometry_ops::IsometryOps;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

pub(crate) use self::inv::inv;

mod ccw_face_normal;
mod cross;
pub mod hashmap;
mod inv;
mod isometry_ops;
mod point_cloud_support_point;
mod sorted_pair;
