//! Bounding volumes used by the broad-phase and by point queries.

pub use self::aabb::Aabb;
pub use self::bounding_sphere::BoundingSphere;
pub use self::bounding_volume::BoundingVolume;

mod aabb;
mod aabb_shapes;
mod bounding_sphere;
mod bounding_volume;
