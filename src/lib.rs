/*!
spring2d
========

**spring2d** is a 2-dimensional rigid-body physics engine written with
the rust programming language.

It advances bodies, colliders and joints through time: a broad-phase
proposes candidate collider pairs, a GJK/EPA based narrow-phase computes
exact contact geometry, and a sequential impulse solver with warm starting
and Baumgarte stabilization resolves contacts and joints.

```
# #[cfg(feature = "f64")]
# extern crate spring2d_f64 as spring2d;
use spring2d::math::Vector;
use spring2d::dynamics::RigidBodyBuilder;
use spring2d::geometry::ColliderBuilder;
use spring2d::pipeline::World;

let mut world = World::new(Vector::new(0.0, -9.81));
let ground = world.insert_body(RigidBodyBuilder::fixed().build());
let _ = world
    .insert_collider(
        ColliderBuilder::segment([-10.0, 0.0].into(), [10.0, 0.0].into()).build().unwrap(),
        ground,
    )
    .unwrap();

let ball = world.insert_body(RigidBodyBuilder::dynamic().translation(0.0, 2.0).build());
let _ = world
    .insert_collider(ColliderBuilder::ball(0.5).build().unwrap(), ball)
    .unwrap();

for _ in 0..120 {
    world.step(1.0 / 60.0);
}

assert!(world.body(ball).unwrap().translation().y < 2.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod data;
pub mod dynamics;
pub mod geometry;
pub mod mass_properties;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Matrix2, Point2, Translation2, UnitVector2, Vector2};
    use na::UnitComplex;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The angular vector type.
    pub type AngVector<N> = N;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The matrix type.
    pub use Matrix2 as Matrix;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;

    /// The angular inertia of a rigid body.
    pub type AngularInertia<N> = N;
}

/// Prelude containing the common types defined by spring2d.
pub mod prelude {
    pub use crate::dynamics::*;
    pub use crate::geometry::*;
    pub use crate::math::*;
    pub use crate::pipeline::*;
    pub use crate::shape::*;
    pub use na::{point, vector};
}
