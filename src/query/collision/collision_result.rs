use crate::math::{Point, Real, UnitVector, Vector};
use arrayvec::ArrayVec;
use std::mem;

/// A pair of contact points, one on the surface of each shape.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionPoint {
    /// The contact point on the surface of the first shape, in world-space.
    pub point1: Point<Real>,
    /// The contact point on the surface of the second shape, in world-space.
    pub point2: Point<Real>,
    /// The signed distance between the two points along the contact normal.
    ///
    /// Negative if the shapes penetrate.
    pub dist: Real,
}

impl CollisionPoint {
    /// Swaps the two points.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
    }
}

/// The result of the narrow-phase test between two shapes.
#[derive(Debug, PartialEq, Clone)]
pub struct CollisionResult {
    /// Are the two shapes colliding?
    pub colliding: bool,
    /// The unit contact normal, pointing from the first shape toward the second shape.
    pub normal: UnitVector<Real>,
    /// Up to two contact points.
    pub points: ArrayVec<CollisionPoint, 2>,
}

impl CollisionResult {
    /// A result for two shapes that do not collide.
    pub fn separated() -> Self {
        CollisionResult {
            colliding: false,
            normal: Vector::x_axis(),
            points: ArrayVec::new(),
        }
    }

    /// An empty colliding result with the given normal, to be filled with contact points.
    pub fn with_normal(normal: UnitVector<Real>) -> Self {
        CollisionResult {
            colliding: true,
            normal,
            points: ArrayVec::new(),
        }
    }

    /// The deepest penetration depth among the contact points, or zero.
    pub fn max_penetration(&self) -> Real {
        self.points.iter().map(|p| -p.dist).fold(0.0, Real::max)
    }

    /// The result of the same test with the two shapes swapped.
    ///
    /// The normal is negated and the points of each pair are swapped.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.normal = -self.normal;
        for pt in &mut self.points {
            pt.flip();
        }
        self
    }
}
