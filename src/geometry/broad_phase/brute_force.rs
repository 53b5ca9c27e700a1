use crate::bounding_volume::BoundingVolume;
use crate::data::Arena;
use crate::dynamics::RigidBody;
use crate::geometry::broad_phase::is_candidate_pair;
use crate::geometry::{BroadPhase, Collider, ColliderHandle};

/// A broad-phase testing the bounding boxes of every pair of colliders.
///
/// This is quadratic in the number of colliders, but exact: it reports exactly the pairs with
/// overlapping bounding boxes.
#[derive(Copy, Clone, Debug, Default)]
pub struct BruteForceBroadPhase;

impl BruteForceBroadPhase {
    /// Creates a new brute-force broad-phase.
    pub fn new() -> Self {
        Self
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn find_pairs(
        &mut self,
        colliders: &Arena<Collider>,
        bodies: &Arena<RigidBody>,
        pairs: &mut Vec<(ColliderHandle, ColliderHandle)>,
    ) {
        for (i1, c1) in colliders.iter() {
            for (i2, c2) in colliders.iter().filter(|(i2, _)| *i2 > i1) {
                if c1.aabb.intersects(&c2.aabb) && is_candidate_pair(c1, c2, bodies) {
                    pairs.push((ColliderHandle(i1), ColliderHandle(i2)));
                }
            }
        }
    }
}
