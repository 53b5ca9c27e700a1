use crate::data::Arena;
use crate::dynamics::RigidBody;
use crate::geometry::{Collider, ColliderHandle};

/// A broad-phase, reporting the pairs of colliders that may be in contact.
///
/// A broad-phase must never miss a pair of colliders whose shapes touch. It may report pairs
/// that do not touch: those are discarded by the narrow-phase. It must not report pairs
/// rejected by [`is_candidate_pair`], nor the same pair twice during a single update.
pub trait BroadPhase {
    /// Pushes into `pairs` the pairs of colliders with overlapping bounding boxes.
    ///
    /// The world-space bounding boxes of the colliders are up-to-date when this is called.
    fn find_pairs(
        &mut self,
        colliders: &Arena<Collider>,
        bodies: &Arena<RigidBody>,
        pairs: &mut Vec<(ColliderHandle, ColliderHandle)>,
    );
}

/// Can the two colliders `c1` and `c2` be reported by a broad-phase?
///
/// Colliders attached to the same body, colliders attached to two static bodies, and
/// colliders rejected by their collision filters are never candidates.
pub fn is_candidate_pair(c1: &Collider, c2: &Collider, bodies: &Arena<RigidBody>) -> bool {
    let (Some(h1), Some(h2)) = (c1.parent, c2.parent) else {
        return false;
    };

    if h1 == h2 || !c1.filter.test(&c2.filter) {
        return false;
    }

    match (bodies.get(h1.0), bodies.get(h2.0)) {
        (Some(b1), Some(b2)) => !(b1.is_static() && b2.is_static()),
        _ => false,
    }
}
