//! Colliders, broad-phase and contact management.

pub use self::broad_phase::{
    is_candidate_pair, BroadPhase, BruteForceBroadPhase, SweepAndPrune,
};
pub use self::collider::{Collider, ColliderBuilder, ColliderHandle, Material};
pub use self::collision_filter::{CollisionFilter, CollisionMask};
pub use self::contact::{Contact, ContactHandle, ContactPoint};
pub use self::contact_manager::ContactManager;

mod broad_phase;
mod collider;
mod collision_filter;
mod contact;
mod contact_manager;
