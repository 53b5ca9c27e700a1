//! Broad-phases finding the pairs of colliders with overlapping bounding boxes.

pub use self::broad_phase::{is_candidate_pair, BroadPhase};
pub use self::brute_force::BruteForceBroadPhase;
pub use self::sweep_and_prune::SweepAndPrune;

mod broad_phase;
mod brute_force;
mod sweep_and_prune;
