//! The EPA algorithm for penetration depth computation.

pub use self::epa2::{closest_edge, MAX_EPA_ITERATIONS};

mod epa2;
