//! The simulation world and its time-stepping pipeline.

pub use self::world::{World, WorldError};

mod world;
