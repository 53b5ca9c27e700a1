//! Data structures used to store the simulation entities.

pub use self::arena::{Arena, Index};

pub mod arena;
