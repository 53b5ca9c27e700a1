//! Transformation of point sets into shapes.

pub use self::convex_hull2::{convex_hull2, convex_hull2_idx};

mod convex_hull2;
