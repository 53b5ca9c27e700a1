/// A coarse enclosing approximation of a shape.
///
/// Overlap and inclusion tests between two bounding volumes of the same kind run in constant
/// time, which makes them suitable for discarding pairs of colliders early.
pub trait BoundingVolume: Sized {
    /// Do `self` and `other` overlap? Touching volumes overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` entirely inside of `self`?
    fn contains(&self, other: &Self) -> bool;

    /// The smallest volume of this kind enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;
}
