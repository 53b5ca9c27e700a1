use crate::math::{Real, Vector};

/// Rotates `v` by 90 degrees counter-clockwise.
///
/// This is the velocity contribution of a unit angular velocity at the lever arm `v`.
#[inline]
pub fn skew(v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-v.y, v.x)
}

/// The cross product of the scalar (out-of-plane vector) `s` with `v`.
#[inline]
pub fn cross_sv(s: Real, v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-s * v.y, s * v.x)
}
