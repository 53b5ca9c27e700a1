use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use std::ops::Sub;

/// A point of a Minkowski difference `A - B`.
///
/// It also stores the two world-space support points it is the difference of.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinkowskiPoint {
    /// The point on the Minkowski difference: `orig1 - orig2`.
    pub point: Point<Real>,
    /// The support point of the first shape.
    pub orig1: Point<Real>,
    /// The support point of the second shape.
    pub orig2: Point<Real>,
}

impl MinkowskiPoint {
    /// Initializes a Minkowski point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        let point = Point::from(orig1 - orig2);
        MinkowskiPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// Computes the support point of the Minkowski difference `g1 - g2` along `dir`.
    ///
    /// This is the support point of `g1` along `dir` minus the support point of `g2`
    /// along `-dir`. All quantities are in world-space.
    pub fn from_shapes<G1, G2>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &Vector<Real>,
    ) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let sp1 = g1.support_point(pos1, dir);
        let sp2 = g2.support_point(pos2, &-*dir);

        MinkowskiPoint::new(sp1, sp2)
    }
}

impl Sub<MinkowskiPoint> for MinkowskiPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: MinkowskiPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
