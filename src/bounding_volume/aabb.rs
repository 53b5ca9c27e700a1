use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, Vector};
use crate::utils::IsometryOps;

/// An axis-aligned bounding box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The corner with the smallest coordinates.
    pub mins: Point<Real>,
    /// The corner with the largest coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a box from its two corners. `mins` must not exceed `maxs` on any axis.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a box from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest box enclosing all the given points.
    ///
    /// The result is inverted, with `mins > maxs`, if there is no point.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let inverted = Self::new(
            Point::from(Vector::repeat(Real::MAX)),
            Point::from(Vector::repeat(-Real::MAX)),
        );

        pts.into_iter().fold(inverted, |aabb, pt| {
            Aabb::new(aabb.mins.inf(pt), aabb.maxs.sup(pt))
        })
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The box enclosing `self` once moved by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let half_extents = m.absolute_transform_vector(&self.half_extents());
        Self::from_half_extents(m * self.center(), half_extents)
    }

    /// This box with its extents multiplied by `scale` around its center.
    #[inline]
    #[must_use]
    pub fn scaled_wrt_center(self, scale: Real) -> Self {
        Self::from_half_extents(self.center(), self.half_extents() * scale.abs())
    }

    /// This box grown by `margin` on every side.
    #[inline]
    #[must_use]
    pub fn loosened(&self, margin: Real) -> Self {
        debug_assert!(margin >= 0.0, "negative loosening margin");
        let margin = Vector::repeat(margin);
        Self::new(self.mins - margin, self.maxs + margin)
    }

    /// Is `point`, expressed in the frame of this box, inside of it? Points on the border are.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        na::partial_le(&self.mins, point) && na::partial_le(point, &self.maxs)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::bounding_volume::BoundingVolume;
    use crate::math::{Isometry, Point, Real, Vector};

    #[test]
    fn aabb_intersection_includes_touching() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Aabb::new(Point::new(1.0, 0.5), Point::new(2.0, 2.0));
        let c = Aabb::new(Point::new(1.1, 0.5), Point::new(2.0, 2.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.merged(&c).contains(&b));
        assert!(a.contains_local_point(&Point::new(1.0, 0.0)));
        assert!(!a.contains_local_point(&Point::new(1.0, -0.1)));
    }

    #[test]
    fn rotated_aabb_encloses_rotated_box() {
        let aabb = Aabb::from_half_extents(Point::origin(), Vector::new(1.0, 1.0));
        let pos = Isometry::new(Vector::new(3.0, 0.0), core::f64::consts::FRAC_PI_4 as Real);
        let transformed = aabb.transform_by(&pos);

        let h = (2.0 as Real).sqrt();
        assert_relative_eq!(transformed.mins, Point::new(3.0 - h, -h), epsilon = 1.0e-5);
        assert_relative_eq!(transformed.maxs, Point::new(3.0 + h, h), epsilon = 1.0e-5);
    }

    #[test]
    fn padding_keeps_the_center() {
        let aabb = Aabb::from_points(&[Point::new(1.0, 2.0), Point::new(3.0, 3.0)]);
        let padded = aabb.scaled_wrt_center(3.0);

        assert_eq!(padded.center(), aabb.center());
        assert_relative_eq!(padded.half_extents(), Vector::new(3.0, 1.5));
        assert!(padded.contains(&aabb));
    }
}
