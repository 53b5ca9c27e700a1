use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::{Ball, ConvexPolygon, Segment};

impl Ball {
    /// The bounding box of this ball positioned at `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        Aabb::from_half_extents(pos * self.center, Vector::repeat(self.radius))
    }

    /// The bounding box of this ball in its local frame.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }
}

impl ConvexPolygon {
    /// The bounding box of this polygon positioned at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let world_points: Vec<_> = self.points().iter().map(|pt| pos * pt).collect();
        Aabb::from_points(&world_points)
    }

    /// The bounding box of this polygon in its local frame.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.points())
    }
}

impl Segment {
    /// The bounding box of this segment, round border included, positioned at `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        Aabb::from_points(&[pos * self.a, pos * self.b]).loosened(self.radius)
    }

    /// The bounding box of this segment, round border included, in its local frame.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&[self.a, self.b]).loosened(self.radius)
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::{ConvexPolygon, Segment};

    #[test]
    fn thick_segment_aabb() {
        let seg = Segment::with_radius(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5);
        let aabb = seg.aabb(&Isometry::translation(1.0, 1.0));

        assert_relative_eq!(aabb.mins, Point::new(0.5, 0.5));
        assert_relative_eq!(aabb.maxs, Point::new(3.5, 1.5));
    }

    #[test]
    fn polygon_aabb_follows_rotation() {
        let poly = ConvexPolygon::cuboid(2.0, 0.5).unwrap();
        let aabb = poly.aabb(&Isometry::new(Vector::zeros(), core::f32::consts::FRAC_PI_2 as _));

        assert_relative_eq!(aabb.half_extents(), Vector::new(0.5, 2.0), epsilon = 1.0e-5);
    }
}
