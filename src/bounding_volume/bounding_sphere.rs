use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real};
use crate::shape::{Ball, ConvexPolygon, Segment};

/// A bounding circle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a bounding circle.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// This circle moved by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Is `pt` inside of this circle or on its border?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let radii = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) <= radii * radii
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        na::distance(&self.center, &other.center) + other.radius <= self.radius
    }

    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let delta = other.center - self.center;
        let dist = delta.norm();

        if dist + other.radius <= self.radius {
            *self
        } else if dist + self.radius <= other.radius {
            *other
        } else {
            // Both circles touch the merged one at the far ends of the line joining centers.
            let radius = (dist + self.radius + other.radius) * 0.5;
            let center = self.center + delta * ((radius - self.radius) / dist);
            BoundingSphere::new(center, radius)
        }
    }
}

impl Ball {
    /// The bounding circle of this ball in its local frame.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius)
    }
}

impl ConvexPolygon {
    /// The bounding circle of this polygon in its local frame, centered on its centroid.
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        let center = self.centroid();
        let radius = self
            .points()
            .iter()
            .map(|pt| na::distance(pt, &center))
            .fold(0.0, Real::max);

        BoundingSphere::new(center, radius)
    }
}

impl Segment {
    /// The bounding circle of this segment, round border included, in its local frame.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.length() * 0.5 + self.radius)
    }
}

#[cfg(test)]
mod test {
    use super::BoundingSphere;
    use crate::bounding_volume::BoundingVolume;
    use crate::math::Point;

    #[test]
    fn merged_spheres_enclose_both() {
        let a = BoundingSphere::new(Point::new(0.0, 0.0), 1.0);
        let b = BoundingSphere::new(Point::new(4.0, 0.0), 0.5);
        let m = a.merged(&b);

        assert_relative_eq!(m.radius, 2.75);
        assert_relative_eq!(m.center, Point::new(1.75, 0.0));
        assert!(m.intersects(&b));
        assert_eq!(a.merged(&BoundingSphere::new(Point::new(0.1, 0.0), 0.2)), a);
    }
}
