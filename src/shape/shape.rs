use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Ball, ConvexPolygon, Segment, SupportMap};

/// Errors raised when building an invalid shape or collider.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three non-collinear vertices.
    #[error("a convex polygon needs at least 3 non-collinear vertices, got {0}")]
    NotEnoughVertices(usize),
    /// The polyline given to build a convex polygon is not convex.
    #[error("the given polyline is not convex")]
    NotConvex,
    /// A box needs strictly positive half-extents.
    #[error("invalid box half-extents ({0}, {1}): both must be strictly positive")]
    InvalidHalfExtents(Real, Real),
    /// The two endpoints of a segment are equal.
    #[error("the two endpoints of the segment are equal")]
    DegenerateSegment,
    /// A radius is negative, or zero for a ball.
    #[error("invalid radius {0}")]
    InvalidRadius(Real),
    /// A mass or density is zero, negative or not finite.
    #[error("the mass or density {0} must be strictly positive")]
    NonPositiveMass(Real),
}

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A convex polygon shape.
    ConvexPolygon,
    /// A segment shape.
    Segment,
}

/// The geometry of a collider.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A ball.
    Ball(Ball),
    /// A convex polygon.
    ConvexPolygon(ConvexPolygon),
    /// A possibly thick segment.
    Segment(Segment),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Ball(_) => ShapeType::Ball,
            Shape::ConvexPolygon(_) => ShapeType::ConvexPolygon,
            Shape::Segment(_) => ShapeType::Segment,
        }
    }

    /// The radius of the round border around the core exposed by this shape's support map.
    pub fn border_radius(&self) -> Real {
        match self {
            Shape::Ball(b) => b.radius,
            Shape::ConvexPolygon(_) => 0.0,
            Shape::Segment(s) => s.radius,
        }
    }

    /// The support map of the core of this shape.
    pub fn as_support_map(&self) -> &dyn SupportMap {
        match self {
            Shape::Ball(b) => b,
            Shape::ConvexPolygon(p) => p,
            Shape::Segment(s) => s,
        }
    }

    /// The geometric center of this shape, in local-space.
    pub fn local_center(&self) -> Point<Real> {
        match self {
            Shape::Ball(b) => b.center,
            Shape::ConvexPolygon(p) => p.centroid(),
            Shape::Segment(s) => s.center(),
        }
    }

    /// The area of this shape.
    pub fn area(&self) -> Real {
        match self {
            Shape::Ball(b) => b.area(),
            Shape::ConvexPolygon(p) => p.area(),
            Shape::Segment(s) => s.area(),
        }
    }

    /// Computes the AABB of this shape, in local-space.
    pub fn compute_local_aabb(&self) -> Aabb {
        match self {
            Shape::Ball(b) => b.local_aabb(),
            Shape::ConvexPolygon(p) => p.local_aabb(),
            Shape::Segment(s) => s.local_aabb(),
        }
    }

    /// Computes the AABB of this shape positioned at `pos`.
    pub fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self {
            Shape::Ball(b) => b.aabb(pos),
            Shape::ConvexPolygon(p) => p.aabb(pos),
            Shape::Segment(s) => s.aabb(pos),
        }
    }

    /// Computes the bounding sphere of this shape, in local-space.
    pub fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        match self {
            Shape::Ball(b) => b.local_bounding_sphere(),
            Shape::ConvexPolygon(p) => p.local_bounding_sphere(),
            Shape::Segment(s) => s.local_bounding_sphere(),
        }
    }

    /// Computes the mass properties of this shape given its total mass.
    pub fn mass_properties(&self, mass: Real) -> MassProperties {
        match self {
            Shape::Ball(b) => MassProperties::from_ball(mass, b),
            Shape::ConvexPolygon(p) => MassProperties::from_convex_polygon(mass, p),
            Shape::Segment(s) => MassProperties::from_segment(mass, s),
        }
    }

    /// Tests if the point `pt`, expressed in the same frame as `pos`, lies inside of this
    /// shape positioned at `pos`.
    pub fn contains_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> bool {
        match self {
            Shape::Ball(b) => b.contains_point(pos, pt),
            Shape::ConvexPolygon(p) => p.contains_point(pos, pt),
            Shape::Segment(s) => s.contains_point(pos, pt),
        }
    }

    /// The world-space support point of the core of this shape along `dir`.
    #[inline]
    pub fn support_point(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        self.as_support_map().support_point(pos, dir)
    }

    /// Gets a reference to the underlying ball, if this is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            Shape::Ball(b) => Some(b),
            _ => None,
        }
    }

    /// Gets a reference to the underlying convex polygon, if this is one.
    pub fn as_convex_polygon(&self) -> Option<&ConvexPolygon> {
        match self {
            Shape::ConvexPolygon(p) => Some(p),
            _ => None,
        }
    }

    /// Gets a reference to the underlying segment, if this is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Shape::Segment(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Ball> for Shape {
    fn from(b: Ball) -> Self {
        Shape::Ball(b)
    }
}

impl From<ConvexPolygon> for Shape {
    fn from(p: ConvexPolygon) -> Self {
        Shape::ConvexPolygon(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}
