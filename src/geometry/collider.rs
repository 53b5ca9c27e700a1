use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::data::Index;
use crate::dynamics::RigidBodyHandle;
use crate::geometry::CollisionFilter;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Ball, ConvexPolygon, Segment, Shape, ShapeError};

/// The unique identifier of a collider inserted into a [`World`](crate::pipeline::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct ColliderHandle(pub(crate) Index);

impl ColliderHandle {
    /// Converts this handle into its (index, generation) components.
    pub fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }

    /// Reconstructs a handle from its (index, generation) components.
    pub fn from_raw_parts(id: u32, generation: u32) -> Self {
        Self(Index::from_raw_parts(id, generation))
    }

    /// An always-invalid collider handle.
    pub fn invalid() -> Self {
        Self(Index::invalid())
    }
}

/// The surface properties of a collider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// The friction coefficient. Contacts use the geometric mean of both colliders' friction.
    pub friction: Real,
    /// The restitution coefficient. Contacts use the maximum of both colliders' restitution.
    pub restitution: Real,
}

impl Material {
    /// Creates a new material.
    pub fn new(friction: Real, restitution: Real) -> Self {
        Self {
            friction,
            restitution,
        }
    }

    /// The friction and restitution of a contact between two materials.
    #[inline]
    pub fn combine(&self, other: &Self) -> (Real, Real) {
        (
            (self.friction * other.friction).sqrt(),
            self.restitution.max(other.restitution),
        )
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(0.7, 0.0)
    }
}

/// A geometric shape attached to a rigid body.
///
/// A collider gives its body its mass, and exposes the material and collision filter
/// used by the contacts it takes part in.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Collider {
    pub(crate) parent: Option<RigidBodyHandle>,
    pub(crate) shape: Shape,
    pub(crate) position_wrt_parent: Isometry<Real>,
    pub(crate) position: Isometry<Real>,
    pub(crate) mass: Real,
    pub(crate) material: Material,
    pub(crate) filter: CollisionFilter,
    pub(crate) local_aabb: Aabb,
    pub(crate) aabb: Aabb,
}

impl Collider {
    /// The rigid body this collider is attached to.
    ///
    /// This is `None` until the collider is inserted into a world.
    #[inline]
    pub fn parent(&self) -> Option<RigidBodyHandle> {
        self.parent
    }

    /// The geometric shape of this collider.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The world-space pose of this collider, as of the last update of its body.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// The pose of this collider relative to the local frame of its body.
    #[inline]
    pub fn position_wrt_parent(&self) -> &Isometry<Real> {
        &self.position_wrt_parent
    }

    /// The mass of this collider.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The mass properties of this collider, expressed in the local frame of its body.
    pub fn mass_properties(&self) -> MassProperties {
        self.shape
            .mass_properties(self.mass)
            .transform_by(&self.position_wrt_parent)
    }

    /// The material of this collider.
    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The friction coefficient of this collider.
    #[inline]
    pub fn friction(&self) -> Real {
        self.material.friction
    }

    /// Sets the friction coefficient of this collider.
    #[inline]
    pub fn set_friction(&mut self, friction: Real) {
        self.material.friction = friction;
    }

    /// The restitution coefficient of this collider.
    #[inline]
    pub fn restitution(&self) -> Real {
        self.material.restitution
    }

    /// Sets the restitution coefficient of this collider.
    #[inline]
    pub fn set_restitution(&mut self, restitution: Real) {
        self.material.restitution = restitution;
    }

    /// The collision filter of this collider.
    #[inline]
    pub fn filter(&self) -> &CollisionFilter {
        &self.filter
    }

    /// Sets the collision filter of this collider.
    ///
    /// Existing contacts that no longer pass the filter are removed at the next step.
    #[inline]
    pub fn set_filter(&mut self, filter: CollisionFilter) {
        self.filter = filter;
    }

    /// The world-space AABB of this collider, as of the last update of its body.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The AABB of this collider in its own frame.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The world-space bounding sphere of this collider.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.shape
            .compute_local_bounding_sphere()
            .transform_by(&self.position)
    }

    /// The world-space AABB of the local AABB scaled by `scale` around its center.
    pub fn padded_aabb(&self, scale: Real) -> Aabb {
        self.local_aabb
            .scaled_wrt_center(scale)
            .transform_by(&self.position)
    }

    /// Does this collider contain the world-space point `pt`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.shape.contains_point(&self.position, pt)
    }

    /// Does this collider contain the world-space point `pt` when its body is at `parent_pos`?
    ///
    /// Unlike [`Collider::contains_point`], this does not rely on the pose cached at the
    /// last step.
    pub fn contains_point_with_parent_pose(
        &self,
        parent_pos: &Isometry<Real>,
        pt: &Point<Real>,
    ) -> bool {
        let pos = parent_pos * self.position_wrt_parent;
        self.shape
            .compute_local_bounding_sphere()
            .transform_by(&pos)
            .contains_local_point(pt)
            && self.shape.contains_point(&pos, pt)
    }

    pub(crate) fn update_position(&mut self, parent_pos: &Isometry<Real>) {
        self.position = parent_pos * self.position_wrt_parent;
        self.aabb = self.shape.compute_aabb(&self.position);
    }
}

#[derive(Clone, Debug, PartialEq)]
enum MassSpec {
    Mass(Real),
    Density(Real),
}

/// A builder for colliders.
///
/// Shape validation is deferred to [`ColliderBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
#[must_use = "Builder functions return the updated builder"]
pub struct ColliderBuilder {
    shape: Result<Shape, ShapeError>,
    mass: MassSpec,
    /// The pose of the collider relative to its body.
    pub position: Isometry<Real>,
    /// The material of the collider. Defaults to a friction of `0.7` and no restitution.
    pub material: Material,
    /// The collision filter of the collider.
    pub filter: CollisionFilter,
}

impl ColliderBuilder {
    /// Initializes a builder for a collider with the given shape.
    pub fn new(shape: Shape) -> Self {
        Self::from_result(Ok(shape))
    }

    fn from_result(shape: Result<Shape, ShapeError>) -> Self {
        Self {
            shape,
            mass: MassSpec::Mass(1.0),
            position: Isometry::identity(),
            material: Material::default(),
            filter: CollisionFilter::default(),
        }
    }

    /// Initializes a builder for a ball collider centered on its body's local origin.
    pub fn ball(radius: Real) -> Self {
        let shape = if radius > 0.0 && radius.is_finite() {
            Ok(Shape::Ball(Ball::new(radius)))
        } else {
            Err(ShapeError::InvalidRadius(radius))
        };
        Self::from_result(shape)
    }

    /// Initializes a builder for a box collider with the given half-extents.
    pub fn cuboid(hx: Real, hy: Real) -> Self {
        Self::from_result(ConvexPolygon::cuboid(hx, hy).map(Shape::ConvexPolygon))
    }

    /// Initializes a builder for a convex polygon collider from its counter-clockwise
    /// vertices.
    pub fn convex_polygon(points: Vec<Point<Real>>) -> Self {
        Self::from_result(ConvexPolygon::from_convex_polyline(points).map(Shape::ConvexPolygon))
    }

    /// Initializes a builder for a collider shaped as the convex hull of `points`.
    pub fn convex_hull(points: &[Point<Real>]) -> Self {
        Self::from_result(ConvexPolygon::from_convex_hull(points).map(Shape::ConvexPolygon))
    }

    /// Initializes a builder for a thin segment collider.
    pub fn segment(a: Point<Real>, b: Point<Real>) -> Self {
        Self::thick_segment(a, b, 0.0)
    }

    /// Initializes a builder for a segment collider with a round border of `radius`.
    pub fn thick_segment(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let shape = if a == b {
            Err(ShapeError::DegenerateSegment)
        } else if !(radius >= 0.0 && radius.is_finite()) {
            Err(ShapeError::InvalidRadius(radius))
        } else {
            Ok(Shape::Segment(Segment::with_radius(a, b, radius)))
        };
        Self::from_result(shape)
    }

    /// Sets the mass of the collider. Defaults to `1.0`.
    pub fn mass(mut self, mass: Real) -> Self {
        self.mass = MassSpec::Mass(mass);
        self
    }

    /// Sets the mass of the collider from its density and the area of its shape.
    pub fn density(mut self, density: Real) -> Self {
        self.mass = MassSpec::Density(density);
        self
    }

    /// Sets the pose of the collider relative to its body.
    pub fn position(mut self, position: Isometry<Real>) -> Self {
        self.position = position;
        self
    }

    /// Sets the translation of the collider relative to its body.
    pub fn translation(mut self, x: Real, y: Real) -> Self {
        self.position.translation.vector = Vector::new(x, y);
        self
    }

    /// Sets the friction coefficient of the collider.
    pub fn friction(mut self, friction: Real) -> Self {
        self.material.friction = friction;
        self
    }

    /// Sets the restitution coefficient of the collider.
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.material.restitution = restitution;
        self
    }

    /// Sets the collision filter of the collider.
    pub fn filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Builds the collider.
    ///
    /// Fails if the shape is invalid, or if the mass or density is not strictly positive.
    pub fn build(&self) -> Result<Collider, ShapeError> {
        let shape = self.shape.clone()?;
        let mass = match self.mass {
            MassSpec::Mass(mass) => {
                check_positive(mass)?;
                mass
            }
            MassSpec::Density(density) => {
                check_positive(density)?;
                density * shape.area()
            }
        };
        let local_aabb = shape.compute_local_aabb();
        let aabb = shape.compute_aabb(&self.position);

        Ok(Collider {
            parent: None,
            shape,
            position_wrt_parent: self.position,
            position: self.position,
            mass,
            material: self.material,
            filter: self.filter,
            local_aabb,
            aabb,
        })
    }
}

fn check_positive(value: Real) -> Result<(), ShapeError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveMass(value))
    }
}
