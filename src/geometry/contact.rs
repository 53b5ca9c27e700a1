use crate::data::Index;
use crate::dynamics::joint::relative_velocity;
use crate::dynamics::{RigidBody, RigidBodyHandle, SolverConfig};
use crate::geometry::ColliderHandle;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::CollisionResult;
use crate::utils::{inv, skew};
use arrayvec::ArrayVec;

/// The unique identifier of a contact tracked by a [`ContactManager`](crate::geometry::ContactManager).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct ContactHandle(pub(crate) Index);

impl ContactHandle {
    /// Converts this handle into its (index, generation) components.
    pub fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }

    /// Reconstructs a handle from its (index, generation) components.
    pub fn from_raw_parts(id: u32, generation: u32) -> Self {
        Self(Index::from_raw_parts(id, generation))
    }
}

/// A contact point between two colliders, with its solver state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPoint {
    /// The world-space contact point on the first collider.
    pub point1: Point<Real>,
    /// The world-space contact point on the second collider.
    pub point2: Point<Real>,
    /// The signed distance between the two points along the contact normal.
    pub dist: Real,
    /// The lever arm from the center of mass of the first body to the contact.
    pub r1: Vector<Real>,
    /// The lever arm from the center of mass of the second body to the contact.
    pub r2: Vector<Real>,
    /// The impulse accumulated along the normal.
    pub normal_impulse: Real,
    /// The impulse accumulated along the tangent.
    pub tangent_impulse: Real,
    normal_mass: Real,
    tangent_mass: Real,
    velocity_bias: Real,
    position_bias: Real,
}

impl ContactPoint {
    fn new(point1: Point<Real>, point2: Point<Real>, dist: Real) -> Self {
        Self {
            point1,
            point2,
            dist,
            r1: Vector::zeros(),
            r2: Vector::zeros(),
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            normal_mass: 0.0,
            tangent_mass: 0.0,
            velocity_bias: 0.0,
            position_bias: 0.0,
        }
    }
}

/// A persistent contact between two colliders.
///
/// A contact lives as long as its two colliders keep colliding. The impulses it accumulates
/// are kept from one step to the next to warm-start the solver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    pub(crate) collider1: ColliderHandle,
    pub(crate) collider2: ColliderHandle,
    pub(crate) body1: RigidBodyHandle,
    pub(crate) body2: RigidBodyHandle,
    pub(crate) colliding: bool,
    /// The contact normal, pointing from the first collider toward the second one.
    pub normal: UnitVector<Real>,
    /// The friction coefficient of this contact.
    pub friction: Real,
    /// The restitution coefficient of this contact.
    pub restitution: Real,
    /// The contact points.
    pub points: ArrayVec<ContactPoint, 2>,
}

impl Contact {
    pub(crate) fn new(
        collider1: ColliderHandle,
        body1: RigidBodyHandle,
        collider2: ColliderHandle,
        body2: RigidBodyHandle,
    ) -> Self {
        Self {
            collider1,
            collider2,
            body1,
            body2,
            colliding: false,
            normal: Vector::x_axis(),
            friction: 0.0,
            restitution: 0.0,
            points: ArrayVec::new(),
        }
    }

    /// The first collider of this contact.
    #[inline]
    pub fn collider1(&self) -> ColliderHandle {
        self.collider1
    }

    /// The second collider of this contact.
    #[inline]
    pub fn collider2(&self) -> ColliderHandle {
        self.collider2
    }

    /// The body of the first collider.
    #[inline]
    pub fn body1(&self) -> RigidBodyHandle {
        self.body1
    }

    /// The body of the second collider.
    #[inline]
    pub fn body2(&self) -> RigidBodyHandle {
        self.body2
    }

    /// Did the narrow-phase find the colliders in contact at the last step?
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// The sum of the normal impulses applied at the contact points during the last step.
    pub fn total_normal_impulse(&self) -> Real {
        self.points.iter().map(|p| p.normal_impulse).sum()
    }

    /// Refreshes the geometry of this contact from a narrow-phase result.
    ///
    /// Accumulated impulses are kept, point by point, for the points still present.
    pub(crate) fn update(
        &mut self,
        result: &CollisionResult,
        com1: &Point<Real>,
        com2: &Point<Real>,
        friction: Real,
        restitution: Real,
    ) {
        self.colliding = result.colliding;
        self.normal = result.normal;
        self.friction = friction;
        self.restitution = restitution;

        let old_points = core::mem::take(&mut self.points);

        for (i, pt) in result.points.iter().enumerate() {
            let mut new_pt = ContactPoint::new(pt.point1, pt.point2, pt.dist);
            new_pt.r1 = pt.point1 - com1;
            new_pt.r2 = pt.point2 - com2;

            if let Some(old) = old_points.get(i) {
                new_pt.normal_impulse = old.normal_impulse;
                new_pt.tangent_impulse = old.tangent_impulse;
            }

            self.points.push(new_pt);
        }
    }

    pub(crate) fn pre_solve(
        &mut self,
        dt: Real,
        config: &SolverConfig,
        b1: &RigidBody,
        b2: &RigidBody,
    ) {
        let (m1, m2, i1, i2) = (b1.inv_mass, b2.inv_mass, b1.inv_inertia, b2.inv_inertia);
        let normal = self.normal.into_inner();
        let tangent = skew(&normal);
        let bias_factor = config.bias_factor(dt);

        for pt in &mut self.points {
            let rn1 = pt.r1.perp(&normal);
            let rn2 = pt.r2.perp(&normal);
            pt.normal_mass = inv(m1 + m2 + i1 * rn1 * rn1 + i2 * rn2 * rn2);

            let rt1 = pt.r1.perp(&tangent);
            let rt2 = pt.r2.perp(&tangent);
            pt.tangent_mass = inv(m1 + m2 + i1 * rt1 * rt1 + i2 * rt2 * rt2);

            let vn = relative_velocity(b1, &pt.r1, b2, &pt.r2).dot(&normal);
            pt.velocity_bias = if vn < 0.0 {
                -self.restitution * vn
            } else {
                0.0
            };
            pt.position_bias = bias_factor * (-pt.dist - config.penetration_slop).max(0.0);
        }
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let normal = self.normal.into_inner();
        let tangent = skew(&normal);

        for pt in &self.points {
            let impulse = normal * pt.normal_impulse + tangent * pt.tangent_impulse;
            b1.apply_impulse_at_lever(&-impulse, &pt.r1);
            b2.apply_impulse_at_lever(&impulse, &pt.r2);
        }
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let normal = self.normal.into_inner();
        let tangent = skew(&normal);

        for pt in &mut self.points {
            // Friction, bounded by the normal impulse of the previous iteration.
            let dv = relative_velocity(b1, &pt.r1, b2, &pt.r2);
            let max_friction = self.friction * pt.normal_impulse;
            let lambda_t = -pt.tangent_mass * dv.dot(&tangent);
            let new_tangent_impulse =
                (pt.tangent_impulse + lambda_t).clamp(-max_friction, max_friction);
            let lambda_t = new_tangent_impulse - pt.tangent_impulse;
            pt.tangent_impulse = new_tangent_impulse;

            let impulse = tangent * lambda_t;
            b1.apply_impulse_at_lever(&-impulse, &pt.r1);
            b2.apply_impulse_at_lever(&impulse, &pt.r2);

            // Non-penetration.
            let dv = relative_velocity(b1, &pt.r1, b2, &pt.r2);
            let vn = dv.dot(&normal);
            let lambda_n = pt.normal_mass * (pt.velocity_bias + pt.position_bias - vn);
            let new_normal_impulse = (pt.normal_impulse + lambda_n).max(0.0);
            let lambda_n = new_normal_impulse - pt.normal_impulse;
            pt.normal_impulse = new_normal_impulse;

            let impulse = normal * lambda_n;
            b1.apply_impulse_at_lever(&-impulse, &pt.r1);
            b2.apply_impulse_at_lever(&impulse, &pt.r2);
        }
    }
}
