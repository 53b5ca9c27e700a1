use super::joint::{apply_impulse_pair, relative_velocity};
use crate::dynamics::{RigidBody, SolverConfig};
use crate::math::{Point, Real, Vector};
use crate::utils::inv;

/// A joint keeping a fixed distance between two anchors.
///
/// The anchors are expressed in the local frames of their respective bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DistanceJoint {
    /// The anchor on the first body, in its local frame.
    pub local_anchor1: Point<Real>,
    /// The anchor on the second body, in its local frame.
    pub local_anchor2: Point<Real>,
    /// The distance maintained between the two anchors.
    pub length: Real,
    r1: Vector<Real>,
    r2: Vector<Real>,
    axis: Vector<Real>,
    mass: Real,
    bias: Real,
    impulse: Real,
}

impl DistanceJoint {
    /// Creates a joint keeping the two anchors at `length` from each other.
    pub fn new(local_anchor1: Point<Real>, local_anchor2: Point<Real>, length: Real) -> Self {
        Self {
            local_anchor1,
            local_anchor2,
            length,
            r1: Vector::zeros(),
            r2: Vector::zeros(),
            axis: Vector::zeros(),
            mass: 0.0,
            bias: 0.0,
            impulse: 0.0,
        }
    }

    /// Sets the distance maintained between the two anchors.
    pub fn set_length(&mut self, length: Real) {
        self.length = length;
    }

    /// The impulse applied along the anchor axis during the last step.
    pub fn impulse(&self) -> Real {
        self.impulse
    }

    pub(crate) fn pre_solve(
        &mut self,
        dt: Real,
        config: &SolverConfig,
        b1: &RigidBody,
        b2: &RigidBody,
    ) {
        self.r1 = b1.lever_arm(&self.local_anchor1);
        self.r2 = b2.lever_arm(&self.local_anchor2);

        let (axis, dist) = anchor_axis(b1, &self.r1, b2, &self.r2);
        self.axis = axis;
        self.mass = inv(axis_inv_mass(b1, &self.r1, b2, &self.r2, &axis));
        self.bias = config.bias_factor(dt) * (dist - self.length);
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let impulse = self.axis * self.impulse;
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &impulse);
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let cdot = self.axis.dot(&relative_velocity(b1, &self.r1, b2, &self.r2));
        let lambda = -self.mass * (cdot + self.bias);
        self.impulse += lambda;
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &(self.axis * lambda));
    }
}

/// The unit direction from the first anchor to the second, and the distance between them.
///
/// The direction is zero if both anchors coincide.
pub(crate) fn anchor_axis(
    b1: &RigidBody,
    r1: &Vector<Real>,
    b2: &RigidBody,
    r2: &Vector<Real>,
) -> (Vector<Real>, Real) {
    let d = (b2.com + r2) - (b1.com + r1);
    let dist = d.norm();

    if dist > crate::math::DEFAULT_EPSILON {
        (d / dist, dist)
    } else {
        (Vector::zeros(), dist)
    }
}

/// The inverse effective mass of a linear constraint along `axis` between two anchors.
pub(crate) fn axis_inv_mass(
    b1: &RigidBody,
    r1: &Vector<Real>,
    b2: &RigidBody,
    r2: &Vector<Real>,
    axis: &Vector<Real>,
) -> Real {
    let cr1 = r1.perp(axis);
    let cr2 = r2.perp(axis);
    b1.inv_mass + b2.inv_mass + b1.inv_inertia * cr1 * cr1 + b2.inv_inertia * cr2 * cr2
}
