use super::distance_joint::{anchor_axis, axis_inv_mass};
use super::joint::{apply_impulse_pair, relative_velocity};
use crate::dynamics::{RigidBody, SolverConfig};
use crate::math::{Point, Real, Vector};
use crate::utils::inv;

/// A joint limiting the distance between two anchors to a maximum length.
///
/// The rope is slack, and applies no impulse at all, while the anchors are closer than
/// `max_length`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RopeJoint {
    /// The anchor on the first body, in its local frame.
    pub local_anchor1: Point<Real>,
    /// The anchor on the second body, in its local frame.
    pub local_anchor2: Point<Real>,
    /// The maximum distance between the two anchors.
    pub max_length: Real,
    r1: Vector<Real>,
    r2: Vector<Real>,
    axis: Vector<Real>,
    mass: Real,
    bias: Real,
    impulse: Real,
    taut: bool,
}

impl RopeJoint {
    /// Creates a rope of length `max_length` between the two anchors.
    pub fn new(local_anchor1: Point<Real>, local_anchor2: Point<Real>, max_length: Real) -> Self {
        Self {
            local_anchor1,
            local_anchor2,
            max_length,
            r1: Vector::zeros(),
            r2: Vector::zeros(),
            axis: Vector::zeros(),
            mass: 0.0,
            bias: 0.0,
            impulse: 0.0,
            taut: false,
        }
    }

    /// Sets the maximum distance between the two anchors.
    pub fn set_max_length(&mut self, max_length: Real) {
        self.max_length = max_length;
    }

    /// Was the rope taut during the last step?
    pub fn is_taut(&self) -> bool {
        self.taut
    }

    /// The impulse applied along the rope during the last step.
    ///
    /// This is zero or negative: a rope can only pull.
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
        let err = dist - self.max_length;
        self.taut = err > 0.0;

        if !self.taut {
            self.impulse = 0.0;
            return;
        }

        self.axis = axis;
        self.mass = inv(axis_inv_mass(b1, &self.r1, b2, &self.r2, &axis));
        self.bias = config.bias_factor(dt) * err;
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        if self.taut {
            let impulse = self.axis * self.impulse;
            apply_impulse_pair(b1, &self.r1, b2, &self.r2, &impulse);
        }
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        if !self.taut {
            return;
        }

        let cdot = self.axis.dot(&relative_velocity(b1, &self.r1, b2, &self.r2));
        let lambda = -self.mass * (cdot + self.bias);
        let new_impulse = (self.impulse + lambda).min(0.0);
        let lambda = new_impulse - self.impulse;
        self.impulse = new_impulse;
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &(self.axis * lambda));
    }
}
