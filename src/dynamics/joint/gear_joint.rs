use crate::dynamics::{RigidBody, SolverConfig};
use crate::math::Real;
use crate::utils::inv;

/// A joint linking the rotations of two bodies through a fixed ratio.
///
/// The joint maintains `ratio * angle2 - angle1 == phase`, where the angles are the
/// unwrapped rotation angles of the bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GearJoint {
    /// The angular offset between the two bodies.
    pub phase: Real,
    /// The gear ratio.
    pub ratio: Real,
    mass: Real,
    bias: Real,
    impulse: Real,
}

impl GearJoint {
    /// Creates a gear joint.
    pub fn new(phase: Real, ratio: Real) -> Self {
        Self {
            phase,
            ratio,
            mass: 0.0,
            bias: 0.0,
            impulse: 0.0,
        }
    }

    /// Sets the gear ratio.
    pub fn set_ratio(&mut self, ratio: Real) {
        self.ratio = ratio;
    }

    /// Sets the angular offset between the two bodies.
    pub fn set_phase(&mut self, phase: Real) {
        self.phase = phase;
    }

    /// The angular impulse applied during the last step.
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
        self.mass = inv(b1.inv_inertia + self.ratio * self.ratio * b2.inv_inertia);
        let err = self.ratio * b2.angle - b1.angle - self.phase;
        self.bias = config.bias_factor(dt) * err;
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        self.apply(b1, b2, self.impulse);
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let cdot = self.ratio * b2.angvel - b1.angvel;
        let lambda = -self.mass * (cdot + self.bias);
        self.impulse += lambda;
        self.apply(b1, b2, lambda);
    }

    fn apply(&self, b1: &mut RigidBody, b2: &mut RigidBody, impulse: Real) {
        b1.angvel -= b1.inv_inertia * impulse;
        b2.angvel += b2.inv_inertia * self.ratio * impulse;
    }
}
