use super::joint::apply_angular_impulse_pair;
use crate::dynamics::RigidBody;
use crate::math::Real;
use crate::utils::inv;

/// A joint driving the relative angular velocity of two bodies toward a target rate.
///
/// The torque applied is bounded by `max_torque`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MotorJoint {
    /// The target angular velocity of the second body relative to the first one.
    pub rate: Real,
    /// The maximum torque the motor can apply.
    pub max_torque: Real,
    mass: Real,
    max_impulse: Real,
    impulse: Real,
}

impl MotorJoint {
    /// Creates a motor with the given target rate and maximum torque.
    pub fn new(rate: Real, max_torque: Real) -> Self {
        Self {
            rate,
            max_torque,
            mass: 0.0,
            max_impulse: 0.0,
            impulse: 0.0,
        }
    }

    /// Sets the target angular velocity of the second body relative to the first one.
    pub fn set_rate(&mut self, rate: Real) {
        self.rate = rate;
    }

    /// Sets the maximum torque the motor can apply.
    pub fn set_max_torque(&mut self, max_torque: Real) {
        self.max_torque = max_torque;
    }

    /// The angular impulse applied during the last step.
    pub fn impulse(&self) -> Real {
        self.impulse
    }

    pub(crate) fn pre_solve(&mut self, dt: Real, b1: &RigidBody, b2: &RigidBody) {
        self.mass = inv(b1.inv_inertia + b2.inv_inertia);
        self.max_impulse = self.max_torque * dt;
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        apply_angular_impulse_pair(b1, b2, self.impulse);
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let cdot = b2.angvel - b1.angvel - self.rate;
        let lambda = -self.mass * cdot;
        let new_impulse = (self.impulse + lambda).clamp(-self.max_impulse, self.max_impulse);
        let lambda = new_impulse - self.impulse;
        self.impulse = new_impulse;
        apply_angular_impulse_pair(b1, b2, lambda);
    }
}
