use super::joint::apply_angular_impulse_pair;
use super::SoftCoefficients;
use crate::dynamics::RigidBody;
use crate::math::Real;
use crate::utils::inv;

/// A damped spring acting on the relative angle of two bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AngularSpringJoint {
    /// The angle of the second body relative to the first one at rest.
    pub rest_angle: Real,
    /// The natural frequency of the spring, in Hertz.
    pub frequency: Real,
    /// The damping ratio of the spring.
    pub damping_ratio: Real,
    mass: Real,
    soft: SoftCoefficients,
    bias: Real,
    impulse: Real,
}

impl AngularSpringJoint {
    /// Creates an angular spring.
    pub fn new(rest_angle: Real, frequency: Real, damping_ratio: Real) -> Self {
        Self {
            rest_angle,
            frequency,
            damping_ratio,
            mass: 0.0,
            soft: SoftCoefficients::default(),
            bias: 0.0,
            impulse: 0.0,
        }
    }

    /// Sets the relative angle at rest.
    pub fn set_rest_angle(&mut self, rest_angle: Real) {
        self.rest_angle = rest_angle;
    }

    /// Sets the natural frequency of the spring, in Hertz.
    pub fn set_frequency(&mut self, frequency: Real) {
        self.frequency = frequency;
    }

    /// Sets the damping ratio of the spring.
    pub fn set_damping_ratio(&mut self, damping_ratio: Real) {
        self.damping_ratio = damping_ratio;
    }

    /// The angular impulse applied during the last step.
    pub fn impulse(&self) -> Real {
        self.impulse
    }

    pub(crate) fn pre_solve(&mut self, dt: Real, b1: &RigidBody, b2: &RigidBody) {
        let inv_k = b1.inv_inertia + b2.inv_inertia;
        self.soft = SoftCoefficients::new(inv(inv_k), self.frequency, self.damping_ratio, dt);
        self.mass = self.soft.soft_mass(inv_k);
        self.bias = self.soft.bias(b2.angle - b1.angle - self.rest_angle);
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        apply_angular_impulse_pair(b1, b2, self.impulse);
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let cdot = b2.angvel - b1.angvel;
        let lambda = -self.mass * (cdot + self.bias + self.soft.gamma * self.impulse);
        self.impulse += lambda;
        apply_angular_impulse_pair(b1, b2, lambda);
    }
}
