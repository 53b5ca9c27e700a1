use super::distance_joint::{anchor_axis, axis_inv_mass};
use super::joint::{apply_impulse_pair, relative_velocity};
use super::SoftCoefficients;
use crate::dynamics::{RigidBody, SolverConfig};
use crate::math::{Point, Real, Vector};
use crate::utils::inv;

/// A damped spring between two anchors.
///
/// The spring is parametrized by its natural frequency and damping ratio rather than by
/// a stiffness, so that it behaves the same whatever the masses of the bodies. A frequency
/// of zero makes the spring as rigid as a [`DistanceJoint`](crate::dynamics::DistanceJoint).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SpringJoint {
    /// The anchor on the first body, in its local frame.
    pub local_anchor1: Point<Real>,
    /// The anchor on the second body, in its local frame.
    pub local_anchor2: Point<Real>,
    /// The length of the spring at rest.
    pub rest_length: Real,
    /// The natural frequency of the spring, in Hertz.
    pub frequency: Real,
    /// The damping ratio of the spring. `1.0` is critical damping.
    pub damping_ratio: Real,
    r1: Vector<Real>,
    r2: Vector<Real>,
    axis: Vector<Real>,
    mass: Real,
    soft: SoftCoefficients,
    bias: Real,
    impulse: Real,
}

impl SpringJoint {
    /// Creates a spring between the two anchors.
    pub fn new(
        local_anchor1: Point<Real>,
        local_anchor2: Point<Real>,
        rest_length: Real,
        frequency: Real,
        damping_ratio: Real,
    ) -> Self {
        Self {
            local_anchor1,
            local_anchor2,
            rest_length,
            frequency,
            damping_ratio,
            r1: Vector::zeros(),
            r2: Vector::zeros(),
            axis: Vector::zeros(),
            mass: 0.0,
            soft: SoftCoefficients::default(),
            bias: 0.0,
            impulse: 0.0,
        }
    }

    /// Sets the length of the spring at rest.
    pub fn set_rest_length(&mut self, rest_length: Real) {
        self.rest_length = rest_length;
    }

    /// Sets the natural frequency of the spring, in Hertz.
    pub fn set_frequency(&mut self, frequency: Real) {
        self.frequency = frequency;
    }

    /// Sets the damping ratio of the spring.
    pub fn set_damping_ratio(&mut self, damping_ratio: Real) {
        self.damping_ratio = damping_ratio;
    }

    /// The impulse applied by the spring during the last step.
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
        let inv_k = axis_inv_mass(b1, &self.r1, b2, &self.r2, &axis);
        let err = dist - self.rest_length;
        self.axis = axis;

        if self.frequency > 0.0 {
            self.soft = SoftCoefficients::new(inv(inv_k), self.frequency, self.damping_ratio, dt);
            self.mass = self.soft.soft_mass(inv_k);
            self.bias = self.soft.bias(err);
        } else {
            self.soft = SoftCoefficients::default();
            self.mass = inv(inv_k);
            self.bias = config.bias_factor(dt) * err;
        }
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let impulse = self.axis * self.impulse;
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &impulse);
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let cdot = self.axis.dot(&relative_velocity(b1, &self.r1, b2, &self.r2));
        let lambda = -self.mass * (cdot + self.bias + self.soft.gamma * self.impulse);
        self.impulse += lambda;
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &(self.axis * lambda));
    }
}
