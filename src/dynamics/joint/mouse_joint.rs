use super::SoftCoefficients;
use crate::dynamics::RigidBody;
use crate::math::{Matrix, Point, Real, Vector};
use crate::utils::{cross_sv, inv};

/// A soft single-body constraint pulling an anchor of a body toward a target point.
///
/// This is used to drag bodies around with a pointer. The force exerted is bounded by
/// `max_force`, so that dragged bodies cannot push through the static geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MouseJoint {
    /// The anchor on the dragged body, in its local frame.
    pub local_anchor: Point<Real>,
    /// The world-space point the anchor is pulled toward.
    pub target: Point<Real>,
    /// The maximum force applied to the body.
    pub max_force: Real,
    /// The natural frequency of the constraint, in Hertz.
    pub frequency: Real,
    /// The damping ratio of the constraint.
    pub damping_ratio: Real,
    r: Vector<Real>,
    mass: Matrix<Real>,
    gamma: Real,
    bias: Vector<Real>,
    max_impulse: Real,
    impulse: Vector<Real>,
}

impl MouseJoint {
    /// Creates a mouse joint pulling `local_anchor` toward `target`.
    ///
    /// The joint uses a frequency of 5Hz and a damping ratio of 0.7.
    pub fn new(local_anchor: Point<Real>, target: Point<Real>, max_force: Real) -> Self {
        Self {
            local_anchor,
            target,
            max_force,
            frequency: 5.0,
            damping_ratio: 0.7,
            r: Vector::zeros(),
            mass: Matrix::zeros(),
            gamma: 0.0,
            bias: Vector::zeros(),
            max_impulse: 0.0,
            impulse: Vector::zeros(),
        }
    }

    /// Sets the world-space point the anchor is pulled toward.
    pub fn set_target(&mut self, target: Point<Real>) {
        self.target = target;
    }

    /// Sets the maximum force applied to the body.
    pub fn set_max_force(&mut self, max_force: Real) {
        self.max_force = max_force;
    }

    /// Sets the natural frequency of the constraint, in Hertz.
    pub fn set_frequency(&mut self, frequency: Real) {
        self.frequency = frequency;
    }

    /// Sets the damping ratio of the constraint.
    pub fn set_damping_ratio(&mut self, damping_ratio: Real) {
        self.damping_ratio = damping_ratio;
    }

    /// The impulse applied at the anchor during the last step.
    pub fn impulse(&self) -> Vector<Real> {
        self.impulse
    }

    pub(crate) fn pre_solve(&mut self, dt: Real, body: &RigidBody) {
        // The spring uses the real mass of the body rather than the effective mass of
        // the constraint.
        let soft = SoftCoefficients::new(
            inv(body.inv_mass),
            self.frequency,
            self.damping_ratio,
            dt,
        );
        self.gamma = soft.gamma;

        self.r = body.lever_arm(&self.local_anchor);
        let (m, i, r) = (body.inv_mass, body.inv_inertia, &self.r);
        let inv_k = Matrix::new(
            m + i * r.y * r.y + self.gamma,
            -i * r.x * r.y,
            -i * r.x * r.y,
            m + i * r.x * r.x + self.gamma,
        );
        self.mass = inv_k.try_inverse().unwrap_or_else(Matrix::zeros);

        let err = (body.com + self.r) - self.target;
        self.bias = err * soft.bias_rate;
        self.max_impulse = self.max_force * dt;
    }

    pub(crate) fn warm_start(&self, body: &mut RigidBody) {
        body.apply_impulse_at_lever(&self.impulse, &self.r);
    }

    pub(crate) fn solve(&mut self, body: &mut RigidBody) {
        let cdot = body.linvel + cross_sv(body.angvel, &self.r);
        let lambda = -(self.mass * (cdot + self.bias + self.impulse * self.gamma));

        let old_impulse = self.impulse;
        self.impulse += lambda;
        let norm_squared = self.impulse.norm_squared();
        if norm_squared > self.max_impulse * self.max_impulse {
            self.impulse *= self.max_impulse / norm_squared.sqrt();
        }

        let lambda = self.impulse - old_impulse;
        body.apply_impulse_at_lever(&lambda, &self.r);
    }
}
