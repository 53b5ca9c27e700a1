use super::SoftCoefficients;
use crate::dynamics::{RigidBody, SolverConfig};
use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils::{inv, skew};

/// A wheel attached to a chassis.
///
/// The wheel (second body) slides along the suspension axis of the chassis (first body),
/// held by an optional damped spring, and rotates freely or driven by an optional motor.
/// The three parts are solved as independent constraints:
///
/// - a rigid line constraint keeping the wheel anchor on the suspension axis,
/// - a soft spring along the suspension axis, disabled if its frequency is zero,
/// - a motor on the relative angular velocity, disabled if its maximum torque is zero.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WheelJoint {
    /// The anchor on the chassis, in its local frame.
    pub local_anchor1: Point<Real>,
    /// The anchor on the wheel, in its local frame.
    pub local_anchor2: Point<Real>,
    /// The suspension axis, in the local frame of the chassis.
    pub local_axis1: UnitVector<Real>,
    /// The natural frequency of the suspension spring, in Hertz.
    pub frequency: Real,
    /// The damping ratio of the suspension spring.
    pub damping_ratio: Real,
    /// The target angular velocity of the wheel relative to the chassis.
    pub motor_speed: Real,
    /// The maximum torque the motor can apply.
    pub max_motor_torque: Real,

    r1: Vector<Real>,
    r2: Vector<Real>,
    axis: Vector<Real>,
    perp: Vector<Real>,
    // Angular components of the Jacobians, for the axis (`s_x`) and its
    // perpendicular (`s_y`).
    s_x1: Real,
    s_x2: Real,
    s_y1: Real,
    s_y2: Real,

    line_mass: Real,
    line_bias: Real,
    line_impulse: Real,

    spring_mass: Real,
    spring_soft: SoftCoefficients,
    spring_bias: Real,
    spring_impulse: Real,

    motor_mass: Real,
    max_motor_impulse: Real,
    motor_impulse: Real,
}

impl WheelJoint {
    /// Creates a wheel joint without suspension spring nor motor.
    pub fn new(
        local_anchor1: Point<Real>,
        local_anchor2: Point<Real>,
        local_axis1: UnitVector<Real>,
    ) -> Self {
        Self {
            local_anchor1,
            local_anchor2,
            local_axis1,
            frequency: 0.0,
            damping_ratio: 0.0,
            motor_speed: 0.0,
            max_motor_torque: 0.0,
            r1: Vector::zeros(),
            r2: Vector::zeros(),
            axis: Vector::zeros(),
            perp: Vector::zeros(),
            s_x1: 0.0,
            s_x2: 0.0,
            s_y1: 0.0,
            s_y2: 0.0,
            line_mass: 0.0,
            line_bias: 0.0,
            line_impulse: 0.0,
            spring_mass: 0.0,
            spring_soft: SoftCoefficients::default(),
            spring_bias: 0.0,
            spring_impulse: 0.0,
            motor_mass: 0.0,
            max_motor_impulse: 0.0,
            motor_impulse: 0.0,
        }
    }

    /// Adds a suspension spring to this joint.
    #[must_use]
    pub fn with_spring(mut self, frequency: Real, damping_ratio: Real) -> Self {
        self.set_spring(frequency, damping_ratio);
        self
    }

    /// Adds a motor to this joint.
    #[must_use]
    pub fn with_motor(mut self, speed: Real, max_torque: Real) -> Self {
        self.set_motor(speed, max_torque);
        self
    }

    /// Sets the suspension spring parameters.
    pub fn set_spring(&mut self, frequency: Real, damping_ratio: Real) {
        self.frequency = frequency;
        self.damping_ratio = damping_ratio;
    }

    /// Sets the motor parameters.
    pub fn set_motor(&mut self, speed: Real, max_torque: Real) {
        self.motor_speed = speed;
        self.max_motor_torque = max_torque;
    }

    /// Sets the target angular velocity of the motor.
    pub fn set_motor_speed(&mut self, speed: Real) {
        self.motor_speed = speed;
    }

    /// The impulse of the line constraint during the last step.
    pub fn impulse(&self) -> Real {
        self.line_impulse
    }

    /// The impulse of the suspension spring during the last step.
    pub fn spring_impulse(&self) -> Real {
        self.spring_impulse
    }

    /// The angular impulse of the motor during the last step.
    pub fn motor_impulse(&self) -> Real {
        self.motor_impulse
    }

    pub(crate) fn pre_solve(
        &mut self,
        dt: Real,
        config: &SolverConfig,
        b1: &RigidBody,
        b2: &RigidBody,
    ) {
        let (m1, m2, i1, i2) = (b1.inv_mass, b2.inv_mass, b1.inv_inertia, b2.inv_inertia);

        self.r1 = b1.lever_arm(&self.local_anchor1);
        self.r2 = b2.lever_arm(&self.local_anchor2);
        let d = (b2.com + self.r2) - (b1.com + self.r1);
        let d_r1 = d + self.r1;

        self.axis = b1.position.rotation * self.local_axis1.into_inner();
        self.perp = skew(&self.axis);

        // Line constraint.
        self.s_y1 = d_r1.perp(&self.perp);
        self.s_y2 = self.r2.perp(&self.perp);
        self.line_mass =
            inv(m1 + m2 + i1 * self.s_y1 * self.s_y1 + i2 * self.s_y2 * self.s_y2);
        self.line_bias = config.bias_factor(dt) * d.dot(&self.perp);

        // Suspension spring.
        self.s_x1 = d_r1.perp(&self.axis);
        self.s_x2 = self.r2.perp(&self.axis);
        let spring_inv_k = m1 + m2 + i1 * self.s_x1 * self.s_x1 + i2 * self.s_x2 * self.s_x2;

        if self.frequency > 0.0 && spring_inv_k > 0.0 {
            self.spring_soft =
                SoftCoefficients::new(inv(spring_inv_k), self.frequency, self.damping_ratio, dt);
            self.spring_mass = self.spring_soft.soft_mass(spring_inv_k);
            self.spring_bias = self.spring_soft.bias(d.dot(&self.axis));
        } else {
            self.spring_soft = SoftCoefficients::default();
            self.spring_mass = 0.0;
            self.spring_bias = 0.0;
            self.spring_impulse = 0.0;
        }

        // Motor.
        self.max_motor_impulse = self.max_motor_torque * dt;
        if self.max_motor_torque > 0.0 {
            self.motor_mass = inv(i1 + i2);
        } else {
            self.motor_mass = 0.0;
            self.motor_impulse = 0.0;
        }
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let p = self.perp * self.line_impulse + self.axis * self.spring_impulse;
        let l1 = self.line_impulse * self.s_y1
            + self.spring_impulse * self.s_x1
            + self.motor_impulse;
        let l2 = self.line_impulse * self.s_y2
            + self.spring_impulse * self.s_x2
            + self.motor_impulse;

        b1.linvel -= p * b1.inv_mass;
        b1.angvel -= l1 * b1.inv_inertia;
        b2.linvel += p * b2.inv_mass;
        b2.angvel += l2 * b2.inv_inertia;
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        // Suspension spring.
        if self.spring_mass > 0.0 {
            let cdot = self.axis.dot(&(b2.linvel - b1.linvel)) + self.s_x2 * b2.angvel
                - self.s_x1 * b1.angvel;
            let lambda = -self.spring_mass
                * (cdot + self.spring_bias + self.spring_soft.gamma * self.spring_impulse);
            self.spring_impulse += lambda;
            Self::apply(b1, b2, &self.axis, self.s_x1, self.s_x2, lambda);
        }

        // Motor.
        if self.motor_mass > 0.0 {
            let cdot = b2.angvel - b1.angvel - self.motor_speed;
            let lambda = -self.motor_mass * cdot;
            let new_impulse = (self.motor_impulse + lambda)
                .clamp(-self.max_motor_impulse, self.max_motor_impulse);
            let lambda = new_impulse - self.motor_impulse;
            self.motor_impulse = new_impulse;
            b1.angvel -= b1.inv_inertia * lambda;
            b2.angvel += b2.inv_inertia * lambda;
        }

        // Line constraint.
        let cdot = self.perp.dot(&(b2.linvel - b1.linvel)) + self.s_y2 * b2.angvel
            - self.s_y1 * b1.angvel;
        let lambda = -self.line_mass * (cdot + self.line_bias);
        self.line_impulse += lambda;
        Self::apply(b1, b2, &self.perp, self.s_y1, self.s_y2, lambda);
    }

    fn apply(
        b1: &mut RigidBody,
        b2: &mut RigidBody,
        dir: &Vector<Real>,
        s1: Real,
        s2: Real,
        lambda: Real,
    ) {
        b1.linvel -= dir * (lambda * b1.inv_mass);
        b1.angvel -= b1.inv_inertia * s1 * lambda;
        b2.linvel += dir * (lambda * b2.inv_mass);
        b2.angvel += b2.inv_inertia * s2 * lambda;
    }
}
