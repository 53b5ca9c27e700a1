use super::joint::{apply_impulse_pair, relative_velocity};
use crate::dynamics::{RigidBody, SolverConfig};
use crate::math::{Matrix, Point, Real, Vector};

/// A joint holding an anchor of each body at the same location.
///
/// The bodies are free to rotate relative to each other around the shared anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointJoint {
    /// The anchor on the first body, in its local frame.
    pub local_anchor1: Point<Real>,
    /// The anchor on the second body, in its local frame.
    pub local_anchor2: Point<Real>,
    r1: Vector<Real>,
    r2: Vector<Real>,
    mass: Matrix<Real>,
    bias: Vector<Real>,
    impulse: Vector<Real>,
}

impl PointJoint {
    /// Creates a joint pinning the two anchors together.
    pub fn new(local_anchor1: Point<Real>, local_anchor2: Point<Real>) -> Self {
        Self {
            local_anchor1,
            local_anchor2,
            r1: Vector::zeros(),
            r2: Vector::zeros(),
            mass: Matrix::zeros(),
            bias: Vector::zeros(),
            impulse: Vector::zeros(),
        }
    }

    /// The impulse applied at the anchors during the last step.
    pub fn impulse(&self) -> Vector<Real> {
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
        self.mass = point_inv_mass(b1, &self.r1, b2, &self.r2)
            .try_inverse()
            .unwrap_or_else(Matrix::zeros);

        let err = (b2.com + self.r2) - (b1.com + self.r1);
        self.bias = err * config.bias_factor(dt);
    }

    pub(crate) fn warm_start(&self, b1: &mut RigidBody, b2: &mut RigidBody) {
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &self.impulse);
    }

    pub(crate) fn solve(&mut self, b1: &mut RigidBody, b2: &mut RigidBody) {
        let cdot = relative_velocity(b1, &self.r1, b2, &self.r2);
        let lambda = -(self.mass * (cdot + self.bias));
        self.impulse += lambda;
        apply_impulse_pair(b1, &self.r1, b2, &self.r2, &lambda);
    }
}

/// The 2x2 inverse effective mass of a point-to-point constraint.
pub(crate) fn point_inv_mass(
    b1: &RigidBody,
    r1: &Vector<Real>,
    b2: &RigidBody,
    r2: &Vector<Real>,
) -> Matrix<Real> {
    let (m1, m2, i1, i2) = (b1.inv_mass, b2.inv_mass, b1.inv_inertia, b2.inv_inertia);
    let m11 = m1 + m2 + i1 * r1.y * r1.y + i2 * r2.y * r2.y;
    let m12 = -i1 * r1.x * r1.y - i2 * r2.x * r2.y;
    let m22 = m1 + m2 + i1 * r1.x * r1.x + i2 * r2.x * r2.x;
    Matrix::new(m11, m12, m12, m22)
}
