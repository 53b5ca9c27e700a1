use crate::math::Real;
use crate::utils::inv;
use na::RealField;

/// The coefficients turning a rigid constraint into a damped spring.
///
/// For a constraint with effective mass `m`, a spring of natural frequency `f` (in Hz) and
/// damping ratio `zeta` has a stiffness `k = m * omega^2` and a damping `c = 2 * m * zeta *
/// omega` with `omega = 2 * pi * f`. Integrated implicitly over a timestep `h`, this gives:
///
/// - `gamma = 1 / (h * (c + h * k))`, added to the inverse effective mass,
/// - `bias = C * h * k * gamma`, added to the velocity error for a position error `C`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct SoftCoefficients {
    pub gamma: Real,
    pub bias_rate: Real,
}

impl SoftCoefficients {
    pub fn new(mass: Real, frequency: Real, damping_ratio: Real, dt: Real) -> Self {
        let omega = 2.0 * Real::pi() * frequency;
        let k = mass * omega * omega;
        let c = 2.0 * mass * damping_ratio * omega;
        let gamma = inv(dt * (c + dt * k));

        Self {
            gamma,
            bias_rate: dt * k * gamma,
        }
    }

    /// The velocity bias for the position error `c`.
    #[inline]
    pub fn bias(&self, c: Real) -> Real {
        c * self.bias_rate
    }

    /// The softened effective mass of a constraint with inverse effective mass `inv_k`.
    #[inline]
    pub fn soft_mass(&self, inv_k: Real) -> Real {
        inv(inv_k + self.gamma)
    }
}

#[cfg(test)]
mod test {
    use super::SoftCoefficients;
    use crate::math::Real;
    use na::RealField;

    #[test]
    fn soft_coefficients_follow_implicit_spring() {
        let (m, f, zeta, h): (Real, Real, Real, Real) = (2.0, 1.0, 0.5, 0.1);
        let soft = SoftCoefficients::new(m, f, zeta, h);
        let omega = 2.0 * Real::pi();
        let k = m * omega * omega;
        let c = 2.0 * m * zeta * omega;

        assert_relative_eq!(soft.gamma, 1.0 / (h * (c + h * k)), epsilon = 1.0e-5);
        assert_relative_eq!(soft.bias(0.3), 0.3 * h * k * soft.gamma, epsilon = 1.0e-5);
        assert_relative_eq!(soft.soft_mass(0.5), 1.0 / (0.5 + soft.gamma), epsilon = 1.0e-5);
    }

    #[test]
    fn static_constraint_is_not_softened() {
        let soft = SoftCoefficients::new(0.0, 5.0, 0.7, 1.0 / 60.0);
        assert_eq!(soft, SoftCoefficients::default());
    }
}
