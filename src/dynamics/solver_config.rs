use crate::math::Real;

/// Parameters of the sequential impulse solver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// The fraction of the position error fed back as a velocity bias at each step.
    ///
    /// Defaults to `0.2`.
    pub baumgarte_coefficient: Real,
    /// The penetration depth tolerated between two colliders before any positional
    /// correction is applied.
    ///
    /// Defaults to `0.01`.
    pub penetration_slop: Real,
    /// The number of velocity iterations run at each step.
    ///
    /// Defaults to `10`.
    pub velocity_iterations: usize,
}

impl SolverConfig {
    /// The velocity bias factor `baumgarte_coefficient / dt`.
    #[inline]
    pub fn bias_factor(&self, dt: Real) -> Real {
        if dt > 0.0 {
            self.baumgarte_coefficient / dt
        } else {
            0.0
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            baumgarte_coefficient: 0.2,
            penetration_slop: 0.01,
            velocity_iterations: 10,
        }
    }
}
