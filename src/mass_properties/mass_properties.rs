use crate::math::{Isometry, Point, Real};
use crate::utils;
use arrayvec::ArrayVec;
use num::Zero;
use std::iter::Sum;
use std::ops::Add;

/// The mass, angular inertia and center of mass of a collider or rigid body.
///
/// Mass properties of several parts of a body combine with `+` or [`Iterator::sum`], which
/// applies the parallel axis theorem.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// The center of mass, in the local frame of the body.
    pub local_com: Point<Real>,
    /// The mass. Zero means infinite.
    pub mass: Real,
    /// The angular inertia about `local_com`. Zero means infinite.
    pub inertia: Real,
}

impl MassProperties {
    /// Creates mass properties from their components.
    pub fn new(local_com: Point<Real>, mass: Real, inertia: Real) -> Self {
        Self {
            local_com,
            mass,
            inertia,
        }
    }

    /// The inverse mass, or zero for an infinite mass.
    #[inline]
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The inverse angular inertia, or zero for an infinite inertia.
    #[inline]
    pub fn inv_inertia(&self) -> Real {
        utils::inv(self.inertia)
    }

    /// These mass properties, for a part moved by `m` inside of its body.
    ///
    /// The inertia is about the center of mass, so it does not change.
    #[must_use]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.local_com, self.mass, self.inertia)
    }

    /// Replaces the mass, scaling the inertia by the same factor if `scale_inertia` is set.
    pub fn set_mass(&mut self, mass: Real, scale_inertia: bool) {
        if scale_inertia {
            self.inertia *= mass * utils::inv(self.mass);
        }

        self.mass = mass;
    }

    fn combine(parts: &[Self]) -> Self {
        match parts {
            [] => Self::zero(),
            [single] => *single,
            _ => {
                let mass: Real = parts.iter().map(|p| p.mass).sum();
                let local_com = if mass > 0.0 {
                    let weighted = parts
                        .iter()
                        .fold(Point::origin(), |acc, p| acc + p.local_com.coords * p.mass);
                    weighted / mass
                } else {
                    let sum = parts
                        .iter()
                        .fold(Point::origin(), |acc, p| acc + p.local_com.coords);
                    sum / parts.len() as Real
                };
                let inertia = parts
                    .iter()
                    .map(|p| p.inertia + p.mass * na::distance_squared(&p.local_com, &local_com))
                    .sum();

                Self::new(local_com, mass, inertia)
            }
        }
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self::new(Point::origin(), 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add<MassProperties> for MassProperties {
    type Output = Self;

    fn add(self, other: MassProperties) -> Self {
        let parts: ArrayVec<Self, 2> = [self, other]
            .into_iter()
            .filter(|p| !p.is_zero())
            .collect();
        Self::combine(&parts)
    }
}

impl Sum<MassProperties> for MassProperties {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let parts: Vec<Self> = iter.filter(|p| !p.is_zero()).collect();
        Self::combine(&parts)
    }
}

impl approx::AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
            && self.inertia.abs_diff_eq(&other.inertia, epsilon)
    }
}

impl approx::RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self
                .inertia
                .relative_eq(&other.inertia, epsilon, max_relative)
    }
}
