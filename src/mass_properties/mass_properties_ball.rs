use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::Ball;

impl MassProperties {
    /// Computes the mass properties of a solid disc of total mass `mass`.
    ///
    /// The inertia about the disc center is `mass * radius² / 2`.
    pub fn from_ball(mass: Real, ball: &Ball) -> Self {
        let inertia = mass * ball.radius * ball.radius / 2.0;
        Self::new(ball.center, mass, inertia)
    }
}
