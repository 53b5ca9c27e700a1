use crate::data::Index;
use crate::geometry::ColliderHandle;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::utils::cross_sv;
use num::Zero;
use smallvec::SmallVec;

/// The unique identifier of a rigid body inserted into a [`World`](crate::pipeline::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct RigidBodyHandle(pub(crate) Index);

impl RigidBodyHandle {
    /// Converts this handle into its (index, generation) components.
    pub fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }

    /// Reconstructs a handle from its (index, generation) components.
    pub fn from_raw_parts(id: u32, generation: u32) -> Self {
        Self(Index::from_raw_parts(id, generation))
    }

    /// An always-invalid rigid-body handle.
    pub fn invalid() -> Self {
        Self(Index::invalid())
    }
}

/// The kind of a rigid body, which determines how it reacts to forces and contacts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BodyKind {
    /// A body that never moves unless its position is modified explicitly.
    Static,
    /// A body moved by its velocity only, with an infinite mass.
    Kinematic,
    /// A body affected by gravity, forces, contacts and joints.
    Dynamic,
}

/// A rigid body.
///
/// The position of a rigid body is given by the pose of its local frame. Its center of mass
/// is located at `local_center_of_mass()` in that frame and is the point integrated by the
/// solver.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidBody {
    pub(crate) kind: BodyKind,
    pub(crate) position: Isometry<Real>,
    // Unwrapped rotation angle, tracked separately from `position.rotation`.
    pub(crate) angle: Real,
    pub(crate) com: Point<Real>,
    pub(crate) mass_properties: MassProperties,
    pub(crate) inv_mass: Real,
    pub(crate) inv_inertia: Real,
    pub(crate) linvel: Vector<Real>,
    pub(crate) angvel: Real,
    pub(crate) force: Vector<Real>,
    pub(crate) torque: Real,
    pub(crate) linear_damping: Real,
    pub(crate) angular_damping: Real,
    pub(crate) gravity_scale: Real,
    pub(crate) colliders: SmallVec<[ColliderHandle; 2]>,
}

impl RigidBody {
    /// The kind of this body.
    #[inline]
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Is this body dynamic?
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// Is this body static?
    #[inline]
    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    /// Is this body kinematic?
    #[inline]
    pub fn is_kinematic(&self) -> bool {
        self.kind == BodyKind::Kinematic
    }

    /// Changes the kind of this body and recomputes its inverse mass and inertia.
    ///
    /// Velocities are reset to zero when the body becomes static.
    pub fn set_kind(&mut self, kind: BodyKind) {
        self.kind = kind;

        if kind == BodyKind::Static {
            self.linvel = Vector::zeros();
            self.angvel = 0.0;
        }

        self.update_inverse_mass();
    }

    /// The pose of the local frame of this body.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// The translational part of the pose of this body.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        self.position.translation.vector
    }

    /// The rotational part of the pose of this body.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.position.rotation
    }

    /// The rotation angle of this body.
    ///
    /// This angle is not wrapped into `[-pi, pi]`: a body that performed two full turns has an
    /// angle of about `4 * pi`.
    #[inline]
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// The world-space center of mass of this body.
    #[inline]
    pub fn center_of_mass(&self) -> &Point<Real> {
        &self.com
    }

    /// The center of mass of this body, expressed in its local frame.
    #[inline]
    pub fn local_center_of_mass(&self) -> &Point<Real> {
        &self.mass_properties.local_com
    }

    /// The mass properties accumulated from all the colliders attached to this body.
    #[inline]
    pub fn mass_properties(&self) -> &MassProperties {
        &self.mass_properties
    }

    /// The mass of this body, as computed from its colliders.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass_properties.mass
    }

    /// The inverse mass used by the solver.
    ///
    /// Always zero for static and kinematic bodies.
    #[inline]
    pub fn inv_mass(&self) -> Real {
        self.inv_mass
    }

    /// The inverse angular inertia used by the solver.
    ///
    /// Always zero for static and kinematic bodies.
    #[inline]
    pub fn inv_inertia(&self) -> Real {
        self.inv_inertia
    }

    /// The linear velocity of the center of mass of this body.
    #[inline]
    pub fn linvel(&self) -> &Vector<Real> {
        &self.linvel
    }

    /// The angular velocity of this body.
    #[inline]
    pub fn angvel(&self) -> Real {
        self.angvel
    }

    /// The force accumulated since the last step.
    #[inline]
    pub fn force(&self) -> &Vector<Real> {
        &self.force
    }

    /// The torque accumulated since the last step.
    #[inline]
    pub fn torque(&self) -> Real {
        self.torque
    }

    /// The linear damping coefficient of this body.
    #[inline]
    pub fn linear_damping(&self) -> Real {
        self.linear_damping
    }

    /// Sets the linear damping coefficient of this body.
    #[inline]
    pub fn set_linear_damping(&mut self, damping: Real) {
        self.linear_damping = damping;
    }

    /// The angular damping coefficient of this body.
    #[inline]
    pub fn angular_damping(&self) -> Real {
        self.angular_damping
    }

    /// Sets the angular damping coefficient of this body.
    #[inline]
    pub fn set_angular_damping(&mut self, damping: Real) {
        self.angular_damping = damping;
    }

    /// The factor applied to the world gravity for this body.
    #[inline]
    pub fn gravity_scale(&self) -> Real {
        self.gravity_scale
    }

    /// Sets the factor applied to the world gravity for this body.
    #[inline]
    pub fn set_gravity_scale(&mut self, scale: Real) {
        self.gravity_scale = scale;
    }

    /// The handles of the colliders attached to this body.
    #[inline]
    pub fn colliders(&self) -> &[ColliderHandle] {
        &self.colliders
    }

    /// Moves the local frame of this body to `translation`, keeping its rotation.
    pub fn set_translation(&mut self, translation: Vector<Real>) {
        self.position.translation = Translation::from(translation);
        self.update_world_com();
    }

    /// Sets the rotation angle of this body, keeping the translation of its local frame.
    pub fn set_angle(&mut self, angle: Real) {
        self.angle = angle;
        self.position.rotation = Rotation::new(angle);
        self.update_world_com();
    }

    /// Sets the pose of the local frame of this body.
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.angle = position.rotation.angle();
        self.position = position;
        self.update_world_com();
    }

    /// Sets the linear velocity of this body.
    ///
    /// This has no effect on static bodies.
    #[inline]
    pub fn set_linvel(&mut self, linvel: Vector<Real>) {
        if !self.is_static() {
            self.linvel = linvel;
        }
    }

    /// Sets the angular velocity of this body.
    ///
    /// This has no effect on static bodies.
    #[inline]
    pub fn set_angvel(&mut self, angvel: Real) {
        if !self.is_static() {
            self.angvel = angvel;
        }
    }

    /// The velocity of the material point of this body located at the world-space `point`.
    #[inline]
    pub fn velocity_at_point(&self, point: &Point<Real>) -> Vector<Real> {
        self.linvel + cross_sv(self.angvel, &(point - self.com))
    }

    /// Adds a force applied at the center of mass, for the next step.
    ///
    /// Forces applied to non-dynamic bodies are ignored.
    pub fn apply_force(&mut self, force: Vector<Real>) {
        if self.is_dynamic() {
            self.force += force;
        }
    }

    /// Adds a force applied at the world-space `point`, for the next step.
    pub fn apply_force_at_point(&mut self, force: Vector<Real>, point: Point<Real>) {
        if self.is_dynamic() {
            self.force += force;
            self.torque += (point - self.com).perp(&force);
        }
    }

    /// Adds a torque, for the next step.
    pub fn apply_torque(&mut self, torque: Real) {
        if self.is_dynamic() {
            self.torque += torque;
        }
    }

    /// Applies an impulse at the center of mass, changing the linear velocity immediately.
    pub fn apply_impulse(&mut self, impulse: Vector<Real>) {
        self.linvel += impulse * self.inv_mass;
    }

    /// Applies an impulse at the world-space `point`, changing the velocities immediately.
    pub fn apply_impulse_at_point(&mut self, impulse: Vector<Real>, point: Point<Real>) {
        let r = point - self.com;
        self.apply_impulse_at_lever(&impulse, &r);
    }

    /// Applies an angular impulse, changing the angular velocity immediately.
    pub fn apply_angular_impulse(&mut self, impulse: Real) {
        self.angvel += impulse * self.inv_inertia;
    }

    /// Clears the forces and torques accumulated since the last step.
    pub fn reset_forces(&mut self) {
        self.force = Vector::zeros();
        self.torque = 0.0;
    }

    /// Transforms a point expressed in the local frame of this body into world-space.
    #[inline]
    pub fn world_point(&self, local_point: &Point<Real>) -> Point<Real> {
        self.position * local_point
    }

    /// Transforms a world-space point into the local frame of this body.
    #[inline]
    pub fn local_point(&self, world_point: &Point<Real>) -> Point<Real> {
        self.position.inverse_transform_point(world_point)
    }

    /// The world-space vector from the center of mass of this body to the point with
    /// local coordinates `local_point`.
    #[inline]
    pub(crate) fn lever_arm(&self, local_point: &Point<Real>) -> Vector<Real> {
        self.position.rotation * (local_point - self.mass_properties.local_com)
    }

    #[inline]
    pub(crate) fn apply_impulse_at_lever(&mut self, impulse: &Vector<Real>, r: &Vector<Real>) {
        self.linvel += impulse * self.inv_mass;
        self.angvel += self.inv_inertia * r.perp(impulse);
    }

    pub(crate) fn set_mass_properties(&mut self, mprops: MassProperties) {
        self.mass_properties = mprops;
        self.update_world_com();
        self.update_inverse_mass();
    }

    fn update_world_com(&mut self) {
        self.com = self.position * self.mass_properties.local_com;
    }

    fn update_inverse_mass(&mut self) {
        if self.is_dynamic() {
            // A dynamic body without any mass still needs to fall.
            self.inv_mass = if self.mass_properties.mass > 0.0 {
                self.mass_properties.inv_mass()
            } else {
                1.0
            };
            self.inv_inertia = self.mass_properties.inv_inertia();
        } else {
            self.inv_mass = 0.0;
            self.inv_inertia = 0.0;
        }
    }

    /// Integrates gravity, forces and damping into the velocities, then clears the forces.
    pub(crate) fn integrate_velocity(&mut self, gravity: &Vector<Real>, dt: Real) {
        if self.is_dynamic() {
            self.linvel += (gravity * self.gravity_scale + self.force * self.inv_mass) * dt;
            self.linvel *= 1.0 / (1.0 + dt * self.linear_damping);
            self.angvel += self.torque * self.inv_inertia * dt;
            self.angvel *= 1.0 / (1.0 + dt * self.angular_damping);

            debug_assert!(
                self.linvel.iter().all(|v| v.is_finite()) && self.angvel.is_finite(),
                "non-finite velocity after integration"
            );
        }

        self.reset_forces();
    }

    /// Integrates the velocities into the position of the center of mass and the angle.
    pub(crate) fn integrate_position(&mut self, dt: Real) {
        if self.is_static() {
            return;
        }

        self.com += self.linvel * dt;
        self.angle += self.angvel * dt;
        self.position.rotation = Rotation::new(self.angle);
        self.position.translation.vector =
            self.com.coords - self.position.rotation * self.mass_properties.local_com.coords;

        debug_assert!(
            self.com.coords.iter().all(|v| v.is_finite()) && self.angle.is_finite(),
            "non-finite position after integration"
        );
    }
}

/// A builder for rigid bodies.
#[derive(Clone, Debug, PartialEq)]
#[must_use = "Builder functions return the updated builder"]
pub struct RigidBodyBuilder {
    /// The kind of the body to build.
    pub kind: BodyKind,
    /// The initial translation of the body.
    pub translation: Vector<Real>,
    /// The initial rotation angle of the body.
    pub angle: Real,
    /// The initial linear velocity of the body.
    pub linvel: Vector<Real>,
    /// The initial angular velocity of the body.
    pub angvel: Real,
    /// The linear damping of the body. Defaults to `0.0`.
    pub linear_damping: Real,
    /// The angular damping of the body. Defaults to `0.0`.
    pub angular_damping: Real,
    /// The factor applied to the world gravity for this body. Defaults to `1.0`.
    pub gravity_scale: Real,
}

impl RigidBodyBuilder {
    /// Initializes the builder of a body of the given kind.
    pub fn new(kind: BodyKind) -> Self {
        Self {
            kind,
            translation: Vector::zeros(),
            angle: 0.0,
            linvel: Vector::zeros(),
            angvel: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            gravity_scale: 1.0,
        }
    }

    /// Initializes the builder of a static body.
    pub fn fixed() -> Self {
        Self::new(BodyKind::Static)
    }

    /// Initializes the builder of a kinematic body.
    pub fn kinematic() -> Self {
        Self::new(BodyKind::Kinematic)
    }

    /// Initializes the builder of a dynamic body.
    pub fn dynamic() -> Self {
        Self::new(BodyKind::Dynamic)
    }

    /// Sets the initial translation of the body.
    pub fn translation(mut self, x: Real, y: Real) -> Self {
        self.translation = Vector::new(x, y);
        self
    }

    /// Sets the initial rotation angle of the body.
    pub fn rotation(mut self, angle: Real) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the initial linear velocity of the body.
    pub fn linvel(mut self, linvel: Vector<Real>) -> Self {
        self.linvel = linvel;
        self
    }

    /// Sets the initial angular velocity of the body.
    pub fn angvel(mut self, angvel: Real) -> Self {
        self.angvel = angvel;
        self
    }

    /// Sets the linear damping of the body.
    pub fn linear_damping(mut self, damping: Real) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Sets the angular damping of the body.
    pub fn angular_damping(mut self, damping: Real) -> Self {
        self.angular_damping = damping;
        self
    }

    /// Sets the factor applied to the world gravity for this body.
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Builds the rigid body.
    ///
    /// The body has no mass until colliders are attached to it.
    pub fn build(&self) -> RigidBody {
        let position = Isometry::new(self.translation, self.angle);
        let mut body = RigidBody {
            kind: self.kind,
            position,
            angle: self.angle,
            com: position * Point::origin(),
            mass_properties: MassProperties::zero(),
            inv_mass: 0.0,
            inv_inertia: 0.0,
            linvel: Vector::zeros(),
            angvel: 0.0,
            force: Vector::zeros(),
            torque: 0.0,
            linear_damping: self.linear_damping,
            angular_damping: self.angular_damping,
            gravity_scale: self.gravity_scale,
            colliders: SmallVec::new(),
        };

        body.update_inverse_mass();
        body.set_linvel(self.linvel);
        body.set_angvel(self.angvel);
        body
    }
}

impl From<RigidBodyBuilder> for RigidBody {
    fn from(builder: RigidBodyBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod test {
    use super::{BodyKind, RigidBodyBuilder};
    use crate::mass_properties::MassProperties;
    use crate::math::{Point, Real, Vector};

    #[test]
    fn static_bodies_have_no_inverse_mass() {
        let mut body = RigidBodyBuilder::fixed().build();
        body.set_mass_properties(MassProperties::new(Point::origin(), 2.0, 1.0));
        assert_eq!(body.inv_mass(), 0.0);
        assert_eq!(body.inv_inertia(), 0.0);

        body.set_kind(BodyKind::Dynamic);
        assert_relative_eq!(body.inv_mass(), 0.5);
        assert_relative_eq!(body.inv_inertia(), 1.0);

        body.set_kind(BodyKind::Kinematic);
        assert_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    fn gravity_does_not_move_static_bodies() {
        let mut body = RigidBodyBuilder::fixed().translation(1.0, 2.0).build();
        body.integrate_velocity(&Vector::new(0.0, -10.0), 0.1);
        body.integrate_position(0.1);
        assert_eq!(*body.linvel(), Vector::zeros());
        assert_eq!(body.translation(), Vector::new(1.0, 2.0));
    }

    #[test]
    fn semi_implicit_euler_with_damping() {
        let mut body = RigidBodyBuilder::dynamic().linear_damping(1.0).build();
        body.set_mass_properties(MassProperties::new(Point::origin(), 2.0, 1.0));
        body.apply_force(Vector::new(4.0, 0.0));
        body.integrate_velocity(&Vector::new(0.0, -10.0), 0.5);

        // v = 0.5 * ((0, -10) + (4, 0) / 2) / (1 + 0.5)
        assert_relative_eq!(*body.linvel(), Vector::new(1.0, -5.0) / 1.5, epsilon = 1.0e-5);
        assert_eq!(*body.force(), Vector::zeros());

        body.integrate_position(0.5);
        assert_relative_eq!(
            *body.center_of_mass(),
            Point::new(0.5, -2.5) / 1.5,
            epsilon = 1.0e-5
        );
    }

    #[test]
    fn rotation_about_offset_center_of_mass() {
        let mut body = RigidBodyBuilder::dynamic().build();
        body.set_mass_properties(MassProperties::new(Point::new(1.0, 0.0), 1.0, 1.0));
        body.set_angvel(core::f64::consts::PI as Real);
        body.integrate_position(1.0);

        // Half a turn around (1, 0) sends the local origin to (2, 0).
        assert_relative_eq!(body.translation(), Vector::new(2.0, 0.0), epsilon = 1.0e-5);
        assert_relative_eq!(*body.center_of_mass(), Point::new(1.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut body = RigidBodyBuilder::kinematic().angvel(1.0).build();
        for _ in 0..10 {
            body.integrate_position(1.0);
        }
        assert_relative_eq!(body.angle(), 10.0);
    }

    #[test]
    fn velocity_at_point() {
        let body = RigidBodyBuilder::dynamic()
            .linvel(Vector::new(1.0, 0.0))
            .angvel(2.0)
            .build();
        assert_relative_eq!(
            body.velocity_at_point(&Point::new(0.0, 1.0)),
            Vector::new(-1.0, 0.0)
        );
    }
}
