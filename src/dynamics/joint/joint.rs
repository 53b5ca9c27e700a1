use crate::data::{Arena, Index};
use crate::dynamics::{
    AngularSpringJoint, DistanceJoint, GearJoint, MotorJoint, MouseJoint, PointJoint, RigidBody,
    RigidBodyHandle, RopeJoint, SolverConfig, SpringJoint, WheelJoint,
};
use crate::math::{Real, Vector};
use crate::utils::cross_sv;

/// The unique identifier of a joint inserted into a [`World`](crate::pipeline::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct JointHandle(pub(crate) Index);

impl JointHandle {
    /// Converts this handle into its (index, generation) components.
    pub fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }

    /// Reconstructs a handle from its (index, generation) components.
    pub fn from_raw_parts(id: u32, generation: u32) -> Self {
        Self(Index::from_raw_parts(id, generation))
    }

    /// An always-invalid joint handle.
    pub fn invalid() -> Self {
        Self(Index::invalid())
    }
}

/// The type of a joint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum JointType {
    /// A rigid distance between two anchors.
    Distance,
    /// A maximum distance between two anchors.
    Rope,
    /// A damped spring between two anchors.
    Spring,
    /// Two anchors held coincident.
    Point,
    /// A single-body soft constraint dragging an anchor toward a target.
    Mouse,
    /// A target relative angular velocity.
    Motor,
    /// A fixed ratio between two angular velocities.
    Gear,
    /// A suspended wheel sliding along an axis of a chassis.
    Wheel,
    /// A damped spring between two angles.
    AngularSpring,
}

/// The constraint of a joint, with its geometry and solver state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum JointKind {
    /// A distance joint.
    Distance(DistanceJoint),
    /// A rope joint.
    Rope(RopeJoint),
    /// A spring joint.
    Spring(SpringJoint),
    /// A point joint.
    Point(PointJoint),
    /// A mouse joint.
    Mouse(MouseJoint),
    /// A motor joint.
    Motor(MotorJoint),
    /// A gear joint.
    Gear(GearJoint),
    /// A wheel joint.
    Wheel(WheelJoint),
    /// An angular spring joint.
    AngularSpring(AngularSpringJoint),
}

macro_rules! impl_joint_kind_from(
    ($($Joint: ident => $Variant: ident),*) => {$(
        impl From<$Joint> for JointKind {
            fn from(joint: $Joint) -> Self {
                JointKind::$Variant(joint)
            }
        }
    )*}
);

impl_joint_kind_from!(
    DistanceJoint => Distance,
    RopeJoint => Rope,
    SpringJoint => Spring,
    PointJoint => Point,
    MouseJoint => Mouse,
    MotorJoint => Motor,
    GearJoint => Gear,
    WheelJoint => Wheel,
    AngularSpringJoint => AngularSpring
);

impl JointKind {
    /// The type of this joint.
    pub fn joint_type(&self) -> JointType {
        match self {
            JointKind::Distance(_) => JointType::Distance,
            JointKind::Rope(_) => JointType::Rope,
            JointKind::Spring(_) => JointType::Spring,
            JointKind::Point(_) => JointType::Point,
            JointKind::Mouse(_) => JointType::Mouse,
            JointKind::Motor(_) => JointType::Motor,
            JointKind::Gear(_) => JointType::Gear,
            JointKind::Wheel(_) => JointType::Wheel,
            JointKind::AngularSpring(_) => JointType::AngularSpring,
        }
    }

    /// Does this joint constrain a single body?
    pub fn is_single_body(&self) -> bool {
        matches!(self, JointKind::Mouse(_))
    }

    /// The magnitude of the impulse accumulated by this joint during the last step.
    ///
    /// This is meant for debug visualization only.
    pub fn impulse(&self) -> Real {
        match self {
            JointKind::Distance(j) => j.impulse(),
            JointKind::Rope(j) => j.impulse(),
            JointKind::Spring(j) => j.impulse(),
            JointKind::Point(j) => j.impulse().norm(),
            JointKind::Mouse(j) => j.impulse().norm(),
            JointKind::Motor(j) => j.impulse(),
            JointKind::Gear(j) => j.impulse(),
            JointKind::Wheel(j) => j.impulse(),
            JointKind::AngularSpring(j) => j.impulse(),
        }
    }

    fn pre_solve(
        &mut self,
        dt: Real,
        config: &SolverConfig,
        b1: &RigidBody,
        b2: Option<&RigidBody>,
    ) {
        match (self, b2) {
            (JointKind::Mouse(j), _) => j.pre_solve(dt, b1),
            (JointKind::Distance(j), Some(b2)) => j.pre_solve(dt, config, b1, b2),
            (JointKind::Rope(j), Some(b2)) => j.pre_solve(dt, config, b1, b2),
            (JointKind::Spring(j), Some(b2)) => j.pre_solve(dt, config, b1, b2),
            (JointKind::Point(j), Some(b2)) => j.pre_solve(dt, config, b1, b2),
            (JointKind::Motor(j), Some(b2)) => j.pre_solve(dt, b1, b2),
            (JointKind::Gear(j), Some(b2)) => j.pre_solve(dt, config, b1, b2),
            (JointKind::Wheel(j), Some(b2)) => j.pre_solve(dt, config, b1, b2),
            (JointKind::AngularSpring(j), Some(b2)) => j.pre_solve(dt, b1, b2),
            (_, None) => {}
        }
    }

    fn warm_start(&self, b1: &mut RigidBody, b2: Option<&mut RigidBody>) {
        match (self, b2) {
            (JointKind::Mouse(j), _) => j.warm_start(b1),
            (JointKind::Distance(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::Rope(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::Spring(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::Point(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::Motor(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::Gear(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::Wheel(j), Some(b2)) => j.warm_start(b1, b2),
            (JointKind::AngularSpring(j), Some(b2)) => j.warm_start(b1, b2),
            (_, None) => {}
        }
    }

    fn solve(&mut self, b1: &mut RigidBody, b2: Option<&mut RigidBody>) {
        match (self, b2) {
            (JointKind::Mouse(j), _) => j.solve(b1),
            (JointKind::Distance(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::Rope(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::Spring(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::Point(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::Motor(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::Gear(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::Wheel(j), Some(b2)) => j.solve(b1, b2),
            (JointKind::AngularSpring(j), Some(b2)) => j.solve(b1, b2),
            (_, None) => {}
        }
    }
}

/// A joint attached to one or two rigid bodies.
///
/// The bodies a joint is attached to never change after its insertion into the world. Only
/// the parameters of its [`JointKind`] may be modified.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Joint {
    pub(crate) body1: RigidBodyHandle,
    pub(crate) body2: Option<RigidBodyHandle>,
    pub(crate) kind: JointKind,
}

macro_rules! joint_kind_accessors(
    ($($as_joint: ident, $as_joint_mut: ident, $Variant: ident, $Joint: ident);*) => {$(
        /// This joint as a
        #[doc = concat!("[`", stringify!($Joint), "`]")]
        /// if it has that type.
        pub fn $as_joint(&self) -> Option<&$Joint> {
            match &self.kind {
                JointKind::$Variant(j) => Some(j),
                _ => None,
            }
        }

        /// This joint as a mutable
        #[doc = concat!("[`", stringify!($Joint), "`]")]
        /// if it has that type.
        pub fn $as_joint_mut(&mut self) -> Option<&mut $Joint> {
            match &mut self.kind {
                JointKind::$Variant(j) => Some(j),
                _ => None,
            }
        }
    )*}
);

impl Joint {
    pub(crate) fn new(
        body1: RigidBodyHandle,
        body2: Option<RigidBodyHandle>,
        kind: JointKind,
    ) -> Self {
        Self { body1, body2, kind }
    }

    /// The first body attached to this joint.
    ///
    /// This is the dragged body of a mouse joint.
    #[inline]
    pub fn body1(&self) -> RigidBodyHandle {
        self.body1
    }

    /// The second body attached to this joint, or `None` for a single-body joint.
    #[inline]
    pub fn body2(&self) -> Option<RigidBodyHandle> {
        self.body2
    }

    /// Is `body` attached to this joint?
    #[inline]
    pub fn is_attached_to(&self, body: RigidBodyHandle) -> bool {
        self.body1 == body || self.body2 == Some(body)
    }

    /// The constraint of this joint.
    #[inline]
    pub fn kind(&self) -> &JointKind {
        &self.kind
    }

    /// The constraint of this joint, for modifying its parameters.
    #[inline]
    pub fn kind_mut(&mut self) -> &mut JointKind {
        &mut self.kind
    }

    /// The type of this joint.
    #[inline]
    pub fn joint_type(&self) -> JointType {
        self.kind.joint_type()
    }

    /// The magnitude of the impulse accumulated by this joint during the last step.
    #[inline]
    pub fn impulse(&self) -> Real {
        self.kind.impulse()
    }

    joint_kind_accessors!(
        as_distance, as_distance_mut, Distance, DistanceJoint;
        as_rope, as_rope_mut, Rope, RopeJoint;
        as_spring, as_spring_mut, Spring, SpringJoint;
        as_point, as_point_mut, Point, PointJoint;
        as_mouse, as_mouse_mut, Mouse, MouseJoint;
        as_motor, as_motor_mut, Motor, MotorJoint;
        as_gear, as_gear_mut, Gear, GearJoint;
        as_wheel, as_wheel_mut, Wheel, WheelJoint;
        as_angular_spring, as_angular_spring_mut, AngularSpring, AngularSpringJoint
    );

    pub(crate) fn pre_solve(
        &mut self,
        dt: Real,
        config: &SolverConfig,
        bodies: &Arena<RigidBody>,
    ) {
        let Some(b1) = bodies.get(self.body1.0) else {
            return;
        };
        let b2 = self.body2.and_then(|h| bodies.get(h.0));
        self.kind.pre_solve(dt, config, b1, b2);
    }

    pub(crate) fn warm_start(&self, bodies: &mut Arena<RigidBody>) {
        if let Some((b1, b2)) = bodies_mut(self.body1, self.body2, bodies) {
            self.kind.warm_start(b1, b2);
        }
    }

    pub(crate) fn solve(&mut self, bodies: &mut Arena<RigidBody>) {
        let (body1, body2) = (self.body1, self.body2);
        if let Some((b1, b2)) = bodies_mut(body1, body2, bodies) {
            self.kind.solve(b1, b2);
        }
    }
}

fn bodies_mut(
    body1: RigidBodyHandle,
    body2: Option<RigidBodyHandle>,
    bodies: &mut Arena<RigidBody>,
) -> Option<(&mut RigidBody, Option<&mut RigidBody>)> {
    match body2 {
        Some(body2) => match bodies.get2_mut(body1.0, body2.0) {
            (Some(b1), Some(b2)) => Some((b1, Some(b2))),
            _ => None,
        },
        None => bodies.get_mut(body1.0).map(|b1| (b1, None)),
    }
}

/// The velocity of the anchor at `r2` on `b2` relative to the anchor at `r1` on `b1`.
#[inline]
pub(crate) fn relative_velocity(
    b1: &RigidBody,
    r1: &Vector<Real>,
    b2: &RigidBody,
    r2: &Vector<Real>,
) -> Vector<Real> {
    b2.linvel + cross_sv(b2.angvel, r2) - b1.linvel - cross_sv(b1.angvel, r1)
}

/// Applies `impulse` at `r2` on `b2`, and its opposite at `r1` on `b1`.
#[inline]
pub(crate) fn apply_impulse_pair(
    b1: &mut RigidBody,
    r1: &Vector<Real>,
    b2: &mut RigidBody,
    r2: &Vector<Real>,
    impulse: &Vector<Real>,
) {
    b1.apply_impulse_at_lever(&-impulse, r1);
    b2.apply_impulse_at_lever(impulse, r2);
}

/// Applies the angular impulse `impulse` to `b2`, and its opposite to `b1`.
#[inline]
pub(crate) fn apply_angular_impulse_pair(b1: &mut RigidBody, b2: &mut RigidBody, impulse: Real) {
    b1.angvel -= b1.inv_inertia * impulse;
    b2.angvel += b2.inv_inertia * impulse;
}
