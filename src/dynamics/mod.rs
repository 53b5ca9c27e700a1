//! Rigid bodies, joints and the solver configuration.

pub use self::joint::{
    AngularSpringJoint, DistanceJoint, GearJoint, Joint, JointHandle, JointKind, JointType,
    MotorJoint, MouseJoint, PointJoint, RopeJoint, SpringJoint, WheelJoint,
};
pub use self::rigid_body::{BodyKind, RigidBody, RigidBodyBuilder, RigidBodyHandle};
pub use self::solver_config::SolverConfig;

pub mod joint;
mod rigid_body;
mod solver_config;
