//! Joints constraining the relative motion of rigid bodies.

pub use self::angular_spring_joint::AngularSpringJoint;
pub use self::distance_joint::DistanceJoint;
pub use self::gear_joint::GearJoint;
pub use self::joint::{Joint, JointHandle, JointKind, JointType};
pub use self::motor_joint::MotorJoint;
pub use self::mouse_joint::MouseJoint;
pub use self::point_joint::PointJoint;
pub use self::rope_joint::RopeJoint;
pub use self::spring_joint::SpringJoint;
pub use self::wheel_joint::WheelJoint;

pub(crate) use self::joint::relative_velocity;
pub(crate) use self::soft_constraint::SoftCoefficients;

mod angular_spring_joint;
mod distance_joint;
mod gear_joint;
mod joint;
mod motor_joint;
mod mouse_joint;
mod point_joint;
mod rope_joint;
mod soft_constraint;
mod spring_joint;
mod wheel_joint;
