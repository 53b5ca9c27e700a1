use approx::assert_relative_eq;
use spring2d::dynamics::{
    AngularSpringJoint, DistanceJoint, GearJoint, JointType, MotorJoint, MouseJoint, PointJoint,
    RigidBodyBuilder, RigidBodyHandle, RopeJoint, SpringJoint, WheelJoint,
};
use spring2d::geometry::ColliderBuilder;
use spring2d::math::{Point, Real, Vector};
use spring2d::pipeline::{World, WorldError};

const DT: Real = 1.0 / 60.0;

fn ball(world: &mut World, x: Real, y: Real) -> RigidBodyHandle {
    let body = world.insert_body(RigidBodyBuilder::dynamic().translation(x, y).build());
    let _ = world
        .insert_collider(ColliderBuilder::ball(0.25).build().unwrap(), body)
        .unwrap();
    body
}

fn anchor_distance(world: &World, b1: RigidBodyHandle, b2: RigidBodyHandle) -> Real {
    let p1 = world.body(b1).unwrap().translation();
    let p2 = world.body(b2).unwrap().translation();
    (p2 - p1).norm()
}

#[test]
fn distance_joint_converges() {
    let mut world = World::new(Vector::zeros());
    let b1 = ball(&mut world, 0.0, 0.0);
    let b2 = ball(&mut world, 3.0, 0.0);
    let joint = world
        .insert_joint(b1, b2, DistanceJoint::new(Point::origin(), Point::origin(), 2.0))
        .unwrap();
    assert_eq!(world.joint(joint).unwrap().joint_type(), JointType::Distance);

    for _ in 0..300 {
        world.step(DT);
    }

    assert_relative_eq!(anchor_distance(&world, b1, b2), 2.0, epsilon = 1.0e-2);
    // The joint conserves the momentum of the pair.
    let v = world.body(b1).unwrap().linvel() + world.body(b2).unwrap().linvel();
    assert_relative_eq!(v, Vector::zeros(), epsilon = 1.0e-4);
}

#[test]
fn slack_rope_applies_no_impulse() {
    let mut world = World::new(Vector::zeros());
    let anchor = world.insert_body(RigidBodyBuilder::fixed().build());
    let body = ball(&mut world, 1.0, 0.0);
    world
        .body_mut(body)
        .unwrap()
        .set_linvel(Vector::new(1.0, 0.0));
    let rope = world
        .insert_joint(anchor, body, RopeJoint::new(Point::origin(), Point::origin(), 2.0))
        .unwrap();

    let mut caught = false;

    for _ in 0..300 {
        world.step(DT);

        let joint = world.joint(rope).unwrap().as_rope().unwrap();
        caught |= joint.is_taut();
        let linvel = *world.body(body).unwrap().linvel();

        if !caught {
            assert_eq!(joint.impulse(), 0.0);
            assert_eq!(linvel, Vector::new(1.0, 0.0));
        } else {
            // Once caught, the body never gets away again.
            assert!(anchor_distance(&world, anchor, body) < 2.05);
            assert!(linvel.x <= 0.0);
        }
    }

    assert!(caught);
}

#[test]
fn taut_rope_clamps_separation() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let anchor = world.insert_body(RigidBodyBuilder::fixed().build());
    let body = ball(&mut world, 1.0, 0.0);
    let _ = world
        .insert_joint(anchor, body, RopeJoint::new(Point::origin(), Point::origin(), 1.5))
        .unwrap();

    for _ in 0..300 {
        world.step(DT);
        assert!(anchor_distance(&world, anchor, body) < 1.5 + 0.1);
    }

    // The body swings at the end of the rope.
    assert!(anchor_distance(&world, anchor, body) > 1.4);
    assert!(world.body(body).unwrap().translation().y < -0.3);
}

#[test]
fn point_joint_pendulum() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let pivot = world.insert_body(RigidBodyBuilder::fixed().build());
    let bob = ball(&mut world, 1.0, 0.0);
    let _ = world
        .insert_joint(pivot, bob, PointJoint::new(Point::origin(), Point::new(-1.0, 0.0)))
        .unwrap();

    for _ in 0..240 {
        world.step(DT);
        let body = world.body(bob).unwrap();
        let anchor = body.world_point(&Point::new(-1.0, 0.0));
        assert!(anchor.coords.norm() < 0.05);
    }

    // The bob swung below the pivot.
    assert!(world.body(bob).unwrap().translation().y < -0.1);
}

#[test]
fn spring_settles_at_rest_length() {
    let mut world = World::new(Vector::zeros());
    let anchor = world.insert_body(RigidBodyBuilder::fixed().build());
    let body = ball(&mut world, 2.0, 0.0);
    let _ = world
        .insert_joint(
            anchor,
            body,
            SpringJoint::new(Point::origin(), Point::origin(), 1.0, 2.0, 1.0),
        )
        .unwrap();

    // The spring needs some time to pull the body.
    world.step(DT);
    assert!(anchor_distance(&world, anchor, body) > 1.5);

    for _ in 0..600 {
        world.step(DT);
    }

    assert_relative_eq!(anchor_distance(&world, anchor, body), 1.0, epsilon = 1.0e-2);
}

#[test]
fn motor_reaches_target_rate() {
    let mut world = World::new(Vector::zeros());
    let base = world.insert_body(RigidBodyBuilder::fixed().build());
    let wheel = ball(&mut world, 0.0, 0.0);
    let motor = world
        .insert_joint(base, wheel, MotorJoint::new(2.0, 1000.0))
        .unwrap();

    for _ in 0..60 {
        world.step(DT);
    }
    assert_relative_eq!(world.body(wheel).unwrap().angvel(), 2.0, epsilon = 1.0e-4);

    // A weak motor accelerates slowly.
    let joint = world.joint_mut(motor).unwrap().as_motor_mut().unwrap();
    joint.set_rate(-2.0);
    joint.set_max_torque(1.0e-3);
    world.step(DT);
    assert!(world.body(wheel).unwrap().angvel() > 1.9);
}

#[test]
fn gear_links_angular_velocities() {
    let mut world = World::new(Vector::zeros());
    let b1 = ball(&mut world, 0.0, 0.0);
    let b2 = ball(&mut world, 2.0, 0.0);
    world.body_mut(b1).unwrap().set_angvel(2.0);
    let _ = world
        .insert_joint(b1, b2, GearJoint::new(0.0, 2.0))
        .unwrap();

    for _ in 0..120 {
        world.step(DT);
    }

    let (w1, w2) = (
        world.body(b1).unwrap().angvel(),
        world.body(b2).unwrap().angvel(),
    );
    let (a1, a2) = (
        world.body(b1).unwrap().angle(),
        world.body(b2).unwrap().angle(),
    );
    assert_relative_eq!(2.0 * w2, w1, epsilon = 1.0e-3);
    assert_relative_eq!(2.0 * a2, a1, epsilon = 1.0e-2);
    assert!(w1.abs() > 0.0);
}

#[test]
fn angular_spring_returns_to_rest_angle() {
    let mut world = World::new(Vector::zeros());
    let base = world.insert_body(RigidBodyBuilder::fixed().build());
    let body = ball(&mut world, 0.0, 0.0);
    world.body_mut(body).unwrap().set_angle(1.0);
    let _ = world
        .insert_joint(base, body, AngularSpringJoint::new(0.0, 2.0, 1.0))
        .unwrap();

    for _ in 0..600 {
        world.step(DT);
    }

    assert_relative_eq!(world.body(body).unwrap().angle(), 0.0, epsilon = 1.0e-2);
}

#[test]
fn wheel_slides_on_its_axis() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let chassis = world.insert_body(RigidBodyBuilder::fixed().build());
    let wheel = ball(&mut world, 0.0, -1.0);
    let joint = world
        .insert_joint(
            chassis,
            wheel,
            WheelJoint::new(Point::new(0.0, -1.0), Point::origin(), Vector::y_axis())
                .with_spring(4.0, 0.7)
                .with_motor(3.0, 100.0),
        )
        .unwrap();

    for _ in 0..300 {
        world.step(DT);
    }

    let body = world.body(wheel).unwrap();
    assert_relative_eq!(body.translation().x, 0.0, epsilon = 1.0e-3);
    // The suspension sags under gravity.
    assert!(body.translation().y < -1.0);
    assert!(body.translation().y > -1.1);
    assert_relative_eq!(body.angvel(), 3.0, epsilon = 1.0e-2);

    let joint = world.joint(joint).unwrap().as_wheel().unwrap();
    assert!(joint.spring_impulse() > 0.0);
}

#[test]
fn mouse_drags_body_to_target() {
    let mut world = World::new(Vector::zeros());
    let body = ball(&mut world, 0.0, 0.0);
    let mouse = world
        .insert_single_body_joint(
            body,
            MouseJoint::new(Point::origin(), Point::new(2.0, 1.0), 1000.0),
        )
        .unwrap();
    assert_eq!(world.joint(mouse).unwrap().body2(), None);

    for _ in 0..240 {
        world.step(DT);
    }

    let pos = world.body(body).unwrap().translation();
    assert_relative_eq!(pos, Vector::new(2.0, 1.0), epsilon = 1.0e-2);

    world
        .joint_mut(mouse)
        .unwrap()
        .as_mouse_mut()
        .unwrap()
        .set_target(Point::new(-1.0, 0.0));
    for _ in 0..240 {
        world.step(DT);
    }
    let pos = world.body(body).unwrap().translation();
    assert_relative_eq!(pos, Vector::new(-1.0, 0.0), epsilon = 1.0e-2);

    let _ = world.remove_joint(mouse).unwrap();
    assert!(world.joint(mouse).is_none());
}

#[test]
fn joint_errors() {
    let mut world = World::new(Vector::zeros());
    let b1 = ball(&mut world, 0.0, 0.0);
    let b2 = ball(&mut world, 1.0, 0.0);

    assert_eq!(
        world.insert_joint(b1, b1, GearJoint::new(0.0, 1.0)),
        Err(WorldError::SameBody(b1))
    );

    let _ = world.remove_body(b2).unwrap();
    assert_eq!(
        world.insert_joint(b1, b2, GearJoint::new(0.0, 1.0)),
        Err(WorldError::InvalidBodyHandle(b2))
    );
}
