use spring2d::dynamics::{DistanceJoint, RigidBodyBuilder};
use spring2d::geometry::{ColliderBuilder, ColliderHandle, SweepAndPrune};
use spring2d::math::{Point, Real, Vector};
use spring2d::pipeline::{World, WorldError};
use std::collections::BTreeSet;

#[test]
fn test_point_picks_the_collider_under_the_cursor() {
    let mut world = World::new(Vector::zeros());
    let b1 = world.insert_body(RigidBodyBuilder::dynamic().rotation(0.3).build());
    let cuboid = world
        .insert_collider(ColliderBuilder::cuboid(1.0, 0.5).build().unwrap(), b1)
        .unwrap();
    let b2 = world.insert_body(RigidBodyBuilder::dynamic().translation(5.0, 0.0).build());
    let ball = world
        .insert_collider(ColliderBuilder::ball(0.5).build().unwrap(), b2)
        .unwrap();

    assert_eq!(world.test_point(&Point::new(0.2, 0.1)), Some(cuboid));
    assert_eq!(world.test_point(&Point::new(5.3, 0.0)), Some(ball));
    assert_eq!(world.test_point(&Point::new(2.5, 0.0)), None);
    assert_eq!(world.test_point(&Point::new(5.4, 0.4)), None);

    // Inside the rotated cuboid, outside of its unrotated footprint.
    assert_eq!(world.test_point(&Point::new(0.7268, 0.6959)), Some(cuboid));
    // Inside the unrotated footprint, outside of the rotated cuboid.
    assert_eq!(world.test_point(&Point::new(0.95, -0.45)), None);
}

#[test]
fn test_point_sees_bodies_moved_between_steps() {
    let mut world = World::new(Vector::zeros());
    let body = world.insert_body(RigidBodyBuilder::dynamic().build());
    let collider = world
        .insert_collider(ColliderBuilder::cuboid(1.0, 0.5).build().unwrap(), body)
        .unwrap();
    world.step(1.0 / 60.0);

    let rb = world.body_mut(body).unwrap();
    rb.set_translation(Vector::new(10.0, 0.0));
    rb.set_angle(std::f64::consts::FRAC_PI_2 as Real);

    assert_eq!(world.test_point(&Point::new(0.0, 0.0)), None);
    assert_eq!(world.test_point(&Point::new(10.2, 0.9)), Some(collider));
    assert_eq!(world.test_point(&Point::new(10.9, 0.2)), None);
}

#[test]
fn removing_a_body_removes_its_colliders_joints_and_contacts() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let ground = world.insert_body(RigidBodyBuilder::fixed().build());
    let _ = world
        .insert_collider(ColliderBuilder::cuboid(10.0, 0.5).build().unwrap(), ground)
        .unwrap();
    let body = world.insert_body(RigidBodyBuilder::dynamic().translation(0.0, 0.95).build());
    let collider = world
        .insert_collider(ColliderBuilder::cuboid(0.5, 0.5).build().unwrap(), body)
        .unwrap();
    let other = world.insert_body(RigidBodyBuilder::dynamic().translation(3.0, 5.0).build());
    let joint = world
        .insert_joint(body, other, DistanceJoint::new(Point::origin(), Point::origin(), 5.0))
        .unwrap();

    world.step(1.0 / 60.0);
    assert_eq!(world.contact_count(), 1);

    let removed = world.remove_body(body).unwrap();
    assert!(removed.colliders().is_empty());
    assert_eq!(world.body_count(), 2);
    assert_eq!(world.collider_count(), 1);
    assert_eq!(world.contact_count(), 0);
    assert_eq!(world.joint_count(), 0);
    assert!(world.collider(collider).is_none());
    assert!(world.joint(joint).is_none());

    assert_eq!(
        world.remove_body(body).err(),
        Some(WorldError::InvalidBodyHandle(body))
    );
    assert_eq!(
        world.remove_collider(collider).err(),
        Some(WorldError::InvalidColliderHandle(collider))
    );
    assert_eq!(
        world.remove_joint(joint).err(),
        Some(WorldError::InvalidJointHandle(joint))
    );

    // Stepping after the removal is fine.
    world.step(1.0 / 60.0);
}

#[test]
fn stale_handles_do_not_alias_new_entries() {
    let mut world = World::new(Vector::zeros());
    let b1 = world.insert_body(RigidBodyBuilder::dynamic().build());
    let _ = world.remove_body(b1).unwrap();
    let b2 = world.insert_body(RigidBodyBuilder::dynamic().build());

    assert_ne!(b1, b2);
    assert!(world.body(b1).is_none());
    assert!(world.body(b2).is_some());
}

#[test]
fn static_bodies_do_not_move() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let body = world.insert_body(RigidBodyBuilder::fixed().translation(1.0, 2.0).build());
    let _ = world
        .insert_collider(ColliderBuilder::ball(1.0).build().unwrap(), body)
        .unwrap();

    for _ in 0..10 {
        world.step(1.0 / 60.0);
    }

    assert_eq!(world.body(body).unwrap().translation(), Vector::new(1.0, 2.0));
}

fn contact_pairs(world: &World) -> BTreeSet<((u32, u32), (u32, u32))> {
    world
        .contacts()
        .map(|(_, c)| {
            let (c1, c2) = (c.collider1(), c.collider2());
            let (c1, c2) = if c1 < c2 { (c1, c2) } else { (c2, c1) };
            (c1.into_raw_parts(), c2.into_raw_parts())
        })
        .collect()
}

fn populate(world: &mut World, seed: u64) -> Vec<ColliderHandle> {
    let mut rng = oorandom::Rand32::new(seed);
    let mut colliders = vec![];

    for i in 0..60 {
        let x = rng.rand_float() as Real * 12.0 - 6.0;
        let y = rng.rand_float() as Real * 12.0 - 6.0;
        let builder = if i % 5 == 0 {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let body = world.insert_body(builder.translation(x, y).rotation(x * y).build());
        let collider = if i % 2 == 0 {
            ColliderBuilder::ball(0.3 + rng.rand_float() as Real)
        } else {
            ColliderBuilder::cuboid(0.2 + rng.rand_float() as Real, 0.3)
        };
        colliders.push(world.insert_collider(collider.build().unwrap(), body).unwrap());
    }

    colliders
}

#[test]
fn sweep_and_prune_matches_brute_force() {
    for seed in 0..5 {
        let mut brute_force = World::new(Vector::zeros());
        let mut sap = World::with_broad_phase(Vector::zeros(), SweepAndPrune::new());
        let _ = populate(&mut brute_force, seed);
        let _ = populate(&mut sap, seed);

        brute_force.step(1.0 / 60.0);
        sap.step(1.0 / 60.0);

        let expected = contact_pairs(&brute_force);
        assert!(!expected.is_empty());
        assert_eq!(contact_pairs(&sap), expected);
    }
}

#[test]
fn prelude_macros_build_points_and_vectors() {
    use spring2d::prelude::{point, vector};

    let mut world = World::new(vector![0.0, -9.81]);
    assert_eq!(world.gravity(), &Vector::new(0.0, -9.81));

    let body = world.insert_body(RigidBodyBuilder::fixed().build());
    let collider = world
        .insert_collider(ColliderBuilder::ball(1.0).build().unwrap(), body)
        .unwrap();
    assert_eq!(world.test_point(&point![0.5, 0.5]), Some(collider));
}
