use approx::assert_relative_eq;
use spring2d::bounding_volume::BoundingVolume;
use spring2d::dynamics::RigidBodyBuilder;
use spring2d::geometry::{
    ColliderBuilder, ColliderHandle, CollisionFilter, CollisionMask, ContactHandle, SweepAndPrune,
};
use spring2d::math::{Point, Real, Vector};
use spring2d::pipeline::World;

const DT: Real = 1.0 / 60.0;

fn ground(world: &mut World) -> ColliderHandle {
    let body = world.insert_body(RigidBodyBuilder::fixed().build());
    world
        .insert_collider(
            ColliderBuilder::segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0))
                .build()
                .unwrap(),
            body,
        )
        .unwrap()
}

#[test]
fn contact_lifecycle() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let ground = ground(&mut world);
    let ball = world.insert_body(RigidBodyBuilder::dynamic().translation(0.0, 1.0).build());
    let ball_collider = world
        .insert_collider(ColliderBuilder::ball(0.5).build().unwrap(), ball)
        .unwrap();

    let mut first_contact: Option<ContactHandle> = None;

    for _ in 0..120 {
        world.step(DT);

        // Every contact surviving a step is colliding.
        assert!(world.contacts().all(|(_, c)| c.is_colliding()));
        assert!(world.contact_count() <= 1);

        if let Some((handle, _)) = world.contacts().next() {
            // The same contact persists while the ball rests on the ground.
            if let Some(first) = first_contact {
                assert_eq!(handle, first);
            }
            first_contact = Some(handle);
        }
    }

    assert!(first_contact.is_some());
    let contact = world.contact_pair(ball_collider, ground).unwrap();
    assert!(world.contact_pair(ground, ball_collider).is_some());
    assert!(contact.total_normal_impulse() > 0.0);

    // Teleporting the ball away ends the contact at the next step.
    world
        .body_mut(ball)
        .unwrap()
        .set_translation(Vector::new(0.0, 5.0));
    world.step(DT);
    assert_eq!(world.contact_count(), 0);
    assert!(world.contact_pair(ball_collider, ground).is_none());
}

#[test]
fn filtered_pairs_never_get_contacts() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let ground_body = world.insert_body(RigidBodyBuilder::fixed().build());
    let _ = world
        .insert_collider(
            ColliderBuilder::cuboid(10.0, 0.5)
                .filter(CollisionFilter::new(1))
                .build()
                .unwrap(),
            ground_body,
        )
        .unwrap();
    let ball = world.insert_body(RigidBodyBuilder::dynamic().translation(0.0, 1.0).build());
    let _ = world
        .insert_collider(
            ColliderBuilder::ball(0.5)
                .filter(CollisionFilter::new(1))
                .build()
                .unwrap(),
            ball,
        )
        .unwrap();

    for _ in 0..60 {
        world.step(DT);
        assert_eq!(world.contact_count(), 0);
    }

    assert!(world.body(ball).unwrap().translation().y < 0.0);
}

#[test]
fn head_on_elastic_collision_preserves_momentum() {
    let mut world = World::new(Vector::zeros());
    let mut balls = vec![];

    for (x, v) in [(-0.6, 0.25), (0.6, -0.25)] {
        let body = world.insert_body(
            RigidBodyBuilder::dynamic()
                .translation(x, 0.0)
                .linvel(Vector::new(v, 0.0))
                .build(),
        );
        let _ = world
            .insert_collider(
                ColliderBuilder::ball(0.5)
                    .friction(0.0)
                    .restitution(1.0)
                    .build()
                    .unwrap(),
                body,
            )
            .unwrap();
        balls.push(body);
    }

    for _ in 0..90 {
        world.step(DT);
    }

    let v1 = *world.body(balls[0]).unwrap().linvel();
    let v2 = *world.body(balls[1]).unwrap().linvel();

    assert_relative_eq!(v1 + v2, Vector::zeros(), epsilon = 1.0e-4);
    assert_relative_eq!(v1.x, -0.25, epsilon = 1.0e-3);
    assert_relative_eq!(v2.x, 0.25, epsilon = 1.0e-3);
    assert_eq!(world.contact_count(), 0);
}

#[test]
fn resting_stack() {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let _ = ground(&mut world);
    let mut boxes = vec![];

    for i in 0..3 {
        let body = world.insert_body(
            RigidBodyBuilder::dynamic()
                .translation(0.0, 0.55 + i as Real * 1.05)
                .build(),
        );
        let _ = world
            .insert_collider(ColliderBuilder::cuboid(0.5, 0.5).build().unwrap(), body)
            .unwrap();
        boxes.push(body);
    }

    for _ in 0..480 {
        world.step(DT);
    }

    let heights: Vec<_> = boxes
        .iter()
        .map(|h| world.body(*h).unwrap().translation().y)
        .collect();

    for _ in 0..120 {
        world.step(DT);
    }

    for (i, h) in boxes.iter().enumerate() {
        let body = world.body(*h).unwrap();
        assert!(body.linvel().norm() < 0.05, "box {} still moving", i);
        assert!(body.angvel().abs() < 0.05, "box {} still spinning", i);
        assert_relative_eq!(body.translation().x, 0.0, epsilon = 0.05);
        assert_relative_eq!(body.translation().y, 0.5 + i as Real, epsilon = 0.1);
        // No runaway sinking.
        assert!(body.translation().y >= heights[i] - 0.01);
    }
}

/// Drops a ball on a box with the given filters, and returns whether they ever touched.
fn ball_lands_on_box(ground_filter: CollisionFilter, ball_filter: CollisionFilter) -> bool {
    let mut world = World::new(Vector::new(0.0, -9.81));
    let ground_body = world.insert_body(RigidBodyBuilder::fixed().build());
    let _ = world
        .insert_collider(
            ColliderBuilder::cuboid(10.0, 0.5)
                .filter(ground_filter)
                .build()
                .unwrap(),
            ground_body,
        )
        .unwrap();
    let ball = world.insert_body(RigidBodyBuilder::dynamic().translation(0.0, 1.2).build());
    let _ = world
        .insert_collider(
            ColliderBuilder::ball(0.5).filter(ball_filter).build().unwrap(),
            ball,
        )
        .unwrap();

    let mut touched = false;

    for _ in 0..60 {
        world.step(DT);
        touched |= world.contact_count() > 0;
    }

    let y = world.body(ball).unwrap().translation().y;
    assert_eq!(touched, y > 0.9, "ball at height {}", y);
    touched
}

#[test]
fn collision_filter_rules() {
    let c1 = CollisionMask::CATEGORY_1;
    let c2 = CollisionMask::CATEGORY_2;

    // Different groups, with categories rejected by the masks in both directions.
    assert!(!ball_lands_on_box(
        CollisionFilter::new(1).with_categories(c1).with_mask(c1),
        CollisionFilter::new(2).with_categories(c2).with_mask(c2),
    ));
    // Different groups, accepted in one direction only.
    assert!(ball_lands_on_box(
        CollisionFilter::new(1).with_categories(c1).with_mask(c2),
        CollisionFilter::new(2).with_categories(c2).with_mask(c2),
    ));
    // Same nonzero group, even with matching categories.
    assert!(!ball_lands_on_box(
        CollisionFilter::new(3).with_categories(c1).with_mask(c1),
        CollisionFilter::new(3).with_categories(c1).with_mask(c1),
    ));
    // Both in the default group, whatever the masks.
    assert!(ball_lands_on_box(
        CollisionFilter::default().with_categories(c1).with_mask(c1),
        CollisionFilter::default().with_categories(c2).with_mask(c2),
    ));
}

#[test]
fn contact_is_removed_once_the_bounding_boxes_separate() {
    for sap in [false, true] {
        let mut world = if sap {
            World::with_broad_phase(Vector::zeros(), SweepAndPrune::new())
        } else {
            World::new(Vector::zeros())
        };
        let mut colliders = vec![];

        for (x, v) in [(0.0, -1.0), (0.9, 1.0)] {
            let body = world.insert_body(
                RigidBodyBuilder::dynamic()
                    .translation(x, 0.0)
                    .linvel(Vector::new(v, 0.0))
                    .build(),
            );
            let collider = world
                .insert_collider(ColliderBuilder::ball(0.5).friction(0.0).build().unwrap(), body)
                .unwrap();
            colliders.push(collider);
        }

        world.step(DT);
        assert!(world.contact_pair(colliders[0], colliders[1]).is_some());

        for _ in 0..60 {
            world.step(DT);
        }

        let aabb1 = *world.collider(colliders[0]).unwrap().aabb();
        let aabb2 = *world.collider(colliders[1]).unwrap().aabb();
        assert!(!aabb1.intersects(&aabb2));
        assert!(world.contact_pair(colliders[0], colliders[1]).is_none());
        assert_eq!(world.contact_count(), 0);
    }
}
