use approx::assert_relative_eq;
use spring2d::dynamics::{BodyKind, RigidBodyBuilder};
use spring2d::geometry::ColliderBuilder;
use spring2d::mass_properties::MassProperties;
use spring2d::math::{Point, Real, Vector};
use spring2d::pipeline::World;
use spring2d::shape::{Ball, ConvexPolygon, Segment};

#[test]
fn shape_mass_properties_are_non_negative() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let mass = 0.1 + rng.rand_float() as Real * 10.0;
        let r = 0.05 + rng.rand_float() as Real * 2.0;
        let hx = 0.05 + rng.rand_float() as Real * 2.0;
        let hy = 0.05 + rng.rand_float() as Real * 2.0;

        let ball = MassProperties::from_ball(mass, &Ball::new(r));
        let cuboid = MassProperties::from_convex_polygon(mass, &ConvexPolygon::cuboid(hx, hy).unwrap());
        let segment = MassProperties::from_segment(
            mass,
            &Segment::with_radius(Point::new(-hx, 0.0), Point::new(hx, hy), r),
        );

        for mprops in [ball, cuboid, segment] {
            assert!(mprops.mass >= 0.0);
            assert!(mprops.inertia >= 0.0);
        }
    }
}

#[test]
fn body_mass_is_the_sum_of_its_colliders() {
    let mut world = World::new(Vector::zeros());
    let body = world.insert_body(RigidBodyBuilder::dynamic().build());

    let c1 = ColliderBuilder::ball(0.5).mass(1.0).build().unwrap();
    let c2 = ColliderBuilder::ball(0.5)
        .mass(3.0)
        .translation(2.0, 0.0)
        .build()
        .unwrap();
    let _ = world.insert_collider(c1, body).unwrap();
    let h2 = world.insert_collider(c2, body).unwrap();

    let rb = world.body(body).unwrap();
    assert_relative_eq!(rb.mass(), 4.0);
    assert_relative_eq!(rb.inv_mass(), 0.25);
    assert_relative_eq!(*rb.local_center_of_mass(), Point::new(1.5, 0.0), epsilon = 1.0e-6);

    // Parallel axis theorem on both balls.
    let expected_inertia = 0.5 * 1.0 * 0.25 + 1.0 * 1.5 * 1.5 + 0.5 * 3.0 * 0.25 + 3.0 * 0.5 * 0.5;
    assert_relative_eq!(rb.inv_inertia(), 1.0 / expected_inertia, epsilon = 1.0e-5);

    let _ = world.remove_collider(h2).unwrap();
    let rb = world.body(body).unwrap();
    assert_relative_eq!(rb.inv_mass(), 1.0);
    assert_relative_eq!(*rb.local_center_of_mass(), Point::origin(), epsilon = 1.0e-6);
}

#[test]
fn box_inertia() {
    let mut world = World::new(Vector::zeros());
    let body = world.insert_body(RigidBodyBuilder::dynamic().build());
    let _ = world
        .insert_collider(ColliderBuilder::cuboid(0.5, 0.5).mass(2.0).build().unwrap(), body)
        .unwrap();

    let rb = world.body(body).unwrap();
    assert_relative_eq!(rb.inv_mass(), 0.5);
    // m * (w² + h²) / 12
    assert_relative_eq!(rb.inv_inertia(), 3.0, epsilon = 1.0e-4);
}

#[test]
fn density_scales_with_area() {
    let collider = ColliderBuilder::cuboid(1.0, 0.5).density(2.0).build().unwrap();
    assert_relative_eq!(collider.mass(), 4.0, epsilon = 1.0e-5);
}

#[test]
fn non_dynamic_bodies_have_infinite_mass() {
    let mut world = World::new(Vector::zeros());
    let body = world.insert_body(RigidBodyBuilder::kinematic().build());
    let _ = world
        .insert_collider(ColliderBuilder::ball(1.0).mass(5.0).build().unwrap(), body)
        .unwrap();

    assert_eq!(world.body(body).unwrap().inv_mass(), 0.0);
    assert_eq!(world.body(body).unwrap().inv_inertia(), 0.0);

    world.body_mut(body).unwrap().set_kind(BodyKind::Dynamic);
    assert_relative_eq!(world.body(body).unwrap().inv_mass(), 0.2);
    assert!(world.body(body).unwrap().inv_inertia() > 0.0);
}

#[test]
fn invalid_colliders_are_rejected() {
    assert!(ColliderBuilder::ball(-1.0).build().is_err());
    assert!(ColliderBuilder::ball(1.0).mass(0.0).build().is_err());
    assert!(ColliderBuilder::segment(Point::origin(), Point::origin())
        .build()
        .is_err());
    assert!(ColliderBuilder::convex_polygon(vec![Point::origin(), Point::new(1.0, 0.0)])
        .build()
        .is_err());
}
