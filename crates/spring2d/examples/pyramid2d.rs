use spring2d::dynamics::{MouseJoint, RigidBodyBuilder};
use spring2d::geometry::ColliderBuilder;
use spring2d::math::{Point, Real, Vector};
use spring2d::pipeline::World;

const DT: Real = 1.0 / 60.0;
const BASE_COUNT: usize = 10;

fn main() {
    let mut world = World::new(Vector::new(0.0, -9.81));

    /*
     * Ground.
     */
    let ground = world.insert_body(RigidBodyBuilder::fixed().build());
    let ground_collider = ColliderBuilder::segment(Point::new(-40.0, 0.0), Point::new(40.0, 0.0))
        .friction(0.6)
        .build()
        .unwrap();
    let _ = world.insert_collider(ground_collider, ground).unwrap();

    /*
     * Pyramid.
     */
    let half_extent = 0.5;
    let mut boxes = vec![];

    for row in 0..BASE_COUNT {
        let count = BASE_COUNT - row;
        let y = half_extent + row as Real * 2.0 * half_extent;
        let x0 = -(count as Real - 1.0) * half_extent;

        for i in 0..count {
            let x = x0 + i as Real * 2.0 * half_extent;
            let body = world.insert_body(RigidBodyBuilder::dynamic().translation(x, y).build());
            let collider = ColliderBuilder::cuboid(half_extent, half_extent)
                .friction(0.6)
                .build()
                .unwrap();
            let _ = world.insert_collider(collider, body).unwrap();
            boxes.push(body);
        }
    }

    for _ in 0..120 {
        world.step(DT);
    }

    /*
     * Grab the top box and drag it sideways, like a mouse would.
     */
    let grab_point = Point::new(0.0, (2 * BASE_COUNT - 1) as Real * half_extent);
    let grabbed = world
        .test_point(&grab_point)
        .and_then(|collider| world.collider(collider)?.parent());

    if let Some(body) = grabbed {
        let local_anchor = world.body(body).unwrap().local_point(&grab_point);
        let mouse = MouseJoint::new(local_anchor, grab_point, 1000.0);
        let joint = world.insert_single_body_joint(body, mouse).unwrap();

        for k in 0..120 {
            let target = grab_point + Vector::new(k as Real * 0.05, 1.0);
            if let Some(mouse) = world.joint_mut(joint).and_then(|j| j.as_mouse_mut()) {
                mouse.set_target(target);
            }
            world.step(DT);
        }

        let _ = world.remove_joint(joint).unwrap();
    }

    for _ in 0..120 {
        world.step(DT);
    }

    println!("{} contacts", world.contact_count());
    for handle in boxes {
        let body = world.body(handle).unwrap();
        let t = body.translation();
        println!(
            "{:?}: x = {:.3}, y = {:.3}, angle = {:.3}",
            handle.into_raw_parts(),
            t.x,
            t.y,
            body.angle()
        );
    }
}
