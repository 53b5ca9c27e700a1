use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};
use crate::shape::ConvexPolygon;

impl MassProperties {
    /// Computes the mass properties of a convex polygon of total mass `mass`.
    pub fn from_convex_polygon(mass: Real, polygon: &ConvexPolygon) -> MassProperties {
        let vertices = polygon.points();
        let (area, com) = convex_polygon_area_and_center_of_mass(vertices);

        if area == 0.0 {
            return MassProperties::new(com, mass, 0.0);
        }

        let mut itot = 0.0;

        for (i, a) in vertices.iter().enumerate() {
            let b = &vertices[(i + 1) % vertices.len()];
            let tri_area = triangle_area(&com, a, b);
            itot += triangle_unit_angular_inertia(&com, a, b) * tri_area;
        }

        Self::new(com, mass, itot * mass / area)
    }
}

/// Computes the area and center-of-mass of a convex polygon.
pub fn convex_polygon_area_and_center_of_mass(
    convex_polygon: &[Point<Real>],
) -> (Real, Point<Real>) {
    if convex_polygon.is_empty() {
        return (0.0, Point::origin());
    }

    let geometric_center = convex_polygon
        .iter()
        .fold(Point::origin(), |e1, e2| e1 + e2.coords)
        / convex_polygon.len() as Real;
    let mut res = Point::origin();
    let mut areasum = 0.0;

    for (i, a) in convex_polygon.iter().enumerate() {
        let b = &convex_polygon[(i + 1) % convex_polygon.len()];
        let area = triangle_area(a, b, &geometric_center);
        let center = (a.coords + b.coords + geometric_center.coords) / 3.0;

        res += center * area;
        areasum += area;
    }

    if areasum == 0.0 {
        (areasum, geometric_center)
    } else {
        (areasum, res / areasum)
    }
}

fn triangle_area(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    (b - a).perp(&(c - a)).abs() * 0.5
}

/// The angular inertia of a triangle with unit area about its first vertex.
fn triangle_unit_angular_inertia(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    let factor = 1.0 / 6.0;

    // Algorithm adapted from Box2D
    let e1 = b - a;
    let e2 = c - a;

    let intx2 = e1.x * e1.x + e2.x * e1.x + e2.x * e2.x;
    let inty2 = e1.y * e1.y + e2.y * e1.y + e2.y * e2.y;
    factor * (intx2 + inty2)
}

#[cfg(test)]
mod test {
    use crate::mass_properties::MassProperties;
    use crate::math::Point;
    use crate::shape::ConvexPolygon;

    #[test]
    fn box_inertia() {
        let poly = ConvexPolygon::cuboid(1.0, 0.5).unwrap();
        let props = MassProperties::from_convex_polygon(6.0, &poly);

        // m * (w² + h²) / 12
        assert_relative_eq!(props.local_com, Point::origin(), epsilon = 1.0e-6);
        assert_relative_eq!(props.inertia, 6.0 * (4.0 + 1.0) / 12.0, epsilon = 1.0e-5);
    }

    #[test]
    fn triangle_centroid() {
        let poly = ConvexPolygon::from_convex_polyline(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap();
        let props = MassProperties::from_convex_polygon(1.0, &poly);

        assert_relative_eq!(props.local_com, Point::new(1.0, 1.0), epsilon = 1.0e-6);
        assert!(props.inertia > 0.0);
    }
}
