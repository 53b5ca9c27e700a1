//! Mass properties (mass, inertia, center-of-mass) of shapes.

pub use self::mass_properties::MassProperties;
pub use self::mass_properties_convex_polygon::convex_polygon_area_and_center_of_mass;

mod mass_properties;
mod mass_properties_ball;
mod mass_properties_convex_polygon;
mod mass_properties_segment;
