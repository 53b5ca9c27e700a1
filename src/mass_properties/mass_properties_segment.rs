use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::Segment;

impl MassProperties {
    /// Computes the mass properties of a segment of total mass `mass`.
    ///
    /// The segment is approximated by a box of length `length + 2 * radius` and width
    /// `2 * radius` centered at the middle of the segment.
    pub fn from_segment(mass: Real, segment: &Segment) -> Self {
        let length = segment.length() + 2.0 * segment.radius;
        let width = 2.0 * segment.radius;
        let inertia = mass * (length * length + width * width) / 12.0;

        Self::new(segment.center(), mass, inertia)
    }
}

#[cfg(test)]
mod test {
    use crate::mass_properties::MassProperties;
    use crate::math::Point;
    use crate::shape::Segment;

    #[test]
    fn thin_rod_inertia() {
        let seg = Segment::new(Point::new(1.0, 0.0), Point::new(3.0, 0.0));
        let props = MassProperties::from_segment(3.0, &seg);

        assert_relative_eq!(props.local_com, Point::new(2.0, 0.0));
        assert_relative_eq!(props.inertia, 1.0);
    }
}
