use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{ShapeError, SupportMap};
use crate::utils;

/// A 2D convex polygon.
///
/// Vertices are stored counterclockwise. The edge `i` goes from `points[i]` to
/// `points[(i + 1) % n]` and `normals[i]` is its outward unit normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
    normals: Vec<UnitVector<Real>>,
}

impl ConvexPolygon {
    /// Creates a new 2D convex polygon from an arbitrary set of points.
    ///
    /// This explicitly computes the convex hull of the given set of points.
    pub fn from_convex_hull(points: &[Point<Real>]) -> Result<Self, ShapeError> {
        let vertices = crate::transformation::convex_hull2(points);
        Self::from_convex_polyline(vertices)
    }

    /// Creates a new 2D convex polygon from a set of points describing a convex polyline.
    ///
    /// Clockwise polylines are reversed. Vertices lying on the line joining their
    /// neighbors are removed. Fails if fewer than three vertices remain or if the
    /// polyline is not convex.
    pub fn from_convex_polyline(mut points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::NotEnoughVertices(points.len()));
        }

        if signed_area(&points) < 0.0 {
            points.reverse();
        }

        // Drop consecutive duplicates, including the closing vertex.
        points.dedup_by(|a, b| relative_eq!(*a, *b));
        while points.len() > 1 && relative_eq!(points[0], points[points.len() - 1]) {
            let _ = points.pop();
        }

        if points.len() < 3 {
            return Err(ShapeError::NotEnoughVertices(points.len()));
        }

        let eps = DEFAULT_EPSILON.sqrt();
        let mut normals = Vec::with_capacity(points.len());

        // First, compute all normals.
        for i1 in 0..points.len() {
            let i2 = (i1 + 1) % points.len();
            normals.push(
                utils::ccw_face_normal([&points[i1], &points[i2]])
                    .ok_or(ShapeError::NotConvex)?,
            );
        }

        let mut nremoved = 0;
        // See if the first vertex must be removed.
        if normals[0].dot(&*normals[normals.len() - 1]) > 1.0 - eps {
            nremoved = 1;
        }

        // Second, find vertices that can be removed because
        // of collinearity of adjacent faces.
        for i2 in 1..points.len() {
            let i1 = i2 - 1;
            if normals[i1].dot(&*normals[i2]) > 1.0 - eps {
                nremoved += 1;
            } else {
                points[i2 - nremoved] = points[i2];
                normals[i2 - nremoved] = normals[i2];
            }
        }

        let new_length = points.len() - nremoved;
        points.truncate(new_length);
        normals.truncate(new_length);

        if points.len() < 3 {
            return Err(ShapeError::NotEnoughVertices(points.len()));
        }

        // Every turn must be a left turn.
        for i1 in 0..normals.len() {
            let i2 = (i1 + 1) % normals.len();
            if normals[i1].perp(&*normals[i2]) <= 0.0 {
                return Err(ShapeError::NotConvex);
            }
        }

        Ok(ConvexPolygon { points, normals })
    }

    /// Creates a box centered at the local origin with the given half-extents.
    pub fn cuboid(hx: Real, hy: Real) -> Result<Self, ShapeError> {
        if !(hx > 0.0 && hy > 0.0) {
            return Err(ShapeError::InvalidHalfExtents(hx, hy));
        }

        Self::from_convex_polyline(vec![
            Point::new(-hx, -hy),
            Point::new(hx, -hy),
            Point::new(hx, hy),
            Point::new(-hx, hy),
        ])
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The normals of the edges of this convex polygon.
    #[inline]
    pub fn normals(&self) -> &[UnitVector<Real>] {
        &self.normals
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        signed_area(&self.points)
    }

    /// The centroid of this polygon.
    pub fn centroid(&self) -> Point<Real> {
        crate::mass_properties::convex_polygon_area_and_center_of_mass(&self.points).1
    }

    /// Index of the vertex farthest along `dir`.
    pub fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        utils::point_cloud_support_point_id(dir, &self.points)
    }

    /// The edge `(a, b)` of this polygon, in local-space, that best faces the direction `dir`.
    ///
    /// Only the two edges adjacent to the support vertex are considered. The one with the
    /// normal most aligned with `dir` is returned, oriented counterclockwise.
    pub fn local_support_edge(&self, dir: &Vector<Real>) -> (Point<Real>, Point<Real>) {
        let n = self.points.len();
        let i1 = self.support_point_id(dir);
        let i0 = (i1 + n - 1) % n;
        let i2 = (i1 + 1) % n;

        if self.normals[i0].dot(dir) > self.normals[i1].dot(dir) {
            (self.points[i0], self.points[i1])
        } else {
            (self.points[i1], self.points[i2])
        }
    }

    /// Tests if the point `pt`, expressed in the same frame as `pos`, lies inside of this
    /// polygon positioned at `pos`.
    pub fn contains_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> bool {
        let local_pt = pos.inverse_transform_point(pt);

        self.points
            .iter()
            .zip(self.normals.iter())
            .all(|(p, n)| n.dot(&(local_pt - p)) <= 0.0)
    }
}

impl SupportMap for ConvexPolygon {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self.points())
    }
}

fn signed_area(points: &[Point<Real>]) -> Real {
    let mut area = 0.0;

    for i1 in 0..points.len() {
        let i2 = (i1 + 1) % points.len();
        area += points[i1].coords.perp(&points[i2].coords);
    }

    area * 0.5
}
