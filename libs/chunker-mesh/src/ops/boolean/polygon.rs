//! # Polygon for Boolean Clipping
//!
//! Convex polygon with plane and splitting support.

use glam::DVec3;

use super::plane::{Classification, Plane};

/// A convex polygon with its containing plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns `None` if the vertices don't define a valid plane.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Polygon vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Polygon plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip the polygon in place (reverse winding and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front_count = 0;
        let mut back_count = 0;

        for &v in &self.vertices {
            match plane.classify_point(v) {
                Classification::Front => front_count += 1,
                Classification::Back => back_count += 1,
                _ => {}
            }
        }

        if front_count > 0 && back_count > 0 {
            Classification::Spanning
        } else if front_count > 0 {
            Classification::Front
        } else if back_count > 0 {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Split polygon by a plane into (front, back) parts.
    ///
    /// Coplanar polygons land on the side the plane normal agrees with.
    /// A spanning polygon is cut along the plane, inserting intersection
    /// vertices on both halves.
    pub fn split(&self, plane: &Plane) -> (Vec<Polygon>, Vec<Polygon>) {
        let mut front = Vec::new();
        let mut back = Vec::new();

        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    front.push(self.clone());
                } else {
                    back.push(self.clone());
                }
            }
            Classification::Front => front.push(self.clone()),
            Classification::Back => back.push(self.clone()),
            Classification::Spanning => {
                let mut front_verts = Vec::new();
                let mut back_verts = Vec::new();

                for i in 0..self.vertices.len() {
                    let j = (i + 1) % self.vertices.len();
                    let vi = self.vertices[i];
                    let vj = self.vertices[j];

                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    // Edge crosses the plane: insert the intersection point
                    if (ti == Classification::Front && tj == Classification::Back)
                        || (ti == Classification::Back && tj == Classification::Front)
                    {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let t = di / (di - dj);
                        let intersection = vi.lerp(vj, t);
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if front_verts.len() >= 3 {
                    if let Some(poly) = Polygon::from_vertices(front_verts) {
                        front.push(poly);
                    }
                }
                if back_verts.len() >= 3 {
                    if let Some(poly) = Polygon::from_vertices(back_verts) {
                        back.push(poly);
                    }
                }
            }
        }

        (front, back)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_triangle() -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_from_vertices() {
        let poly = create_triangle();
        assert_eq!(poly.vertices().len(), 3);
    }

    #[test]
    fn test_polygon_from_too_few_vertices() {
        assert!(Polygon::from_vertices(vec![DVec3::ZERO, DVec3::X]).is_none());
    }

    #[test]
    fn test_polygon_flip() {
        let mut poly = create_triangle();
        let original_first = poly.vertices()[0];
        let original_normal = poly.plane().normal();
        poly.flip();

        assert_eq!(poly.vertices()[2], original_first);
        assert!((poly.plane().normal() + original_normal).length() < 1e-9);
    }

    #[test]
    fn test_polygon_classify_sides() {
        let plane = Plane::new(DVec3::Z, 0.0);

        let above = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.5, 1.0, 1.0),
        ])
        .unwrap();
        let below = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 1.0, -1.0),
        ])
        .unwrap();

        assert_eq!(above.classify(&plane), Classification::Front);
        assert_eq!(below.classify(&plane), Classification::Back);
        assert_eq!(create_triangle().classify(&plane), Classification::Coplanar);
    }

    #[test]
    fn test_polygon_split_spanning() {
        // Triangle that spans the z=0 plane
        let poly = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();

        let plane = Plane::new(DVec3::Z, 0.0);
        let (front, back) = poly.split(&plane);

        assert!(!front.is_empty(), "should have front polygon");
        assert!(!back.is_empty(), "should have back polygon");

        // Every front vertex at or above the plane, every back vertex at or below
        for p in &front {
            assert!(p.vertices().iter().all(|v| v.z >= -1e-9));
        }
        for p in &back {
            assert!(p.vertices().iter().all(|v| v.z <= 1e-9));
        }
    }

    #[test]
    fn test_polygon_split_coplanar_direction() {
        let poly = create_triangle();
        let (front, back) = poly.split(&Plane::new(DVec3::Z, 0.0));
        assert_eq!(front.len(), 1);
        assert!(back.is_empty());

        let (front, back) = poly.split(&Plane::new(-DVec3::Z, 0.0));
        assert!(front.is_empty());
        assert_eq!(back.len(), 1);
    }
}
