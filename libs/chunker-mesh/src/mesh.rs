//! # Mesh Data Structure
//!
//! Polygonal mesh representation with vertices, arbitrary-arity faces and
//! optional normals.

use config::constants::GEOM_EPSILON;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A polygonal mesh with vertices and ordered face index lists.
///
/// All geometry uses f64. Faces keep their original vertex winding and may
/// have any arity >= 3; nothing here forces triangulation, so quads from a
/// cuboid or an imported mesh survive chunking intact.
///
/// # Example
///
/// ```rust
/// use chunker_mesh::PolyMesh;
/// use glam::DVec3;
///
/// let mut mesh = PolyMesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2]);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyMesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Faces as ordered vertex-index lists, arity >= 3
    faces: Vec<Vec<u32>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl PolyMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face from an ordered vertex-index list.
    pub fn add_face(&mut self, indices: Vec<u32>) {
        debug_assert!(indices.len() >= 3, "face arity must be >= 3");
        self.faces.push(indices);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        &self.faces[index]
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Area-weighted face normal, unnormalized (Newell sum over edges).
    fn face_normal(&self, face: &[u32]) -> DVec3 {
        let mut normal = DVec3::ZERO;
        for i in 0..face.len() {
            let a = self.vertices[face[i] as usize];
            let b = self.vertices[face[(i + 1) % face.len()] as usize];
            normal += a.cross(b);
        }
        normal
    }

    /// Computes and sets smooth vertex normals from face normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let face_normal = self.face_normal(face);
            for &index in face {
                normals[index as usize] += face_normal;
            }
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Transform normals if present (use inverse transpose for normals)
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize();
            }
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No face has arity < 3 or repeated indices
    /// - No degenerate faces (zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for face in &self.faces {
            if face.len() < 3 {
                return false;
            }
            for (i, &index) in face.iter().enumerate() {
                if index >= vertex_count {
                    return false;
                }
                if face[..i].contains(&index) {
                    return false;
                }
            }
            if self.face_normal(face).length() < GEOM_EPSILON {
                return false;
            }
        }

        true
    }

    /// Creates an axis-aligned cuboid with quad faces wound outward.
    ///
    /// # Arguments
    ///
    /// * `center` - Cuboid center
    /// * `half_extents` - Half-size along each axis
    pub fn cuboid(center: DVec3, half_extents: DVec3) -> Self {
        let min = center - half_extents;
        let max = center + half_extents;

        let mut mesh = Self::with_capacity(8, 6);

        // Bottom face corners (z = min.z), then top face (z = max.z)
        let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
        let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
        let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
        let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
        let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
        let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
        let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
        let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

        mesh.add_face(vec![v0, v3, v2, v1]); // bottom (z = min.z)
        mesh.add_face(vec![v4, v5, v6, v7]); // top (z = max.z)
        mesh.add_face(vec![v0, v1, v5, v4]); // front (y = min.y)
        mesh.add_face(vec![v2, v3, v7, v6]); // back (y = max.y)
        mesh.add_face(vec![v3, v0, v4, v7]); // left (x = min.x)
        mesh.add_face(vec![v1, v2, v6, v5]); // right (x = max.x)

        mesh
    }
}
