//! # Mesh Source
//!
//! Read-only view of the object being chunked, as provided by the host
//! scene. The core never mutates a source.

use chunker_grid::box_corners;
use glam::{DMat4, DVec3};

use crate::mesh::PolyMesh;

/// Capability: read-only access to the object being chunked.
///
/// `local_bound_corners` defaults to the mesh's own AABB but may be
/// overridden by hosts that cache object-level bounds; grid planning uses
/// whatever the host reports, which can slightly over- or under-estimate
/// the true extent if the cache is stale.
pub trait MeshSource {
    /// Object name, used for chunk and collection naming.
    fn name(&self) -> &str;

    /// The mesh in local space.
    fn mesh(&self) -> &PolyMesh;

    /// Affine transform mapping local to world space.
    fn world_transform(&self) -> DMat4;

    /// The 8 corners of the object's local-space bounding box.
    fn local_bound_corners(&self) -> [DVec3; 8] {
        let (min, max) = self.mesh().bounding_box();
        box_corners(min, max)
    }
}

/// A plain owned source object: mesh plus placement.
///
/// # Example
///
/// ```rust
/// use chunker_mesh::{PolyMesh, SourceObject};
/// use glam::{DMat4, DVec3};
///
/// let mesh = PolyMesh::cuboid(DVec3::ZERO, DVec3::ONE);
/// let object = SourceObject::new("Crate", mesh, DMat4::IDENTITY);
/// ```
#[derive(Debug, Clone)]
pub struct SourceObject {
    name: String,
    mesh: PolyMesh,
    transform: DMat4,
}

impl SourceObject {
    /// Creates a source object.
    pub fn new(name: impl Into<String>, mesh: PolyMesh, transform: DMat4) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform,
        }
    }
}

impl MeshSource for SourceObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn mesh(&self) -> &PolyMesh {
        &self.mesh
    }

    fn world_transform(&self) -> DMat4 {
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bound_corners_from_mesh() {
        let object = SourceObject::new(
            "Cube",
            PolyMesh::cuboid(DVec3::ZERO, DVec3::splat(2.0)),
            DMat4::IDENTITY,
        );
        let corners = object.local_bound_corners();
        assert_eq!(corners[0], DVec3::splat(-2.0));
        assert_eq!(corners[6], DVec3::splat(2.0));
    }
}
