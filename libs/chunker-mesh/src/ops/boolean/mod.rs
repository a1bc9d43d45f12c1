//! # Boolean Intersection
//!
//! Mesh-mesh intersection behind a pluggable solver seam.
//!
//! Two solvers ship in-crate:
//!
//! - [`BspSolver`] (**exact**): full two-tree BSP clipping based on the
//!   csg.js algorithm. Robust on coplanar, grid-aligned cuts, at the cost
//!   of building a BSP tree of both operands per call.
//! - [`ConvexClipSolver`] (**fast**): clips the subject's faces against the
//!   face planes of a *convex* second operand (Sutherland-Hodgman). Much
//!   cheaper, but faces exactly coplanar with a cutter face are dropped and
//!   the cut boundary is left open, so the output is not guaranteed to be a
//!   closed solid.
//!
//! Hosts with their own geometry kernel can implement [`BooleanSolver`]
//! and bypass both.

mod bsp;
mod plane;
mod polygon;

use serde::{Deserialize, Serialize};

use crate::error::BooleanError;
use crate::mesh::PolyMesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// SOLVER SEAM
// =============================================================================

/// Which boolean solver the cutting strategy should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolverKind {
    /// BSP clipping; robust on coplanar cuts.
    #[default]
    Exact,
    /// Convex plane clipping; faster, open cut boundaries.
    Fast,
}

/// Capability: intersect two meshes, producing a new mesh.
///
/// An empty result is valid output (disjoint operands), not an error.
pub trait BooleanSolver: Send + Sync {
    /// Computes the geometric intersection of `subject` and `cutter`.
    ///
    /// `cutter` requirements vary by solver; see the implementors.
    fn intersect(&self, subject: &PolyMesh, cutter: &PolyMesh) -> Result<PolyMesh, BooleanError>;

    /// Human-readable solver name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Returns the built-in solver for `kind`.
pub fn solver(kind: SolverKind) -> Box<dyn BooleanSolver> {
    match kind {
        SolverKind::Exact => Box::new(BspSolver),
        SolverKind::Fast => Box::new(ConvexClipSolver),
    }
}

// =============================================================================
// EXACT: BSP SOLVER
// =============================================================================

/// Exact intersection via BSP clipping (csg.js algorithm).
///
/// Both operands should be closed meshes with outward-facing windings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BspSolver;

impl BooleanSolver for BspSolver {
    fn intersect(&self, subject: &PolyMesh, cutter: &PolyMesh) -> Result<PolyMesh, BooleanError> {
        let polys_a = mesh_to_polygons(subject);
        let polys_b = mesh_to_polygons(cutter);

        if polys_a.is_empty() || polys_b.is_empty() {
            return Ok(PolyMesh::new());
        }

        let mut bsp_a = BspNode::new(polys_a);
        let mut bsp_b = BspNode::new(polys_b);

        // Intersection: A & B = ~(~A | ~B)
        bsp_a.invert();
        bsp_b.clip_to(&bsp_a);
        bsp_b.invert();
        bsp_a.clip_to(&bsp_b);
        bsp_b.clip_to(&bsp_a);

        let mut result_polys = bsp_a.all_polygons();
        result_polys.extend(bsp_b.all_polygons());

        let mut result = BspNode::new(result_polys);
        result.invert();

        Ok(polygons_to_mesh(&result.all_polygons()))
    }

    fn name(&self) -> &'static str {
        "exact (bsp)"
    }
}

// =============================================================================
// FAST: CONVEX CLIP SOLVER
// =============================================================================

/// Fast intersection against a convex cutter.
///
/// Clips each subject face against every face plane of the cutter, keeping
/// the inside parts. The cutter must be convex with outward-facing
/// windings; fails with [`BooleanError::DegenerateCutter`] when it yields
/// no valid planes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvexClipSolver;

impl BooleanSolver for ConvexClipSolver {
    fn intersect(&self, subject: &PolyMesh, cutter: &PolyMesh) -> Result<PolyMesh, BooleanError> {
        if cutter.face_count() == 0 {
            return Err(BooleanError::degenerate_cutter("cutter has no faces"));
        }

        let planes: Vec<_> = mesh_to_polygons(cutter)
            .iter()
            .map(|poly| *poly.plane())
            .collect();
        if planes.is_empty() {
            return Err(BooleanError::degenerate_cutter(
                "cutter faces are all degenerate",
            ));
        }

        let mut polys = mesh_to_polygons(subject);
        for plane in &planes {
            if polys.is_empty() {
                break;
            }
            // Inside the convex solid = behind every outward face plane
            polys = polys
                .into_iter()
                .flat_map(|poly| poly.split(plane).1)
                .collect();
        }

        Ok(polygons_to_mesh(&polys))
    }

    fn name(&self) -> &'static str {
        "fast (convex clip)"
    }
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Convert mesh faces to clip polygons, skipping degenerate faces.
fn mesh_to_polygons(mesh: &PolyMesh) -> Vec<Polygon> {
    mesh.faces()
        .iter()
        .filter_map(|face| {
            let vertices = face.iter().map(|&i| mesh.vertex(i)).collect();
            Polygon::from_vertices(vertices)
        })
        .collect()
}

/// Convert clip polygons back to a mesh, one face per polygon.
fn polygons_to_mesh(polygons: &[Polygon]) -> PolyMesh {
    let mut mesh = PolyMesh::with_capacity(polygons.len() * 4, polygons.len());

    for poly in polygons {
        let face = poly
            .vertices()
            .iter()
            .map(|&v| mesh.add_vertex(v))
            .collect();
        mesh.add_face(face);
    }

    mesh
}

// =============================================================================
// TESTS
// =============================================================================
