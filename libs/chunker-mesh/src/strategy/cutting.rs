//! # Cutting Strategy
//!
//! Exact partitioning: per cell, the source mesh is duplicated, baked into
//! world space and boolean-intersected with a cuboid cutter volume placed
//! over the cell.

use chunker_grid::CellDescriptor;
use glam::{DMat4, DQuat, DVec3};

use crate::error::ChunkError;
use crate::mesh::PolyMesh;
use crate::ops::{solver, BooleanSolver, SolverKind};

use super::ChunkStrategy;

/// Boolean-intersection chunking.
///
/// Owns a unit-cube cutter template for the whole run; per cell the
/// template is cloned and placed by scale + translation, so no mutable
/// state is shared between cell builds and the template is released with
/// the strategy on every exit path.
pub struct CuttingStrategy {
    /// Unit cube centered at the origin, half-extents 1
    template: PolyMesh,
    solver: Box<dyn BooleanSolver>,
}

impl CuttingStrategy {
    /// Creates the strategy with the built-in solver for `kind`.
    pub fn new(kind: SolverKind) -> Self {
        Self::with_solver(solver(kind))
    }

    /// Creates the strategy with a caller-supplied solver.
    pub fn with_solver(solver: Box<dyn BooleanSolver>) -> Self {
        Self {
            template: PolyMesh::cuboid(DVec3::ZERO, DVec3::ONE),
            solver,
        }
    }

    /// Places the cutter template over one cell.
    fn place_cutter(&self, cell: &CellDescriptor) -> PolyMesh {
        let placement = DMat4::from_scale_rotation_translation(
            cell.half_extents(),
            DQuat::IDENTITY,
            cell.center(),
        );
        let mut cutter = self.template.clone();
        cutter.transform(&placement);
        cutter
    }
}

impl ChunkStrategy for CuttingStrategy {
    fn build_chunk(
        &self,
        local: &PolyMesh,
        transform: &DMat4,
        cell: &CellDescriptor,
    ) -> Result<PolyMesh, ChunkError> {
        let mut world = local.clone();
        world.transform(transform);

        let cutter = self.place_cutter(cell);
        let chunk = self.solver.intersect(&world, &cutter)?;
        Ok(chunk)
    }

    fn name(&self) -> &'static str {
        "cutting"
    }
}
