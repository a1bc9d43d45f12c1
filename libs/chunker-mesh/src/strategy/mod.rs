//! # Chunk Strategies
//!
//! Two interchangeable ways to produce one cell's chunk, polymorphic over
//! a common build capability. The strategy is selected once per run, never
//! per cell.

mod cutting;
mod selection;

use chunker_grid::CellDescriptor;
use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::error::ChunkError;
use crate::mesh::PolyMesh;
use crate::ops::SolverKind;

pub use cutting::CuttingStrategy;
pub use selection::SelectionStrategy;

/// Capability: build one cell's chunk from the shared source mesh.
///
/// Implementations only read the source; each call writes a brand-new
/// output mesh, so independent cells may be built concurrently.
pub trait ChunkStrategy: Send + Sync {
    /// Builds the chunk for `cell`.
    ///
    /// `local` is the source mesh in local space, `transform` its world
    /// transform. A chunk with zero faces is valid output, not an error.
    fn build_chunk(
        &self,
        local: &PolyMesh,
        transform: &DMat4,
        cell: &CellDescriptor,
    ) -> Result<PolyMesh, ChunkError>;

    /// Strategy name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Which strategy a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Boolean-intersect the source against a per-cell cutter volume.
    Cutting(SolverKind),
    /// Keep only faces whose vertices all fall inside the cell.
    Selection,
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Cutting(SolverKind::default())
    }
}

impl StrategyKind {
    /// Instantiates the strategy for one run.
    pub(crate) fn instantiate(&self) -> Box<dyn ChunkStrategy> {
        match self {
            Self::Cutting(solver) => Box::new(CuttingStrategy::new(*solver)),
            Self::Selection => Box::new(SelectionStrategy),
        }
    }
}
