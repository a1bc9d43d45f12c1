//! # Chunker Mesh
//!
//! Partitions a polygonal mesh into a rectangular grid of chunk meshes
//! along the X/Y axes of its world-space bounding box.
//!
//! ## Architecture
//!
//! ```text
//! MeshSource → chunker-grid (CellDescriptor) → ChunkStrategy → SceneSink
//! ```
//!
//! Two strategies implement the per-cell build capability:
//! - **Cutting**: boolean intersection against a per-cell cuboid cutter,
//!   with a pluggable solver (exact BSP or fast convex clipping).
//! - **Selection**: keep only faces whose vertices all fall inside the
//!   cell; straddling faces are dropped, never clipped.
//!
//! ## Usage
//!
//! ```rust
//! use chunker_mesh::{chunk_object, ChunkParams, MemorySink, PolyMesh, SourceObject, StrategyKind};
//! use glam::{DMat4, DVec3};
//!
//! let object = SourceObject::new(
//!     "Crate",
//!     PolyMesh::cuboid(DVec3::ZERO, DVec3::ONE),
//!     DMat4::IDENTITY,
//! );
//! let mut sink = MemorySink::new();
//! let params = ChunkParams::grid(2, 2).with_strategy(StrategyKind::Selection);
//!
//! let report = chunk_object(&object, params, &mut sink)?;
//! assert_eq!(report.chunks_created, 4);
//! # Ok::<(), chunker_mesh::ChunkError>(())
//! ```

pub mod chunker;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod sink;
pub mod source;
pub mod strategy;

pub use chunker::{ChunkParams, ChunkReport, Chunker};
pub use error::{BooleanError, ChunkError};
pub use mesh::PolyMesh;
pub use ops::{BooleanSolver, SolverKind};
pub use sink::{Chunk, MemorySink, SceneSink};
pub use source::{MeshSource, SourceObject};
pub use strategy::{ChunkStrategy, CuttingStrategy, SelectionStrategy, StrategyKind};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Chunks one source object in a single call.
///
/// Convenience wrapper over [`Chunker::new`] + [`Chunker::run`].
///
/// # Arguments
///
/// * `source` - The object to chunk
/// * `params` - Grid counts, strategy and diagnostics settings
/// * `sink` - Destination for the finished chunks
///
/// # Returns
///
/// A [`ChunkReport`] summarizing the run.
pub fn chunk_object<S, K>(
    source: &S,
    params: ChunkParams,
    sink: &mut K,
) -> Result<ChunkReport, ChunkError>
where
    S: MeshSource,
    K: SceneSink,
{
    Chunker::new(params)?.run(source, sink)
}

#[cfg(test)]
mod tests;
