//! # Run Driver
//!
//! Orchestrates one chunking run: validate parameters, plan the grid,
//! select a strategy once, build every cell, hand chunks to the sink.
//!
//! Structural failures (bad parameters, bad extents) surface before the
//! sink sees anything. Per-cell boolean failures degrade to empty chunks
//! so one bad cell cannot abort a grid-wide batch.

use chunker_grid::{CellDescriptor, GridPlan};
use config::constants::MAX_GRID_DIM;
use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::error::ChunkError;
use crate::mesh::PolyMesh;
use crate::sink::{Chunk, SceneSink};
use crate::source::MeshSource;
use crate::strategy::{ChunkStrategy, StrategyKind};

// =============================================================================
// PARAMETERS
// =============================================================================

/// Configuration for one chunking run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkParams {
    /// Cell count along X, `1..=MAX_GRID_DIM`
    pub columns: u32,
    /// Cell count along Y, `1..=MAX_GRID_DIM`
    pub rows: u32,
    /// Which strategy builds the chunks
    pub strategy: StrategyKind,
    /// Emit per-cell diagnostics at info level instead of debug
    pub verbose: bool,
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self {
            columns: config::constants::DEFAULT_COLUMNS,
            rows: config::constants::DEFAULT_ROWS,
            strategy: StrategyKind::default(),
            verbose: false,
        }
    }
}

impl ChunkParams {
    /// Creates parameters with the given grid counts and defaults otherwise.
    pub fn grid(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Selects the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    fn validate(&self) -> Result<(), ChunkError> {
        for (axis, count) in [("columns", self.columns), ("rows", self.rows)] {
            if count == 0 || count > MAX_GRID_DIM {
                return Err(ChunkError::invalid_params(format!(
                    "{axis} must be in 1..={MAX_GRID_DIM}, got {count}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Summary of a finished run, for diagnostics and downstream tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkReport {
    /// Grid columns used
    pub columns: u32,
    /// Grid rows used
    pub rows: u32,
    /// World-space bounding box size
    pub size: [f64; 3],
    /// Strategy name
    pub strategy: String,
    /// Total chunks handed to the sink
    pub chunks_created: usize,
    /// Cells whose chunk carried no faces
    pub empty_cells: Vec<(u32, u32)>,
}

// =============================================================================
// CHUNKER
// =============================================================================

/// A configured chunking run.
///
/// # Example
///
/// ```rust
/// use chunker_mesh::{ChunkParams, Chunker, MemorySink, PolyMesh, SourceObject, StrategyKind};
/// use glam::{DMat4, DVec3};
///
/// let object = SourceObject::new(
///     "Crate",
///     PolyMesh::cuboid(DVec3::ZERO, DVec3::ONE),
///     DMat4::IDENTITY,
/// );
/// let params = ChunkParams::grid(2, 2).with_strategy(StrategyKind::Selection);
/// let mut sink = MemorySink::new();
///
/// let report = Chunker::new(params).unwrap().run(&object, &mut sink).unwrap();
/// assert_eq!(report.chunks_created, 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    params: ChunkParams,
}

impl Chunker {
    /// Creates a chunker, validating parameters upfront.
    pub fn new(params: ChunkParams) -> Result<Self, ChunkError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Runs the chunking over `source`, feeding finished chunks to `sink`.
    ///
    /// Fails before touching the sink when the grid cannot be planned.
    /// Returns a per-run report; empty cells are listed there and their
    /// chunks are still handed to the sink, flagged via [`Chunk::is_empty`].
    pub fn run<S, K>(&self, source: &S, sink: &mut K) -> Result<ChunkReport, ChunkError>
    where
        S: MeshSource,
        K: SceneSink,
    {
        let transform = source.world_transform();
        let corners = source.local_bound_corners();
        let plan = GridPlan::new(&corners, &transform, self.params.columns, self.params.rows)?;

        let strategy = self.params.strategy.instantiate();
        let spec = plan.spec();
        let size = spec.bounds.size();
        log::info!(
            "chunking '{}': grid {}x{}, size ({:.2}, {:.2}, {:.2}), strategy {}",
            source.name(),
            spec.columns,
            spec.rows,
            size.x,
            size.y,
            size.z,
            strategy.name(),
        );

        let cells: Vec<CellDescriptor> = plan.cells().collect();
        let built = build_all(strategy.as_ref(), source.mesh(), &transform, &cells)?;

        let collection = format!("{}_Chunks", source.name());
        let mut empty_cells = Vec::new();
        let mut chunks_created = 0;

        for (cell, mut mesh) in cells.into_iter().zip(built) {
            mesh.compute_normals();
            let chunk = Chunk::new(source.name(), &cell, mesh);

            if self.params.verbose {
                log::info!(
                    "chunk ({}, {}) -> vertices: {}, faces: {}",
                    cell.ix,
                    cell.iy,
                    chunk.mesh.vertex_count(),
                    chunk.mesh.face_count(),
                );
            } else {
                log::debug!(
                    "chunk ({}, {}) -> vertices: {}, faces: {}",
                    cell.ix,
                    cell.iy,
                    chunk.mesh.vertex_count(),
                    chunk.mesh.face_count(),
                );
            }

            if chunk.is_empty() {
                empty_cells.push((cell.ix, cell.iy));
            }
            sink.accept_chunk(&collection, chunk);
            chunks_created += 1;
        }

        log::info!(
            "chunking '{}' complete: {} chunks created, {} empty",
            source.name(),
            chunks_created,
            empty_cells.len(),
        );

        Ok(ChunkReport {
            columns: spec.columns,
            rows: spec.rows,
            size: [size.x, size.y, size.z],
            strategy: strategy.name().to_string(),
            chunks_created,
            empty_cells,
        })
    }
}

/// Builds one cell, downgrading boolean solver failures to empty chunks.
fn build_cell(
    strategy: &dyn ChunkStrategy,
    local: &PolyMesh,
    transform: &DMat4,
    cell: &CellDescriptor,
) -> Result<PolyMesh, ChunkError> {
    match strategy.build_chunk(local, transform, cell) {
        Err(ChunkError::Boolean(err)) => {
            log::warn!(
                "cell ({}, {}): boolean solve failed ({err}), emitting empty chunk",
                cell.ix,
                cell.iy,
            );
            Ok(PolyMesh::new())
        }
        other => other,
    }
}

#[cfg(not(feature = "parallel"))]
fn build_all(
    strategy: &dyn ChunkStrategy,
    local: &PolyMesh,
    transform: &DMat4,
    cells: &[CellDescriptor],
) -> Result<Vec<PolyMesh>, ChunkError> {
    cells
        .iter()
        .map(|cell| build_cell(strategy, local, transform, cell))
        .collect()
}

/// Cells are independent: each build only reads the source and writes its
/// own mesh. Collecting keeps results in cell order, so the output is
/// deterministic regardless of scheduling.
#[cfg(feature = "parallel")]
fn build_all(
    strategy: &dyn ChunkStrategy,
    local: &PolyMesh,
    transform: &DMat4,
    cells: &[CellDescriptor],
) -> Result<Vec<PolyMesh>, ChunkError> {
    use rayon::prelude::*;

    cells
        .par_iter()
        .map(|cell| build_cell(strategy, local, transform, cell))
        .collect()
}
