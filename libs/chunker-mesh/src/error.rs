//! # Chunking Errors
//!
//! Error types for chunk building.
//!
//! Structural errors (bad grid counts, bad extents, unusable cutter) fail a
//! run before any chunk reaches the sink. Per-cell solver failures are
//! isolated by the driver and degrade to empty chunks.

use chunker_grid::GridError;
use thiserror::Error;

/// Errors that can occur during a chunking run.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Grid planning failed before any chunk was built
    #[error("grid planning failed: {0}")]
    Grid(#[from] GridError),

    /// Chunk parameters are out of range
    #[error("invalid chunk parameters: {message}")]
    InvalidParams { message: String },

    /// The boolean solver could not run at all
    #[error("boolean solve failed: {0}")]
    Boolean(#[from] BooleanError),
}

impl ChunkError {
    /// Creates an invalid-parameters error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}

/// Errors reported by a boolean solver.
#[derive(Debug, Error)]
pub enum BooleanError {
    /// The cutter volume yields no usable clipping planes
    #[error("degenerate cutter volume: {message}")]
    DegenerateCutter { message: String },
}

impl BooleanError {
    /// Creates a degenerate-cutter error.
    pub fn degenerate_cutter(message: impl Into<String>) -> Self {
        Self::DegenerateCutter {
            message: message.into(),
        }
    }
}
