//! # Grid Errors
//!
//! Error types for grid planning.

use thiserror::Error;

/// Errors that can occur while planning a chunk grid.
///
/// Both variants are structural: they are surfaced before any chunk is
/// built and before any shared state is touched.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Bounding box has non-positive X or Y extent
    #[error("invalid bounding box extent: size_x={size_x}, size_y={size_y} (both must be positive)")]
    InvalidExtent { size_x: f64, size_y: f64 },

    /// Requested grid dimensions are out of range
    #[error("invalid grid dimensions: {columns}x{rows} (both must be >= 1)")]
    InvalidCellCount { columns: u32, rows: u32 },
}
