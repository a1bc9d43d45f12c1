//! # Chunker Grid
//!
//! Grid planning for mesh chunking: derives a world-space bounding box from
//! an object's local bound corners and tiles its X/Y footprint with a
//! rectangular grid of cells.
//!
//! ## Architecture
//!
//! ```text
//! bound corners + transform → chunker-grid (CellDescriptor) → chunker-mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chunker_grid::{box_corners, GridPlan};
//! use glam::{DMat4, DVec3};
//!
//! let corners = box_corners(DVec3::splat(-1.0), DVec3::splat(1.0));
//! let plan = GridPlan::new(&corners, &DMat4::IDENTITY, 2, 2).unwrap();
//! assert_eq!(plan.cell_count(), 4);
//! ```

pub mod bounds;
pub mod error;
pub mod grid;

pub use bounds::{box_corners, WorldBounds};
pub use error::GridError;
pub use grid::{CellDescriptor, Cells, GridPlan, GridSpec};
