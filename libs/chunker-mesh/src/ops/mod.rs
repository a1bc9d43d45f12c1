//! # Mesh Operations
//!
//! Boolean geometry operations used by the cutting strategy.

pub mod boolean;

pub use boolean::{solver, BooleanSolver, BspSolver, ConvexClipSolver, SolverKind};
