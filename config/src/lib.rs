//! # Config Crate
//!
//! Centralized configuration constants for the mesh chunker pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CUTTER_Z_PAD, GEOM_EPSILON};
//!
//! // Use GEOM_EPSILON for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < GEOM_EPSILON);
//!
//! // The cutter volume is padded along Z so coplanar top/bottom faces
//! // never sit exactly on the cutting boundary
//! assert!(CUTTER_Z_PAD > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: No external crates, safe to depend on from anywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
