//! Centralized configuration values shared across the mesh chunker pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used by geometry kernels for degeneracy checks.
///
/// # Examples
/// ```
/// use config::constants::GEOM_EPSILON;
/// assert!(GEOM_EPSILON < 1.0e-6);
/// ```
pub const GEOM_EPSILON: f64 = 1.0e-9;

/// Plane-thickness epsilon for BSP point classification. Points within this
/// distance of a plane are treated as coplanar.
///
/// # Examples
/// ```
/// use config::constants::PLANE_EPSILON;
/// assert!(PLANE_EPSILON > 0.0);
/// ```
pub const PLANE_EPSILON: f64 = 1.0e-5;

/// Extra depth added to the cutter volume along Z so that faces coplanar
/// with the top or bottom of the bounding box are never clipped away.
/// The cell half-depth is `(size_z + CUTTER_Z_PAD) / 2`.
///
/// # Examples
/// ```
/// use config::constants::CUTTER_Z_PAD;
/// assert_eq!(CUTTER_Z_PAD, 0.1);
/// ```
pub const CUTTER_Z_PAD: f64 = 0.1;

/// Maximum accepted column or row count for a chunk grid.
///
/// # Examples
/// ```
/// use config::constants::MAX_GRID_DIM;
/// assert!(MAX_GRID_DIM >= 2);
/// ```
pub const MAX_GRID_DIM: u32 = 100;

/// Default column count when the caller does not specify one.
pub const DEFAULT_COLUMNS: u32 = 1;

/// Default row count when the caller does not specify one.
pub const DEFAULT_ROWS: u32 = 1;

/// Immutable snapshot of chunker defaults that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ChunkerDefaults;
/// let defaults = ChunkerDefaults::default();
/// assert!(defaults.cutter_z_pad > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkerDefaults {
    /// Default column count for new chunk runs.
    pub columns: u32,
    /// Default row count for new chunk runs.
    pub rows: u32,
    /// Z padding applied to the cutter volume.
    pub cutter_z_pad: f64,
}

impl ChunkerDefaults {
    /// Builds a defaults snapshot enforcing strict validation of the supplied
    /// grid counts and cutter padding.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ChunkerDefaults;
    /// let defaults = ChunkerDefaults::new(4, 4, 0.1).expect("valid defaults");
    /// assert_eq!(defaults.columns, 4);
    /// ```
    pub fn new(columns: u32, rows: u32, cutter_z_pad: f64) -> Result<Self, ConfigError> {
        if columns == 0 || columns > MAX_GRID_DIM {
            return Err(ConfigError::InvalidGridCount(columns));
        }
        if rows == 0 || rows > MAX_GRID_DIM {
            return Err(ConfigError::InvalidGridCount(rows));
        }
        if cutter_z_pad < 0.0 {
            return Err(ConfigError::InvalidPad(cutter_z_pad));
        }
        Ok(Self {
            columns,
            rows,
            cutter_z_pad,
        })
    }
}

impl Default for ChunkerDefaults {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cutter_z_pad: CUTTER_Z_PAD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a grid count is zero or exceeds [`MAX_GRID_DIM`].
    InvalidGridCount(u32),
    /// Raised when the cutter padding is negative.
    InvalidPad(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridCount(value) => {
                write!(f, "grid count must be in 1..={MAX_GRID_DIM}: {value}")
            }
            ConfigError::InvalidPad(value) => {
                write!(f, "cutter padding must be non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
