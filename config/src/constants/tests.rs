//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let defaults = ChunkerDefaults::default();
    assert!(defaults.columns >= 1);
    assert!(defaults.rows >= 1);
    assert!(defaults.cutter_z_pad > 0.0);
    assert!(GEOM_EPSILON > 0.0);
    assert!(PLANE_EPSILON > GEOM_EPSILON);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ChunkerDefaults::new(0, 4, CUTTER_Z_PAD).unwrap_err(),
        ConfigError::InvalidGridCount(0)
    );
    assert_eq!(
        ChunkerDefaults::new(4, MAX_GRID_DIM + 1, CUTTER_Z_PAD).unwrap_err(),
        ConfigError::InvalidGridCount(MAX_GRID_DIM + 1)
    );
    assert_eq!(
        ChunkerDefaults::new(4, 4, -0.5).unwrap_err(),
        ConfigError::InvalidPad(-0.5)
    );
}

/// Accepts well-formed values.
#[test]
fn new_accepts_valid_inputs() {
    let defaults = ChunkerDefaults::new(8, 8, 0.25).unwrap();
    assert_eq!(defaults.columns, 8);
    assert_eq!(defaults.rows, 8);
    assert_eq!(defaults.cutter_z_pad, 0.25);
}
