//! # World Bounds
//!
//! Axis-aligned world-space bounding box derived from the 8 corners of an
//! object's local bounding box.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Returns the 8 corners of an axis-aligned box given its min/max corners.
///
/// Corner order matches the local bound-corner convention used throughout
/// the pipeline: bottom face first (counter-clockwise from min), then the
/// top face in the same order.
///
/// # Example
///
/// ```rust
/// use chunker_grid::box_corners;
/// use glam::DVec3;
///
/// let corners = box_corners(DVec3::ZERO, DVec3::ONE);
/// assert_eq!(corners[0], DVec3::ZERO);
/// assert_eq!(corners[6], DVec3::ONE);
/// ```
pub fn box_corners(min: DVec3, max: DVec3) -> [DVec3; 8] {
    [
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(max.x, max.y, max.z),
        DVec3::new(min.x, max.y, max.z),
    ]
}

/// Axis-aligned bounding box in world space.
///
/// Derived by transforming the 8 local bound corners and taking the
/// componentwise min/max. The corners may come from a cached host-side
/// bounding box rather than a full vertex scan; the grid math only needs
/// the resulting extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Minimum corner (world space)
    pub min: DVec3,
    /// Maximum corner (world space)
    pub max: DVec3,
}

impl WorldBounds {
    /// Builds world bounds from 8 local corners and a world transform.
    pub fn from_corners(corners: &[DVec3; 8], transform: &DMat4) -> Self {
        let first = transform.transform_point3(corners[0]);
        let mut min = first;
        let mut max = first;
        for corner in &corners[1..] {
            let world = transform.transform_point3(*corner);
            min = min.min(world);
            max = max.max(world);
        }
        Self { min, max }
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}
