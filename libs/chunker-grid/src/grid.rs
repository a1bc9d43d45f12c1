//! # Grid Planning
//!
//! Derives per-cell extents from requested column/row counts and produces
//! a lazy sequence of cell descriptors tiling the bounding-box footprint.

use config::constants::CUTTER_Z_PAD;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::bounds::WorldBounds;
use crate::error::GridError;

// =============================================================================
// GRID SPEC
// =============================================================================

/// Derived grid geometry for one chunking run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of cells along X
    pub columns: u32,
    /// Number of cells along Y
    pub rows: u32,
    /// Cell extent along X (`size_x / columns`)
    pub cell_width: f64,
    /// Cell extent along Y (`size_y / rows`)
    pub cell_height: f64,
    /// World bounds the grid tiles
    pub bounds: WorldBounds,
    /// Z midpoint of the bounds
    pub z_center: f64,
    /// Half-depth of each cell, padded so coplanar faces are never clipped
    pub cell_half_depth: f64,
}

// =============================================================================
// CELL DESCRIPTOR
// =============================================================================

/// One grid cell: center, half-extents and indices.
///
/// Immutable, produced by [`GridPlan::cells`] and consumed once per cell
/// build. The X/Y bounds accessors are inclusive on both ends, which is the
/// boundary policy the selection strategy relies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellDescriptor {
    /// Column index, `0 <= ix < columns`
    pub ix: u32,
    /// Row index, `0 <= iy < rows`
    pub iy: u32,
    /// Cell center along X
    pub center_x: f64,
    /// Cell center along Y
    pub center_y: f64,
    /// Half the cell width
    pub half_width: f64,
    /// Half the cell height
    pub half_height: f64,
    /// Z center shared by every cell in the grid
    pub z_center: f64,
    /// Padded half-depth shared by every cell in the grid
    pub half_depth: f64,
}

impl CellDescriptor {
    /// Lower X bound of the cell.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.center_x - self.half_width
    }

    /// Upper X bound of the cell.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.center_x + self.half_width
    }

    /// Lower Y bound of the cell.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.center_y - self.half_height
    }

    /// Upper Y bound of the cell.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.center_y + self.half_height
    }

    /// Inclusive containment test on X/Y only; Z is unconstrained.
    #[inline]
    pub fn contains_xy(&self, point: DVec3) -> bool {
        self.min_x() <= point.x
            && point.x <= self.max_x()
            && self.min_y() <= point.y
            && point.y <= self.max_y()
    }

    /// Cell center as a world-space point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        DVec3::new(self.center_x, self.center_y, self.z_center)
    }

    /// Cell half-extents including the padded depth.
    #[inline]
    pub fn half_extents(&self) -> DVec3 {
        DVec3::new(self.half_width, self.half_height, self.half_depth)
    }
}

// =============================================================================
// GRID PLAN
// =============================================================================

/// A planned chunk grid over one object's world bounds.
///
/// # Example
///
/// ```rust
/// use chunker_grid::{box_corners, GridPlan};
/// use glam::{DMat4, DVec3};
///
/// let corners = box_corners(DVec3::new(-2.0, -1.0, 0.0), DVec3::new(2.0, 1.0, 1.0));
/// let plan = GridPlan::new(&corners, &DMat4::IDENTITY, 4, 2).unwrap();
/// assert_eq!(plan.spec().cell_width, 1.0);
/// assert_eq!(plan.cells().count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlan {
    spec: GridSpec,
}

impl GridPlan {
    /// Plans a grid from local bound corners and a world transform.
    ///
    /// Fails with [`GridError::InvalidCellCount`] when either count is zero
    /// and [`GridError::InvalidExtent`] when the transformed bounding box
    /// has non-positive width or height. Zero Z extent is tolerated: the
    /// cell depth is padded by a fixed amount either way.
    pub fn new(
        corners: &[DVec3; 8],
        transform: &DMat4,
        columns: u32,
        rows: u32,
    ) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::InvalidCellCount { columns, rows });
        }

        let bounds = WorldBounds::from_corners(corners, transform);
        let size = bounds.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(GridError::InvalidExtent {
                size_x: size.x,
                size_y: size.y,
            });
        }

        let spec = GridSpec {
            columns,
            rows,
            cell_width: size.x / f64::from(columns),
            cell_height: size.y / f64::from(rows),
            bounds,
            z_center: bounds.min.z + size.z * 0.5,
            cell_half_depth: (size.z + CUTTER_Z_PAD) * 0.5,
        };
        Ok(Self { spec })
    }

    /// The derived grid geometry.
    #[inline]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Total number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.spec.columns as usize * self.spec.rows as usize
    }

    /// The descriptor for one cell.
    pub fn cell(&self, ix: u32, iy: u32) -> CellDescriptor {
        debug_assert!(ix < self.spec.columns && iy < self.spec.rows);
        let spec = &self.spec;
        CellDescriptor {
            ix,
            iy,
            center_x: spec.bounds.min.x + spec.cell_width * f64::from(ix) + spec.cell_width * 0.5,
            center_y: spec.bounds.min.y + spec.cell_height * f64::from(iy) + spec.cell_height * 0.5,
            half_width: spec.cell_width * 0.5,
            half_height: spec.cell_height * 0.5,
            z_center: spec.z_center,
            half_depth: spec.cell_half_depth,
        }
    }

    /// Iterates all cells in run order: `ix` outer, `iy` inner.
    ///
    /// Every call returns a fresh iterator, so the sequence is restartable.
    pub fn cells(&self) -> Cells<'_> {
        Cells { plan: self, next: 0 }
    }
}

/// Iterator over a plan's cell descriptors. See [`GridPlan::cells`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    plan: &'a GridPlan,
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = CellDescriptor;

    fn next(&mut self) -> Option<CellDescriptor> {
        if self.next >= self.plan.cell_count() {
            return None;
        }
        let rows = self.plan.spec.rows as usize;
        let ix = (self.next / rows) as u32;
        let iy = (self.next % rows) as u32;
        self.next += 1;
        Some(self.plan.cell(ix, iy))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.cell_count() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

// =============================================================================
// TESTS
// =============================================================================
