//! # Scene Sink
//!
//! Destination for finished chunks. The host decides what a "collection"
//! means (a scene group, a directory of exports, a test vector); the core
//! only names it and assumes no selection or undo state on the other side.

use chunker_grid::CellDescriptor;
use serde::{Deserialize, Serialize};

use crate::mesh::PolyMesh;

/// One finished chunk: the cell it came from and its world-space mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Column index of the originating cell
    pub ix: u32,
    /// Row index of the originating cell
    pub iy: u32,
    /// Generated name, `{object}_Chunk_{ix}_{iy}`
    pub name: String,
    /// Independently owned output mesh
    pub mesh: PolyMesh,
}

impl Chunk {
    pub(crate) fn new(source_name: &str, cell: &CellDescriptor, mesh: PolyMesh) -> Self {
        Self {
            ix: cell.ix,
            iy: cell.iy,
            name: format!("{}_Chunk_{}_{}", source_name, cell.ix, cell.iy),
            mesh,
        }
    }

    /// True when the cell yielded no faces. The sink may skip or keep it.
    pub fn is_empty(&self) -> bool {
        self.mesh.face_count() == 0
    }
}

/// Capability: accept finished chunks, grouped under a named collection.
pub trait SceneSink {
    /// Called once per cell, in run order, including empty chunks.
    fn accept_chunk(&mut self, collection: &str, chunk: Chunk);
}

/// In-memory sink that keeps every chunk in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Collection name of the first accepted chunk
    pub collection: Option<String>,
    /// Accepted chunks in run order
    pub chunks: Vec<Chunk>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunks that actually carry geometry.
    pub fn non_empty(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|chunk| !chunk.is_empty())
    }
}

impl SceneSink for MemorySink {
    fn accept_chunk(&mut self, collection: &str, chunk: Chunk) {
        if self.collection.is_none() {
            self.collection = Some(collection.to_string());
        }
        self.chunks.push(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_naming_and_empty_flag() {
        let cell = CellDescriptor {
            ix: 2,
            iy: 5,
            center_x: 0.0,
            center_y: 0.0,
            half_width: 1.0,
            half_height: 1.0,
            z_center: 0.0,
            half_depth: 1.0,
        };
        let chunk = Chunk::new("Rock", &cell, PolyMesh::new());
        assert_eq!(chunk.name, "Rock_Chunk_2_5");
        assert!(chunk.is_empty());
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let mut sink = MemorySink::new();
        let cell = CellDescriptor {
            ix: 0,
            iy: 0,
            center_x: 0.0,
            center_y: 0.0,
            half_width: 1.0,
            half_height: 1.0,
            z_center: 0.0,
            half_depth: 1.0,
        };
        sink.accept_chunk("Rock_Chunks", Chunk::new("Rock", &cell, PolyMesh::new()));
        assert_eq!(sink.collection.as_deref(), Some("Rock_Chunks"));
        assert_eq!(sink.chunks.len(), 1);
        assert_eq!(sink.non_empty().count(), 0);
    }
}
