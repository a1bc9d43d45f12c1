//! # Selection Strategy
//!
//! Fast, non-destructive partitioning: a face survives into a cell's chunk
//! iff every one of its vertices lies inside the cell's X/Y bounds. No
//! boolean geometry, no clipping; straddling faces are dropped entirely.

use std::collections::HashMap;

use chunker_grid::CellDescriptor;
use glam::DMat4;

use crate::error::ChunkError;
use crate::mesh::PolyMesh;

use super::ChunkStrategy;

/// Pure topological filtering; see the module docs.
///
/// Per cell this is O(V + F·k) with k the average face arity: one vertex
/// pass to build the remap, one face pass to emit surviving faces. Cost
/// over a whole run scales with `columns * rows * (V + F)` since no
/// spatial index is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionStrategy;

impl ChunkStrategy for SelectionStrategy {
    fn build_chunk(
        &self,
        local: &PolyMesh,
        transform: &DMat4,
        cell: &CellDescriptor,
    ) -> Result<PolyMesh, ChunkError> {
        let mut chunk = PolyMesh::new();
        // Source vertex index -> chunk-local index; rebuilt per cell
        let mut remap: HashMap<u32, u32> = HashMap::new();

        for (index, &position) in local.vertices().iter().enumerate() {
            let world = transform.transform_point3(position);
            if cell.contains_xy(world) {
                remap.insert(index as u32, chunk.add_vertex(world));
            }
        }

        'faces: for face in local.faces() {
            let mut mapped = Vec::with_capacity(face.len());
            for source_index in face {
                match remap.get(source_index) {
                    Some(&chunk_index) => mapped.push(chunk_index),
                    // Any vertex outside the cell drops the whole face
                    None => continue 'faces,
                }
            }
            chunk.add_face(mapped);
        }

        Ok(chunk)
    }

    fn name(&self) -> &'static str {
        "selection"
    }
}
