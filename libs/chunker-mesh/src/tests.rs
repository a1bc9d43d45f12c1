//! # End-to-End Chunking Tests

use crate::{
    chunk_object, ChunkError, ChunkParams, MemorySink, PolyMesh, SolverKind, SourceObject,
    StrategyKind,
};
use glam::{DMat4, DVec3};

fn unit_cube(name: &str) -> SourceObject {
    SourceObject::new(name, PolyMesh::cuboid(DVec3::ZERO, DVec3::ONE), DMat4::IDENTITY)
}

fn flat_quad() -> PolyMesh {
    let mut mesh = PolyMesh::new();
    mesh.add_vertex(DVec3::new(-1.0, -1.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, -1.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
    mesh.add_vertex(DVec3::new(-1.0, 1.0, 0.0));
    mesh.add_face(vec![0, 1, 2, 3]);
    mesh
}

#[test]
fn test_single_cell_selection_is_identity() {
    let object = unit_cube("Cube");
    let params = ChunkParams::grid(1, 1).with_strategy(StrategyKind::Selection);
    let mut sink = MemorySink::new();

    let report = chunk_object(&object, params, &mut sink).unwrap();

    assert_eq!(report.chunks_created, 1);
    assert!(report.empty_cells.is_empty());
    let chunk = &sink.chunks[0];
    assert_eq!(chunk.name, "Cube_Chunk_0_0");
    assert_eq!(chunk.mesh.vertex_count(), 8);
    assert_eq!(chunk.mesh.face_count(), 6);
}

#[test]
fn test_straddling_face_dropped_on_both_sides() {
    // One quad spanning the x=0 cell boundary of a 2x1 grid: under
    // selection no cell keeps it, so both chunks carry vertices but no faces
    let object = SourceObject::new("Quad", flat_quad(), DMat4::IDENTITY);
    let params = ChunkParams::grid(2, 1).with_strategy(StrategyKind::Selection);
    let mut sink = MemorySink::new();

    let report = chunk_object(&object, params, &mut sink).unwrap();

    assert_eq!(report.chunks_created, 2);
    assert_eq!(report.empty_cells, vec![(0, 0), (1, 0)]);
    for chunk in &sink.chunks {
        assert_eq!(chunk.mesh.face_count(), 0);
        assert_eq!(chunk.mesh.vertex_count(), 2);
    }
}

#[test]
fn test_invalid_extent_has_no_side_effects() {
    // Zero extent along X fails planning before any chunk is built
    let mut line = PolyMesh::new();
    line.add_vertex(DVec3::new(0.0, -1.0, -1.0));
    line.add_vertex(DVec3::new(0.0, 1.0, -1.0));
    line.add_vertex(DVec3::new(0.0, 0.0, 1.0));
    line.add_face(vec![0, 1, 2]);
    let object = SourceObject::new("Line", line, DMat4::IDENTITY);

    let mut sink = MemorySink::new();
    let err = chunk_object(&object, ChunkParams::grid(3, 3), &mut sink).unwrap_err();

    assert!(matches!(err, ChunkError::Grid(_)));
    assert!(sink.chunks.is_empty());
    assert!(sink.collection.is_none());
}

#[test]
fn test_invalid_grid_counts_rejected() {
    let object = unit_cube("Cube");
    let mut sink = MemorySink::new();

    let err = chunk_object(&object, ChunkParams::grid(0, 2), &mut sink).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidParams { .. }));
    assert!(sink.chunks.is_empty());
}

#[test]
fn test_cutting_grid_covers_cube() {
    let object = unit_cube("Cube");
    let params = ChunkParams::grid(2, 2).with_strategy(StrategyKind::Cutting(SolverKind::Exact));
    let mut sink = MemorySink::new();

    let report = chunk_object(&object, params, &mut sink).unwrap();

    assert_eq!(report.chunks_created, 4);
    assert!(report.empty_cells.is_empty());
    assert_eq!(report.size, [2.0, 2.0, 2.0]);

    // Every chunk stays inside its cell's X/Y slab and spans the full Z range
    for chunk in &sink.chunks {
        let (min, max) = chunk.mesh.bounding_box();
        assert!(min.x >= -1.0 - 1e-9 && max.x <= 1.0 + 1e-9);
        assert!(min.y >= -1.0 - 1e-9 && max.y <= 1.0 + 1e-9);
        assert!((min.z - -1.0).abs() < 1e-9);
        assert!((max.z - 1.0).abs() < 1e-9);
        assert!(max.x - min.x <= 1.0 + 1e-9);
        assert!(max.y - min.y <= 1.0 + 1e-9);
    }
}

#[test]
fn test_cutting_respects_world_transform() {
    // A translated cube: the grid follows the world-space bounds
    let transform = DMat4::from_translation(DVec3::new(10.0, 0.0, 0.0));
    let object = SourceObject::new("Moved", PolyMesh::cuboid(DVec3::ZERO, DVec3::ONE), transform);
    let params = ChunkParams::grid(2, 1).with_strategy(StrategyKind::Cutting(SolverKind::Exact));
    let mut sink = MemorySink::new();

    let report = chunk_object(&object, params, &mut sink).unwrap();

    assert!(report.empty_cells.is_empty());
    let (min, max) = sink.chunks[0].mesh.bounding_box();
    assert!((min.x - 9.0).abs() < 1e-9);
    assert!((max.x - 10.0).abs() < 1e-9);
}

#[test]
fn test_runs_are_idempotent() {
    let object = unit_cube("Cube");
    let params = ChunkParams::grid(2, 2).with_strategy(StrategyKind::Selection);

    let mut first = MemorySink::new();
    let mut second = MemorySink::new();
    chunk_object(&object, params, &mut first).unwrap();
    chunk_object(&object, params, &mut second).unwrap();

    assert_eq!(first.chunks, second.chunks);
}

#[test]
fn test_boundary_vertices_are_inclusive() {
    // A triangle entirely on the shared x=0 edge belongs to both cells
    let mut mesh = PolyMesh::new();
    mesh.add_vertex(DVec3::new(0.0, -0.5, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 0.5, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 0.0, 1.0));
    mesh.add_face(vec![0, 1, 2]);
    // Widen the bounds so the grid splits at x=0
    mesh.add_vertex(DVec3::new(-1.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
    let object = SourceObject::new("Edge", mesh, DMat4::IDENTITY);

    let params = ChunkParams::grid(2, 1).with_strategy(StrategyKind::Selection);
    let mut sink = MemorySink::new();
    chunk_object(&object, params, &mut sink).unwrap();

    assert_eq!(sink.chunks[0].mesh.face_count(), 1);
    assert_eq!(sink.chunks[1].mesh.face_count(), 1);
}

#[test]
fn test_fast_solver_end_to_end() {
    let object = unit_cube("Cube");
    let params = ChunkParams::grid(2, 2).with_strategy(StrategyKind::Cutting(SolverKind::Fast));
    let mut sink = MemorySink::new();

    let report = chunk_object(&object, params, &mut sink).unwrap();

    assert_eq!(report.strategy, "cutting");
    assert_eq!(report.chunks_created, 4);
    for chunk in sink.non_empty() {
        let (min, max) = chunk.mesh.bounding_box();
        assert!(max.x - min.x <= 1.0 + 1e-9);
        assert!(max.y - min.y <= 1.0 + 1e-9);
    }
}

#[test]
fn test_report_matches_sink_contents() {
    let object = unit_cube("Cube");
    let params = ChunkParams::grid(3, 2).with_strategy(StrategyKind::Selection);
    let mut sink = MemorySink::new();

    let report = chunk_object(&object, params, &mut sink).unwrap();

    assert_eq!(report.columns, 3);
    assert_eq!(report.rows, 2);
    assert_eq!(report.chunks_created, sink.chunks.len());
    let empty_in_sink: Vec<_> = sink
        .chunks
        .iter()
        .filter(|c| c.is_empty())
        .map(|c| (c.ix, c.iy))
        .collect();
    assert_eq!(report.empty_cells, empty_in_sink);
}
