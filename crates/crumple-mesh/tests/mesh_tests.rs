//! Integration tests for crumple-mesh.

use crumple_math::Vec3;
use crumple_mesh::generators::{box_shell, quad_grid, uv_sphere};
use crumple_mesh::normals::{compute_vertex_normals, triangle_area};
use crumple_mesh::{DeformableMesh, TriangleMesh};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0, 0.0, 0.0],
        normal_y: vec![0.0, 0.0, 0.0],
        normal_z: vec![1.0, 1.0, 1.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_nan_position() {
    let mut mesh = make_single_triangle();
    mesh.pos_z[1] = f32::NAN;
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert!((mesh.normal(0) - Vec3::Z).length() < 1e-6);
}

#[test]
fn from_interleaved_rejects_ragged() {
    assert!(TriangleMesh::from_interleaved(&[0.0, 1.0], &[]).is_err());
}

#[test]
fn mesh_json_round_trip() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, mesh);
}

// ─── DeformableMesh Tests ─────────────────────────────────────

#[test]
fn read_write_positions() {
    let mut mesh = make_single_triangle();
    let mut positions = mesh.read_positions();
    assert_eq!(positions.len(), 3);

    positions[2] = Vec3::new(0.0, 2.0, 0.5);
    mesh.write_positions(&positions);
    assert_eq!(mesh.position(2), Vec3::new(0.0, 2.0, 0.5));
    assert_eq!(DeformableMesh::vertex_count(&mesh), 3);
}

#[test]
fn recalculate_normals_follows_geometry() {
    let mut mesh = quad_grid(1, 1, 1.0, 1.0);
    // Reverse the winding so the panel faces -Z.
    for t in 0..mesh.triangle_count() {
        mesh.indices.swap(t * 3 + 1, t * 3 + 2);
    }
    mesh.recalculate_normals();
    for i in 0..mesh.vertex_count() {
        assert!((mesh.normal(i) + Vec3::Z).length() < 1e-5);
    }
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_face_z() {
    let mut mesh = quad_grid(3, 3, 2.0, 2.0);
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal(i);
        assert!((n - Vec3::Z).length() < 1e-5, "Vertex {} normal {:?}", i, n);
    }
}

#[test]
fn isolated_vertex_keeps_zero_normal() {
    let mut mesh = make_single_triangle();
    mesh.push_vertex(Vec3::new(5.0, 5.0, 5.0));
    compute_vertex_normals(&mut mesh);
    assert_eq!(mesh.normal(3), Vec3::ZERO);
}

#[test]
fn triangle_area_unit() {
    let mesh = make_single_triangle();
    assert!((triangle_area(&mesh, 0) - 0.5).abs() < 1e-6);
}

#[test]
fn panel_surface_area() {
    let mesh = quad_grid(4, 3, 2.0, 1.5);
    assert!((mesh.surface_area() - 3.0).abs() < 1e-5);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_counts() {
    let mesh = quad_grid(4, 3, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 5 * 4);
    assert_eq!(mesh.triangle_count(), 4 * 3 * 2);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_extent() {
    let mesh = quad_grid(2, 2, 4.0, 2.0);
    let min_x = mesh.pos_x.iter().copied().fold(f32::INFINITY, f32::min);
    let max_y = mesh.pos_y.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert!((min_x + 2.0).abs() < 1e-6);
    assert!((max_y - 1.0).abs() < 1e-6);
}

#[test]
fn box_shell_counts_and_validity() {
    let mesh = box_shell(Vec3::new(4.0, 1.5, 2.0), 2);
    assert_eq!(mesh.vertex_count(), 6 * 9);
    assert_eq!(mesh.triangle_count(), 6 * 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn box_shell_normals_point_outward() {
    let mesh = box_shell(Vec3::splat(2.0), 3);
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        let n = mesh.normal(i);
        assert!(p.dot(n) > 0.0, "Vertex {} at {:?} has inward normal {:?}", i, p, n);
    }
}

#[test]
fn uv_sphere_on_radius() {
    let radius = 1.5;
    let mesh = uv_sphere(radius, 8, 12);
    assert!(mesh.validate().is_ok());
    for i in 0..mesh.vertex_count() {
        assert!((mesh.position(i).length() - radius).abs() < 1e-4);
    }
}

#[test]
fn uv_sphere_normals_point_outward() {
    let mesh = uv_sphere(1.0, 8, 12);
    // Pole vertices only touch one ring, so check the equator band.
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        if p.y.abs() < 0.5 {
            assert!(p.dot(mesh.normal(i)) > 0.0);
        }
    }
}
