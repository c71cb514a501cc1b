//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use crumple_math::Vec3;
use crumple_types::constants::NORMAL_EPSILON;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's unnormalized face normal (magnitude = 2 × area) is
/// accumulated at its three vertices, then every vertex normal is
/// normalized. Vertices touched by no triangle, or whose contributions
/// cancel out, keep a zero normal.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();
    let mut accum = vec![Vec3::ZERO; n];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
        let pa = mesh.position(a);
        let face = (mesh.position(b) - pa).cross(mesh.position(c) - pa);

        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    for (i, sum) in accum.into_iter().enumerate() {
        let len = sum.length();
        let normal = if len > NORMAL_EPSILON { sum / len } else { Vec3::ZERO };
        mesh.normal_x[i] = normal.x;
        mesh.normal_y[i] = normal.y;
        mesh.normal_z[i] = normal.z;
    }
}

/// Area of triangle `t`.
pub fn triangle_area(mesh: &TriangleMesh, t: usize) -> f32 {
    let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
    let pa = mesh.position(a);
    0.5 * (mesh.position(b) - pa).cross(mesh.position(c) - pa).length()
}
