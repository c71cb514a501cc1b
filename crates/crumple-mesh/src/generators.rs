//! Procedural mesh generators for demos and tests.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with outward-facing winding and computed normals.

use crumple_math::Vec3;

use crate::mesh::TriangleMesh;
use crate::normals::compute_vertex_normals;

/// Generates a flat rectangular panel in the XY plane, facing +Z.
///
/// The panel spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width in local units.
/// - `height` — Total height in local units.
///
/// # Example
/// ```
/// use crumple_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity((cols + 1) * (rows + 1), cols * rows * 2);
    push_face(
        &mut mesh,
        Vec3::new(-width / 2.0, -height / 2.0, 0.0),
        Vec3::new(width, 0.0, 0.0),
        Vec3::new(0.0, height, 0.0),
        cols,
        rows,
    );
    compute_vertex_normals(&mut mesh);
    mesh
}

/// Generates an axis-aligned box shell centered at the origin.
///
/// Each of the six faces is a `subdivisions × subdivisions` grid. Faces
/// do not share vertices, so edges stay crisp after normal recomputation,
/// which is how body panels of a vehicle are usually authored.
pub fn box_shell(size: Vec3, subdivisions: usize) -> TriangleMesh {
    let s = subdivisions.max(1);
    let per_face = (s + 1) * (s + 1);
    let mut mesh = TriangleMesh::with_capacity(per_face * 6, s * s * 12);
    let h = size / 2.0;

    // (origin, u span, v span) with u × v pointing outward.
    let faces = [
        (Vec3::new(h.x, -h.y, h.z), Vec3::new(0.0, 0.0, -size.z), Vec3::new(0.0, size.y, 0.0)),
        (Vec3::new(-h.x, -h.y, -h.z), Vec3::new(0.0, 0.0, size.z), Vec3::new(0.0, size.y, 0.0)),
        (Vec3::new(-h.x, h.y, h.z), Vec3::new(size.x, 0.0, 0.0), Vec3::new(0.0, 0.0, -size.z)),
        (Vec3::new(-h.x, -h.y, -h.z), Vec3::new(size.x, 0.0, 0.0), Vec3::new(0.0, 0.0, size.z)),
        (Vec3::new(-h.x, -h.y, h.z), Vec3::new(size.x, 0.0, 0.0), Vec3::new(0.0, size.y, 0.0)),
        (Vec3::new(h.x, -h.y, -h.z), Vec3::new(-size.x, 0.0, 0.0), Vec3::new(0.0, size.y, 0.0)),
    ];
    for (origin, u, v) in faces {
        push_face(&mut mesh, origin, u, v, s, s);
    }

    compute_vertex_normals(&mut mesh);
    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius` — Sphere radius in local units.
/// - `stacks` — Number of horizontal slices (latitude divisions).
/// - `slices` — Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity((stacks + 1) * (slices + 1), stacks * slices * 2);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        for j in 0..=slices {
            let theta = std::f32::consts::TAU * j as f32 / slices as f32;
            let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            mesh.push_vertex(dir * radius);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle(a, a + 1, b);
            }
            if i != stacks - 1 {
                mesh.push_triangle(a + 1, b + 1, b);
            }
        }
    }

    compute_vertex_normals(&mut mesh);
    mesh
}

/// Appends a `cols × rows` grid spanning `origin + [0,1]·u + [0,1]·v`,
/// wound so the face normal points along `u × v`.
fn push_face(mesh: &mut TriangleMesh, origin: Vec3, u: Vec3, v: Vec3, cols: usize, rows: usize) {
    let base = mesh.vertex_count() as u32;
    let stride = (cols + 1) as u32;

    for j in 0..=rows {
        for i in 0..=cols {
            let fu = i as f32 / cols as f32;
            let fv = j as f32 / rows as f32;
            mesh.push_vertex(origin + u * fu + v * fv);
        }
    }

    for j in 0..rows as u32 {
        for i in 0..cols as u32 {
            let bl = base + j * stride + i;
            let br = bl + 1;
            let tl = bl + stride;
            let tr = tl + 1;
            mesh.push_triangle(bl, br, tr);
            mesh.push_triangle(bl, tr, tl);
        }
    }
}
