//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! Each coordinate channel is stored contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Deformation walks every vertex once per impact, so the channels are
//! laid out for linear scans.

use serde::{Deserialize, Serialize};

use crumple_math::Vec3;
use crumple_types::{CrumpleError, CrumpleResult};

use crate::access::DeformableMesh;
use crate::normals::{compute_vertex_normals, triangle_area};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// Positions are in the body's local space. Triangle indices
/// reference into the per-vertex arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Sum of all triangle areas.
    pub fn surface_area(&self) -> f32 {
        (0..self.triangle_count()).map(|t| triangle_area(self, t)).sum()
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Appends a vertex with a zero normal and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        self.normal_x.push(0.0);
        self.normal_y.push(0.0);
        self.normal_z.push(0.0);
        index
    }

    /// Appends a triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    /// - All positions are finite
    pub fn validate(&self) -> CrumpleResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(CrumpleError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(CrumpleError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(CrumpleError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        if let Some((i, &idx)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &idx)| idx as usize >= n)
        {
            return Err(CrumpleError::InvalidMesh(format!(
                "Index {} at position {} is out of range (vertex count: {})",
                idx, i, n
            )));
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(CrumpleError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        if let Some(i) = (0..n).find(|&i| !self.position(i).is_finite()) {
            return Err(CrumpleError::InvalidMesh(format!(
                "Vertex {} has a non-finite position",
                i
            )));
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout and
    /// computes normals.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> CrumpleResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(CrumpleError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.push_vertex(Vec3::new(p[0], p[1], p[2]));
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        compute_vertex_normals(&mut mesh);
        Ok(mesh)
    }
}

impl DeformableMesh for TriangleMesh {
    fn vertex_count(&self) -> usize {
        TriangleMesh::vertex_count(self)
    }

    fn read_positions(&self) -> Vec<Vec3> {
        (0..self.vertex_count()).map(|i| self.position(i)).collect()
    }

    fn write_positions(&mut self, positions: &[Vec3]) {
        debug_assert_eq!(positions.len(), self.vertex_count());
        for (i, &p) in positions.iter().enumerate() {
            self.set_position(i, p);
        }
    }

    fn recalculate_normals(&mut self) {
        compute_vertex_normals(self);
    }
}
