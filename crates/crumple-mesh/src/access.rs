//! Vertex buffer accessor.
//!
//! The deformation core never owns a mesh. It reads the buffer,
//! writes a whole new buffer back, and asks the mesh to rebuild
//! its normals.

use crumple_math::Vec3;

/// A mesh whose vertex positions can be read and replaced.
///
/// Topology is fixed: `write_positions` is always called with exactly
/// `vertex_count()` positions.
pub trait DeformableMesh {
    /// Number of vertices in the buffer.
    fn vertex_count(&self) -> usize;

    /// Copies the current vertex positions (local space) out of the mesh.
    fn read_positions(&self) -> Vec<Vec3>;

    /// Replaces every vertex position.
    fn write_positions(&mut self, positions: &[Vec3]);

    /// Rebuilds vertex normals from the current positions.
    fn recalculate_normals(&mut self);
}
