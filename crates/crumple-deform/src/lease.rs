//! Scoped write access to a mesh vertex buffer.
//!
//! A [`BufferLease`] copies the positions out of a mesh, hands them out
//! as a mutable slice, and on drop writes the whole buffer back and
//! rebuilds normals exactly once. Every exit path after acquisition
//! publishes a complete buffer.

use std::ops::{Deref, DerefMut};

use crumple_math::Vec3;
use crumple_mesh::DeformableMesh;

/// Exclusive, scoped access to a mesh's vertex positions.
pub struct BufferLease<'a, M: DeformableMesh + ?Sized> {
    mesh: &'a mut M,
    positions: Vec<Vec3>,
}

impl<'a, M: DeformableMesh + ?Sized> BufferLease<'a, M> {
    /// Reads the current positions out of `mesh`.
    pub fn acquire(mesh: &'a mut M) -> Self {
        let positions = mesh.read_positions();
        Self { mesh, positions }
    }
}

impl<M: DeformableMesh + ?Sized> Deref for BufferLease<'_, M> {
    type Target = [Vec3];

    fn deref(&self) -> &[Vec3] {
        &self.positions
    }
}

impl<M: DeformableMesh + ?Sized> DerefMut for BufferLease<'_, M> {
    fn deref_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }
}

impl<M: DeformableMesh + ?Sized> Drop for BufferLease<'_, M> {
    fn drop(&mut self) {
        // A panicking pass must not publish a half-written buffer.
        if std::thread::panicking() {
            return;
        }
        self.mesh.write_positions(&self.positions);
        self.mesh.recalculate_normals();
    }
}
