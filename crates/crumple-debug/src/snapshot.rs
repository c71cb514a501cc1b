//! Damage snapshot serialization for save/restore and inspection.
//!
//! A snapshot captures everything needed to bring a damaged body back:
//! the live shape, the pristine shape and the per-vertex counters.

use serde::{Deserialize, Serialize};

use crumple_deform::DeformationState;
use crumple_math::Vec3;
use crumple_types::{CrumpleError, CrumpleResult};

/// A complete damage snapshot.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageSnapshot {
    /// Host tick when this snapshot was taken.
    pub tick: u64,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Live vertex positions (flat: [x0, y0, z0, x1, y1, z1, ...]).
    pub positions: Vec<f32>,
    /// Pristine vertex positions (flat).
    pub pristine: Vec<f32>,
    /// Per-vertex deformation counters.
    pub counters: Vec<u32>,
    /// Per-vertex budget in effect when the snapshot was taken.
    pub max_deformations_per_vertex: u32,
}

/// Summary numbers derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageStats {
    /// Vertices moved at least once.
    pub deformed: usize,
    /// Vertices at or above the budget.
    pub exhausted: usize,
    /// Largest live-to-pristine distance.
    pub max_displacement: f32,
}

impl DamageSnapshot {
    /// Captures the live shape and `state`.
    ///
    /// Fails if `live` does not have the vertex count `state` was captured for.
    pub fn capture(
        tick: u64,
        live: &[Vec3],
        state: &DeformationState,
        max_deformations_per_vertex: u32,
    ) -> CrumpleResult<Self> {
        state.ensure_matches(live.len())?;
        Ok(Self {
            tick,
            vertex_count: live.len(),
            positions: flatten(live),
            pristine: flatten(state.pristine()),
            counters: state.counters().to_vec(),
            max_deformations_per_vertex,
        })
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> CrumpleResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| CrumpleError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format and checks the buffers agree.
    pub fn from_bytes(data: &[u8]) -> CrumpleResult<Self> {
        let snapshot: Self = bincode::deserialize(data)
            .map_err(|e| CrumpleError::Serialization(format!("snapshot: {e}")))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks that every buffer matches `vertex_count`.
    pub fn validate(&self) -> CrumpleResult<()> {
        let n = self.vertex_count;
        let flat_len = n.checked_mul(3).ok_or_else(|| {
            CrumpleError::Serialization(format!("snapshot vertex count {n} is out of range"))
        })?;
        if self.positions.len() != flat_len || self.pristine.len() != flat_len {
            return Err(CrumpleError::Serialization(format!(
                "snapshot position buffers ({}, {}) do not match {n} vertices",
                self.positions.len(),
                self.pristine.len()
            )));
        }
        if self.counters.len() != n {
            return Err(CrumpleError::Serialization(format!(
                "snapshot has {} counters for {n} vertices",
                self.counters.len()
            )));
        }
        Ok(())
    }

    /// Live positions as vectors.
    pub fn live_positions(&self) -> Vec<Vec3> {
        unflatten(&self.positions)
    }

    /// Rebuilds the state store this snapshot was captured from.
    pub fn to_state(&self) -> CrumpleResult<DeformationState> {
        DeformationState::from_parts(unflatten(&self.pristine), self.counters.clone())
    }

    pub fn stats(&self) -> DamageStats {
        let max = self.max_deformations_per_vertex;
        let max_displacement = self
            .positions
            .chunks_exact(3)
            .zip(self.pristine.chunks_exact(3))
            .map(|(l, p)| Vec3::from_slice(l).distance(Vec3::from_slice(p)))
            .fold(0.0, f32::max);
        DamageStats {
            deformed: self.counters.iter().filter(|&&c| c > 0).count(),
            exhausted: self.counters.iter().filter(|&&c| c >= max).count(),
            max_displacement,
        }
    }
}

fn flatten(vertices: &[Vec3]) -> Vec<f32> {
    vertices.iter().flat_map(|v| v.to_array()).collect()
}

fn unflatten(flat: &[f32]) -> Vec<Vec3> {
    flat.chunks_exact(3).map(Vec3::from_slice).collect()
}
