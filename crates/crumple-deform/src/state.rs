//! Deformation state store.
//!
//! Holds the pristine vertex positions captured at initialization and a
//! dense per-vertex move counter. The pristine copy is never mutated
//! after capture; counters only ever grow until cleared by a reset.

use serde::{Deserialize, Serialize};

use crumple_math::Vec3;
use crumple_types::{CrumpleError, CrumpleResult};

/// Pristine snapshot plus per-vertex deformation counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformationState {
    pristine: Vec<Vec3>,
    counters: Vec<u32>,
}

impl DeformationState {
    /// Captures `vertices` as the pristine shape with all counters at zero.
    pub fn capture(vertices: &[Vec3]) -> Self {
        Self {
            pristine: vertices.to_vec(),
            counters: vec![0; vertices.len()],
        }
    }

    /// Rebuilds a state from previously captured parts.
    pub fn from_parts(pristine: Vec<Vec3>, counters: Vec<u32>) -> CrumpleResult<Self> {
        if pristine.len() != counters.len() {
            return Err(CrumpleError::VertexCountMismatch {
                expected: pristine.len(),
                actual: counters.len(),
            });
        }
        Ok(Self { pristine, counters })
    }

    /// Number of vertices the state was captured for.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pristine.len()
    }

    /// The undamaged vertex positions.
    #[inline]
    pub fn pristine(&self) -> &[Vec3] {
        &self.pristine
    }

    /// Per-vertex move counts, indexed by vertex.
    #[inline]
    pub fn counters(&self) -> &[u32] {
        &self.counters
    }

    /// How many times vertex `i` has moved since the last reset.
    #[inline]
    pub fn count(&self, i: usize) -> u32 {
        self.counters.get(i).copied().unwrap_or(0)
    }

    /// Records one move of vertex `i`. Budget enforcement is the caller's job.
    #[inline]
    pub fn increment(&mut self, i: usize) {
        self.counters[i] = self.counters[i].saturating_add(1);
    }

    /// True once vertex `i` has used its whole budget.
    #[inline]
    pub fn is_at_budget(&self, i: usize, max: u32) -> bool {
        self.count(i) >= max
    }

    /// Highest counter value, 0 for an empty state.
    pub fn max_count(&self) -> u32 {
        self.counters.iter().copied().max().unwrap_or(0)
    }

    /// Lowers every counter above `max` to `max`.
    pub fn clamp_counters(&mut self, max: u32) {
        for c in &mut self.counters {
            *c = (*c).min(max);
        }
    }

    /// Resets every counter to zero.
    pub fn clear_counters(&mut self) {
        self.counters.fill(0);
    }

    /// Fails if a buffer of `len` vertices does not belong to this state.
    pub fn ensure_matches(&self, len: usize) -> CrumpleResult<()> {
        if len != self.vertex_count() {
            return Err(CrumpleError::VertexCountMismatch {
                expected: self.vertex_count(),
                actual: len,
            });
        }
        Ok(())
    }

    /// Vertices that moved at least once.
    pub fn deformed_vertex_count(&self) -> usize {
        self.counters.iter().filter(|&&c| c > 0).count()
    }

    /// Vertices that can no longer move.
    pub fn exhausted_vertex_count(&self, max: u32) -> usize {
        self.counters.iter().filter(|&&c| c >= max).count()
    }

    /// Largest distance between a live vertex and its pristine position.
    pub fn max_displacement(&self, live: &[Vec3]) -> f32 {
        self.pristine
            .iter()
            .zip(live)
            .map(|(p, l)| p.distance(*l))
            .fold(0.0, f32::max)
    }
}
