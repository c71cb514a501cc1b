//! Deformation applicator — the per-vertex displacement pass.
//!
//! For one impact, every vertex that still has budget and lies within
//! the affected radius of the contact is pulled toward the selected
//! anchor:
//!
//! ```text
//! amount       = clamp01(1 - d / smoothness)
//! displacement = dir(v → target) * amount * (force / 100) * dt
//! ```
//!
//! All positions are in the mesh's local space.

use serde::{Deserialize, Serialize};

use crumple_math::Vec3;
use crumple_types::AnchorId;

use crate::falloff::{direction_toward, linear_falloff};
use crate::params::DeformationParameters;
use crate::state::DeformationState;

/// Per-pass vertex statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VertexTally {
    /// Vertices displaced (and counted) in this pass.
    pub affected: u32,
    /// Vertices skipped because their budget was already spent.
    pub frozen: u32,
    /// Vertices whose budget ran out during this pass.
    pub newly_exhausted: u32,
    /// Largest single displacement applied.
    pub max_displacement: f32,
}

/// Summary of one applied impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformationReport {
    /// Anchor the vertices were pulled toward.
    pub anchor: AnchorId,
    /// Contact point in mesh-local space.
    pub local_contact: Vec3,
    /// Contact normal as reported by the host (world space).
    pub contact_normal: Vec3,
    /// Elapsed time used to scale the displacement.
    pub dt: f32,
    /// Vertices displaced by this impact.
    pub affected: u32,
    /// Vertices skipped because they were already frozen.
    pub frozen: u32,
    /// Vertices frozen by this impact.
    pub newly_exhausted: u32,
    /// Largest displacement applied by this impact.
    pub max_displacement: f32,
}

/// Displaces eligible vertices in place and updates their counters.
///
/// `vertices` must have the length `state` was captured for.
pub fn deform_vertices(
    vertices: &mut [Vec3],
    state: &mut DeformationState,
    params: &DeformationParameters,
    local_contact: Vec3,
    local_target: Vec3,
    dt: f32,
) -> VertexTally {
    let max = params.max_deformations_per_vertex;
    let radius = params.effective_radius();
    let scale = params.force_factor() * dt;
    let mut tally = VertexTally::default();

    for (i, vertex) in vertices.iter_mut().enumerate() {
        if state.is_at_budget(i, max) {
            tally.frozen += 1;
            continue;
        }

        let distance = vertex.distance(local_contact);
        if distance.is_nan() || distance > radius {
            continue;
        }

        let amount = linear_falloff(distance, params.deformation_smoothness);
        let displacement = direction_toward(*vertex, local_target) * (amount * scale);

        *vertex += displacement;
        state.increment(i);

        tally.affected += 1;
        if state.is_at_budget(i, max) {
            tally.newly_exhausted += 1;
        }
        tally.max_displacement = tally.max_displacement.max(displacement.length());
    }

    tally
}
