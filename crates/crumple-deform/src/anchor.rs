//! Deformation anchors and nearest-anchor selection.

use serde::{Deserialize, Serialize};

use crumple_math::Vec3;
use crumple_types::AnchorId;

/// A named world-space point that dented vertices are pulled toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformationAnchor {
    /// Label used in logs and telemetry.
    pub name: String,
    /// Current world-space position.
    pub position: Vec3,
}

impl DeformationAnchor {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Returns the anchor closest to `point`, or `None` for an empty list.
///
/// Linear scan over Euclidean distance. On ties the anchor that appears
/// first in `anchors` wins. Anchors at a non-finite distance are never
/// selected.
pub fn find_nearest(
    point: Vec3,
    anchors: &[DeformationAnchor],
) -> Option<(AnchorId, &DeformationAnchor)> {
    let mut best: Option<usize> = None;
    let mut best_d = f32::INFINITY;
    for (i, anchor) in anchors.iter().enumerate() {
        let d = point.distance(anchor.position);
        if d < best_d {
            best = Some(i);
            best_d = d;
        }
    }
    let i = best?;
    let id = AnchorId(u32::try_from(i).ok()?);
    Some((id, &anchors[i]))
}
