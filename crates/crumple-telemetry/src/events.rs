//! Deformation event types.
//!
//! Lightweight value types carrying just enough data to monitor damage
//! as it accumulates on a body.

use serde::{Deserialize, Serialize};

use crumple_types::AnchorId;

/// An event emitted by the deformation pipeline.
///
/// Events are tagged with a monotonically increasing sequence number
/// assigned by the emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformationEvent {
    /// Emission order (0-indexed).
    pub sequence: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Pristine shape captured.
    Initialized {
        /// Vertices in the captured buffer.
        vertex_count: u32,
    },

    /// An impact was applied to the mesh.
    Impact {
        /// Anchor the dent was pulled toward.
        anchor: AnchorId,
        /// Vertices displaced.
        affected: u32,
        /// Vertices skipped because they were frozen.
        frozen: u32,
        /// Vertices that used up their budget on this impact.
        newly_exhausted: u32,
        /// Largest single displacement (local units).
        max_displacement: f32,
    },

    /// Mesh restored to its pristine shape.
    Reset {
        /// Vertices restored.
        vertex_count: u32,
    },
}

impl DeformationEvent {
    /// Creates a new event with the given sequence number.
    pub fn new(sequence: u64, kind: EventKind) -> Self {
        Self { sequence, kind }
    }
}
