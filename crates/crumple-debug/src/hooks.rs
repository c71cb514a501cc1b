//! Deformer hook that forwards lifecycle calls to the telemetry bus.

use crumple_deform::{DeformationHook, DeformationReport};
use crumple_telemetry::events::{DeformationEvent, EventKind};
use crumple_telemetry::EventEmitter;

/// Hook that bridges to the telemetry event bus.
///
/// Translates deformer callbacks into telemetry events and emits them
/// through the provided emitter, numbering them in call order.
pub struct TelemetryHook {
    emitter: EventEmitter,
    sequence: u64,
}

impl TelemetryHook {
    /// Creates a hook emitting on `emitter`.
    pub fn new(emitter: EventEmitter) -> Self {
        Self {
            emitter,
            sequence: 0,
        }
    }

    /// Number of events emitted so far.
    pub fn emitted(&self) -> u64 {
        self.sequence
    }

    fn emit(&mut self, kind: EventKind) {
        self.emitter.emit(DeformationEvent::new(self.sequence, kind));
        self.sequence += 1;
    }
}

impl DeformationHook for TelemetryHook {
    fn on_initialized(&mut self, vertex_count: usize) {
        self.emit(EventKind::Initialized {
            vertex_count: saturating_u32(vertex_count),
        });
    }

    fn on_deformed(&mut self, report: &DeformationReport) {
        self.emit(EventKind::Impact {
            anchor: report.anchor,
            affected: report.affected,
            frozen: report.frozen,
            newly_exhausted: report.newly_exhausted,
            max_displacement: report.max_displacement,
        });
    }

    fn on_reset(&mut self, vertex_count: usize) {
        self.emit(EventKind::Reset {
            vertex_count: saturating_u32(vertex_count),
        });
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
