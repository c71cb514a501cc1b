//! Observation hooks for the deformer.
//!
//! Hooks let a host watch impacts and resets (telemetry, debugging,
//! audio/particle triggers) without the core knowing about any of them.
//!
//! # Lifecycle
//!
//! ```text
//! hook.on_initialized(...)
//! for each applied impact:
//!   hook.on_deformed(report)
//! for each reset:
//!   hook.on_reset(...)
//! ```

use crate::applicator::DeformationReport;

/// Trait for deformer observers. All callbacks are read-only.
pub trait DeformationHook: Send {
    /// Called after the pristine shape has been captured.
    fn on_initialized(&mut self, vertex_count: usize) {
        let _ = vertex_count;
    }

    /// Called after an impact has been written back to the mesh.
    fn on_deformed(&mut self, report: &DeformationReport) {
        let _ = report;
    }

    /// Called after the mesh has been restored to its pristine shape.
    fn on_reset(&mut self, vertex_count: usize) {
        let _ = vertex_count;
    }

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}
