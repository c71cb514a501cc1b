//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (capture in memory, forward to `tracing`, ...).

use std::sync::{Arc, Mutex};

use crate::events::{DeformationEvent, EventKind};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &DeformationEvent);

    /// Called when the host shuts down. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that collects events in shared memory for tests and inspection.
///
/// The sink is usually boxed into a bus, so the collected events are
/// reached through the handle returned by [`VecSink::events`].
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<DeformationEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<DeformationEvent>>> {
        Arc::clone(&self.events)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &DeformationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
#[derive(Debug, Default)]
pub struct TracingSink {
    impacts: u64,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &DeformationEvent) {
        match &event.kind {
            EventKind::Impact {
                anchor,
                affected,
                max_displacement,
                ..
            } => {
                self.impacts += 1;
                tracing::info!(
                    sequence = event.sequence,
                    %anchor,
                    affected,
                    max_displacement,
                    "impact"
                );
            }
            kind => {
                tracing::info!(sequence = event.sequence, event = ?kind, "deformation_event");
            }
        }
    }

    fn finalize(&mut self) {
        tracing::info!(impacts = self.impacts, "telemetry finished");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
