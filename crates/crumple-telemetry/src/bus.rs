//! Event bus — broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` for thread-safe event delivery.
//! Producers hold an [`EventEmitter`]; sinks are registered on the bus
//! and receive everything emitted since the previous flush.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::events::DeformationEvent;
use crate::sinks::EventSink;

/// Producer handle for an [`EventBus`]. Cheap to clone.
#[derive(Clone)]
pub struct EventEmitter {
    sender: mpsc::Sender<DeformationEvent>,
    enabled: Arc<AtomicBool>,
}

impl EventEmitter {
    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: DeformationEvent) {
        if !self.enabled.load(Ordering::Relaxed) {
            return;
        }
        // Send to channel — ignore error if the bus has been dropped
        let _ = self.sender.send(event);
    }
}

/// Broadcast event bus for deformation telemetry.
pub struct EventBus {
    emitter: EventEmitter,
    receiver: mpsc::Receiver<DeformationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    /// Creates a new, enabled event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            emitter: EventEmitter {
                sender,
                enabled: Arc::new(AtomicBool::new(true)),
            },
            receiver,
            sinks: Vec::new(),
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Returns a producer handle bound to this bus.
    pub fn emitter(&self) -> EventEmitter {
        self.emitter.clone()
    }

    /// Enables or disables the bus. A disabled bus drops events at the emitter.
    pub fn set_enabled(&self, enabled: bool) {
        self.emitter.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.emitter.enabled.load(Ordering::Relaxed)
    }

    /// Emit an event directly on the bus.
    pub fn emit(&self, event: DeformationEvent) {
        self.emitter.emit(event);
    }

    /// Dispatch all pending events to registered sinks.
    ///
    /// Returns the number of events dispatched. Call this once per host
    /// tick or at shutdown.
    pub fn flush(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            dispatched += 1;
        }
        dispatched
    }

    /// Flushes pending events and finalizes every sink.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
