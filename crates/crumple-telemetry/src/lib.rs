//! # crumple-telemetry
//!
//! Event bus for deformation telemetry. Emits structured events
//! (initialization, impacts, resets) that are consumed by pluggable
//! sinks (in-memory capture, `tracing` logs, ...).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::{EventBus, EventEmitter};
pub use events::{DeformationEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
