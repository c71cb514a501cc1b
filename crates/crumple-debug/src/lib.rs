//! # crumple-debug
//!
//! Inspection hooks and damage snapshots for debugging deformation.
//! Snapshots serialize the live shape together with the pristine shape
//! and per-vertex counters so a damaged body can be saved, inspected
//! and restored later.

pub mod hooks;
pub mod snapshot;

pub use hooks::TelemetryHook;
pub use snapshot::{DamageSnapshot, DamageStats};
