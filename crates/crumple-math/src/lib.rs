//! # crumple-math
//!
//! Math primitives for the crumple engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, etc.)
//! - [`Placement`] — scale/rotation/translation of a body, with
//!   world ↔ local point conversion

pub mod placement;

pub use placement::Placement;

// Re-export glam types as the canonical math types for crumple.
pub use glam::{Affine3A, Quat, Vec3};
