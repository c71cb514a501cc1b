//! # crumple-types
//!
//! Shared identifiers, error types, and tuning defaults for the
//! crumple mesh deformation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other crumple crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{CrumpleError, CrumpleResult};
pub use ids::AnchorId;
