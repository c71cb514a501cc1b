//! # crumple-deform
//!
//! Persistent, localized deformation of a mesh in response to collisions.
//!
//! A contact point pulls nearby vertices toward the nearest designated
//! anchor ("crumple target"). Each vertex has a budget of moves after
//! which it freezes, and the whole body can be restored to its pristine
//! shape at any time.
//!
//! ## Key Types
//!
//! - [`Deformer`] — The host-facing component: initialize, apply, reset.
//! - [`DeformationParameters`] — Force, falloff, radius and per-vertex budget.
//! - [`DeformationState`] — Pristine snapshot plus dense per-vertex counters.
//! - [`DeformationAnchor`] — A world-space point vertices are pulled toward.
//! - [`DamageDriver`] — Owns a mesh and feeds host events to a `Deformer`
//!   once per tick.
//!
//! ## Lifecycle
//!
//! ```text
//! deformer.initialize(&mesh);
//! loop {
//!     deformer.apply_deformation(&mut mesh, &placement, point, normal, dt)?;
//!     // or
//!     deformer.reset_deformation(&mut mesh)?;
//! }
//! ```

pub mod anchor;
pub mod applicator;
pub mod deformer;
pub mod driver;
pub mod events;
pub mod falloff;
pub mod hooks;
pub mod lease;
pub mod params;
pub mod state;

pub use anchor::{find_nearest, DeformationAnchor};
pub use applicator::DeformationReport;
pub use deformer::Deformer;
pub use driver::{DamageDriver, TickSummary};
pub use events::{CollisionEvent, ContactPoint, HostEvent};
pub use hooks::DeformationHook;
pub use params::DeformationParameters;
pub use state::DeformationState;
