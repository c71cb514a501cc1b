//! Tick driver — glue between a host frame loop and the deformer.
//!
//! The core never polls for time or input. A host collects collisions
//! and reset requests during a frame and hands them over together with
//! the frame's elapsed time.

use tracing::debug;

use crumple_math::Placement;
use crumple_mesh::DeformableMesh;
use crumple_types::CrumpleResult;

use crate::deformer::Deformer;
use crate::events::HostEvent;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Collision events delivered.
    pub collisions: u32,
    /// Reset requests delivered.
    pub resets: u32,
}

/// Owns a damageable mesh, its placement and its deformer.
///
/// `DamageDriver` holds everything one `apply`/`reset` touches, so a
/// multi-threaded host can wrap the whole driver in a single mutex and
/// never observe a partially deformed buffer.
#[derive(Debug)]
pub struct DamageDriver<M: DeformableMesh> {
    mesh: M,
    placement: Placement,
    deformer: Deformer,
    tick: u64,
    sim_time: f64,
}

impl<M: DeformableMesh> DamageDriver<M> {
    /// Validates the placement and captures `mesh` as the pristine shape.
    pub fn new(mesh: M, placement: Placement, mut deformer: Deformer) -> CrumpleResult<Self> {
        placement.validate()?;
        deformer.initialize(&mesh);
        Ok(Self {
            mesh,
            placement,
            deformer,
            tick: 0,
            sim_time: 0.0,
        })
    }

    /// Processes one host tick. Events are handled in order, each impact
    /// scaled by `dt`.
    pub fn tick<I>(&mut self, dt: f32, events: I) -> CrumpleResult<TickSummary>
    where
        I: IntoIterator<Item = HostEvent>,
    {
        let mut summary = TickSummary::default();
        for event in events {
            match event {
                HostEvent::Collision(collision) => {
                    summary.collisions += 1;
                    self.deformer
                        .on_collision(&mut self.mesh, &self.placement, &collision, dt)?;
                }
                HostEvent::Reset => {
                    summary.resets += 1;
                    self.deformer.reset_deformation(&mut self.mesh)?;
                }
            }
        }

        self.tick += 1;
        self.sim_time += f64::from(dt);
        if summary != TickSummary::default() {
            debug!(
                tick = self.tick,
                collisions = summary.collisions,
                resets = summary.resets,
                "tick processed"
            );
        }
        Ok(summary)
    }

    /// Moves the body. Invalid placements are rejected.
    pub fn set_placement(&mut self, placement: Placement) -> CrumpleResult<()> {
        placement.validate()?;
        self.placement = placement;
        Ok(())
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn mesh(&self) -> &M {
        &self.mesh
    }

    pub fn deformer(&self) -> &Deformer {
        &self.deformer
    }

    pub fn deformer_mut(&mut self) -> &mut Deformer {
        &mut self.deformer
    }

    /// Number of ticks processed.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Sum of all tick durations (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Gives the mesh back to the host.
    pub fn into_mesh(self) -> M {
        self.mesh
    }
}
