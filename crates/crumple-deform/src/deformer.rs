//! The deformer — host-facing entry point of the deformation core.
//!
//! Owns the parameters, the anchor list and the state store. Meshes are
//! borrowed per call so the host keeps ownership of its render data.
//!
//! Routine conditions never fail: calls before [`Deformer::initialize`],
//! impacts with no anchors configured, and spent vertex budgets all
//! degrade to no-ops. Only a vertex buffer that no longer matches the
//! captured state is reported as an error.

use tracing::{debug, info, trace, warn};

use crumple_math::{Placement, Vec3};
use crumple_mesh::DeformableMesh;
use crumple_types::{AnchorId, CrumpleError, CrumpleResult};

use crate::anchor::{find_nearest, DeformationAnchor};
use crate::applicator::{deform_vertices, DeformationReport};
use crate::events::CollisionEvent;
use crate::hooks::DeformationHook;
use crate::lease::BufferLease;
use crate::params::DeformationParameters;
use crate::state::DeformationState;

/// Persistent collision deformation for one mesh.
pub struct Deformer {
    params: DeformationParameters,
    anchors: Vec<DeformationAnchor>,
    state: Option<DeformationState>,
    hooks: Vec<Box<dyn DeformationHook>>,
    last_report: Option<DeformationReport>,
}

impl Deformer {
    /// Creates an uninitialized deformer. Fails on invalid parameters.
    pub fn new(
        params: DeformationParameters,
        anchors: Vec<DeformationAnchor>,
    ) -> CrumpleResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            anchors,
            state: None,
            hooks: Vec::new(),
            last_report: None,
        })
    }

    /// Captures the mesh's current shape as pristine and zeroes all counters.
    ///
    /// Calling this again re-captures from the mesh as it is now, which is
    /// how a host recovers after swapping meshes.
    pub fn initialize<M: DeformableMesh + ?Sized>(&mut self, mesh: &M) {
        let state = DeformationState::capture(&mesh.read_positions());
        let vertex_count = state.vertex_count();
        if self.state.replace(state).is_some() {
            info!(vertex_count, "deformation state re-captured");
        } else {
            info!(vertex_count, "deformation state captured");
        }
        self.last_report = None;
        for hook in &mut self.hooks {
            hook.on_initialized(vertex_count);
        }
    }

    /// Installs a previously saved state and the matching live shape.
    ///
    /// Rejects states whose counters exceed the current per-vertex budget.
    pub fn restore<M: DeformableMesh + ?Sized>(
        &mut self,
        mesh: &mut M,
        state: DeformationState,
        live: &[Vec3],
    ) -> CrumpleResult<()> {
        state.ensure_matches(mesh.vertex_count())?;
        state.ensure_matches(live.len())?;
        let max = self.params.max_deformations_per_vertex;
        if state.max_count() > max {
            return Err(CrumpleError::InvalidConfig(format!(
                "saved counter {} exceeds the per-vertex budget {max}",
                state.max_count()
            )));
        }
        if let Some(i) = live.iter().position(|p| !p.is_finite()) {
            return Err(CrumpleError::InvalidConfig(format!(
                "saved vertex {i} has a non-finite position"
            )));
        }
        {
            let mut buffer = BufferLease::acquire(mesh);
            buffer.copy_from_slice(live);
        }
        info!(
            vertex_count = state.vertex_count(),
            deformed = state.deformed_vertex_count(),
            "deformation state restored"
        );
        self.state = Some(state);
        self.last_report = None;
        Ok(())
    }

    /// Returns true once a pristine shape has been captured.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// The state store, if initialized.
    pub fn state(&self) -> Option<&DeformationState> {
        self.state.as_ref()
    }

    pub fn params(&self) -> &DeformationParameters {
        &self.params
    }

    /// Replaces the parameters. Invalid parameters are rejected and the
    /// previous ones kept. Lowering the budget clamps existing counters
    /// to the new maximum.
    pub fn set_params(&mut self, params: DeformationParameters) -> CrumpleResult<()> {
        params.validate()?;
        if let Some(state) = self.state.as_mut() {
            state.clamp_counters(params.max_deformations_per_vertex);
        }
        self.params = params;
        Ok(())
    }

    pub fn anchors(&self) -> &[DeformationAnchor] {
        &self.anchors
    }

    /// Moves an anchor. Returns false if `id` is out of range or
    /// `position` is not finite.
    pub fn set_anchor_position(&mut self, id: AnchorId, position: Vec3) -> bool {
        if !position.is_finite() {
            warn!(%id, "anchor move ignored: non-finite position");
            return false;
        }
        match self.anchors.get_mut(id.index()) {
            Some(anchor) => {
                anchor.position = position;
                true
            }
            None => false,
        }
    }

    /// Registers an observer.
    pub fn add_hook(&mut self, hook: Box<dyn DeformationHook>) {
        debug!(hook = hook.name(), "deformation hook registered");
        self.hooks.push(hook);
    }

    /// Summary of the most recent applied impact since the last
    /// initialization.
    pub fn last_report(&self) -> Option<&DeformationReport> {
        self.last_report.as_ref()
    }

    /// Dents `mesh` at a world-space contact.
    ///
    /// The nearest anchor is chosen in world space, then the contact and
    /// the anchor are taken into the mesh's local space through
    /// `placement`. `dt` is the time elapsed since the previous host tick;
    /// a sustained contact reported every tick keeps deepening the dent.
    pub fn apply_deformation<M: DeformableMesh + ?Sized>(
        &mut self,
        mesh: &mut M,
        placement: &Placement,
        contact_point: Vec3,
        contact_normal: Vec3,
        dt: f32,
    ) -> CrumpleResult<()> {
        let Some(state) = self.state.as_mut() else {
            warn!("apply_deformation ignored: deformer not initialized");
            return Ok(());
        };
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "apply_deformation ignored: invalid elapsed time");
            return Ok(());
        }
        if !contact_point.is_finite() {
            warn!(?contact_point, "apply_deformation ignored: non-finite contact");
            return Ok(());
        }
        if let Err(e) = placement.validate() {
            warn!(error = %e, "apply_deformation ignored: invalid placement");
            return Ok(());
        }
        let Some((anchor_id, anchor)) = find_nearest(contact_point, &self.anchors) else {
            trace!("apply_deformation ignored: no anchors configured");
            return Ok(());
        };
        state.ensure_matches(mesh.vertex_count())?;

        let local_contact = placement.inverse_transform_point(contact_point);
        let local_target = placement.inverse_transform_point(anchor.position);
        if !local_contact.is_finite() || !local_target.is_finite() {
            warn!("apply_deformation ignored: contact or anchor not representable in local space");
            return Ok(());
        }

        let tally = {
            let mut buffer = BufferLease::acquire(mesh);
            deform_vertices(
                &mut buffer,
                state,
                &self.params,
                local_contact,
                local_target,
                dt,
            )
        };

        debug!(
            anchor = %anchor.name,
            affected = tally.affected,
            frozen = tally.frozen,
            newly_exhausted = tally.newly_exhausted,
            max_displacement = tally.max_displacement,
            "impact applied"
        );

        let report = DeformationReport {
            anchor: anchor_id,
            local_contact,
            contact_normal,
            dt,
            affected: tally.affected,
            frozen: tally.frozen,
            newly_exhausted: tally.newly_exhausted,
            max_displacement: tally.max_displacement,
        };
        for hook in &mut self.hooks {
            hook.on_deformed(&report);
        }
        self.last_report = Some(report);
        Ok(())
    }

    /// Handles a host collision notification using its first contact.
    ///
    /// Collisions against colliders without a rigid body, or carrying no
    /// contacts, are ignored.
    pub fn on_collision<M: DeformableMesh + ?Sized>(
        &mut self,
        mesh: &mut M,
        placement: &Placement,
        event: &CollisionEvent,
        dt: f32,
    ) -> CrumpleResult<()> {
        match event.deforming_contact() {
            Some(contact) => {
                self.apply_deformation(mesh, placement, contact.point, contact.normal, dt)
            }
            None => {
                trace!(
                    contacts = event.contacts.len(),
                    rigid = event.other_is_rigid_body,
                    "collision ignored"
                );
                Ok(())
            }
        }
    }

    /// Restores `mesh` to the pristine shape and clears every counter.
    ///
    /// Idempotent. A no-op before initialization.
    pub fn reset_deformation<M: DeformableMesh + ?Sized>(
        &mut self,
        mesh: &mut M,
    ) -> CrumpleResult<()> {
        let Some(state) = self.state.as_mut() else {
            warn!("reset_deformation ignored: deformer not initialized");
            return Ok(());
        };
        state.ensure_matches(mesh.vertex_count())?;

        {
            let mut buffer = BufferLease::acquire(mesh);
            buffer.copy_from_slice(state.pristine());
        }
        state.clear_counters();

        let vertex_count = state.vertex_count();
        info!(vertex_count, "deformation reset");
        for hook in &mut self.hooks {
            hook.on_reset(vertex_count);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Deformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deformer")
            .field("params", &self.params)
            .field("anchors", &self.anchors)
            .field("initialized", &self.is_initialized())
            .field("hooks", &self.hooks.iter().map(|h| h.name()).collect::<Vec<_>>())
            .finish()
    }
}
