//! Integration tests for crumple-debug.

use crumple_debug::hooks::TelemetryHook;
use crumple_debug::snapshot::DamageSnapshot;
use crumple_deform::{
    DeformationAnchor, DeformationHook, DeformationParameters, DeformationState, Deformer,
};
use crumple_math::{Placement, Vec3};
use crumple_mesh::generators::quad_grid;
use crumple_mesh::DeformableMesh;
use crumple_telemetry::events::EventKind;
use crumple_telemetry::{EventBus, VecSink};

fn wide_params() -> DeformationParameters {
    DeformationParameters {
        deformation_force: 100.0,
        deformation_smoothness: 0.5,
        deform_dist: 2.0,
        radius_scale: 1.0,
        max_deformations_per_vertex: 2,
    }
}

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn telemetry_hook_emits_lifecycle() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    let mut mesh = quad_grid(4, 4, 1.0, 1.0);
    let mut deformer = Deformer::new(
        wide_params(),
        vec![DeformationAnchor::new("core", Vec3::new(0.5, 0.5, -1.0))],
    )
    .unwrap();
    deformer.add_hook(Box::new(TelemetryHook::new(bus.emitter())));

    deformer.initialize(&mesh);
    deformer
        .apply_deformation(
            &mut mesh,
            &Placement::IDENTITY,
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::Z,
            1.0 / 60.0,
        )
        .unwrap();
    deformer.reset_deformation(&mut mesh).unwrap();

    assert_eq!(bus.flush(), 3);
    let events = events.lock().unwrap();
    assert!(matches!(events[0].kind, EventKind::Initialized { vertex_count: 25 }));
    match &events[1].kind {
        EventKind::Impact {
            affected,
            max_displacement,
            ..
        } => {
            assert!(*affected > 0);
            assert!(*max_displacement > 0.0);
        }
        other => panic!("expected impact, got {other:?}"),
    }
    assert!(matches!(events[2].kind, EventKind::Reset { vertex_count: 25 }));
    let sequences: Vec<u64> = events.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2]);
}

#[test]
fn telemetry_hook_counts_emissions() {
    let bus = EventBus::new();
    let mut hook = TelemetryHook::new(bus.emitter());
    hook.on_initialized(3);
    hook.on_reset(3);
    assert_eq!(hook.emitted(), 2);
    assert_eq!(hook.name(), "telemetry_hook");
}

// ─── Snapshot Tests ───────────────────────────────────────────

fn dented_state() -> (Vec<Vec3>, DeformationState) {
    let pristine = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    let mut state = DeformationState::capture(&pristine);
    state.increment(0);
    state.increment(0);
    state.increment(1);
    let live = vec![Vec3::new(0.0, 0.0, -0.25), Vec3::new(1.0, 0.0, -0.1), Vec3::Y];
    (live, state)
}

#[test]
fn snapshot_binary_restores_state() {
    let (live, state) = dented_state();
    let snapshot = DamageSnapshot::capture(42, &live, &state, 2).unwrap();

    let bytes = snapshot.to_bytes().unwrap();
    let recovered = DamageSnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(recovered.tick, 42);
    assert_eq!(recovered.live_positions(), live);

    let restored = recovered.to_state().unwrap();
    assert_eq!(restored, state);
}

#[test]
fn snapshot_stats() {
    let (live, state) = dented_state();
    let stats = DamageSnapshot::capture(0, &live, &state, 2).unwrap().stats();
    assert_eq!(stats.deformed, 2);
    assert_eq!(stats.exhausted, 1);
    assert!((stats.max_displacement - 0.25).abs() < 1e-6);
}

#[test]
fn snapshot_rejects_mismatched_live_buffer() {
    let (mut live, state) = dented_state();
    live.pop();
    assert!(DamageSnapshot::capture(0, &live, &state, 2).is_err());
}

#[test]
fn snapshot_rejects_garbage() {
    assert!(DamageSnapshot::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn snapshot_rejects_inconsistent_buffers() {
    let (live, state) = dented_state();
    let mut snapshot = DamageSnapshot::capture(0, &live, &state, 2).unwrap();
    snapshot.counters.push(0);
    let bytes = snapshot.to_bytes().unwrap();
    assert!(DamageSnapshot::from_bytes(&bytes).is_err());
}

#[test]
fn snapshot_rejects_overflowing_vertex_count() {
    let (live, state) = dented_state();
    let mut snapshot = DamageSnapshot::capture(0, &live, &state, 2).unwrap();
    snapshot.vertex_count = usize::MAX;
    let bytes = snapshot.to_bytes().unwrap();
    assert!(DamageSnapshot::from_bytes(&bytes).is_err());
    assert!(snapshot.validate().is_err());
}

#[test]
fn snapshot_restores_into_deformer() {
    let mut mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut deformer = Deformer::new(
        wide_params(),
        vec![DeformationAnchor::new("core", Vec3::new(0.5, 0.5, -1.0))],
    )
    .unwrap();
    deformer.initialize(&mesh);
    deformer
        .apply_deformation(
            &mut mesh,
            &Placement::IDENTITY,
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::Z,
            0.1,
        )
        .unwrap();

    let state = deformer.state().unwrap();
    let snapshot =
        DamageSnapshot::capture(1, &mesh.read_positions(), state, 2).unwrap();
    let bytes = snapshot.to_bytes().unwrap();

    let mut fresh_mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut fresh = Deformer::new(wide_params(), Vec::new()).unwrap();
    let loaded = DamageSnapshot::from_bytes(&bytes).unwrap();
    fresh
        .restore(&mut fresh_mesh, loaded.to_state().unwrap(), &loaded.live_positions())
        .unwrap();

    assert_eq!(fresh_mesh.read_positions(), mesh.read_positions());
    assert_eq!(fresh.state().unwrap().counters(), state.counters());
}
