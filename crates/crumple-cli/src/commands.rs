//! CLI command implementations.

use std::path::Path;

use tracing::info;

use crumple_debug::hooks::TelemetryHook;
use crumple_debug::snapshot::DamageSnapshot;
use crumple_deform::{DamageDriver, DeformationParameters, Deformer, TickSummary};
use crumple_mesh::DeformableMesh;
use crumple_telemetry::{EventBus, TracingSink};
use crumple_types::CrumpleError;

use crate::scenario::{load_mesh_json, Scenario};

/// Run a damage scenario from config file.
pub fn simulate(
    config_path: &str,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(config_path);
    let scenario = Scenario::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mesh = scenario.body.build(base_dir)?;

    println!("Crumple Simulation");
    println!("──────────────────");
    println!("Scenario:     {}", scenario.name);
    println!(
        "Body:         {} verts, {} tris, area {:.4}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.surface_area()
    );
    println!("Ticks:        {} × {:.4}s", scenario.ticks, scenario.dt);
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let mut deformer = Deformer::new(scenario.params.clone(), scenario.anchors())?;
    deformer.add_hook(Box::new(TelemetryHook::new(bus.emitter())));
    let mut driver = DamageDriver::new(mesh, scenario.placement.to_placement(), deformer)?;

    let mut totals = TickSummary::default();
    for tick in 0..scenario.ticks {
        let summary = driver.tick(scenario.dt, scenario.events_at(tick))?;
        totals.collisions += summary.collisions;
        totals.resets += summary.resets;
        bus.flush();
    }
    bus.finish();
    info!(
        ticks = driver.tick_count(),
        sim_time = driver.sim_time(),
        "scenario finished"
    );

    let live = driver.mesh().read_positions();
    let max = driver.deformer().params().max_deformations_per_vertex;
    let state = driver
        .deformer()
        .state()
        .ok_or_else(|| CrumpleError::InvalidConfig("deformer was never initialized".into()))?;

    println!("Collisions:   {}", totals.collisions);
    println!("Resets:       {}", totals.resets);
    println!("Deformed:     {}", state.deformed_vertex_count());
    println!("Exhausted:    {}", state.exhausted_vertex_count(max));
    println!("Max displace: {:.5}", state.max_displacement(&live));

    if let Some(out) = snapshot_path {
        let snapshot = DamageSnapshot::capture(driver.tick_count(), &live, state, max)?;
        std::fs::write(out, snapshot.to_bytes()?)?;
        println!();
        println!("Snapshot written to: {out}");
    }

    Ok(())
}

/// Inspect a damage snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crumple Snapshot Inspector");
    println!("──────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot = DamageSnapshot::from_bytes(&data)?;
    let stats = snapshot.stats();

    println!("Tick:         {}", snapshot.tick);
    println!("Vertices:     {}", snapshot.vertex_count);
    println!("Budget:       {}", snapshot.max_deformations_per_vertex);
    println!("Deformed:     {}", stats.deformed);
    println!("Exhausted:    {}", stats.exhausted);
    println!("Max displace: {:.5}", stats.max_displacement);

    Ok(())
}

/// Validate a scenario, a parameter file, or a mesh.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = Path::new(path);
    match file.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let text = std::fs::read_to_string(file)?;
            let table: toml::Table = text.parse()?;
            if table.contains_key("body") {
                let scenario = Scenario::from_toml_str(&text)?;
                let base_dir = file.parent().unwrap_or_else(|| Path::new("."));
                let mesh = scenario.body.build(base_dir)?;
                println!(
                    "✓ Scenario '{}' is valid ({} verts, {} anchors, {} impacts)",
                    scenario.name,
                    mesh.vertex_count(),
                    scenario.anchors.len(),
                    scenario.impacts.len()
                );
            } else {
                let params = DeformationParameters::from_toml_str(&text)?;
                println!(
                    "✓ Parameters are valid (radius {:.4}, budget {})",
                    params.effective_radius(),
                    params.max_deformations_per_vertex
                );
            }
        }
        Some("json") => {
            let mesh = load_mesh_json(file)?;
            mesh.validate()?;
            println!(
                "✓ Mesh is valid ({} verts, {} tris, area {:.4})",
                mesh.vertex_count(),
                mesh.triangle_count(),
                mesh.surface_area()
            );
        }
        _ => {
            return Err(format!("Unsupported file type: {path} (expected .toml or .json)").into());
        }
    }
    Ok(())
}
