//! Damage scenarios loaded from TOML.
//!
//! A scenario describes one body, where it sits in the world, how it
//! deforms, and a schedule of impacts and resets replayed tick by tick.
//!
//! ```toml
//! name = "door_ding"
//! ticks = 120
//! resets = [90]
//!
//! [body]
//! kind = "panel"
//! cols = 16
//! rows = 8
//! width = 1.2
//! height = 0.8
//!
//! [[anchors]]
//! name = "door_core"
//! position = [-0.3, 0.5, 0.0]
//!
//! [[impacts]]
//! tick = 10
//! point = [0.0, 0.5, -0.1]
//! normal = [1.0, 0.0, 0.0]
//! duration = 4
//! ```

use std::path::Path;

use serde::Deserialize;

use crumple_deform::{
    CollisionEvent, ContactPoint, DeformationAnchor, DeformationParameters, HostEvent,
};
use crumple_math::{Placement, Vec3};
use crumple_mesh::generators::{box_shell, quad_grid, uv_sphere};
use crumple_mesh::TriangleMesh;
use crumple_types::constants::DEFAULT_DT;
use crumple_types::{CrumpleError, CrumpleResult};

/// Body the scenario damages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodySpec {
    /// Flat panel in the local XY plane facing +Z.
    Panel {
        cols: usize,
        rows: usize,
        width: f32,
        height: f32,
    },
    /// Box shell centered on the local origin.
    Box { size: Vec3, subdivisions: usize },
    Sphere {
        radius: f32,
        stacks: usize,
        slices: usize,
    },
    /// A `TriangleMesh` stored as JSON, relative to the scenario file.
    Mesh { path: String },
}

impl BodySpec {
    /// Builds the mesh. `base_dir` resolves relative mesh paths.
    pub fn build(&self, base_dir: &Path) -> CrumpleResult<TriangleMesh> {
        let mesh = match self {
            Self::Panel {
                cols,
                rows,
                width,
                height,
            } => {
                if *cols == 0 || *rows == 0 {
                    return Err(CrumpleError::InvalidConfig(
                        "panel needs at least one column and one row".into(),
                    ));
                }
                quad_grid(*cols, *rows, *width, *height)
            }
            Self::Box { size, subdivisions } => box_shell(*size, *subdivisions),
            Self::Sphere {
                radius,
                stacks,
                slices,
            } => {
                if *stacks < 2 || *slices < 3 {
                    return Err(CrumpleError::InvalidConfig(
                        "sphere needs at least 2 stacks and 3 slices".into(),
                    ));
                }
                uv_sphere(*radius, *stacks, *slices)
            }
            Self::Mesh { path } => load_mesh_json(&base_dir.join(path))?,
        };
        mesh.validate()?;
        Ok(mesh)
    }
}

/// Reads a JSON-encoded `TriangleMesh`.
pub fn load_mesh_json(path: &Path) -> CrumpleResult<TriangleMesh> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CrumpleError::Serialization(format!("{}: {e}", path.display())))
}

/// Body placement, given as yaw about +Y for readability.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementSpec {
    pub translation: Vec3,
    pub yaw_deg: f32,
    pub scale: Vec3,
}

impl Default for PlacementSpec {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            yaw_deg: 0.0,
            scale: Vec3::ONE,
        }
    }
}

impl PlacementSpec {
    pub fn to_placement(&self) -> Placement {
        Placement::from_yaw_degrees(self.translation, self.yaw_deg).with_scale(self.scale)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnchorSpec {
    pub name: String,
    /// World-space position.
    pub position: Vec3,
}

/// A scheduled contact, in world space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImpactSpec {
    /// First tick the contact is reported.
    pub tick: u64,
    pub point: Vec3,
    #[serde(default = "default_normal")]
    pub normal: Vec3,
    /// Consecutive ticks the contact is sustained.
    #[serde(default = "default_duration")]
    pub duration: u64,
    /// Whether the other collider is a rigid body.
    #[serde(default = "default_rigid")]
    pub rigid: bool,
}

fn default_normal() -> Vec3 {
    Vec3::Y
}

fn default_duration() -> u64 {
    1
}

fn default_rigid() -> bool {
    true
}

fn default_dt() -> f32 {
    DEFAULT_DT
}

impl ImpactSpec {
    fn is_active(&self, tick: u64) -> bool {
        tick >= self.tick && tick - self.tick < self.duration
    }
}

/// A complete damage scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Elapsed time per tick (seconds).
    #[serde(default = "default_dt")]
    pub dt: f32,
    pub body: BodySpec,
    #[serde(default)]
    pub placement: PlacementSpec,
    #[serde(default)]
    pub params: DeformationParameters,
    #[serde(default)]
    pub anchors: Vec<AnchorSpec>,
    #[serde(default)]
    pub impacts: Vec<ImpactSpec>,
    /// Ticks at which the body is restored to its pristine shape.
    #[serde(default)]
    pub resets: Vec<u64>,
}

impl Scenario {
    /// Parses and validates a scenario from a TOML document.
    pub fn from_toml_str(s: &str) -> CrumpleResult<Self> {
        let scenario: Self =
            toml::from_str(s).map_err(|e| CrumpleError::Serialization(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads and validates a scenario file.
    pub fn load(path: &Path) -> CrumpleResult<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> CrumpleResult<()> {
        if self.ticks == 0 {
            return Err(CrumpleError::InvalidConfig("ticks must be positive".into()));
        }
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(CrumpleError::InvalidConfig(format!(
                "dt must be finite and non-negative, got {}",
                self.dt
            )));
        }
        self.params.validate()?;
        self.placement.to_placement().validate()?;
        if let Some(impact) = self.impacts.iter().find(|i| i.tick >= self.ticks) {
            return Err(CrumpleError::InvalidConfig(format!(
                "impact at tick {} is past the end of the scenario ({} ticks)",
                impact.tick, self.ticks
            )));
        }
        if let Some(tick) = self.resets.iter().find(|&&t| t >= self.ticks) {
            return Err(CrumpleError::InvalidConfig(format!(
                "reset at tick {tick} is past the end of the scenario ({} ticks)",
                self.ticks
            )));
        }
        Ok(())
    }

    pub fn anchors(&self) -> Vec<DeformationAnchor> {
        self.anchors
            .iter()
            .map(|a| DeformationAnchor::new(a.name.clone(), a.position))
            .collect()
    }

    /// Events delivered on `tick`: active contacts first, then any reset.
    pub fn events_at(&self, tick: u64) -> Vec<HostEvent> {
        let mut events: Vec<HostEvent> = self
            .impacts
            .iter()
            .filter(|i| i.is_active(tick))
            .map(|i| {
                HostEvent::Collision(CollisionEvent {
                    contacts: vec![ContactPoint {
                        point: i.point,
                        normal: i.normal,
                    }],
                    other_is_rigid_body: i.rigid,
                })
            })
            .collect();
        if self.resets.contains(&tick) {
            events.push(HostEvent::Reset);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOOR: &str = r#"
        name = "door"
        ticks = 20
        resets = [15]

        [body]
        kind = "panel"
        cols = 4
        rows = 2
        width = 1.0
        height = 0.5

        [placement]
        translation = [0.0, 0.5, 0.0]
        yaw_deg = 90.0

        [params]
        radius_scale = 0.25

        [[anchors]]
        name = "core"
        position = [-0.3, 0.5, 0.0]

        [[impacts]]
        tick = 2
        point = [0.0, 0.5, -0.1]
        normal = [1.0, 0.0, 0.0]
        duration = 3

        [[impacts]]
        tick = 15
        point = [0.0, 0.6, 0.0]
        rigid = false
    "#;

    #[test]
    fn parses_full_scenario() {
        let s = Scenario::from_toml_str(DOOR).unwrap();
        assert_eq!(s.ticks, 20);
        assert!((s.dt - DEFAULT_DT).abs() < 1e-9);
        assert!((s.params.radius_scale - 0.25).abs() < 1e-9);
        assert_eq!(s.params.max_deformations_per_vertex, 3);
        assert_eq!(s.impacts[1].normal, Vec3::Y);
        assert!(!s.impacts[1].rigid);
        assert_eq!(s.anchors().len(), 1);

        let mesh = s.body.build(Path::new(".")).unwrap();
        assert_eq!(mesh.vertex_count(), 15);
    }

    #[test]
    fn schedules_sustained_impacts_and_resets() {
        let s = Scenario::from_toml_str(DOOR).unwrap();
        assert!(s.events_at(1).is_empty());
        for tick in 2..5 {
            assert_eq!(s.events_at(tick).len(), 1);
        }
        assert!(s.events_at(5).is_empty());

        let at_reset = s.events_at(15);
        assert_eq!(at_reset.len(), 2);
        assert!(matches!(at_reset[0], HostEvent::Collision(_)));
        assert_eq!(at_reset[1], HostEvent::Reset);
    }

    #[test]
    fn placement_yaw_maps_local_z_to_world_x() {
        let s = Scenario::from_toml_str(DOOR).unwrap();
        let p = s.placement.to_placement();
        let world = p.transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert!((world - Vec3::new(1.0, 0.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn rejects_out_of_range_schedule() {
        let bad = DOOR.replace("resets = [15]", "resets = [20]");
        assert!(Scenario::from_toml_str(&bad).is_err());
    }

    #[test]
    fn rejects_invalid_params() {
        let bad = DOOR.replace("radius_scale = 0.25", "deform_dist = 9.0");
        assert!(Scenario::from_toml_str(&bad).is_err());
    }

    #[test]
    fn rejects_unknown_body_kind() {
        let bad = DOOR.replace("kind = \"panel\"", "kind = \"torus\"");
        assert!(Scenario::from_toml_str(&bad).is_err());
    }

    #[test]
    fn missing_mesh_file_is_io_error() {
        let body = BodySpec::Mesh {
            path: "does/not/exist.json".into(),
        };
        assert!(matches!(
            body.build(Path::new(".")),
            Err(CrumpleError::Io(_))
        ));
    }
}
