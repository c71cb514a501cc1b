//! Tuning defaults and numeric thresholds.

/// Default host tick (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default displacement force. A force of 100 moves a vertex one
/// local unit per second at full falloff.
pub const DEFAULT_DEFORMATION_FORCE: f32 = 100.0;

/// Divisor applied to the deformation force.
pub const FORCE_DIVISOR: f32 = 100.0;

/// Default falloff distance (local units).
pub const DEFAULT_DEFORMATION_SMOOTHNESS: f32 = 0.5;

/// Default affected-area slider value.
pub const DEFAULT_DEFORM_DIST: f32 = 2.0;

/// Inclusive range accepted for the affected-area slider.
pub const DEFORM_DIST_RANGE: (f32, f32) = (0.05, 3.0);

/// Conversion from the affected-area slider to mesh-local units.
///
/// The effective radius is `deform_dist * radius_scale`. With the default
/// of 0.001 the slider range `[0.05, 3.0]` maps to `[0.00005, 0.003]`
/// local units, which suits meshes authored in millimetres.
pub const DEFAULT_RADIUS_SCALE: f32 = 0.001;

/// Default number of times a vertex may move before it freezes.
pub const DEFAULT_MAX_DEFORMATIONS_PER_VERTEX: u32 = 3;

/// Below this length a direction vector is treated as degenerate.
pub const DIRECTION_EPSILON: f32 = 1.0e-7;

/// Below this length an accumulated normal is left as zero.
pub const NORMAL_EPSILON: f32 = 1.0e-10;
