//! Deformation parameters.
//!
//! Parameters that control how strongly, how widely and how often a
//! vertex may be displaced by impacts.

use serde::{Deserialize, Serialize};

use crumple_types::constants::{
    DEFAULT_DEFORMATION_FORCE, DEFAULT_DEFORMATION_SMOOTHNESS, DEFAULT_DEFORM_DIST,
    DEFAULT_MAX_DEFORMATIONS_PER_VERTEX, DEFAULT_RADIUS_SCALE, DEFORM_DIST_RANGE, FORCE_DIVISOR,
};
use crumple_types::{CrumpleError, CrumpleResult};

/// Configuration for the deformation core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformationParameters {
    /// Displacement speed. Divided by 100, then multiplied by elapsed time.
    pub deformation_force: f32,

    /// Distance (local units) at which the linear falloff reaches zero.
    /// Larger values flatten the falloff. Must be positive.
    pub deformation_smoothness: f32,

    /// Affected-area slider, accepted in `[0.05, 3.0]`.
    pub deform_dist: f32,

    /// Converts `deform_dist` into local units: the affected radius is
    /// `deform_dist * radius_scale`.
    pub radius_scale: f32,

    /// How many times a vertex may move before it freezes until reset.
    pub max_deformations_per_vertex: u32,
}

impl Default for DeformationParameters {
    fn default() -> Self {
        Self {
            deformation_force: DEFAULT_DEFORMATION_FORCE,
            deformation_smoothness: DEFAULT_DEFORMATION_SMOOTHNESS,
            deform_dist: DEFAULT_DEFORM_DIST,
            radius_scale: DEFAULT_RADIUS_SCALE,
            max_deformations_per_vertex: DEFAULT_MAX_DEFORMATIONS_PER_VERTEX,
        }
    }
}

impl DeformationParameters {
    /// Soft bodywork: dents quickly and deeply.
    pub fn fragile() -> Self {
        Self {
            deformation_force: 250.0,
            deformation_smoothness: 1.0,
            max_deformations_per_vertex: 8,
            ..Default::default()
        }
    }

    /// Stiff bodywork: small, sharp dents that saturate early.
    pub fn sturdy() -> Self {
        Self {
            deformation_force: 40.0,
            deformation_smoothness: 0.25,
            max_deformations_per_vertex: 2,
            ..Default::default()
        }
    }

    /// Parses and validates parameters from a TOML document.
    pub fn from_toml_str(s: &str) -> CrumpleResult<Self> {
        let params: Self =
            toml::from_str(s).map_err(|e| CrumpleError::Serialization(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Affected radius in mesh-local units.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.deform_dist * self.radius_scale
    }

    /// Force contribution per unit of elapsed time.
    #[inline]
    pub fn force_factor(&self) -> f32 {
        self.deformation_force / FORCE_DIVISOR
    }

    /// Rejects configurations the applicator cannot evaluate safely.
    pub fn validate(&self) -> CrumpleResult<()> {
        if !self.deformation_force.is_finite() || self.deformation_force < 0.0 {
            return Err(CrumpleError::InvalidConfig(format!(
                "deformation_force must be finite and non-negative, got {}",
                self.deformation_force
            )));
        }
        if !self.deformation_smoothness.is_finite() || self.deformation_smoothness <= 0.0 {
            return Err(CrumpleError::InvalidConfig(format!(
                "deformation_smoothness must be finite and positive, got {}",
                self.deformation_smoothness
            )));
        }
        let (lo, hi) = DEFORM_DIST_RANGE;
        if !(lo..=hi).contains(&self.deform_dist) {
            return Err(CrumpleError::InvalidConfig(format!(
                "deform_dist must be within [{lo}, {hi}], got {}",
                self.deform_dist
            )));
        }
        if !self.radius_scale.is_finite() || self.radius_scale <= 0.0 {
            return Err(CrumpleError::InvalidConfig(format!(
                "radius_scale must be finite and positive, got {}",
                self.radius_scale
            )));
        }
        if self.max_deformations_per_vertex == 0 {
            return Err(CrumpleError::InvalidConfig(
                "max_deformations_per_vertex must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
