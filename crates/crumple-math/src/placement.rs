//! Rigid placement of a body in world space.
//!
//! Vertex buffers live in the body's local space while contacts and
//! anchors arrive in world space. A `Placement` converts between the two.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crumple_types::{CrumpleError, CrumpleResult};

/// Scale, rotation and translation of a body (applied in that order).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// World-space position of the local origin.
    pub translation: Vec3,
    /// Orientation of the local axes.
    pub rotation: Quat,
    /// Per-axis scale of the local axes.
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    /// Local space coincides with world space.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// A pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// A translation followed by a rotation about the local origin.
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Builder-style scale override.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation about +Y given in degrees, the common case for vehicles on a ground plane.
    pub fn from_yaw_degrees(translation: Vec3, yaw_deg: f32) -> Self {
        Self::from_translation_rotation(translation, Quat::from_rotation_y(yaw_deg.to_radians()))
    }

    /// Checks that the placement is invertible.
    pub fn validate(&self) -> CrumpleResult<()> {
        if !self.translation.is_finite() || !self.rotation.is_finite() || !self.scale.is_finite() {
            return Err(CrumpleError::InvalidConfig(
                "Placement contains non-finite values".into(),
            ));
        }
        if self.scale.abs().min_element() < f32::EPSILON {
            return Err(CrumpleError::InvalidConfig(format!(
                "Placement scale {:?} has a zero axis and cannot be inverted",
                self.scale
            )));
        }
        if (self.rotation.length() - 1.0).abs() > 1e-3 {
            return Err(CrumpleError::InvalidConfig(format!(
                "Placement rotation should be a unit quaternion, got length {}",
                self.rotation.length()
            )));
        }
        Ok(())
    }

    /// Local-to-world affine transform.
    #[inline]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Maps a local-space point into world space.
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.to_affine().transform_point3(local)
    }

    /// Maps a world-space point into local space.
    #[inline]
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.to_affine().inverse().transform_point3(world)
    }
}
