//! Falloff and direction helpers used per vertex.

use crumple_math::Vec3;
use crumple_types::constants::DIRECTION_EPSILON;

/// Linear falloff: 1 at the contact, 0 at `smoothness` and beyond.
///
/// A non-positive `smoothness` degenerates to a spike: full weight only
/// at zero distance.
#[inline]
pub fn linear_falloff(distance: f32, smoothness: f32) -> f32 {
    if smoothness <= 0.0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / smoothness).clamp(0.0, 1.0)
}

/// Unit vector from `from` toward `to`, or zero when the points coincide.
#[inline]
pub fn direction_toward(from: Vec3, to: Vec3) -> Vec3 {
    let delta = to - from;
    let len = delta.length();
    if len > DIRECTION_EPSILON && len.is_finite() {
        delta / len
    } else {
        Vec3::ZERO
    }
}
