//! Host-side events fed to the deformer.

use serde::{Deserialize, Serialize};

use crumple_math::Vec3;

/// One contact of a collision, in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub point: Vec3,
    pub normal: Vec3,
}

/// A collision reported by the host's physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Contacts of this collision. Only the first one deforms the mesh.
    pub contacts: Vec<ContactPoint>,
    /// Whether the other collider is a simulated rigid body.
    /// Static geometry without a body does not dent.
    pub other_is_rigid_body: bool,
}

impl CollisionEvent {
    /// A single-contact collision against a rigid body.
    pub fn single(point: Vec3, normal: Vec3) -> Self {
        Self {
            contacts: vec![ContactPoint { point, normal }],
            other_is_rigid_body: true,
        }
    }

    /// The contact that drives deformation, if this event should deform at all.
    pub fn deforming_contact(&self) -> Option<&ContactPoint> {
        if !self.other_is_rigid_body {
            return None;
        }
        self.contacts.first()
    }
}

/// Discrete events a host delivers during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// A collision notification.
    Collision(CollisionEvent),
    /// A request to restore the pristine shape.
    Reset,
}
