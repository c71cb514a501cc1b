//! Strongly-typed identifiers.
//!
//! Anchor indices are wrapped so they are not mixed up with vertex
//! indices at call sites.

use serde::{Deserialize, Serialize};

/// Position of an anchor in the deformer's anchor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorId(pub u32);

impl AnchorId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for AnchorId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "anchor#{}", self.0)
    }
}
