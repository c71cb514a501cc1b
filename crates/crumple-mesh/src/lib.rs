//! # crumple-mesh
//!
//! Triangle mesh representation and the vertex buffer accessor
//! consumed by the deformation core.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Positions, normals and topology in contiguous
//!   Structure-of-Arrays buffers.
//! - [`DeformableMesh`] — Read/write access to a vertex buffer plus
//!   normal recomputation. Hosts with their own mesh type implement this.
//! - Procedural generators for demo and test bodies (panels, spheres, boxes).

pub mod access;
pub mod generators;
pub mod mesh;
pub mod normals;

pub use access::DeformableMesh;
pub use mesh::TriangleMesh;
