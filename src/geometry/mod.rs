//! Per-edge geometry.
//!
//! The mesh driver owns coordinates, dual-face normals and control volumes;
//! the kernel only sees one [`EdgeGeometry`] per call.

mod edge;

pub use edge::EdgeGeometry;
