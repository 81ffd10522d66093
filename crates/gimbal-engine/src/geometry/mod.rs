//! Mesh construction.
//!
//! Meshes are flat vertex streams (no index buffers at draw time): face-index
//! tables are expanded once at startup, which keeps the draw path to a single
//! vertex buffer per object. Construction is the only fallible step; bad data
//! aborts startup rather than rendering garbage.

mod mesh;
pub mod models;

pub use mesh::{expand_faces, line_list, GeometryError, Mesh, Topology, Vertex};
pub use models::{scene_meshes, SceneMeshes};
