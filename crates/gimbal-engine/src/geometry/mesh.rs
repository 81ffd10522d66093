use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Single vertex: one position attribute, nothing else.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Primitive topology of a mesh's vertex stream.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Consecutive vertex pairs form independent segments.
    LineList,
    /// Consecutive vertex triples form independent triangles.
    TriangleList,
}

/// A mesh construction error.
///
/// Bad geometry data is a startup-fatal configuration problem; the error
/// carries enough to point at the offending table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryError {
    /// Name of the mesh whose data was rejected.
    pub mesh: String,
    /// Index of the offending face in the face list, when applicable.
    pub face: Option<usize>,
    pub message: String,
}

impl GeometryError {
    fn new(mesh: &str, face: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            mesh: mesh.to_string(),
            face,
            message: message.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Some(face) => write!(f, "mesh '{}', face {}: {}", self.mesh, face, self.message),
            None => write!(f, "mesh '{}': {}", self.mesh, self.message),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Immutable vertex stream ready for upload.
///
/// Built once at startup; per-frame variation happens entirely in the
/// per-draw uniforms, never in vertex data.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Expands a face-index list over a vertex pool into a flat triangle stream.
///
/// Face order and within-face winding are preserved exactly; the pipelines
/// draw with culling off, so no face needs reorienting. A face index outside
/// the pool is rejected.
pub fn expand_faces(
    name: &str,
    pool: &[[f32; 3]],
    faces: &[[usize; 3]],
) -> Result<Mesh, GeometryError> {
    let mut vertices = Vec::with_capacity(faces.len() * 3);

    for (face_idx, face) in faces.iter().enumerate() {
        for &vertex_idx in face {
            let position = *pool.get(vertex_idx).ok_or_else(|| {
                GeometryError::new(
                    name,
                    Some(face_idx),
                    format!(
                        "face references vertex {vertex_idx}, but the pool holds {}",
                        pool.len()
                    ),
                )
            })?;
            vertices.push(Vertex { position });
        }
    }

    Ok(Mesh {
        name: name.to_string(),
        topology: Topology::TriangleList,
        vertices,
    })
}

/// Wraps an already-ordered point list as line segments.
///
/// Points pair up in stream order; an odd count leaves a dangling endpoint
/// and is rejected.
pub fn line_list(name: &str, points: &[[f32; 3]]) -> Result<Mesh, GeometryError> {
    if points.len() % 2 != 0 {
        return Err(GeometryError::new(
            name,
            None,
            format!("line list needs an even point count, got {}", points.len()),
        ));
    }

    Ok(Mesh {
        name: name.to_string(),
        topology: Topology::LineList,
        vertices: points.iter().map(|&position| Vertex { position }).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: [[f32; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];

    // ── face expansion ────────────────────────────────────────────────────

    #[test]
    fn expansion_yields_three_vertices_per_face() {
        let faces = [[0, 1, 2], [0, 2, 3], [1, 3, 2]];
        let mesh = expand_faces("probe", &POOL, &faces).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.topology, Topology::TriangleList);
    }

    #[test]
    fn expansion_preserves_face_order_and_winding() {
        let faces = [[2, 0, 1], [3, 1, 0]];
        let mesh = expand_faces("probe", &POOL, &faces).unwrap();

        let positions: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![POOL[2], POOL[0], POOL[1], POOL[3], POOL[1], POOL[0]]
        );
    }

    #[test]
    fn empty_face_list_gives_empty_mesh() {
        let mesh = expand_faces("probe", &POOL, &[]).unwrap();
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn face_index_past_pool_end_is_rejected() {
        // Index 4 is one past the end of a 4-vertex pool.
        let faces = [[0, 1, 2], [1, 2, 4]];
        let err = expand_faces("hull", &POOL, &faces).unwrap_err();

        assert_eq!(err.mesh, "hull");
        assert_eq!(err.face, Some(1));
        assert!(err.message.contains('4'), "message: {}", err.message);

        let shown = err.to_string();
        assert!(shown.contains("hull"), "display: {shown}");
        assert!(shown.contains("face 1"), "display: {shown}");
    }

    // ── line lists ────────────────────────────────────────────────────────

    #[test]
    fn line_list_copies_points_in_order() {
        let mesh = line_list("grid", &POOL).unwrap();
        assert_eq!(mesh.topology, Topology::LineList);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.vertices[3].position, POOL[3]);
    }

    #[test]
    fn odd_point_count_is_rejected() {
        let err = line_list("grid", &POOL[..3]).unwrap_err();
        assert_eq!(err.mesh, "grid");
        assert_eq!(err.face, None);
        assert!(err.message.contains('3'), "message: {}", err.message);
    }

    // ── byte view ─────────────────────────────────────────────────────────

    #[test]
    fn byte_view_is_tightly_packed() {
        let mesh = line_list("grid", &POOL).unwrap();
        assert_eq!(mesh.as_bytes().len(), 4 * 3 * std::mem::size_of::<f32>());
    }
}
