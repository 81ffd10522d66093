//! Embedded model data.
//!
//! Plane and propeller geometry is stored the way modeling exports usually
//! arrive: a vertex pool plus a face-index list, expanded at startup. The
//! axis triad is already in draw order and is used as-is.
//!
//! The plane sits nose toward -Z with +Y up; the propeller is modeled around
//! its hub with the blades in the local XY plane, so spinning it about local Z
//! sweeps the disc the camera sees from the front.

use super::mesh::{self, GeometryError, Mesh};

/// Unit axis triad: origin to +X, origin to +Y, origin to +Z.
///
/// Segment k occupies points [2k, 2k+1]; the renderer colors the segments
/// red, green, blue in that order.
pub const AXIS_POINTS: [[f32; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Plane vertex pool.
///
/// 0..=4 nose cone ring, 5 tail point, 6..=8 right wing, 9..=11 left wing,
/// 12..=14 tailplane, 15..=16 fin.
pub const PLANE_VERTICES: [[f32; 3]; 17] = [
    [0.0, 0.0, -0.35],    // 0  nose tip
    [0.0, 0.07, -0.10],   // 1  fuselage ring, top
    [0.06, 0.0, -0.10],   // 2  fuselage ring, right
    [0.0, -0.05, -0.10],  // 3  fuselage ring, bottom
    [-0.06, 0.0, -0.10],  // 4  fuselage ring, left
    [0.0, 0.02, 0.42],    // 5  tail point
    [0.05, 0.01, -0.06],  // 6  right wing root, leading
    [0.05, 0.01, 0.14],   // 7  right wing root, trailing
    [0.48, 0.01, 0.16],   // 8  right wing tip
    [-0.05, 0.01, -0.06], // 9  left wing root, leading
    [-0.05, 0.01, 0.14],  // 10 left wing root, trailing
    [-0.48, 0.01, 0.16],  // 11 left wing tip
    [0.18, 0.02, 0.40],   // 12 tailplane right tip
    [-0.18, 0.02, 0.40],  // 13 tailplane left tip
    [0.0, 0.02, 0.28],    // 14 tailplane root
    [0.0, 0.16, 0.42],    // 15 fin top
    [0.0, 0.02, 0.26],    // 16 fin leading root
];

pub const PLANE_FACES: [[usize; 3]; 13] = [
    // nose cone
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    // rear fuselage, ring to tail point
    [5, 2, 1],
    [5, 3, 2],
    [5, 4, 3],
    [5, 1, 4],
    // wings
    [6, 7, 8],
    [9, 11, 10],
    // tailplane
    [14, 12, 5],
    [14, 5, 13],
    // fin
    [16, 15, 5],
];

/// Propeller vertex pool: shared root pair plus a tip pair per blade.
pub const PROPELLER_VERTICES: [[f32; 3]; 6] = [
    [-0.03, 0.0, 0.0],   // 0 root left
    [0.03, 0.0, 0.0],    // 1 root right
    [0.045, 0.30, 0.0],  // 2 upper tip right
    [-0.045, 0.30, 0.0], // 3 upper tip left
    [0.045, -0.30, 0.0], // 4 lower tip right
    [-0.045, -0.30, 0.0],// 5 lower tip left
];

pub const PROPELLER_FACES: [[usize; 3]; 4] = [
    // upper blade
    [0, 1, 2],
    [0, 2, 3],
    // lower blade
    [1, 0, 5],
    [1, 5, 4],
];

pub fn axis_triad() -> Result<Mesh, GeometryError> {
    mesh::line_list("axis", &AXIS_POINTS)
}

pub fn plane() -> Result<Mesh, GeometryError> {
    mesh::expand_faces("plane", &PLANE_VERTICES, &PLANE_FACES)
}

pub fn propeller() -> Result<Mesh, GeometryError> {
    mesh::expand_faces("propeller", &PROPELLER_VERTICES, &PROPELLER_FACES)
}

/// The three meshes every view draws.
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    pub axis: Mesh,
    pub plane: Mesh,
    pub propeller: Mesh,
}

/// Builds all scene meshes, failing on the first bad table.
pub fn scene_meshes() -> Result<SceneMeshes, GeometryError> {
    Ok(SceneMeshes {
        axis: axis_triad()?,
        plane: plane()?,
        propeller: propeller()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Topology;

    #[test]
    fn all_scene_meshes_build() {
        let meshes = scene_meshes().unwrap();
        assert_eq!(meshes.axis.topology, Topology::LineList);
        assert_eq!(meshes.plane.topology, Topology::TriangleList);
        assert_eq!(meshes.propeller.topology, Topology::TriangleList);
    }

    #[test]
    fn axis_segments_sit_at_even_odd_pairs() {
        let axis = axis_triad().unwrap();
        assert_eq!(axis.vertex_count(), 6);

        // Segment k spans [2k, 2k+1]: origin, then the unit point for that axis.
        let units = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for (k, unit) in units.iter().enumerate() {
            assert_eq!(axis.vertices[2 * k].position, [0.0, 0.0, 0.0], "segment {k}");
            assert_eq!(axis.vertices[2 * k + 1].position, *unit, "segment {k}");
        }
    }

    #[test]
    fn plane_expands_to_three_vertices_per_face() {
        let plane = plane().unwrap();
        assert_eq!(plane.vertex_count() as usize, PLANE_FACES.len() * 3);
    }

    #[test]
    fn propeller_expands_to_three_vertices_per_face() {
        let propeller = propeller().unwrap();
        assert_eq!(propeller.vertex_count() as usize, PROPELLER_FACES.len() * 3);
    }

    #[test]
    fn face_tables_stay_inside_their_pools() {
        for face in &PLANE_FACES {
            for &i in face {
                assert!(i < PLANE_VERTICES.len(), "plane face index {i}");
            }
        }
        for face in &PROPELLER_FACES {
            for &i in face {
                assert!(i < PROPELLER_VERTICES.len(), "propeller face index {i}");
            }
        }
    }

    #[test]
    fn every_pool_vertex_is_referenced() {
        let mut seen = [false; PLANE_VERTICES.len()];
        for face in &PLANE_FACES {
            for &i in face {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "unused plane vertices: {seen:?}");
    }
}
