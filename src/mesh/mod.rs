//! Mesh emission for convex hulls
//!
//! Generates engine-agnostic, flat-shaded mesh data from hull faces.

use crate::hull::ConvexHull;

/// Engine-agnostic mesh data output
///
/// Non-indexed triangle list: every three consecutive vertices form one
/// triangle, wound counter-clockwise when seen from outside. All three
/// vertices of a triangle share its face normal (flat shading).
///
/// - Bevy: Convert to `Mesh` with `ATTRIBUTE_POSITION` / `ATTRIBUTE_NORMAL`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions, three per triangle
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals, one copy of the face normal per vertex
    pub normals: Vec<[f32; 3]>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` buffer
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    /// Normals as a flat `[nx, ny, nz, ...]` buffer
    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals.iter().flatten().copied().collect()
    }

    /// Interleaved `[x, y, z, nx, ny, nz]` per vertex
    pub fn to_interleaved(&self) -> Vec<f32> {
        self.positions
            .iter()
            .zip(&self.normals)
            .flat_map(|(p, n)| [p[0], p[1], p[2], n[0], n[1], n[2]])
            .collect()
    }
}

/// Flatten hull faces into a flat-shaded triangle list
///
/// Each face's normal is recomputed from its two edge vectors and
/// normalized; winding follows the hull's outward orientation.
pub fn emit_mesh(hull: &ConvexHull) -> MeshData {
    let face_count = hull.face_count();
    let mut mesh = MeshData {
        positions: Vec::with_capacity(face_count * 3),
        normals: Vec::with_capacity(face_count * 3),
    };

    for face in hull.faces() {
        let [a, b, c] = hull.triangle(face);
        let normal = (b - a).cross(c - a).normalize_or_zero().as_vec3().to_array();

        for corner in [a, b, c] {
            mesh.positions.push(corner.as_vec3().to_array());
            mesh.normals.push(normal);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, Vec3};

    fn tetrahedron_hull() -> ConvexHull {
        ConvexHull::build(&[
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn test_buffer_lengths() {
        let hull = tetrahedron_hull();
        let mesh = emit_mesh(&hull);

        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.flat_positions().len(), 3 * hull.face_count() * 3);
        assert_eq!(mesh.flat_normals().len(), 3 * hull.face_count() * 3);
        assert_eq!(mesh.to_interleaved().len(), 12 * 6);
    }

    #[test]
    fn test_flat_normals_shared_per_triangle() {
        let mesh = emit_mesh(&tetrahedron_hull());
        for tri in mesh.normals.chunks(3) {
            assert_eq!(tri[0], tri[1]);
            assert_eq!(tri[1], tri[2]);
        }
    }

    #[test]
    fn test_normals_unit_and_outward() {
        let mesh = emit_mesh(&tetrahedron_hull());
        let center = Vec3::splat(0.25);

        for (positions, normals) in mesh.positions.chunks(3).zip(mesh.normals.chunks(3)) {
            let n = Vec3::from_array(normals[0]);
            assert!((n.length() - 1.0).abs() < 1e-4, "Normal not normalized: {}", n.length());

            let a = Vec3::from_array(positions[0]);
            assert!((a - center).dot(n) > 0.0, "normal should face away from the center");
        }
    }

    #[test]
    fn test_winding_matches_normal() {
        let mesh = emit_mesh(&tetrahedron_hull());
        for (positions, normals) in mesh.positions.chunks(3).zip(mesh.normals.chunks(3)) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from_array(positions[i]));
            let winding = (b - a).cross(c - a);
            assert!(winding.dot(Vec3::from_array(normals[0])) > 0.0);
        }
    }

    #[test]
    fn test_empty_hull_empty_mesh() {
        let mesh = emit_mesh(&ConvexHull::build(&[DVec3::ZERO, DVec3::X]));
        assert!(mesh.is_empty());
        assert!(mesh.normals.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_interleaved_layout() {
        let mesh = emit_mesh(&tetrahedron_hull());
        let interleaved = mesh.to_interleaved();
        assert_eq!(&interleaved[0..3], &mesh.positions[0]);
        assert_eq!(&interleaved[3..6], &mesh.normals[0]);
        assert_eq!(&interleaved[6..9], &mesh.positions[1]);
    }
}
