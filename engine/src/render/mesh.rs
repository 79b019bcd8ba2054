//! Scene Meshes
//!
//! CPU-side geometry for the two block shapes the demo can draw: a full
//! indexed unit cube, and the four-sided "wall panel" band the early
//! prototypes used (side faces only, no top or bottom). Both are unit-sized,
//! centered on the local origin, and uploaded to GPU buffers exactly once.

use bytemuck::{Pod, Zeroable};

/// Vertex for scene rendering (position + flat face color).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Which block shape the renderer draws per solid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    /// Full indexed unit cube (24 vertices, 36 indices).
    Cube,
    /// Side faces only, as in the non-indexed prototypes (16 vertices, 24 indices).
    WallPanel,
}

/// CPU-side mesh data, ready for upload.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<SceneVertex>,
    pub indices: Vec<u32>,
}

// Flat shading per face so the geometry reads without a lighting stage.
const FACE_NORTH: [f32; 3] = [0.85, 0.85, 0.85];
const FACE_SOUTH: [f32; 3] = [0.75, 0.75, 0.75];
const FACE_EAST: [f32; 3] = [0.55, 0.55, 0.55];
const FACE_WEST: [f32; 3] = [0.65, 0.65, 0.65];
const FACE_TOP: [f32; 3] = [0.95, 0.95, 0.95];
const FACE_BOTTOM: [f32; 3] = [0.35, 0.35, 0.35];

impl Mesh {
    /// Build the mesh for the given kind.
    pub fn build(kind: MeshKind) -> Self {
        match kind {
            MeshKind::Cube => Self::unit_cube(),
            MeshKind::WallPanel => Self::wall_panel(),
        }
    }

    /// Append one quad (two triangles) from four corner positions in
    /// counter-clockwise order.
    fn push_quad(&mut self, corners: [[f32; 3]; 4], color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for position in corners {
            self.vertices.push(SceneVertex { position, color });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Full unit cube centered on the origin, one quad per face.
    pub fn unit_cube() -> Self {
        let mut mesh = Self {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };

        // -Z face (toward the camera at spawn)
        mesh.push_quad(
            [
                [-0.5, 0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
            FACE_NORTH,
        );
        // +X face
        mesh.push_quad(
            [
                [0.5, 0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
            ],
            FACE_EAST,
        );
        // +Z face
        mesh.push_quad(
            [
                [0.5, 0.5, 0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
            FACE_SOUTH,
        );
        // -X face
        mesh.push_quad(
            [
                [-0.5, 0.5, 0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
            FACE_WEST,
        );
        // +Y face
        mesh.push_quad(
            [
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
            ],
            FACE_TOP,
        );
        // -Y face
        mesh.push_quad(
            [
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, -0.5, -0.5],
            ],
            FACE_BOTTOM,
        );

        mesh
    }

    /// The early prototypes' wall band: the four side faces of the unit
    /// cube, no top or bottom.
    pub fn wall_panel() -> Self {
        let mut mesh = Self {
            vertices: Vec::with_capacity(16),
            indices: Vec::with_capacity(24),
        };

        mesh.push_quad(
            [
                [-0.5, 0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
            FACE_NORTH,
        );
        mesh.push_quad(
            [
                [0.5, 0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
            ],
            FACE_EAST,
        );
        mesh.push_quad(
            [
                [0.5, 0.5, 0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
            FACE_SOUTH,
        );
        mesh.push_quad(
            [
                [-0.5, 0.5, 0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
            FACE_WEST,
        );

        mesh
    }

    /// Number of indices to draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_counts() {
        let mesh = Mesh::unit_cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn test_wall_panel_counts() {
        let mesh = Mesh::wall_panel();
        assert_eq!(mesh.vertices.len(), 16);
        assert_eq!(mesh.indices.len(), 24);
    }

    #[test]
    fn test_indices_in_range() {
        for mesh in [Mesh::unit_cube(), Mesh::wall_panel()] {
            let max = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < max));
        }
    }

    #[test]
    fn test_cube_is_unit_sized() {
        let mesh = Mesh::unit_cube();
        for v in &mesh.vertices {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_build_dispatch() {
        assert_eq!(Mesh::build(MeshKind::Cube).index_count(), 36);
        assert_eq!(Mesh::build(MeshKind::WallPanel).index_count(), 24);
    }

    #[test]
    fn test_vertex_is_pod() {
        let v = SceneVertex {
            position: [1.0, 2.0, 3.0],
            color: [0.5, 0.5, 0.5],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), std::mem::size_of::<SceneVertex>());
        assert_eq!(std::mem::size_of::<SceneVertex>(), 24);
    }
}
