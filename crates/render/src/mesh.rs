use explorer_common::MeshKind;
use glam::{Vec2, Vec3};

/// Interleaved vertex as uploaded by GPU backends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// CPU-side indexed triangle list. Front faces wind counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Geometry used for each scene mesh kind.
    pub fn for_kind(kind: MeshKind) -> Self {
        match kind {
            MeshKind::Floor => Self::plane(10.0, 10.0),
            MeshKind::Cube => Self::cube(1.0),
            MeshKind::Pyramid => Self::pyramid(1.0, 1.0),
        }
    }

    /// Horizontal quad at y = 0 facing +Y, centered on the origin.
    pub fn plane(width: f32, depth: f32) -> Self {
        let (hw, hd) = (width * 0.5, depth * 0.5);
        let mut mesh = Self::empty();
        mesh.push_quad(
            [
                Vec3::new(-hw, 0.0, hd),
                Vec3::new(hw, 0.0, hd),
                Vec3::new(hw, 0.0, -hd),
                Vec3::new(-hw, 0.0, -hd),
            ],
            Vec3::Y,
        );
        mesh
    }

    /// Axis-aligned cube with edge length `size`, centered on the origin.
    /// Each face has its own four vertices so normals stay flat.
    pub fn cube(size: f32) -> Self {
        let h = size * 0.5;
        let mut mesh = Self::empty();
        // (normal, u axis, v axis); corners are normal*h ± u*h ± v*h.
        let faces = [
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        ];
        for (n, u, v) in faces {
            let c = n * h;
            mesh.push_quad(
                [
                    c - u * h - v * h,
                    c + u * h - v * h,
                    c + u * h + v * h,
                    c - u * h + v * h,
                ],
                n,
            );
        }
        mesh
    }

    /// Square pyramid: base on y = 0 centered on the origin, apex at
    /// `(0, height, 0)`. Side normals are computed from the faces.
    pub fn pyramid(base: f32, height: f32) -> Self {
        let h = base * 0.5;
        let apex = Vec3::new(0.0, height, 0.0);
        let corners = [
            Vec3::new(-h, 0.0, h),
            Vec3::new(h, 0.0, h),
            Vec3::new(h, 0.0, -h),
            Vec3::new(-h, 0.0, -h),
        ];

        let mut mesh = Self::empty();
        mesh.push_quad(
            [corners[3], corners[2], corners[1], corners[0]],
            Vec3::NEG_Y,
        );
        for i in 0..4 {
            let (a, b) = (corners[i], corners[(i + 1) % 4]);
            let normal = (b - a).cross(apex - a).normalize();
            let base_index = mesh.vertices.len() as u16;
            mesh.vertices.extend([
                MeshVertex { position: a, normal, uv: Vec2::new(0.0, 0.0) },
                MeshVertex { position: b, normal, uv: Vec2::new(1.0, 0.0) },
                MeshVertex { position: apex, normal, uv: Vec2::new(0.5, 1.0) },
            ]);
            mesh.indices.extend([base_index, base_index + 1, base_index + 2]);
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Append a quad given counter-clockwise corners (seen from `normal`).
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let uvs = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let base = self.vertices.len() as u16;
        for (position, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(MeshVertex { position, normal, uv });
        }
        self.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every triangle's winding must agree with its vertex normals.
    fn assert_ccw_outward(mesh: &MeshData) {
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let face = (b.position - a.position).cross(c.position - a.position);
            assert!(face.length() > 0.0, "degenerate triangle {tri:?}");
            assert!(face.dot(a.normal) > 0.0, "triangle {tri:?} winds against its normal");
        }
    }

    fn assert_unit_normals(mesh: &MeshData) {
        for v in &mesh.vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn plane_faces_up() {
        let mesh = MeshData::plane(10.0, 10.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_ccw_outward(&mesh);
        assert!(mesh.vertices.iter().all(|v| v.position.y == 0.0 && v.normal == Vec3::Y));
    }

    #[test]
    fn cube_has_flat_outward_faces() {
        let mesh = MeshData::cube(1.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_ccw_outward(&mesh);
        assert_unit_normals(&mesh);
        for v in &mesh.vertices {
            assert!(v.position.abs().max_element() <= 0.5 + 1e-6);
            // Each vertex lies on the face its normal points out of.
            assert!((v.position.dot(v.normal) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn pyramid_sides_lean_outward() {
        let mesh = MeshData::pyramid(1.0, 1.0);
        assert_eq!(mesh.vertices.len(), 4 + 12);
        assert_eq!(mesh.triangle_count(), 2 + 4);
        assert_ccw_outward(&mesh);
        assert_unit_normals(&mesh);
        for v in &mesh.vertices[4..] {
            assert!(v.normal.y > 0.0);
        }
        let apex_count = mesh
            .vertices
            .iter()
            .filter(|v| v.position == Vec3::new(0.0, 1.0, 0.0))
            .count();
        assert_eq!(apex_count, 4);
    }

    #[test]
    fn kinds_map_to_scene_sizes() {
        let floor = MeshData::for_kind(MeshKind::Floor);
        let max_x = floor.vertices.iter().map(|v| v.position.x).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 5.0);
        assert_eq!(MeshData::for_kind(MeshKind::Cube), MeshData::cube(1.0));
        assert_eq!(MeshData::for_kind(MeshKind::Pyramid), MeshData::pyramid(1.0, 1.0));
    }
}
