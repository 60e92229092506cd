use explorer_common::{Aabb, AabbError, MeshKind, Transform};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A static mesh placed in the world. Rendering only; collision is authored
/// separately in [`Scene::colliders`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub mesh: MeshKind,
    pub transform: Transform,
    /// Rotation about world Y in radians per second. Zero for static objects.
    pub spin: f32,
    pub tint: Vec3,
}

impl SceneObject {
    pub fn new(mesh: MeshKind, position: Vec3) -> Self {
        Self {
            mesh,
            transform: Transform::from_translation(position),
            spin: 0.0,
            tint: Vec3::ONE,
        }
    }

    pub fn with_tint(mut self, tint: Vec3) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Model matrix at `time` seconds: spin about the object's own origin,
    /// then place it.
    pub fn model_matrix(&self, time: f32) -> Mat4 {
        let t = &self.transform;
        Mat4::from_translation(t.position)
            * Mat4::from_rotation_y(self.spin * time)
            * Transform {
                position: Vec3::ZERO,
                ..*t
            }
            .matrix()
    }
}

/// Single Phong point light. Intensities are per-channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, 2.0),
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(1.0),
        }
    }
}

/// Surface response shared by every object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        }
    }
}

/// The static world: drawables, light, and the ordered collider list.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub light: PointLight,
    pub material: Material,
    pub colliders: Vec<Aabb>,
    /// Where the camera spawns.
    pub spawn: Vec3,
}

impl Scene {
    /// Floor, cube and spinning pyramid, fenced on three sides. The front
    /// (+Z) side is open.
    pub fn mini_explorer() -> Result<Self, AabbError> {
        let objects = vec![
            SceneObject::new(MeshKind::Floor, Vec3::ZERO).with_tint(Vec3::new(0.7, 0.7, 0.75)),
            SceneObject::new(MeshKind::Cube, Vec3::new(-1.5, 0.5, 0.0)),
            SceneObject::new(MeshKind::Pyramid, Vec3::new(2.0, 0.5, -1.0)).with_spin(0.7),
        ];

        Ok(Self {
            objects,
            light: PointLight::default(),
            material: Material::default(),
            colliders: default_colliders()?,
            spawn: Vec3::new(0.0, 1.2, 4.0),
        })
    }

    /// Replace the collider list, keeping everything else.
    pub fn with_colliders(mut self, colliders: Vec<Aabb>) -> Self {
        self.colliders = colliders;
        self
    }
}

/// Collider order matters: it fixes the resolution fold.
fn default_colliders() -> Result<Vec<Aabb>, AabbError> {
    Ok(vec![
        // cube footprint
        Aabb::from_center_half_extents(Vec3::new(-1.5, 0.5, 0.0), Vec3::splat(0.5))?,
        // pyramid footprint
        Aabb::from_center_half_extents(Vec3::new(2.0, 0.5, -1.0), Vec3::splat(0.5))?,
        // left wall
        Aabb::new(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(-4.5, 3.0, 5.0))?,
        // right wall
        Aabb::new(Vec3::new(4.5, 0.0, -5.0), Vec3::new(5.0, 3.0, 5.0))?,
        // back wall
        Aabb::new(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 3.0, -4.5))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let scene = Scene::mini_explorer().unwrap();
        let meshes: Vec<_> = scene.objects.iter().map(|o| o.mesh).collect();
        assert_eq!(meshes, [MeshKind::Floor, MeshKind::Cube, MeshKind::Pyramid]);
        assert_eq!(scene.colliders.len(), 5);
        assert_eq!(scene.spawn, Vec3::new(0.0, 1.2, 4.0));
    }

    #[test]
    fn colliders_approximate_visual_footprints() {
        let scene = Scene::mini_explorer().unwrap();
        let cube = &scene.objects[1];
        let pyramid = &scene.objects[2];
        assert_eq!(scene.colliders[0].center(), cube.transform.position);
        assert_eq!(scene.colliders[1].center(), pyramid.transform.position);
    }

    #[test]
    fn static_object_matrix_is_translation() {
        let cube = SceneObject::new(MeshKind::Cube, Vec3::new(-1.5, 0.5, 0.0));
        let m = cube.model_matrix(123.0);
        assert_eq!(m, Mat4::from_translation(Vec3::new(-1.5, 0.5, 0.0)));
    }

    #[test]
    fn unspun_matrix_matches_transform() {
        let mut object = SceneObject::new(MeshKind::Cube, Vec3::new(1.0, 0.5, -2.0));
        object.transform.rotation = glam::Quat::from_rotation_x(0.3);
        object.transform.scale = Vec3::new(1.0, 2.0, 0.5);
        assert!(object.model_matrix(0.0).abs_diff_eq(object.transform.matrix(), 1e-6));
    }

    #[test]
    fn spinning_object_rotates_in_place() {
        let pyramid = SceneObject::new(MeshKind::Pyramid, Vec3::new(2.0, 0.5, -1.0)).with_spin(0.7);
        let quarter_turn = std::f32::consts::FRAC_PI_2 / 0.7;
        let m = pyramid.model_matrix(quarter_turn);

        // The origin stays put; a local +X offset swings to -Z.
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(2.0, 0.5, -1.0), 1e-5));
        let tip = m.transform_point3(Vec3::X);
        assert!(tip.abs_diff_eq(Vec3::new(2.0, 0.5, -2.0), 1e-5));
    }
}
