use explorer_common::MeshKind;
use explorer_kernel::{Camera, Scene};
use glam::{Mat4, Vec3};
use serde::Serialize;

/// Light parameters as the shader sees them for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightUniform {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub enabled: bool,
}

/// Global uniforms set once before any draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_position: Vec3,
    pub light: LightUniform,
    pub material_specular: Vec3,
    pub shininess: f32,
}

/// One draw call: which mesh, where, and how tinted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawRequest {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub tint: Vec3,
}

/// Everything a backend needs for one frame, in submission order: uniforms
/// first, then draws in scene order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramePlan {
    pub uniforms: FrameUniforms,
    pub draws: Vec<DrawRequest>,
}

impl FramePlan {
    /// Snapshot the camera and scene at `time` seconds.
    pub fn build(scene: &Scene, camera: &Camera, light_on: bool, time: f32) -> Self {
        let light = &scene.light;
        let uniforms = FrameUniforms {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            view_position: camera.position,
            light: LightUniform {
                position: light.position,
                ambient: light.ambient,
                diffuse: light.diffuse,
                specular: light.specular,
                enabled: light_on,
            },
            material_specular: scene.material.specular,
            shininess: scene.material.shininess,
        };

        let draws = scene
            .objects
            .iter()
            .map(|object| DrawRequest {
                mesh: object.mesh,
                model: object.model_matrix(time),
                tint: object.tint,
            })
            .collect::<Vec<_>>();

        tracing::trace!(draws = draws.len(), light_on, time, "frame plan built");
        Self { uniforms, draws }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.uniforms.projection * self.uniforms.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_and_camera() -> (Scene, Camera) {
        let scene = Scene::mini_explorer().unwrap();
        let camera = Camera::new(scene.spawn, 16.0 / 9.0);
        (scene, camera)
    }

    #[test]
    fn draws_follow_scene_order() {
        let (scene, camera) = scene_and_camera();
        let plan = FramePlan::build(&scene, &camera, true, 0.0);
        let meshes: Vec<_> = plan.draws.iter().map(|d| d.mesh).collect();
        assert_eq!(meshes, [MeshKind::Floor, MeshKind::Cube, MeshKind::Pyramid]);
        assert_eq!(plan.draws[0].tint, Vec3::new(0.7, 0.7, 0.75));
    }

    #[test]
    fn uniforms_track_camera_and_light_flag() {
        let (scene, camera) = scene_and_camera();
        let plan = FramePlan::build(&scene, &camera, false, 0.0);
        assert_eq!(plan.uniforms.view, camera.view_matrix());
        assert_eq!(plan.uniforms.projection, camera.projection_matrix());
        assert_eq!(plan.uniforms.view_position, Vec3::new(0.0, 1.2, 4.0));
        assert!(!plan.uniforms.light.enabled);
        assert_eq!(plan.uniforms.light.position, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(plan.uniforms.shininess, 32.0);
        assert_eq!(plan.view_projection(), camera.view_projection());
    }

    #[test]
    fn pyramid_spins_with_time() {
        let (scene, camera) = scene_and_camera();
        let a = FramePlan::build(&scene, &camera, true, 0.0);
        let b = FramePlan::build(&scene, &camera, true, 1.0);
        assert_eq!(a.draws[1].model, b.draws[1].model);
        assert_ne!(a.draws[2].model, b.draws[2].model);
    }

    #[test]
    fn cube_is_visible_from_spawn() {
        let (scene, camera) = scene_and_camera();
        let plan = FramePlan::build(&scene, &camera, true, 0.0);
        let center = plan.draws[1].model.transform_point3(Vec3::ZERO);
        let clip = plan.view_projection().project_point3(center);
        assert!(clip.x.abs() < 1.0 && clip.y.abs() < 1.0);
        assert!((0.0..1.0).contains(&clip.z));
    }
}
