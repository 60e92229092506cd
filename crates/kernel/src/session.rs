use crate::camera::Camera;
use crate::collision::{CollisionError, CollisionWorld};
use crate::config::ViewerConfig;
use crate::controller::{FrameContext, FrameController};
use crate::scene::Scene;
use explorer_common::AabbError;

/// Errors from assembling a [`Session`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("scene collider: {0}")]
    Collider(#[from] AabbError),
    #[error("collision world: {0}")]
    Collision(#[from] CollisionError),
}

/// Scene, controller and per-frame context built from one config.
#[derive(Debug, Clone)]
pub struct Session {
    pub scene: Scene,
    pub controller: FrameController,
    pub context: FrameContext,
}

impl Session {
    pub fn new(config: &ViewerConfig) -> Result<Self, SessionError> {
        let mut scene = Scene::mini_explorer()?;
        if let Some(colliders) = &config.colliders {
            scene = scene.with_colliders(colliders.clone());
        }

        let world = CollisionWorld::new(scene.colliders.clone(), config.controller.camera_radius)?;
        let controller = FrameController::new(config.controller, world);

        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        let camera = Camera::new(scene.spawn, aspect).with_projection(config.projection);

        tracing::debug!(
            colliders = scene.colliders.len(),
            objects = scene.objects.len(),
            "session ready"
        );
        Ok(Self {
            scene,
            controller,
            context: FrameContext::new(camera),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_common::Aabb;
    use explorer_input::{Action, InputState};
    use glam::Vec3;

    #[test]
    fn default_session() {
        let session = Session::new(&ViewerConfig::default()).unwrap();
        assert_eq!(session.controller.world().colliders().len(), 5);
        assert_eq!(session.controller.world().radius(), 0.3);
        assert!((session.context.camera.aspect() - 1280.0 / 720.0).abs() < 1e-6);
        assert!(session.context.light_on);
    }

    #[test]
    fn config_colliders_replace_defaults() {
        let config = ViewerConfig {
            colliders: Some(vec![Aabb::new(Vec3::ZERO, Vec3::ONE).unwrap()]),
            ..ViewerConfig::default()
        };
        let session = Session::new(&config).unwrap();
        assert_eq!(session.scene.colliders.len(), 1);
        assert_eq!(session.controller.world().colliders().len(), 1);
    }

    #[test]
    fn bad_radius_fails_session() {
        let mut config = ViewerConfig::default();
        config.controller.camera_radius = -1.0;
        assert!(matches!(
            Session::new(&config),
            Err(SessionError::Collision(_))
        ));
    }

    #[test]
    fn back_wall_stops_a_long_walk() {
        let mut session = Session::new(&ViewerConfig::default()).unwrap();
        let mut input = InputState::new();
        input.press(Action::MoveForward);
        input.press(Action::Sprint);
        for _ in 0..600 {
            session.controller.update(&mut session.context, &input, 0.016);
            input.end_frame();
        }
        // Back wall inner face is z = -4.5, padded by the 0.3 radius.
        assert!((session.context.camera.position.z - -4.2).abs() < 1e-4);
        assert_eq!(session.context.camera.position.y, 1.2);
    }
}
