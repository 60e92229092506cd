use crate::camera::Camera;
use crate::collision::CollisionWorld;
use explorer_input::{Action, InputSource};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Movement and look tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Units per second.
    pub base_speed: f32,
    pub sprint_multiplier: f32,
    /// Degrees per pixel of cursor motion.
    pub mouse_sensitivity: f32,
    /// Fixed camera height applied after collision.
    pub eye_height: f32,
    /// Lateral padding used by the collision world.
    pub camera_radius: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_speed: 3.0,
            sprint_multiplier: 1.8,
            mouse_sensitivity: 0.1,
            eye_height: 1.2,
            camera_radius: 0.3,
        }
    }
}

/// Whether mouse motion drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookMode {
    /// Cursor captured; motion rotates the camera.
    Captured,
    /// Cursor released for the desktop.
    Free,
}

impl LookMode {
    pub fn toggled(self) -> Self {
        match self {
            LookMode::Captured => LookMode::Free,
            LookMode::Free => LookMode::Captured,
        }
    }
}

/// Everything the update loop mutates from one frame to the next.
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub camera: Camera,
    pub light_on: bool,
    look_mode: LookMode,
    /// Cursor position at the end of the last look-active frame. `None`
    /// re-arms the baseline so the next delta is zero.
    mouse_baseline: Option<Vec2>,
}

impl FrameContext {
    /// Fresh context: light on, look active, baseline armed.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            light_on: true,
            look_mode: LookMode::Captured,
            mouse_baseline: None,
        }
    }

    pub fn look_mode(&self) -> LookMode {
        self.look_mode
    }

    /// Switch look modes. Always re-arms the mouse baseline.
    pub fn toggle_look_mode(&mut self) -> LookMode {
        self.look_mode = self.look_mode.toggled();
        self.mouse_baseline = None;
        self.look_mode
    }

    /// Cursor motion since the previous look-active frame.
    fn take_mouse_delta(&mut self, cursor: Vec2) -> Vec2 {
        let baseline = self.mouse_baseline.replace(cursor).unwrap_or(cursor);
        cursor - baseline
    }
}

/// What changed this frame that the window layer needs to act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Set when the look mode flipped; carries the new mode.
    pub look_mode: Option<LookMode>,
    pub light_toggled: bool,
}

/// Turns an input snapshot into camera motion against a static world.
#[derive(Debug, Clone)]
pub struct FrameController {
    config: ControllerConfig,
    world: CollisionWorld,
}

impl FrameController {
    pub fn new(config: ControllerConfig, world: CollisionWorld) -> Self {
        Self { config, world }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Current movement speed in units per second.
    pub fn speed<I: InputSource>(&self, input: &I) -> f32 {
        if input.is_down(Action::Sprint) {
            self.config.base_speed * self.config.sprint_multiplier
        } else {
            self.config.base_speed
        }
    }

    /// Summed displacement of all held directional actions. Not normalized:
    /// two held axes move `√2` times faster than one.
    pub fn displacement<I: InputSource>(&self, camera: &Camera, input: &I, dt: f32) -> Vec3 {
        let step = self.speed(input) * dt.max(0.0);
        let (front, right, up) = (camera.front(), camera.right(), camera.up());

        [
            (Action::MoveForward, front),
            (Action::MoveBackward, -front),
            (Action::StrafeRight, right),
            (Action::StrafeLeft, -right),
            (Action::FlyUp, up),
            (Action::FlyDown, -up),
        ]
        .into_iter()
        .filter(|(action, _)| input.is_down(*action))
        .fold(Vec3::ZERO, |acc, (_, dir)| acc + dir * step)
    }

    /// Advance one frame.
    ///
    /// Order: look toggle, movement, collision, eye-height clamp, light
    /// toggle, mouse look.
    pub fn update<I: InputSource>(&self, ctx: &mut FrameContext, input: &I, dt: f32) -> FrameEvents {
        let _span = tracing::trace_span!("frame_update", dt).entered();
        let mut events = FrameEvents::default();

        if input.was_pressed(Action::ToggleLook) {
            let mode = ctx.toggle_look_mode();
            tracing::debug!(?mode, "look mode toggled");
            events.look_mode = Some(mode);
        }

        let mut candidate = ctx.camera.position + self.displacement(&ctx.camera, input, dt);
        self.world.resolve(&mut candidate);
        candidate.y = self.config.eye_height;
        ctx.camera.position = candidate;

        if input.was_pressed(Action::ToggleLight) {
            ctx.light_on = !ctx.light_on;
            tracing::debug!(light_on = ctx.light_on, "light toggled");
            events.light_toggled = true;
        }

        if ctx.look_mode == LookMode::Captured {
            let delta = ctx.take_mouse_delta(input.cursor());
            let sensitivity = self.config.mouse_sensitivity;
            ctx.camera.rotate(delta.x * sensitivity, -delta.y * sensitivity);
        }

        events
    }
}
