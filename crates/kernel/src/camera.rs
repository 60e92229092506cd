use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch is held strictly inside the poles so `right` never degenerates.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

const WORLD_UP: Vec3 = Vec3::Y;

/// Perspective projection parameters. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// First-person camera with yaw/pitch in degrees.
///
/// The basis (`front`, `right`, `up`) is derived on every call and never
/// cached. Pitch is clamped whenever it is written, so the basis stays
/// orthonormal for every reachable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    aspect: f32,
    pub projection: Projection,
}

impl Camera {
    /// Camera facing -Z (yaw -90°, pitch 0°).
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            projection: Projection::default(),
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Set both angles; pitch is clamped to ±[`PITCH_LIMIT_DEGREES`].
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    }

    /// Add to yaw and pitch (degrees). Yaw wraps freely.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.set_orientation(self.yaw + yaw_delta, self.pitch + pitch_delta);
    }

    /// Recompute the aspect ratio from a viewport size in pixels.
    ///
    /// A zero-area viewport (minimized window) keeps the previous aspect and
    /// returns `false`.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "ignoring zero-area viewport");
            return false;
        }
        self.aspect = width as f32 / height as f32;
        tracing::debug!(width, height, aspect = self.aspect, "viewport resized");
        true
    }

    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(WORLD_UP).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front()).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix(self.aspect)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
