//! Explorer kernel: first-person camera, static collision world, and the
//! per-frame controller that ties them to input.
//!
//! # Invariants
//! - Camera pitch stays within ±89°, so the derived basis is orthonormal.
//! - Collision resolution is a fold over colliders in their stored order and
//!   only touches X and Z.
//! - The camera's Y is forced to eye height after every update.
//! - All per-frame mutable state lives in [`FrameContext`]; one call to
//!   [`FrameController::update`] advances exactly one frame.

pub mod camera;
pub mod clock;
pub mod collision;
pub mod config;
pub mod controller;
pub mod scene;
pub mod session;

pub use camera::{Camera, PITCH_LIMIT_DEGREES, Projection};
pub use clock::FrameClock;
pub use collision::{CollisionError, CollisionWorld, PushEdge};
pub use config::{ConfigError, ViewerConfig, WindowConfig};
pub use controller::{ControllerConfig, FrameContext, FrameController, FrameEvents, LookMode};
pub use scene::{Material, PointLight, Scene, SceneObject};
pub use session::{Session, SessionError};
