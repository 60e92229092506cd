//! Rendering adapter: renderer-agnostic frame description.
//!
//! # Invariants
//! - Renderers cannot mutate the camera or the scene.
//! - Per frame, uniforms are set before any draw, and draws follow scene order.
//!
//! Backends receive a [`FramePlan`] built from the camera and scene, plus
//! CPU [`MeshData`] for each [`explorer_common::MeshKind`] at load time.

mod frame;
mod mesh;
mod renderer;

pub use frame::{DrawRequest, FramePlan, FrameUniforms, LightUniform};
pub use mesh::{MeshData, MeshVertex};
pub use renderer::{DebugTextRenderer, Renderer};
