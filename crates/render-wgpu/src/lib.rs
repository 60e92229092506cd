//! wgpu render backend for the explorer.
//!
//! Draws the floor, cube and pyramid from a [`explorer_render::FramePlan`]
//! with a single textured Phong point-light pipeline. The texture is a
//! generated checkerboard; no image files are read.
//!
//! # Invariants
//! - Renderer never mutates the camera or scene.
//! - Mesh buffers, pipeline and texture live exactly as long as the renderer.

mod gpu;
mod shaders;
mod texture;

pub use gpu::WgpuRenderer;
