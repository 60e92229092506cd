//! Shared types for the explorer viewer.
//!
//! # Invariants
//! - An [`Aabb`] always satisfies `min <= max` component-wise with finite corners.
//! - Visual geometry and collision boxes are authored independently.

pub mod types;

pub use types::{Aabb, AabbError, MeshKind, Transform};
