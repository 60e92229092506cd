//! Input actions: platform key events mapped to a small action set.
//!
//! The controller consumes actions, never raw key codes. Window backends
//! translate their events into [`InputState`] calls once per event and call
//! [`InputState::end_frame`] after each update.
//!
//! # Invariants
//! - An action is "pressed this frame" at most once per physical press,
//!   regardless of OS key repeat.
//! - The cursor is a virtual, unbounded position accumulated from motion.

pub mod action;
mod state;

pub use action::Action;
pub use state::{InputSource, InputState};
