use crate::Action;
use glam::Vec2;
use std::collections::BTreeSet;

/// Read side of the input collaborator, polled once per frame.
pub trait InputSource {
    /// Whether the action is currently held.
    fn is_down(&self, action: Action) -> bool;
    /// Whether the action went from up to down since the last frame ended.
    fn was_pressed(&self, action: Action) -> bool;
    /// Current virtual cursor position in pixels.
    fn cursor(&self) -> Vec2;
}

/// Held and edge-triggered action state for one window.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Action>,
    pressed: BTreeSet<Action>,
    cursor: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Repeats of an already held action are ignored.
    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.pressed.insert(action);
            tracing::trace!(action = action.name(), "pressed");
        }
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Drop every held action, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn set_cursor(&mut self, position: Vec2) {
        self.cursor = position;
    }

    /// Accumulate raw motion into the virtual cursor.
    pub fn move_cursor(&mut self, delta: Vec2) {
        self.cursor += delta;
    }

    /// Clear edge-triggered state. Call once after each frame update.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for InputState {
    fn is_down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_edge_triggered_across_repeats() {
        let mut input = InputState::new();
        let mut edges = 0;
        for _ in 0..10 {
            // OS key repeat delivers a key-down every frame while held.
            input.press(Action::ToggleLight);
            if input.was_pressed(Action::ToggleLight) {
                edges += 1;
            }
            assert!(input.is_down(Action::ToggleLight));
            input.end_frame();
        }
        assert_eq!(edges, 1);
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut input = InputState::new();
        input.press(Action::ToggleLook);
        input.end_frame();
        input.release(Action::ToggleLook);
        input.press(Action::ToggleLook);
        assert!(input.was_pressed(Action::ToggleLook));
    }

    #[test]
    fn release_all_clears_held() {
        let mut input = InputState::new();
        input.press(Action::MoveForward);
        input.press(Action::Sprint);
        input.release_all();
        assert!(!input.is_down(Action::MoveForward));
        assert!(!input.is_down(Action::Sprint));
    }

    #[test]
    fn cursor_accumulates_motion() {
        let mut input = InputState::new();
        input.set_cursor(Vec2::new(10.0, 10.0));
        input.move_cursor(Vec2::new(5.0, -2.0));
        input.move_cursor(Vec2::new(1.0, 1.0));
        assert_eq!(input.cursor(), Vec2::new(16.0, 9.0));
    }
}
