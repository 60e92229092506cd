use explorer_input::Action;
use winit::keyboard::KeyCode;

/// Default desktop key bindings.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::KeyW => Action::MoveForward,
        KeyCode::KeyS => Action::MoveBackward,
        KeyCode::KeyA => Action::StrafeLeft,
        KeyCode::KeyD => Action::StrafeRight,
        KeyCode::Space => Action::FlyUp,
        KeyCode::ControlLeft => Action::FlyDown,
        KeyCode::ShiftLeft => Action::Sprint,
        KeyCode::Escape => Action::ToggleLook,
        KeyCode::KeyE => Action::ToggleLight,
        KeyCode::F1 => Action::ToggleHud,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_key() {
        let keys = [
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::Space,
            KeyCode::ControlLeft,
            KeyCode::ShiftLeft,
            KeyCode::Escape,
            KeyCode::KeyE,
            KeyCode::F1,
        ];
        let mut bound: Vec<Action> = keys.iter().filter_map(|k| action_for(*k)).collect();
        bound.sort();
        let mut all = Action::ALL.to_vec();
        all.sort();
        assert_eq!(bound, all);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(action_for(KeyCode::KeyQ), None);
    }
}
