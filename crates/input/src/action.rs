use serde::{Deserialize, Serialize};

/// A high-level action the frame controller understands.
///
/// Backends map physical keys onto these; the default desktop bindings are
/// listed next to each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// W
    MoveForward,
    /// S
    MoveBackward,
    /// A
    StrafeLeft,
    /// D
    StrafeRight,
    /// Space
    FlyUp,
    /// Left Ctrl
    FlyDown,
    /// Left Shift, multiplies movement speed while held.
    Sprint,
    /// Escape, switches between captured mouse look and a free cursor.
    ToggleLook,
    /// E
    ToggleLight,
    /// F1
    ToggleHud,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::FlyUp,
        Action::FlyDown,
        Action::Sprint,
        Action::ToggleLook,
        Action::ToggleLight,
        Action::ToggleHud,
    ];

    /// Stable kebab-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Action::MoveForward => "move-forward",
            Action::MoveBackward => "move-backward",
            Action::StrafeLeft => "strafe-left",
            Action::StrafeRight => "strafe-right",
            Action::FlyUp => "fly-up",
            Action::FlyDown => "fly-down",
            Action::Sprint => "sprint",
            Action::ToggleLook => "toggle-look",
            Action::ToggleLight => "toggle-light",
            Action::ToggleHud => "toggle-hud",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Some(action));
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Action::from_name("jump"), None);
    }
}
