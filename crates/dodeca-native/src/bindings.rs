use dodeca_core::Action;
use winit::keyboard::KeyCode;

/// Fixed keyboard layout. Enter is shown in the window title but has no
/// action bound to it.
#[inline]
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    let action = match code {
        // Object rotation
        KeyCode::KeyS => Action::RotateXPos,
        KeyCode::KeyW => Action::RotateXNeg,
        KeyCode::KeyE => Action::RotateYPos,
        KeyCode::KeyQ => Action::RotateYNeg,
        KeyCode::KeyD => Action::RotateZPos,
        KeyCode::KeyA => Action::RotateZNeg,
        // Camera translation
        KeyCode::ArrowUp => Action::MoveForward,
        KeyCode::ArrowDown => Action::MoveBackward,
        KeyCode::ArrowLeft => Action::MoveLeft,
        KeyCode::ArrowRight => Action::MoveRight,
        // Camera orientation
        KeyCode::KeyI => Action::LookUp,
        KeyCode::KeyK => Action::LookDown,
        KeyCode::KeyJ => Action::LookLeft,
        KeyCode::KeyL => Action::LookRight,
        // Toggles
        KeyCode::KeyP => Action::ToggleOrthogonal,
        KeyCode::KeyT => Action::ToggleTriangles,
        KeyCode::Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}

pub const HELP: &str = "W/S rotate X, Q/E rotate Y, A/D rotate Z, arrows move, \
I/K look up/down, J/L look left/right, scroll to scale, \
P orthogonal mode, T triangle wireframe, Esc quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_key() {
        let keys = [
            KeyCode::KeyS,
            KeyCode::KeyW,
            KeyCode::KeyE,
            KeyCode::KeyQ,
            KeyCode::KeyD,
            KeyCode::KeyA,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::KeyI,
            KeyCode::KeyK,
            KeyCode::KeyJ,
            KeyCode::KeyL,
            KeyCode::KeyP,
            KeyCode::KeyT,
            KeyCode::Escape,
        ];
        let bound: Vec<Action> = keys.iter().filter_map(|k| action_for_key(*k)).collect();
        for action in Action::ALL {
            assert!(bound.contains(&action), "{action:?} is unbound");
        }
    }

    #[test]
    fn enter_is_unbound() {
        assert_eq!(action_for_key(KeyCode::Enter), None);
        assert_eq!(action_for_key(KeyCode::NumpadEnter), None);
    }
}
