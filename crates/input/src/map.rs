//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action, if any.
///
/// Arrows are the primary bindings; hjkl and wasd work too.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Char(c) => action_for_char(c),
        _ => None,
    }
}

fn action_for_char(c: char) -> Option<GameAction> {
    match c.to_ascii_lowercase() {
        'h' | 'a' => Some(GameAction::MoveLeft),
        'l' | 'd' => Some(GameAction::MoveRight),
        'k' | 'w' => Some(GameAction::Rotate),
        'j' | 's' => Some(GameAction::SoftDrop),
        'r' => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_actions() {
        let cases = [
            (KeyCode::Left, GameAction::MoveLeft),
            (KeyCode::Right, GameAction::MoveRight),
            (KeyCode::Up, GameAction::Rotate),
            (KeyCode::Down, GameAction::SoftDrop),
            (KeyCode::Char('h'), GameAction::MoveLeft),
            (KeyCode::Char('D'), GameAction::MoveRight),
            (KeyCode::Char('w'), GameAction::Rotate),
            (KeyCode::Char('J'), GameAction::SoftDrop),
            (KeyCode::Char('r'), GameAction::Restart),
        ];
        for (code, action) in cases {
            assert_eq!(
                action_for_key(KeyEvent::from(code)),
                Some(action),
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(action_for_key(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
