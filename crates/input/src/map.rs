//! Key bindings for blockfall.
//!
//! Arrow keys, vim keys and WASD all steer the piece. Letter bindings ignore case.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Letter and symbol bindings, stored lowercase.
const CHAR_BINDINGS: &[(char, GameAction)] = &[
    ('h', GameAction::MoveLeft),
    ('a', GameAction::MoveLeft),
    ('l', GameAction::MoveRight),
    ('d', GameAction::MoveRight),
    ('j', GameAction::SoftDrop),
    ('s', GameAction::SoftDrop),
    ('k', GameAction::Rotate),
    ('w', GameAction::Rotate),
    (' ', GameAction::HardDrop),
    ('p', GameAction::Pause),
    ('r', GameAction::Restart),
];

/// The game action bound to `key`, if any.
///
/// Releases are ignored; presses and terminal auto-repeats both count.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(ch) => {
            let ch = ch.to_ascii_lowercase();
            CHAR_BINDINGS
                .iter()
                .find(|(bound, _)| *bound == ch)
                .map(|&(_, action)| action)
        }
        _ => None,
    }
}

/// `q`, Esc or Ctrl-C end the program.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => ch.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
