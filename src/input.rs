//! Key bindings.

use crate::core::events::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game action. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k') => Some(GameAction::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameAction::Quit),
        _ => None,
    }
}

/// Status-bar hints as (key, action) pairs.
pub const CONTROLS: [(&str, &str); 3] = [
    ("[Space/Up]", "Flap"),
    ("[R]", "Restart"),
    ("[Q/Esc]", "Quit"),
];
