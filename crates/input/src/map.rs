//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent};

use term_tetra_types::Command;

/// Map a key event to a board command. `None` means the key is ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char(',') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('.') => Some(Command::MoveRight),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Command::RotateCcw),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::RotateCw),
        KeyCode::Down | KeyCode::Char(' ') => Some(Command::SoftDrop),
        _ => None,
    }
}
