//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Viewer actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate a new dungeon with the current room count
    Regenerate,
    /// Raise the room count by one and regenerate
    MoreRooms,
    /// Lower the room count by one and regenerate
    FewerRooms,
    Quit,
}

/// Convert a key event to a viewer command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit), // Ctrl+C
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('r') => Some(Command::Regenerate),

        // Arrow keys and vi keys
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => Some(Command::MoreRooms),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => Some(Command::FewerRooms),

        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
