//! Key bindings for the terminal front end.

use crate::Position;
use crossterm::event::KeyCode;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Place at the board cursor.
    PlaceAtCursor,
    /// Place directly on a cell.
    PlaceAt(Position),
    /// Move the history selection by one entry.
    SelectHistory(isize),
    /// Jump to the selected history entry.
    JumpToSelected,
    /// Jump one step back or forward from the current step.
    Step(isize),
    /// Jump to the start of the game.
    JumpToStart,
    /// Start a new game.
    Reset,
    /// Switch panels.
    ToggleFocus,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action given the focused panel.
pub fn action_for(focus: Focus, key: KeyCode) -> Option<Action> {
    match (focus, key) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => Some(Action::Quit),
        (_, KeyCode::Char('r')) => Some(Action::Reset),
        (_, KeyCode::Tab) => Some(Action::ToggleFocus),
        (_, KeyCode::Char('[')) => Some(Action::Step(-1)),
        (_, KeyCode::Char(']')) => Some(Action::Step(1)),
        (_, KeyCode::Home) => Some(Action::JumpToStart),
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlaceAt),
        (Focus::Board, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(key))
        }
        (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::PlaceAtCursor),
        (Focus::History, KeyCode::Up) => Some(Action::SelectHistory(-1)),
        (Focus::History, KeyCode::Down) => Some(Action::SelectHistory(1)),
        (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::JumpToSelected),
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
