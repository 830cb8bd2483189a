//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the mark that places on the move leading out of `step`.
    ///
    /// Step 0 has no marks placed, so X is to move; parity alternates from there.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns the single-character symbol used when printing a board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 board snapshot, cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns true if nothing has been placed at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// The receiver is left untouched; history snapshots rely on that.
    #[must_use]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[pos.index()] = Cell::Marked(mark);
        next
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Builds a board from a compact row-major string of `X`, `O` and `.`.
    ///
    /// Whitespace is skipped so boards can be written as three rows. Returns
    /// `None` unless exactly nine cell characters are present.
    pub fn parse(s: &str) -> Option<Self> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                _ => return None,
            };
            *cells.get_mut(count)? = cell;
            count += 1;
        }
        (count == 9).then_some(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Game outcome for a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line and at least one empty cell.
    InProgress,
    /// A line of three belongs to this mark.
    Won(Mark),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Human-readable status line for this outcome with `to_move` next.
    pub fn status_text(self, to_move: Mark) -> String {
        match self {
            Outcome::Won(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "Game ended in a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", to_move),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(mark) => write!(f, "won by {}", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::to_move_at(0), Mark::X);
        assert_eq!(Mark::to_move_at(1), Mark::O);
        assert_eq!(Mark::to_move_at(8), Mark::X);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(next.marked_count(), 1);
    }

    #[test]
    fn test_parse_and_display() {
        let board = Board::parse("XO. .X. ..O").expect("valid board");
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Cell::Marked(Mark::O));
        assert_eq!(board.get(Position::BottomRight), Cell::Marked(Mark::O));
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(Board::parse("XO").is_none());
        assert!(Board::parse("XOXOXOXOXO").is_none());
        assert!(Board::parse("XOXOXOXO?").is_none());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Outcome::Won(Mark::O).status_text(Mark::X), "Winner: O");
        assert_eq!(Outcome::Draw.status_text(Mark::O), "Game ended in a draw!");
        assert_eq!(Outcome::InProgress.status_text(Mark::O), "Next player: O");
    }
}
