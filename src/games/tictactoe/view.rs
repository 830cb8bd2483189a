//! Read-only render views produced by the engine.

use super::position::Position;
use super::types::{Cell, Mark, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One board cell as a front end should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct CellView {
    /// Where the cell sits.
    position: Position,
    /// What the cell holds.
    cell: Cell,
    /// Whether a click here would be accepted.
    clickable: bool,
    /// Whether the cell is part of the completed line.
    winning: bool,
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the current step.
    active: bool,
    /// The move that produced this snapshot; `None` for the start.
    placed: Option<(Mark, Position)>,
}

impl HistoryEntry {
    /// Creates an entry, deriving its label from `step`.
    pub fn new(step: usize, active: bool, placed: Option<(Mark, Position)>) -> Self {
        let label = if step == 0 {
            "Go to start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self {
            step,
            label,
            active,
            placed,
        }
    }
}

/// Everything needed to render one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameView {
    /// Nine cells in row-major order.
    cells: Vec<CellView>,
    /// Mark that places next.
    to_move: Mark,
    /// Outcome of the current board.
    outcome: Outcome,
    /// Status line.
    status: String,
    /// One entry per history step.
    history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_labels() {
        assert_eq!(HistoryEntry::new(0, true, None).label(), "Go to start");
        let entry = HistoryEntry::new(3, false, Some((Mark::X, Position::Center)));
        assert_eq!(entry.label(), "Go to move #3");
        assert!(!*entry.active());
    }
}
