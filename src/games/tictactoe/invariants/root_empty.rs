//! Root invariant: history starts from the empty board.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: entry 0 exists and is the empty board.
pub struct RootIsEmpty;

impl Invariant<History> for RootIsEmpty {
    fn holds(history: &History) -> bool {
        history.get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
