//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Nothing here looks at
//! history or turn order; the engine derives the outcome of whichever snapshot
//! is current by calling [`outcome`].

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of `board`.
///
/// The win check runs first, so a full board with a line is a win.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
