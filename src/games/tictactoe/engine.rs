//! Time-travel game engine for tic-tac-toe.
//!
//! The engine owns the full [`History`] of board snapshots. Whose turn it is
//! and how the game stands are never stored: both are derived from the current
//! snapshot every time they are asked for, so navigating history can never
//! leave a stale outcome behind.

use super::history::History;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, Mark, Outcome};
use super::view::{CellView, GameView, HistoryEntry};
use tracing::{debug, info, instrument};

/// Input the engine declined to act on.
///
/// Returning one of these never changes engine state. Callers that follow the
/// "do nothing" convention can drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IgnoredInput {
    /// The chosen cell already holds a mark.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot is finished.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),

    /// A history step past the last snapshot.
    #[display("History step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Tic-tac-toe engine with navigable move history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    history: History,
}

impl Engine {
    /// Creates an engine at the start of a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `moves` from a fresh game, stopping at the first ignored one.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, IgnoredInput> {
        let mut engine = Self::new();
        for pos in moves {
            engine.apply_move(*pos)?;
        }
        Ok(engine)
    }

    /// The board at the current step.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// The full snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the current snapshot.
    pub fn step(&self) -> usize {
        self.history.step()
    }

    /// Mark that places next from the current step.
    pub fn to_move(&self) -> Mark {
        Mark::to_move_at(self.history.step())
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self.board())
    }

    /// Status line for the current step.
    pub fn status_text(&self) -> String {
        self.outcome().status_text(self.to_move())
    }

    /// Returns true if a click on `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.board().is_empty(pos) && !self.outcome().is_over()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Any snapshots after the current step are discarded first. On success
    /// returns the new step index.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoredInput::GameOver`] if the current board is finished and
    /// [`IgnoredInput::SquareOccupied`] if `pos` is taken. State is unchanged
    /// in both cases.
    #[instrument(skip(self), fields(step = self.step(), player = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<usize, IgnoredInput> {
        let outcome = self.outcome();
        if outcome.is_over() {
            debug!(%outcome, "Ignoring move on finished board");
            return Err(IgnoredInput::GameOver(outcome));
        }
        if !self.board().is_empty(pos) {
            debug!("Ignoring move on occupied square");
            return Err(IgnoredInput::SquareOccupied(pos));
        }

        let next = self.board().with_mark(pos, self.to_move());
        self.history.branch(next);
        self.debug_check();

        info!(new_step = self.step(), outcome = %self.outcome(), "Move applied");
        Ok(self.step())
    }

    /// Same as [`apply_move`](Self::apply_move) for a raw cell index.
    ///
    /// # Errors
    ///
    /// Additionally returns [`IgnoredInput::IndexOutOfRange`] for indices
    /// outside 0-8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<usize, IgnoredInput> {
        let pos = Position::from_index(index).ok_or(IgnoredInput::IndexOutOfRange(index))?;
        self.apply_move(pos)
    }

    /// Makes `step` the current snapshot without discarding anything.
    ///
    /// Jumping back from a finished game re-opens it; the discarded branch is
    /// only dropped if a move is made from the earlier step.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoredInput::StepOutOfRange`] if `step` is past the end.
    #[instrument(skip(self), fields(from = self.step(), len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), IgnoredInput> {
        if !self.history.seek(step) {
            debug!("Ignoring jump past end of history");
            return Err(IgnoredInput::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.debug_check();
        info!(outcome = %self.outcome(), "Jumped to step");
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.debug_check();
        info!("Game reset");
    }

    /// Builds the read-only view a front end renders from.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let board = self.board();
        let outcome = self.outcome();
        let line = rules::winning_line(board).map(|(_, line)| line);

        let cells = Position::ALL
            .iter()
            .map(|&pos| {
                CellView::new(
                    pos,
                    board.get(pos),
                    self.is_playable(pos),
                    line.is_some_and(|l| l.contains(&pos)),
                )
            })
            .collect();

        let snapshots = self.history.snapshots();
        let history = (0..snapshots.len())
            .map(|step| {
                let placed = step
                    .checked_sub(1)
                    .and_then(|prev| placed_between(&snapshots[prev], &snapshots[step]));
                HistoryEntry::new(step, step == self.step(), placed)
            })
            .collect();

        GameView::new(
            cells,
            self.to_move(),
            outcome,
            outcome.status_text(self.to_move()),
            history,
        )
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(&self.history)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("History invariant violated: {}", descriptions);
        }
    }
}

/// The mark and position that turned `before` into `after`.
fn placed_between(before: &Board, after: &Board) -> Option<(Mark, Position)> {
    Position::ALL.iter().find_map(|&pos| match (before.get(pos).mark(), after.get(pos).mark()) {
        (None, Some(mark)) => Some((mark, pos)),
        _ => None,
    })
}
