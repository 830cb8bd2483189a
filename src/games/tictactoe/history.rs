//! Navigable board history.

use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots plus a cursor marking the current one.
///
/// Entry 0 is always the empty board and the cursor always points at an
/// existing entry. Snapshots are owned values, so appending never aliases an
/// earlier entry. Deserialized histories are checked against
/// [`HistoryInvariants`] and rejected if any fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Board>,
    step: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            step: 0,
        }
    }

    /// Index of the current snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots, always at least one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the start board is always present.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The current snapshot.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.step]
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns true if the cursor is not on the last snapshot.
    pub fn is_rewound(&self) -> bool {
        self.step + 1 < self.snapshots.len()
    }

    /// Drops every snapshot after the cursor, appends `board` and moves onto it.
    #[instrument(skip(self, board), fields(step = self.step, len = self.snapshots.len()))]
    pub fn branch(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(board);
        self.step = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `step`. Returns false and leaves the cursor alone if
    /// `step` is past the end.
    pub fn seek(&mut self, step: usize) -> bool {
        if step < self.snapshots.len() {
            self.step = step;
            true
        } else {
            false
        }
    }

    /// Back to the single empty snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Board::new());
        self.step = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    step: usize,
}

/// A deserialized history that breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid history: {}", violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; "))]
pub struct InvalidHistory {
    /// Every invariant the payload failed.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

impl TryFrom<RawHistory> for History {
    type Error = InvalidHistory;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            step: raw.step,
        };
        HistoryInvariants::check_all(&history)
            .map(|()| history)
            .map_err(|violations| InvalidHistory { violations })
    }
}
