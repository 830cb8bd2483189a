//! Lineage invariant: each snapshot is its predecessor plus one legal move.

use super::super::{Cell, History, Mark, rules};
use super::Invariant;

/// Invariant: snapshot `n` equals snapshot `n - 1` with exactly one empty
/// cell taken by the mark whose turn it was at step `n - 1`, and no snapshot
/// follows a finished game.
pub struct SnapshotLineage;

impl Invariant<History> for SnapshotLineage {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                if rules::outcome(before).is_over() {
                    return false;
                }
                let expected = Cell::Marked(Mark::to_move_at(prev_step));
                let mut changed = before
                    .cells()
                    .iter()
                    .zip(after.cells())
                    .filter(|(b, a)| b != a);
                matches!(
                    (changed.next(), changed.next()),
                    (Some((Cell::Empty, placed)), None) if *placed == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark of the player to move"
    }
}
