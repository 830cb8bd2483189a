//! Cursor invariant: the current step names an existing snapshot.

use super::super::History;
use super::Invariant;

/// Invariant: `step < len`.
pub struct StepInBounds;

impl Invariant<History> for StepInBounds {
    fn holds(history: &History) -> bool {
        history.step() < history.len()
    }

    fn description() -> &'static str {
        "Current step points at an existing snapshot"
    }
}
