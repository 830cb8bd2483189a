//! First-class invariants over the move history.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are testable independently and checked in debug builds.

pub mod lineage;
pub mod root_empty;
pub mod step_in_bounds;

pub use lineage::SnapshotLineage;
pub use root_empty::RootIsEmpty;
pub use step_in_bounds::StepInBounds;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// Every history invariant as one set.
pub type HistoryInvariants = (RootIsEmpty, StepInBounds, SnapshotLineage);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Engine, History, Position};

    #[test]
    fn test_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_set_holds_after_moves_and_rewind() {
        let mut engine = Engine::new();
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            engine.apply_move(pos).expect("legal move");
        }
        engine.jump_to(1).expect("in range");
        assert!(HistoryInvariants::check_all(engine.history()).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Bounds = (RootIsEmpty, StepInBounds);
        assert!(Bounds::check_all(&History::new()).is_ok());
    }
}
