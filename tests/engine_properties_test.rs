//! Property-based tests for the engine and rules.
//!
//! These tests use proptest to drive the engine with random input sequences
//! and random boards.

use proptest::prelude::*;
use tictactoe_classic::{
    Board, Cell, Engine, History, Mark, Outcome, Position,
    invariants::{HistoryInvariants, InvariantSet},
    rules,
};

/// One front-end event.
#[derive(Debug, Clone)]
enum Input {
    Click(usize),
    Jump(usize),
    Reset,
}

prop_compose! {
    fn arbitrary_input()(variant in 0..10u8, index in 0..12usize) -> Input {
        match variant {
            0..=6 => Input::Click(index),
            7 | 8 => Input::Jump(index),
            _ => Input::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::collection::vec(0..3u8, 9)) -> Board {
        let text: String = cells
            .iter()
            .map(|c| match c {
                0 => '.',
                1 => 'X',
                _ => 'O',
            })
            .collect();
        Board::parse(&text).expect("nine cells")
    }
}

fn uniform_line(board: &Board) -> Option<Mark> {
    rules::LINES.iter().find_map(|line| {
        let mark = board.get(line[0]).mark()?;
        line.iter()
            .all(|p| board.get(*p) == Cell::Marked(mark))
            .then_some(mark)
    })
}

proptest! {
    #[test]
    fn outcome_matches_definition(board in arbitrary_board()) {
        let full = board.cells().iter().all(|c| *c != Cell::Empty);
        let expected = match uniform_line(&board) {
            Some(mark) => Outcome::Won(mark),
            None if full => Outcome::Draw,
            None => Outcome::InProgress,
        };
        prop_assert_eq!(rules::outcome(&board), expected);
    }

    #[test]
    fn engine_invariants_hold(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut engine = Engine::new();
        for input in inputs {
            let before = engine.clone();
            match input {
                Input::Click(index) => {
                    let playable = Position::from_index(index)
                        .is_some_and(|pos| engine.is_playable(pos));
                    match engine.apply_index(index) {
                        Ok(step) => {
                            prop_assert!(playable);
                            prop_assert_eq!(step, before.step() + 1);
                            prop_assert_eq!(engine.history().len(), before.step() + 2);
                            prop_assert_eq!(engine.step(), engine.history().len() - 1);
                            prop_assert_eq!(
                                engine.board().marked_count(),
                                before.board().marked_count() + 1
                            );
                        }
                        Err(_) => {
                            prop_assert!(!playable);
                            prop_assert_eq!(&engine, &before);
                        }
                    }
                }
                Input::Jump(step) => {
                    let len = engine.history().len();
                    match engine.jump_to(step) {
                        Ok(()) => {
                            prop_assert_eq!(engine.step(), step);
                        }
                        Err(_) => {
                            prop_assert!(step >= len);
                            prop_assert_eq!(&engine, &before);
                        }
                    }
                    prop_assert_eq!(engine.history().len(), len);
                }
                Input::Reset => {
                    engine.reset();
                    prop_assert_eq!(engine.history(), &History::new());
                    prop_assert_eq!(engine.outcome(), Outcome::InProgress);
                }
            }

            prop_assert!(HistoryInvariants::check_all(engine.history()).is_ok());
            let expected_turn = if engine.step() % 2 == 0 { Mark::X } else { Mark::O };
            prop_assert_eq!(engine.to_move(), expected_turn);
            prop_assert_eq!(engine.outcome(), rules::outcome(engine.board()));
        }
    }

    #[test]
    fn view_clickable_matches_engine(inputs in prop::collection::vec(arbitrary_input(), 0..20)) {
        let mut engine = Engine::new();
        for input in inputs {
            match input {
                Input::Click(index) => { let _ = engine.apply_index(index); }
                Input::Jump(step) => { let _ = engine.jump_to(step); }
                Input::Reset => engine.reset(),
            }
        }
        let view = engine.view();
        for cell in view.cells() {
            let expected = *cell.cell() == Cell::Empty && engine.outcome() == Outcome::InProgress;
            prop_assert_eq!(*cell.clickable(), expected);
        }
        let active: Vec<usize> = view
            .history()
            .iter()
            .filter(|e| *e.active())
            .map(|e| *e.step())
            .collect();
        prop_assert_eq!(active, vec![engine.step()]);
    }
}
