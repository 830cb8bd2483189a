//! Tic Tac Toe Classic - a tic-tac-toe engine with time travel.
//!
//! The [`Engine`] keeps every board snapshot of the current game so a front end
//! can jump back to any earlier move. Making a move from an earlier step
//! discards the snapshots that came after it.
//!
//! # Architecture
//!
//! - **Games**: the pure engine, rules and history (no I/O)
//! - **Config**: TOML settings for the terminal front end
//! - **Tui**: a ratatui front end that renders [`GameView`] and forwards input
//!
//! # Example
//!
//! ```
//! use tictactoe_classic::{Engine, Mark, Outcome, Position};
//!
//! let mut engine = Engine::new();
//! engine.apply_move(Position::Center).unwrap();
//! assert_eq!(engine.to_move(), Mark::O);
//!
//! engine.jump_to(0).unwrap();
//! assert_eq!(engine.outcome(), Outcome::InProgress);
//! assert_eq!(engine.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, Cell, CellView, Engine, GameView, History, HistoryEntry, IgnoredInput,
    InvalidHistory, Mark, Outcome,
    Position, invariants, rules,
};
