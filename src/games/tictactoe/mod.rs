mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use engine::{Engine, IgnoredInput};
pub use history::{History, InvalidHistory};
pub use position::Position;
pub use types::{Board, Cell, Mark, Outcome};
pub use view::{CellView, GameView, HistoryEntry};
