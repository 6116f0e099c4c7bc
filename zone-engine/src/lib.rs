pub mod board;
pub mod engine;
pub mod error;
pub mod history;
pub mod rules;
pub mod stone;
pub mod turn;

/// A board coordinate: `(x, y)`, column then row.
pub type Point = (u8, u8);

pub use board::{BOARD_SIZE, Board, Captures};
pub use engine::{Engine, GameState};
pub use error::ZoneError;
pub use history::History;
pub use rules::Placement;
pub use stone::Stone;
pub use turn::{EndCondition, Move, Outcome, Stage, Turn};
