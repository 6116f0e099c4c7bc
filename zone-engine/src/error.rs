use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneError {
    OutOfBounds,
    Occupied,
    IllegalPlacement,
    GameOver,
    NothingToUndo,
    OutOfTurn,
}

impl ZoneError {
    /// Stable machine-readable kind, sent to clients alongside rejections.
    pub fn code(&self) -> &'static str {
        match self {
            ZoneError::OutOfBounds => "out_of_bounds",
            ZoneError::Occupied => "occupied",
            ZoneError::IllegalPlacement => "illegal_placement",
            ZoneError::GameOver => "game_over",
            ZoneError::NothingToUndo => "nothing_to_undo",
            ZoneError::OutOfTurn => "out_of_turn",
        }
    }
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::OutOfBounds => write!(f, "point is not on the board"),
            ZoneError::Occupied => write!(f, "point is already occupied"),
            ZoneError::IllegalPlacement => {
                write!(f, "cannot place between two opponent stones")
            }
            ZoneError::GameOver => write!(f, "game is over"),
            ZoneError::NothingToUndo => write!(f, "nothing to undo"),
            ZoneError::OutOfTurn => write!(f, "out of turn"),
        }
    }
}

impl std::error::Error for ZoneError {}
