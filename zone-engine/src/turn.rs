use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::board::{Board, Captures};
use crate::rules;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
}

/// A committed action: a placement or a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Point>,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
        }
    }

    pub fn is_play(&self) -> bool {
        self.kind == Move::Play
    }

    pub fn is_pass(&self) -> bool {
        self.kind == Move::Pass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    RedToMove,
    BlueToMove,
    GameOver,
}

impl Stage {
    pub fn to_move(stone: Stone) -> Self {
        match stone {
            Stone::Red => Stage::RedToMove,
            Stone::Blue => Stage::BlueToMove,
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Stage::RedToMove | Stage::BlueToMove)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::RedToMove => write!(f, "red_to_move"),
            Stage::BlueToMove => write!(f, "blue_to_move"),
            Stage::GameOver => write!(f, "game_over"),
        }
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCondition {
    BoardFull,
    NoLegalMoves,
    ConsecutivePasses,
}

impl fmt::Display for EndCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndCondition::BoardFull => write!(f, "board full"),
            EndCondition::NoLegalMoves => write!(f, "no legal moves"),
            EndCondition::ConsecutivePasses => write!(f, "both players passed"),
        }
    }
}

/// Terminal result of a game. `winner` is `None` for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Option<Stone>,
    pub condition: EndCondition,
    pub captures: Captures,
}

impl Outcome {
    /// The player with more captures wins; equal counts are a draw.
    pub fn decide(captures: Captures, condition: EndCondition) -> Self {
        Outcome {
            winner: captures.leader(),
            condition,
            captures,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = format!("{}-{}", self.captures.red, self.captures.blue);
        match self.winner {
            Some(stone) => write!(f, "{stone} wins {score} ({})", self.condition),
            None => write!(f, "Draw {score} ({})", self.condition),
        }
    }
}

/// Decide whether the position ends the game, with `to_move` next to act
/// and `passes` consecutive passes just made.
pub fn end_condition(board: &Board, to_move: Stone, passes: u8) -> Option<EndCondition> {
    if passes >= 2 {
        Some(EndCondition::ConsecutivePasses)
    } else if board.is_full() {
        Some(EndCondition::BoardFull)
    } else if !rules::has_legal_move(board, to_move) {
        Some(EndCondition::NoLegalMoves)
    } else {
        None
    }
}
