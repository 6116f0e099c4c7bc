use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::{Board, Captures};
use crate::error::ZoneError;
use crate::history::History;
use crate::rules;
use crate::stone::Stone;
use crate::turn::{self, Move, Outcome, Stage, Turn};

/// Full authoritative snapshot of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub captures: Captures,
    pub to_move: Stone,
    /// Consecutive passes immediately preceding this position.
    pub passes: u8,
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Empty board, no captures, Red to move.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            captures: Captures::new(),
            to_move: Stone::Red,
            passes: 0,
            outcome: None,
        }
    }

    fn settle(board: Board, captures: Captures, to_move: Stone, passes: u8) -> Self {
        let outcome = turn::end_condition(&board, to_move, passes)
            .map(|condition| Outcome::decide(captures, condition));
        GameState {
            board,
            captures,
            to_move,
            passes,
            outcome,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// A single game: current position, undo history and the list of committed turns.
#[derive(Debug, Clone)]
pub struct Engine {
    history: History,
    moves: Vec<Turn>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            history: History::new(GameState::initial()),
            moves: Vec::new(),
        }
    }

    /// Replay a list of turns from the empty board.
    pub fn with_moves(moves: &[Turn]) -> Result<Self, ZoneError> {
        let mut engine = Engine::new();
        for t in moves {
            if t.stone != engine.current_turn_stone() {
                return Err(ZoneError::OutOfTurn);
            }
            match t.kind {
                Move::Play => {
                    let point = t.pos.ok_or(ZoneError::OutOfBounds)?;
                    engine.try_play(point)?;
                }
                Move::Pass => {
                    engine.try_pass()?;
                }
            }
        }
        Ok(engine)
    }

    // -- Accessors --

    pub fn game_state(&self) -> &GameState {
        self.history.current()
    }

    pub fn board(&self) -> &Board {
        &self.game_state().board
    }

    pub fn captures(&self) -> &Captures {
        &self.game_state().captures
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.captures().get(stone)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board().stone_at(point)
    }

    pub fn current_turn_stone(&self) -> Stone {
        self.game_state().to_move
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.game_state().outcome.as_ref()
    }

    pub fn stage(&self) -> Stage {
        if self.game_state().is_over() {
            Stage::GameOver
        } else {
            Stage::to_move(self.current_turn_stone())
        }
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Legal placements for the player to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Point> {
        if self.game_state().is_over() {
            return Vec::new();
        }
        rules::legal_moves(self.board(), self.current_turn_stone())
    }

    // -- Game actions --

    /// Place a stone for the player to move. Nothing changes on error.
    pub fn try_play(&mut self, point: Point) -> Result<Stage, ZoneError> {
        let state = self.game_state();
        if state.is_over() || state.board.is_full() {
            return Err(ZoneError::GameOver);
        }

        let stone = state.to_move;
        let placed = rules::apply(&state.board, point, stone)?;
        let mut captures = state.captures;
        captures.add(stone, placed.capture_count());

        let next = GameState::settle(placed.board, captures, stone.opp(), 0);
        self.history.record(next);
        self.moves.push(Turn::play(stone, point));
        Ok(self.stage())
    }

    pub fn try_pass(&mut self) -> Result<Stage, ZoneError> {
        let state = self.game_state();
        if state.is_over() {
            return Err(ZoneError::GameOver);
        }

        let stone = state.to_move;
        let next = GameState::settle(
            state.board.clone(),
            state.captures,
            stone.opp(),
            state.passes.saturating_add(1),
        );
        self.history.record(next);
        self.moves.push(Turn::pass(stone));
        Ok(self.stage())
    }

    /// Step back one committed action, restoring the snapshot before it.
    pub fn undo(&mut self) -> Result<&GameState, ZoneError> {
        self.history.undo()?;
        self.moves.pop();
        Ok(self.history.current())
    }

    pub fn reset(&mut self) {
        self.history.reset(GameState::initial());
        self.moves.clear();
    }
}
