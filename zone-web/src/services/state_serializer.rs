use serde::Serialize;
use zone_engine::{Board, Engine, ZoneError};

/// Board as sent to clients: `board[x][y]`, each cell `"R"`, `"B"` or `null`.
pub type WireBoard = Vec<Vec<Option<&'static str>>>;

/// Response body shared by every game action.
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub success: bool,
    pub game_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<WireBoard>,
    pub captured_red: u32,
    pub captured_blue: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub turn: &'static str,
    pub stage: String,
    /// `[x, y]` points the player to move may take; empty once the game is over.
    pub legal_moves: Vec<[u8; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Serialize the board column by column, so the outer index is `x`.
pub fn wire_board(board: &Board) -> WireBoard {
    board
        .columns()
        .into_iter()
        .map(|column| column.into_iter().map(|c| c.map(|s| s.letter())).collect())
        .collect()
}

/// Full state after an accepted action.
pub fn accepted(game_id: i64, engine: &Engine) -> GameResponse {
    GameResponse {
        success: true,
        board: Some(wire_board(engine.board())),
        ..summary(game_id, engine)
    }
}

/// A rejected action: the unchanged state plus the error kind and message.
pub fn rejected(game_id: i64, engine: &Engine, err: ZoneError) -> GameResponse {
    GameResponse {
        success: false,
        board: Some(wire_board(engine.board())),
        error: Some(err.code()),
        message: Some(err.to_string()),
        ..summary(game_id, engine)
    }
}

/// A rejected placement. The client keeps its own board, so none is sent.
pub fn rejected_move(game_id: i64, engine: &Engine, err: ZoneError) -> GameResponse {
    GameResponse {
        board: None,
        ..rejected(game_id, engine, err)
    }
}

fn summary(game_id: i64, engine: &Engine) -> GameResponse {
    GameResponse {
        success: true,
        game_id,
        board: None,
        captured_red: engine.captures().red,
        captured_blue: engine.captures().blue,
        result: engine.outcome().map(|o| o.to_string()),
        turn: engine.current_turn_stone().letter(),
        stage: engine.stage().to_string(),
        legal_moves: engine.legal_moves().into_iter().map(|(x, y)| [x, y]).collect(),
        error: None,
        message: None,
    }
}
