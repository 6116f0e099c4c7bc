use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;
use crate::registry::DEFAULT_GAME_ID;
use crate::services::game_actions;
use crate::services::state_serializer::GameResponse;

// -- Request / response types --

#[derive(Deserialize)]
struct MoveRequest {
    x: i64,
    y: i64,
}

#[derive(Serialize)]
struct GameListResponse {
    games: Vec<i64>,
}

// -- Router --

pub fn router() -> Router<AppState> {
    Router::new()
        // Default game, as used by the browser client
        .route("/move", post(play_move))
        .route("/pass", post(pass))
        .route("/undo", post(undo))
        .route("/reset", post(reset))
        .route("/state", get(get_state))
        // Independent games
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game).delete(delete_game))
        .route("/games/{id}/move", post(play_move_in_game))
        .route("/games/{id}/pass", post(pass_in_game))
        .route("/games/{id}/undo", post(undo_in_game))
        .route("/games/{id}/reset", post(reset_in_game))
}

// -- Default game handlers --

async fn play_move(
    State(state): State<AppState>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let response = game_actions::play_move(&state, DEFAULT_GAME_ID, body.x, body.y).await?;
    Ok(Json(response))
}

async fn pass(State(state): State<AppState>) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::pass(&state, DEFAULT_GAME_ID).await?))
}

async fn undo(State(state): State<AppState>) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::undo(&state, DEFAULT_GAME_ID).await?))
}

async fn reset(State(state): State<AppState>) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::reset(&state, DEFAULT_GAME_ID).await?))
}

async fn get_state(State(state): State<AppState>) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::get_state(&state, DEFAULT_GAME_ID).await?))
}

// -- Game handlers --

async fn list_games(State(state): State<AppState>) -> Json<GameListResponse> {
    Json(GameListResponse {
        games: state.registry.game_ids().await,
    })
}

async fn create_game(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let response = game_actions::create_game(&state).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::get_state(&state, id).await?))
}

async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    game_actions::delete_game(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn play_move_in_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let response = game_actions::play_move(&state, id, body.x, body.y).await?;
    Ok(Json(response))
}

async fn pass_in_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::pass(&state, id).await?))
}

async fn undo_in_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::undo(&state, id).await?))
}

async fn reset_in_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameResponse>, ApiError> {
    Ok(Json(game_actions::reset(&state, id).await?))
}
