use zone_engine::{Stage, ZoneError};

use crate::AppState;
use crate::error::AppError;
use crate::registry::DEFAULT_GAME_ID;
use crate::services::state_serializer::{self, GameResponse};

// -- Core game actions --
// Each action runs against the registry under its write lock and builds the
// response there, so the returned state is exactly the state the action left.

pub async fn play_move(
    state: &AppState,
    game_id: i64,
    x: i64,
    y: i64,
) -> Result<GameResponse, AppError> {
    // Anything that does not fit a u8 is clamped off the board, so the engine
    // still reports GameOver before OutOfBounds.
    let point = (
        u8::try_from(x).unwrap_or(u8::MAX),
        u8::try_from(y).unwrap_or(u8::MAX),
    );

    let (result, response) = state
        .registry
        .with_engine_mut(game_id, |engine| {
            let stone = engine.current_turn_stone();
            let result = engine.try_play(point).map(|stage| (stone, stage));
            let response = match result {
                Ok(_) => state_serializer::accepted(game_id, engine),
                Err(e) => state_serializer::rejected_move(game_id, engine, e),
            };
            (result, response)
        })
        .await
        .ok_or_else(|| AppError::game_not_found(game_id))?;

    match result {
        Ok((stone, stage)) => {
            tracing::debug!(game_id, x, y, %stone, %stage, "stone placed");
            log_game_over(game_id, stage, &response);
        }
        Err(e) => tracing::warn!(game_id, x, y, error = %e, "move rejected"),
    }

    Ok(response)
}

pub async fn pass(state: &AppState, game_id: i64) -> Result<GameResponse, AppError> {
    let (result, response) = state
        .registry
        .with_engine_mut(game_id, |engine| {
            let stone = engine.current_turn_stone();
            let result = engine.try_pass().map(|stage| (stone, stage));
            let response = match result {
                Ok(_) => state_serializer::accepted(game_id, engine),
                Err(e) => state_serializer::rejected(game_id, engine, e),
            };
            (result, response)
        })
        .await
        .ok_or_else(|| AppError::game_not_found(game_id))?;

    match result {
        Ok((stone, stage)) => {
            tracing::debug!(game_id, %stone, %stage, "turn passed");
            log_game_over(game_id, stage, &response);
        }
        Err(e) => tracing::warn!(game_id, error = %e, "pass rejected"),
    }

    Ok(response)
}

/// Undo one step. With nothing to undo this is a no-op that still succeeds.
pub async fn undo(state: &AppState, game_id: i64) -> Result<GameResponse, AppError> {
    let (undone, response) = state
        .registry
        .with_engine_mut(game_id, |engine| {
            let undone = match engine.undo().map(|_| ()) {
                Ok(_) => true,
                Err(ZoneError::NothingToUndo) => false,
                Err(e) => return (Err(e), state_serializer::rejected(game_id, engine, e)),
            };
            (Ok(undone), state_serializer::accepted(game_id, engine))
        })
        .await
        .ok_or_else(|| AppError::game_not_found(game_id))?;

    match undone {
        Ok(true) => tracing::debug!(game_id, stage = %response.stage, "move undone"),
        Ok(false) => tracing::debug!(game_id, "nothing to undo"),
        Err(e) => tracing::warn!(game_id, error = %e, "undo rejected"),
    }

    Ok(response)
}

pub async fn reset(state: &AppState, game_id: i64) -> Result<GameResponse, AppError> {
    let response = state
        .registry
        .with_engine_mut(game_id, |engine| {
            engine.reset();
            state_serializer::accepted(game_id, engine)
        })
        .await
        .ok_or_else(|| AppError::game_not_found(game_id))?;

    tracing::info!(game_id, "game reset");
    Ok(response)
}

pub async fn get_state(state: &AppState, game_id: i64) -> Result<GameResponse, AppError> {
    let engine = state
        .registry
        .get_engine(game_id)
        .await
        .ok_or_else(|| AppError::game_not_found(game_id))?;
    Ok(state_serializer::accepted(game_id, &engine))
}

pub async fn create_game(state: &AppState) -> Result<GameResponse, AppError> {
    let Some((game_id, engine)) = state.registry.create().await else {
        tracing::warn!("game limit reached");
        return Err(AppError::Unavailable(
            "too many games in progress, delete one first".to_string(),
        ));
    };
    tracing::info!(game_id, "game created");
    Ok(state_serializer::accepted(game_id, &engine))
}

pub async fn delete_game(state: &AppState, game_id: i64) -> Result<(), AppError> {
    if game_id == DEFAULT_GAME_ID {
        return Err(AppError::BadRequest(
            "the default game cannot be deleted".to_string(),
        ));
    }
    if !state.registry.remove(game_id).await {
        return Err(AppError::game_not_found(game_id));
    }
    tracing::info!(game_id, "game deleted");
    Ok(())
}

fn log_game_over(game_id: i64, stage: Stage, response: &GameResponse) {
    if stage == Stage::GameOver {
        tracing::info!(
            game_id,
            result = response.result.as_deref().unwrap_or_default(),
            "game over"
        );
    }
}
