//! Game handlers
//!
//! Endpoints for starting and ending a two-player game.

use axum::{extract::State, Json};
use critter_service::{
    EndGameRequest, EndGameResponse, GameCodeResponse, GameService, StartGameRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Start a game and return the pairing code
///
/// POST /start_game
pub async fn start_game(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StartGameRequest>,
) -> ApiResult<Json<GameCodeResponse>> {
    let service = GameService::new(state.service_context());
    let response = service.start_game(request).await?;
    Ok(Json(response))
}

/// End the game with the given code, optionally reporting both rosters
///
/// POST /end_game
pub async fn end_game(
    State(state): State<AppState>,
    Json(request): Json<EndGameRequest>,
) -> ApiResult<Json<EndGameResponse>> {
    let service = GameService::new(state.service_context());
    let response = service.end_game(request).await?;
    Ok(Json(response))
}
