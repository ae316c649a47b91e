//! Roster handlers
//!
//! Endpoints for reading and mutating a user's creature roster.

use axum::{
    extract::{Path, State},
    Json,
};
use critter_service::{
    CreatureActionRequest, CreatureDataRequest, MessageResponse, RosterResponse, RosterService,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user's roster
///
/// GET /creatures/{username}
pub async fn get_roster(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<RosterResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.get_roster(&username).await?;
    Ok(Json(response))
}

/// Add a creature with default stats
///
/// POST /creatures/add
pub async fn add_creature(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatureActionRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.add_creature(request).await?;
    Ok(Json(response))
}

/// Remove every creature matching a name
///
/// POST /creatures/remove
pub async fn remove_creature(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatureActionRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.remove_creature(request).await?;
    Ok(Json(response))
}

/// Update a stat on the first creature matching a name
///
/// POST /creatures/data
pub async fn update_creature_data(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatureDataRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.update_creature_field(request).await?;
    Ok(Json(response))
}
