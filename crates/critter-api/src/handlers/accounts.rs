//! Account handlers
//!
//! Endpoints for signup and username existence checks.

use axum::{
    extract::{Path, State},
    Json,
};
use critter_service::{AccountService, MessageResponse, SignupRequest, UserExistsResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a new account
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Json(response))
}

/// Check whether a username is taken
///
/// GET /allusers/{username}
pub async fn check_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserExistsResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.username_exists(&username).await?;
    Ok(Json(response))
}
