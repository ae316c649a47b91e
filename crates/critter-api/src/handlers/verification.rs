//! Email verification handlers
//!
//! Endpoints for issuing verification codes and looking them up.

use axum::{extract::State, Json};
use critter_service::{
    GetCodeRequest, SendVerificationRequest, VerificationCodeResponse, VerificationSentResponse,
    VerificationService,
};

use crate::response::ApiResult;
use crate::state::AppState;

/// Issue a verification code and email it
///
/// POST /send-verification-email
pub async fn send_verification_email(
    State(state): State<AppState>,
    Json(request): Json<SendVerificationRequest>,
) -> ApiResult<Json<VerificationSentResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.issue_code(request).await?;
    Ok(Json(response))
}

/// Look up the active verification code for an email
///
/// POST /codes
pub async fn get_verification_code(
    State(state): State<AppState>,
    Json(request): Json<GetCodeRequest>,
) -> ApiResult<Json<VerificationCodeResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.lookup_code(request).await?;
    Ok(Json(response))
}
