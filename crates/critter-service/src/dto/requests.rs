//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; the ones with shape
//! constraints also implement `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// Account signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,

    pub gender: String,
}

// ============================================================================
// Game Requests
// ============================================================================

/// Start a game between two players
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartGameRequest {
    #[validate(length(min = 1, message = "user1 must not be empty"))]
    pub user1: String,

    #[validate(length(min = 1, message = "user2 must not be empty"))]
    pub user2: String,
}

/// End a game by pairing code
#[derive(Debug, Clone, Deserialize)]
pub struct EndGameRequest {
    pub code: String,

    /// When set, the response carries both players' rosters
    #[serde(default)]
    pub show_creatures: bool,
}

// ============================================================================
// Roster Requests
// ============================================================================

/// Add or remove a creature by name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatureActionRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "creature must not be empty"))]
    pub creature: String,
}

/// Update a stat on the first creature matching a name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatureDataRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "creature must not be empty"))]
    pub creature: String,

    /// Stat name; restricted to level, health, power
    pub key: String,

    pub value: i64,
}

// ============================================================================
// Verification Requests
// ============================================================================

/// Issue a verification code and email it
#[derive(Debug, Clone, Deserialize)]
pub struct SendVerificationRequest {
    pub email: String,

    /// Display name for the email greeting
    pub username: Option<String>,
}

/// Look up the active verification code for an email
#[derive(Debug, Clone, Deserialize)]
pub struct GetCodeRequest {
    pub email: String,
}
