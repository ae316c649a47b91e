//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use critter_core::entities::Creature;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Account Responses
// ============================================================================

/// Username existence check
#[derive(Debug, Serialize)]
pub struct UserExistsResponse {
    pub exists: bool,
}

// ============================================================================
// Game Responses
// ============================================================================

/// Pairing code for a freshly started game
#[derive(Debug, Serialize)]
pub struct GameCodeResponse {
    pub code: String,
}

/// Game-end confirmation, optionally with both players' rosters
#[derive(Debug, Serialize)]
pub struct EndGameResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatures: Option<HashMap<String, Vec<CreatureResponse>>>,
}

// ============================================================================
// Roster Responses
// ============================================================================

/// A creature as it appears on the wire
#[derive(Debug, Clone, Serialize)]
pub struct CreatureResponse {
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub power: i32,
}

impl From<&Creature> for CreatureResponse {
    fn from(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            level: creature.level,
            health: creature.health,
            power: creature.power,
        }
    }
}

/// A user's full roster
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub creatures: Vec<CreatureResponse>,
}

// ============================================================================
// Verification Responses
// ============================================================================

/// Confirmation that a verification email went out
#[derive(Debug, Serialize)]
pub struct VerificationSentResponse {
    pub message: String,
    pub code_sent: bool,
}

/// The active verification code for an email
#[derive(Debug, Serialize)]
pub struct VerificationCodeResponse {
    pub email: String,
    pub code: String,
    pub expires_in_minutes: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
