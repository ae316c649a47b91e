//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Unique values use
//! UUIDs so repeated runs against a persistent database never collide.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Signup request body
#[derive(Debug, Serialize)]
pub struct SignupBody {
    pub email: String,
    pub username: String,
    pub password: String,
    pub gender: String,
}

impl SignupBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("trainer{suffix}@example.com"),
            username: format!("trainer{suffix}"),
            password: "TestPass123!".to_string(),
            gender: "other".to_string(),
        }
    }
}

/// Start game request body
#[derive(Debug, Serialize)]
pub struct StartGameBody {
    pub user1: String,
    pub user2: String,
}

impl StartGameBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            user1: format!("p1{suffix}"),
            user2: format!("p2{suffix}"),
        }
    }
}

/// End game request body
#[derive(Debug, Serialize)]
pub struct EndGameBody {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_creatures: Option<bool>,
}

/// Creature add/remove request body
#[derive(Debug, Serialize)]
pub struct CreatureBody {
    pub username: String,
    pub creature: String,
}

/// Creature stat update request body
#[derive(Debug, Serialize)]
pub struct CreatureDataBody {
    pub username: String,
    pub creature: String,
    pub key: String,
    pub value: i64,
}

/// Verification email request body
#[derive(Debug, Serialize)]
pub struct SendVerificationBody {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Verification code lookup request body
#[derive(Debug, Serialize)]
pub struct GetCodeBody {
    pub email: String,
}

// ============================================================================
// Response shapes
// ============================================================================

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Username existence response
#[derive(Debug, Deserialize)]
pub struct ExistsBody {
    pub exists: bool,
}

/// Game code response
#[derive(Debug, Deserialize)]
pub struct GameCodeBody {
    pub code: String,
}

/// Game end response
#[derive(Debug, Deserialize)]
pub struct GameEndedBody {
    pub message: String,
    #[serde(default)]
    pub creatures: Option<std::collections::HashMap<String, Vec<CreatureStatsBody>>>,
}

/// Creature as returned on the wire
#[derive(Debug, Deserialize)]
pub struct CreatureStatsBody {
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub power: i32,
}

/// Roster response
#[derive(Debug, Deserialize)]
pub struct RosterBody {
    pub creatures: Vec<CreatureStatsBody>,
}

/// Verification code response
#[derive(Debug, Deserialize)]
pub struct VerificationCodeBody {
    pub email: String,
    pub code: String,
    pub expires_in_minutes: i64,
}
