//! Game database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: i64,
    pub code: String,
    pub player1: String,
    pub player2: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
