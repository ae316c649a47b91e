//! Verification record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the verifications table (keyed by email)
#[derive(Debug, Clone, FromRow)]
pub struct VerificationModel {
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
