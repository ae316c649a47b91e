//! Verification record entity - time-bounded email verification code

use chrono::{DateTime, Duration, Utc};

/// Minutes a verification code stays valid after issuance
pub const VERIFICATION_TTL_MINUTES: i64 = 10;

/// Email verification code with a fixed time-to-live.
///
/// At most one live record exists per email; issuing again replaces the
/// record in place and invalidates the previous code immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Create a record issued now, expiring after the fixed TTL
    pub fn new(email: String, code: String) -> Self {
        let created_at = Utc::now();
        Self {
            email,
            code,
            created_at,
            expires_at: created_at + Duration::minutes(VERIFICATION_TTL_MINUTES),
        }
    }

    /// Check if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whole minutes until expiry, floored; negative once expired
    pub fn remaining_minutes(&self) -> i64 {
        (self.expires_at - Utc::now()).num_minutes()
    }
}
