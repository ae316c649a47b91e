//! Account entity - represents a player account

use chrono::{DateTime, Utc};

/// Player account.
///
/// The password is stored exactly as given. Hashing it would change the
/// observed signup/login contract; the defect is tracked in DESIGN.md
/// rather than silently fixed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub username: String,
    pub password: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new Account with required fields
    pub fn new(email: String, username: String, password: String, gender: String) -> Self {
        Self {
            email,
            username,
            password,
            gender,
            created_at: Utc::now(),
        }
    }
}
