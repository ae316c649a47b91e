//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every operation is a single-row (or
//! single-filter) read, write, or upsert; there is no cross-repository
//! orchestration at this level.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Account, Creature, Game, GameStatus, StatField, VerificationRecord};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Find account by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Insert a new account
    async fn create(&self, account: &Account) -> RepoResult<()>;
}

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find game by pairing code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Game>>;

    /// Insert a new game
    async fn create(&self, game: &Game) -> RepoResult<()>;

    /// Overwrite the status of the game with this code.
    ///
    /// Writing `Ended` onto an already-ended game is a valid no-op rewrite.
    async fn set_status(&self, code: &str, status: GameStatus) -> RepoResult<()>;
}

// ============================================================================
// Roster Repository
// ============================================================================

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// All creatures owned by a user, in insertion order. Empty when the
    /// user has no roster; never an error.
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Creature>>;

    /// Append a creature to a user's roster, creating the roster implicitly
    async fn add(&self, username: &str, creature: &Creature) -> RepoResult<()>;

    /// Remove every creature with this name. Returns the number removed;
    /// zero matches is a silent no-op.
    async fn remove_by_name(&self, username: &str, name: &str) -> RepoResult<u64>;

    /// Set a stat on the first (oldest) creature matching the name.
    /// Returns whether a creature was updated.
    async fn set_field(
        &self,
        username: &str,
        name: &str,
        field: StatField,
        value: i64,
    ) -> RepoResult<bool>;
}

// ============================================================================
// Verification Repository
// ============================================================================

#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Insert or fully replace the record keyed by the record's email
    async fn upsert(&self, record: &VerificationRecord) -> RepoResult<()>;

    /// Find the record for an email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<VerificationRecord>>;

    /// Delete the record for an email, if any
    async fn delete_by_email(&self, email: &str) -> RepoResult<()>;

    /// Delete every record across all emails whose expiry has passed.
    /// Returns the number purged.
    async fn purge_expired(&self, now: DateTime<Utc>) -> RepoResult<u64>;
}
