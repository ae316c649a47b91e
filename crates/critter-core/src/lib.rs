//! # critter-core
//!
//! Domain layer containing entities, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    generate_code, Account, Creature, Game, GameStatus, StatField, VerificationRecord,
    GAME_CODE_LENGTH, VERIFICATION_CODE_LENGTH, VERIFICATION_TTL_MINUTES,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, GameRepository, MailError, MailSender, RepoResult, RosterRepository,
    VerificationRepository,
};
