//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! critter-core. Each repository handles database operations for a specific
//! domain entity.

mod account;
mod error;
mod game;
mod roster;
mod verification;

pub use account::PgAccountRepository;
pub use game::PgGameRepository;
pub use roster::PgRosterRepository;
pub use verification::PgVerificationRepository;
