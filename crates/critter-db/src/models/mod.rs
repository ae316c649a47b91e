//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod creature;
mod game;
mod verification;

pub use account::AccountModel;
pub use creature::CreatureModel;
pub use game::GameModel;
pub use verification::VerificationModel;
