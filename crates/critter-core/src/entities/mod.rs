//! Domain entities

mod account;
mod code;
mod creature;
mod game;
mod verification;

pub use account::Account;
pub use code::{generate_code, GAME_CODE_LENGTH, VERIFICATION_CODE_LENGTH};
pub use creature::{Creature, StatField};
pub use game::{Game, GameStatus};
pub use verification::{VerificationRecord, VERIFICATION_TTL_MINUTES};
