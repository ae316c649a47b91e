//! Ports - repository and outbound mail interfaces

mod mail;
mod repositories;

pub use mail::{MailError, MailSender};
pub use repositories::{
    AccountRepository, GameRepository, RepoResult, RosterRepository, VerificationRepository,
};
