//! # critter-mail
//!
//! SMTP implementation of the `MailSender` port from `critter-core`,
//! built on lettre's async tokio transport with STARTTLS.

mod smtp;

pub use smtp::{MailSetupError, SmtpMailer};
