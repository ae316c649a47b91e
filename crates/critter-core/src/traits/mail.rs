//! Outbound mail port

use async_trait::async_trait;
use thiserror::Error;

/// Mail transport errors, split the way SMTP reports them
#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP authentication failed: {0}")]
    Authentication(String),

    #[error("mail transport error: {0}")]
    Transport(String),
}

/// Outbound mail sender.
///
/// The sender owns its transport configuration (relay, credentials, from
/// address); callers supply only the recipient and content.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send an HTML email to a single recipient
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}
