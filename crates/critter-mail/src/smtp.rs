//! SMTP mail sender backed by lettre

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::{Category, Severity};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, instrument};

use critter_core::traits::{MailError, MailSender};

/// Errors constructing the SMTP transport
#[derive(Debug, Error)]
pub enum MailSetupError {
    #[error("Invalid sender address: {0}")]
    InvalidFromAddress(String),

    #[error("Failed to build SMTP transport: {0}")]
    Transport(String),
}

/// SMTP mail sender with STARTTLS and credential authentication.
///
/// The configured username doubles as the from address, the same way the
/// Gmail app-password setup this backend targets works.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer for the given relay and credentials
    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, MailSetupError> {
        let from: Mailbox = username
            .parse()
            .map_err(|_| MailSetupError::InvalidFromAddress(username.to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailSetupError::Transport(e.to_string()))?
            .port(port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self { transport, from })
    }
}

/// Whether an SMTP status code signals an authentication failure.
///
/// Covers the 53x family (530 authentication required, 535 bad credentials).
fn is_auth_failure(error: &lettre::transport::smtp::Error) -> bool {
    error.status().is_some_and(|code| {
        code.severity == Severity::PermanentNegativeCompletion
            && code.category == Category::Unspecified3
    })
}

#[async_trait]
impl MailSender for SmtpMailer {
    #[instrument(skip(self, html_body))]
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let to: Mailbox = to
            .parse()
            .map_err(|_| MailError::Transport(format!("invalid recipient address: {to}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| MailError::Transport(e.to_string()))?;

        self.transport.send(message).await.map_err(|e| {
            if is_auth_failure(&e) {
                MailError::Authentication(e.to_string())
            } else {
                MailError::Transport(e.to_string())
            }
        })?;

        debug!("verification email dispatched");
        Ok(())
    }
}
