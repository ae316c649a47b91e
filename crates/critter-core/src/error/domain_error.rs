//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::traits::MailError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unknown creature field: {0}")]
    InvalidField(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Username already exists")]
    DuplicateUsername,

    // =========================================================================
    // Not Found / Expired
    // =========================================================================
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("No verification code found for {0}")]
    VerificationNotFound(String),

    #[error("Verification code for {0} has expired")]
    VerificationExpired(String),

    // =========================================================================
    // Mail Delivery
    // =========================================================================
    #[error("Mail authentication failed")]
    MailAuthFailed,

    #[error("Failed to send email: {0}")]
    MailSendFailed(String),

    #[error("Email configuration not found")]
    MailConfigMissing,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "INVALID_EMAIL",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::VerificationNotFound(_) => "UNKNOWN_VERIFICATION",
            Self::VerificationExpired(_) => "VERIFICATION_EXPIRED",
            Self::MailAuthFailed => "MAIL_AUTH_FAILED",
            Self::MailSendFailed(_) => "MAIL_DELIVERY_FAILED",
            Self::MailConfigMissing => "MAIL_CONFIG_MISSING",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GameNotFound(_) | Self::VerificationNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail(_) | Self::InvalidField(_) | Self::ValidationError(_)
        )
    }

    /// Check if this is a duplicate-resource conflict
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEmail | Self::DuplicateUsername)
    }

    /// Check if this is an expired-code error
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::VerificationExpired(_))
    }

    /// Check if this is a mail delivery failure (auth or transport)
    pub fn is_mail_failure(&self) -> bool {
        matches!(self, Self::MailAuthFailed | Self::MailSendFailed(_))
    }
}

impl From<MailError> for DomainError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::Authentication(_) => Self::MailAuthFailed,
            MailError::Transport(msg) => Self::MailSendFailed(msg),
        }
    }
}
