//! Email verification service
//!
//! Owns the verification-code lifecycle: issuance with a fixed TTL, lookup
//! with expiry-driven cleanup, and the outbound verification email.
//!
//! The state machine per email is `NoRecord -> Issued(unexpired) ->
//! Issued(expired) -> NoRecord`. Re-issuing replaces the record in place;
//! expiry happens purely by time passing; expired records are removed by
//! the sweep on the next lookup. There is no "verified" terminal state —
//! checking a code against user input is not part of this core.

use std::sync::LazyLock;

use chrono::Utc;
use critter_core::entities::{
    generate_code, VerificationRecord, VERIFICATION_CODE_LENGTH, VERIFICATION_TTL_MINUTES,
};
use critter_core::DomainError;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    GetCodeRequest, SendVerificationRequest, VerificationCodeResponse, VerificationSentResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Display name used in the email greeting when none is supplied
const DEFAULT_DISPLAY_NAME: &str = "Adventurer";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email regex is invalid: {e}"))
});

/// Email verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh verification code and email it.
    ///
    /// The record write and the mail send are a best-effort pair: the
    /// record is upserted first and retained even when the send fails, so
    /// the code stays retrievable via lookup while the caller retries.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn issue_code(
        &self,
        request: SendVerificationRequest,
    ) -> ServiceResult<VerificationSentResponse> {
        if !EMAIL_RE.is_match(&request.email) {
            return Err(DomainError::InvalidEmail(request.email).into());
        }

        // Credentials are checked before any state changes, matching the
        // original's per-request configuration guard.
        let mailer = self.ctx.mailer().ok_or(DomainError::MailConfigMissing)?;

        let code = generate_code(VERIFICATION_CODE_LENGTH);
        let record = VerificationRecord::new(request.email.clone(), code);
        self.ctx.verification_repo().upsert(&record).await?;

        let display_name = request.username.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME);
        let subject = "Email Verification - Game Account";
        let body = render_verification_email(display_name, &record.code);

        if let Err(e) = mailer.send(&request.email, subject, &body).await {
            warn!(email = %request.email, error = %e, "Verification email failed; code retained");
            return Err(DomainError::from(e).into());
        }

        info!(email = %request.email, "Verification email sent");

        Ok(VerificationSentResponse {
            message: "Verification email sent successfully".to_string(),
            code_sent: true,
        })
    }

    /// Look up the active code for an email.
    ///
    /// Every lookup first sweeps expired records across all emails — the
    /// deliberate alternative to a scheduled cleanup job. A record that
    /// slipped past the sweep but is already expired is deleted here and
    /// reported as expired.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn lookup_code(
        &self,
        request: GetCodeRequest,
    ) -> ServiceResult<VerificationCodeResponse> {
        let purged = self
            .ctx
            .verification_repo()
            .purge_expired(Utc::now())
            .await?;
        if purged > 0 {
            debug!(purged, "Expired verification codes purged");
        }

        let record = self
            .ctx
            .verification_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| DomainError::VerificationNotFound(request.email.clone()))?;

        if record.is_expired() {
            self.ctx
                .verification_repo()
                .delete_by_email(&request.email)
                .await?;
            return Err(DomainError::VerificationExpired(request.email).into());
        }

        let expires_in_minutes = record.remaining_minutes();
        Ok(VerificationCodeResponse {
            email: record.email,
            code: record.code,
            expires_in_minutes,
            created_at: record.created_at,
        })
    }
}

/// Render the verification email body.
///
/// Mirrors the template the game clients expect: greeting, boxed code,
/// and the TTL notice.
fn render_verification_email(display_name: &str, code: &str) -> String {
    format!(
        r#"<html>
<body>
    <h2>Welcome to the Critter Game!</h2>
    <p>Hi {display_name},</p>
    <p>Thank you for signing up! Please use the verification code below to verify your email address:</p>
    <div style="background-color: #f0f0f0; padding: 20px; text-align: center; margin: 20px 0;">
        <h1 style="color: #333; letter-spacing: 3px;">{code}</h1>
    </div>
    <p>This code will expire in {VERIFICATION_TTL_MINUTES} minutes.</p>
    <p>If you didn't request this verification, please ignore this email.</p>
    <br>
    <p>Happy Gaming!</p>
    <p>The Critter Game Team</p>
</body>
</html>"#
    )
}
