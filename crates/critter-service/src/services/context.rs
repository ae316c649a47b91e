//! Service context - dependency container for services
//!
//! Holds the repositories and the optional mail sender needed by services.
//! Everything is built once at startup and shared; no service opens its own
//! handles.

use std::sync::Arc;

use critter_core::traits::{
    AccountRepository, GameRepository, MailSender, RosterRepository, VerificationRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    account_repo: Arc<dyn AccountRepository>,
    game_repo: Arc<dyn GameRepository>,
    roster_repo: Arc<dyn RosterRepository>,
    verification_repo: Arc<dyn VerificationRepository>,

    /// Absent when SMTP credentials are not configured; verification
    /// issuance then fails with a distinct configuration error.
    mailer: Option<Arc<dyn MailSender>>,
}

impl ServiceContext {
    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the roster repository
    pub fn roster_repo(&self) -> &dyn RosterRepository {
        self.roster_repo.as_ref()
    }

    /// Get the verification repository
    pub fn verification_repo(&self) -> &dyn VerificationRepository {
        self.verification_repo.as_ref()
    }

    /// Get the mail sender, if configured
    pub fn mailer(&self) -> Option<&dyn MailSender> {
        self.mailer.as_deref()
    }
}

/// Builder for ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    game_repo: Option<Arc<dyn GameRepository>>,
    roster_repo: Option<Arc<dyn RosterRepository>>,
    verification_repo: Option<Arc<dyn VerificationRepository>>,
    mailer: Option<Arc<dyn MailSender>>,
}

impl ServiceContextBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account repository
    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    /// Set the game repository
    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    /// Set the roster repository
    pub fn roster_repo(mut self, repo: Arc<dyn RosterRepository>) -> Self {
        self.roster_repo = Some(repo);
        self
    }

    /// Set the verification repository
    pub fn verification_repo(mut self, repo: Arc<dyn VerificationRepository>) -> Self {
        self.verification_repo = Some(repo);
        self
    }

    /// Set the mail sender (optional dependency)
    pub fn mailer(mut self, mailer: Arc<dyn MailSender>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Build the context, failing on any missing required dependency
    pub fn build(self) -> Result<ServiceContext, String> {
        Ok(ServiceContext {
            account_repo: self.account_repo.ok_or("account_repo is required")?,
            game_repo: self.game_repo.ok_or("game_repo is required")?,
            roster_repo: self.roster_repo.ok_or("roster_repo is required")?,
            verification_repo: self
                .verification_repo
                .ok_or("verification_repo is required")?,
            mailer: self.mailer,
        })
    }
}
