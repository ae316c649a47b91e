//! Account service
//!
//! Handles signup and username existence checks.

use critter_core::entities::Account;
use critter_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MessageResponse, SignupRequest, UserExistsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account.
    ///
    /// Email is checked before username, and the first collision
    /// short-circuits. The record is stored verbatim, password included;
    /// see DESIGN.md for why hashing is deliberately not introduced here.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<MessageResponse> {
        if self.ctx.account_repo().email_exists(&request.email).await? {
            return Err(DomainError::DuplicateEmail.into());
        }

        if self
            .ctx
            .account_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::DuplicateUsername.into());
        }

        let account = Account::new(
            request.email,
            request.username,
            request.password,
            request.gender,
        );
        self.ctx.account_repo().create(&account).await?;

        info!(username = %account.username, "Account registered");

        Ok(MessageResponse::new("Signup successful"))
    }

    /// Check whether a username is taken
    #[instrument(skip(self))]
    pub async fn username_exists(&self, username: &str) -> ServiceResult<UserExistsResponse> {
        let exists = self.ctx.account_repo().username_exists(username).await?;
        Ok(UserExistsResponse { exists })
    }
}
