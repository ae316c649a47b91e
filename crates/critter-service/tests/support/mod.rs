//! In-memory port implementations for service tests
//!
//! Small stand-ins for the PostgreSQL repositories and the SMTP sender so
//! service behavior can be exercised without external dependencies.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use critter_core::entities::{Account, Creature, Game, GameStatus, StatField, VerificationRecord};
use critter_core::traits::{
    AccountRepository, GameRepository, MailError, MailSender, RepoResult, RosterRepository,
    VerificationRepository,
};
use critter_service::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct InMemoryAccounts {
    accounts: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn create(&self, account: &Account) -> RepoResult<()> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryGames {
    games: Mutex<Vec<Game>>,
}

impl InMemoryGames {
    pub fn status_of(&self, code: &str) -> Option<GameStatus> {
        let games = self.games.lock().unwrap();
        games.iter().find(|g| g.code == code).map(|g| g.status)
    }
}

#[async_trait]
impl GameRepository for InMemoryGames {
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Game>> {
        let games = self.games.lock().unwrap();
        Ok(games.iter().find(|g| g.code == code).cloned())
    }

    async fn create(&self, game: &Game) -> RepoResult<()> {
        self.games.lock().unwrap().push(game.clone());
        Ok(())
    }

    async fn set_status(&self, code: &str, status: GameStatus) -> RepoResult<()> {
        let mut games = self.games.lock().unwrap();
        for game in games.iter_mut().filter(|g| g.code == code) {
            game.status = status;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRosters {
    rosters: Mutex<HashMap<String, Vec<Creature>>>,
}

#[async_trait]
impl RosterRepository for InMemoryRosters {
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Creature>> {
        let rosters = self.rosters.lock().unwrap();
        Ok(rosters.get(username).cloned().unwrap_or_default())
    }

    async fn add(&self, username: &str, creature: &Creature) -> RepoResult<()> {
        let mut rosters = self.rosters.lock().unwrap();
        rosters
            .entry(username.to_string())
            .or_default()
            .push(creature.clone());
        Ok(())
    }

    async fn remove_by_name(&self, username: &str, name: &str) -> RepoResult<u64> {
        let mut rosters = self.rosters.lock().unwrap();
        let Some(roster) = rosters.get_mut(username) else {
            return Ok(0);
        };
        let before = roster.len();
        roster.retain(|c| c.name != name);
        Ok((before - roster.len()) as u64)
    }

    async fn set_field(
        &self,
        username: &str,
        name: &str,
        field: StatField,
        value: i64,
    ) -> RepoResult<bool> {
        let mut rosters = self.rosters.lock().unwrap();
        let Some(roster) = rosters.get_mut(username) else {
            return Ok(false);
        };
        let Some(creature) = roster.iter_mut().find(|c| c.name == name) else {
            return Ok(false);
        };
        let value = value as i32;
        match field {
            StatField::Level => creature.level = value,
            StatField::Health => creature.health = value,
            StatField::Power => creature.power = value,
        }
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryVerifications {
    records: Mutex<HashMap<String, VerificationRecord>>,
}

impl InMemoryVerifications {
    pub fn get(&self, email: &str) -> Option<VerificationRecord> {
        self.records.lock().unwrap().get(email).cloned()
    }

    /// Force a stored record to an already-expired state
    pub fn expire(&self, email: &str) {
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.get_mut(email) {
            record.expires_at = Utc::now() - chrono::Duration::minutes(1);
        }
    }
}

#[async_trait]
impl VerificationRepository for InMemoryVerifications {
    async fn upsert(&self, record: &VerificationRecord) -> RepoResult<()> {
        self.records
            .lock()
            .unwrap()
            .insert(record.email.clone(), record.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<VerificationRecord>> {
        Ok(self.get(email))
    }

    async fn delete_by_email(&self, email: &str) -> RepoResult<()> {
        self.records.lock().unwrap().remove(email);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> RepoResult<u64> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|_, record| record.expires_at >= now);
        Ok((before - records.len()) as u64)
    }
}

/// How the recording mailer should behave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailerMode {
    Deliver,
    FailAuth,
    FailTransport,
}

/// Mail sender that records sends instead of talking SMTP
pub struct RecordingMailer {
    mode: MailerMode,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailer {
    pub fn new(mode: MailerMode) -> Self {
        Self {
            mode,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Recipient and body of every delivered email
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, to: &str, _subject: &str, html_body: &str) -> Result<(), MailError> {
        match self.mode {
            MailerMode::Deliver => {
                self.sent
                    .lock()
                    .unwrap()
                    .push((to.to_string(), html_body.to_string()));
                Ok(())
            }
            MailerMode::FailAuth => Err(MailError::Authentication("535 bad credentials".into())),
            MailerMode::FailTransport => Err(MailError::Transport("connection reset".into())),
        }
    }
}

/// All in-memory ports plus the context wired over them
pub struct Harness {
    pub ctx: ServiceContext,
    pub games: Arc<InMemoryGames>,
    pub verifications: Arc<InMemoryVerifications>,
    pub mailer: Arc<RecordingMailer>,
}

/// Build a context over fresh in-memory ports
pub fn harness(mode: MailerMode) -> Harness {
    harness_with_mailer(Some(mode))
}

/// Build a context, optionally without any mail sender configured
pub fn harness_with_mailer(mode: Option<MailerMode>) -> Harness {
    let games = Arc::new(InMemoryGames::default());
    let verifications = Arc::new(InMemoryVerifications::default());
    let mailer = Arc::new(RecordingMailer::new(mode.unwrap_or(MailerMode::Deliver)));

    let mut builder = ServiceContextBuilder::new()
        .account_repo(Arc::new(InMemoryAccounts::default()))
        .game_repo(games.clone())
        .roster_repo(Arc::new(InMemoryRosters::default()))
        .verification_repo(verifications.clone());

    if mode.is_some() {
        builder = builder.mailer(mailer.clone());
    }

    let ctx = builder.build().expect("context should build");

    Harness {
        ctx,
        games,
        verifications,
        mailer,
    }
}
