//! PostgreSQL implementation of VerificationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use critter_core::entities::VerificationRecord;
use critter_core::traits::{RepoResult, VerificationRepository};

use crate::models::VerificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VerificationRepository
#[derive(Clone)]
pub struct PgVerificationRepository {
    pool: PgPool,
}

impl PgVerificationRepository {
    /// Create a new PgVerificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerificationRepository for PgVerificationRepository {
    #[instrument(skip(self, record), fields(email = %record.email))]
    async fn upsert(&self, record: &VerificationRecord) -> RepoResult<()> {
        // Full replacement keyed by email: a prior unexpired code is
        // invalidated the moment a new one is issued.
        sqlx::query(
            r"
            INSERT INTO verifications (email, code, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE
            SET code = EXCLUDED.code,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
            ",
        )
        .bind(&record.email)
        .bind(&record.code)
        .bind(record.created_at)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<VerificationRecord>> {
        let result = sqlx::query_as::<_, VerificationModel>(
            r"
            SELECT email, code, created_at, expires_at
            FROM verifications
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(VerificationRecord::from))
    }

    #[instrument(skip(self))]
    async fn delete_by_email(&self, email: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM verifications
            WHERE email = $1
            ",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purge_expired(&self, now: DateTime<Utc>) -> RepoResult<u64> {
        // Global sweep across all emails; runs on the lookup path instead
        // of a scheduled job.
        let result = sqlx::query(
            r"
            DELETE FROM verifications
            WHERE expires_at < $1
            ",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
