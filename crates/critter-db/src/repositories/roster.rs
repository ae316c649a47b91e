//! PostgreSQL implementation of RosterRepository
//!
//! A roster is the set of creature rows for a username, ordered by serial
//! id. Each operation is a single statement, keeping the same atomicity as
//! array push/pull mutations on a roster document.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use critter_core::entities::{Creature, StatField};
use critter_core::traits::{RepoResult, RosterRepository};

use crate::models::CreatureModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RosterRepository
#[derive(Clone)]
pub struct PgRosterRepository {
    pool: PgPool,
}

impl PgRosterRepository {
    /// Create a new PgRosterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Column name for a stat field. The closed StatField set keeps this safe
/// to interpolate into SQL.
fn stat_column(field: StatField) -> &'static str {
    match field {
        StatField::Level => "level",
        StatField::Health => "health",
        StatField::Power => "power",
    }
}

#[async_trait]
impl RosterRepository for PgRosterRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Creature>> {
        let rows = sqlx::query_as::<_, CreatureModel>(
            r"
            SELECT id, username, name, level, health, power
            FROM creatures
            WHERE username = $1
            ORDER BY id
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Creature::from).collect())
    }

    #[instrument(skip(self, creature), fields(name = %creature.name))]
    async fn add(&self, username: &str, creature: &Creature) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO creatures (username, name, level, health, power)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(username)
        .bind(&creature.name)
        .bind(creature.level)
        .bind(creature.health)
        .bind(creature.power)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_by_name(&self, username: &str, name: &str) -> RepoResult<u64> {
        // Pull semantics: every structural match goes, not just the first.
        let result = sqlx::query(
            r"
            DELETE FROM creatures
            WHERE username = $1 AND name = $2
            ",
        )
        .bind(username)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn set_field(
        &self,
        username: &str,
        name: &str,
        field: StatField,
        value: i64,
    ) -> RepoResult<bool> {
        let sql = format!(
            r"
            UPDATE creatures
            SET {} = $3
            WHERE id = (
                SELECT id FROM creatures
                WHERE username = $1 AND name = $2
                ORDER BY id
                LIMIT 1
            )
            ",
            stat_column(field)
        );

        let result = sqlx::query(&sql)
            .bind(username)
            .bind(name)
            .bind(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
