//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use critter_core::entities::{Game, GameStatus};
use critter_core::traits::{GameRepository, RepoResult};

use crate::models::GameModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Game>> {
        // Codes are not unique; on collision the oldest game wins,
        // matching find-one semantics.
        let result = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, code, player1, player2, status, created_at
            FROM games
            WHERE code = $1
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self, game), fields(code = %game.code))]
    async fn create(&self, game: &Game) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO games (code, player1, player2, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&game.code)
        .bind(&game.player1)
        .bind(&game.player2)
        .bind(game.status.as_str())
        .bind(game.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, code: &str, status: GameStatus) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE games
            SET status = $2
            WHERE code = $1
            ",
        )
        .bind(code)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
