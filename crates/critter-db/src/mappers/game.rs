//! Game entity <-> model mapper

use critter_core::entities::{Game, GameStatus};

use crate::models::GameModel;

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            code: model.code,
            player1: model.player1,
            player2: model.player2,
            // Unknown stored statuses read as active rather than failing the row
            status: GameStatus::parse(&model.status).unwrap_or(GameStatus::Active),
            created_at: model.created_at,
        }
    }
}
