//! Game service
//!
//! Handles game-code pairing: starting a game between two players and
//! ending it, optionally reporting both rosters.

use std::collections::HashMap;

use critter_core::entities::{generate_code, Game, GameStatus, GAME_CODE_LENGTH};
use critter_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CreatureResponse, EndGameRequest, EndGameResponse, GameCodeResponse, StartGameRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a game between two players and hand back the pairing code.
    ///
    /// Players are not required to exist as accounts, and the code is not
    /// checked for uniqueness against running games; both behaviors are
    /// kept from the original contract.
    #[instrument(skip(self, request), fields(user1 = %request.user1, user2 = %request.user2))]
    pub async fn start_game(&self, request: StartGameRequest) -> ServiceResult<GameCodeResponse> {
        let code = generate_code(GAME_CODE_LENGTH);
        let game = Game::new(code.clone(), request.user1, request.user2);

        self.ctx.game_repo().create(&game).await?;

        info!(code = %code, "Game started");

        Ok(GameCodeResponse { code })
    }

    /// End the game with this code.
    ///
    /// The status write is an unconditional overwrite, so ending an
    /// already-ended game succeeds again. With `show_creatures`, both
    /// players' rosters ride along keyed by username; a player without a
    /// roster maps to an empty list.
    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn end_game(&self, request: EndGameRequest) -> ServiceResult<EndGameResponse> {
        let game = self
            .ctx
            .game_repo()
            .find_by_code(&request.code)
            .await?
            .ok_or_else(|| DomainError::GameNotFound(request.code.clone()))?;

        self.ctx
            .game_repo()
            .set_status(&request.code, GameStatus::Ended)
            .await?;

        info!(code = %request.code, "Game ended");

        let creatures = if request.show_creatures {
            let mut rosters = HashMap::new();
            for player in game.players() {
                let roster = self.ctx.roster_repo().find_by_username(player).await?;
                rosters.insert(
                    player.to_string(),
                    roster.iter().map(CreatureResponse::from).collect(),
                );
            }
            Some(rosters)
        } else {
            None
        };

        Ok(EndGameResponse {
            message: "Game ended".to_string(),
            creatures,
        })
    }
}
