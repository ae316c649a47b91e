//! Roster service
//!
//! Creature roster mutation: fetch, add with default stats, remove by
//! name, and stat updates on the first name match.

use critter_core::entities::{Creature, StatField};
use critter_core::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::{
    CreatureActionRequest, CreatureDataRequest, CreatureResponse, MessageResponse, RosterResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a user's roster in insertion order. A user with no roster
    /// gets an empty list, never an error.
    #[instrument(skip(self))]
    pub async fn get_roster(&self, username: &str) -> ServiceResult<RosterResponse> {
        let roster = self.ctx.roster_repo().find_by_username(username).await?;
        Ok(RosterResponse {
            creatures: roster.iter().map(CreatureResponse::from).collect(),
        })
    }

    /// Append a creature with default stats. Duplicate names are allowed.
    #[instrument(skip(self, request), fields(username = %request.username, creature = %request.creature))]
    pub async fn add_creature(
        &self,
        request: CreatureActionRequest,
    ) -> ServiceResult<MessageResponse> {
        let creature = Creature::new(request.creature);
        self.ctx
            .roster_repo()
            .add(&request.username, &creature)
            .await?;

        info!(username = %request.username, name = %creature.name, "Creature added");

        Ok(MessageResponse::new("Creature added"))
    }

    /// Remove every creature with the given name. Absent roster or absent
    /// name is a silent no-op.
    #[instrument(skip(self, request), fields(username = %request.username, creature = %request.creature))]
    pub async fn remove_creature(
        &self,
        request: CreatureActionRequest,
    ) -> ServiceResult<MessageResponse> {
        let removed = self
            .ctx
            .roster_repo()
            .remove_by_name(&request.username, &request.creature)
            .await?;

        debug!(username = %request.username, removed, "Creature removal");

        Ok(MessageResponse::new("Creature removed"))
    }

    /// Set a stat on the first creature matching the name. The stat must
    /// be one of the closed set; no creature matching is a silent no-op.
    #[instrument(skip(self, request), fields(username = %request.username, creature = %request.creature, key = %request.key))]
    pub async fn update_creature_field(
        &self,
        request: CreatureDataRequest,
    ) -> ServiceResult<MessageResponse> {
        let field = StatField::parse(&request.key)
            .ok_or_else(|| DomainError::InvalidField(request.key.clone()))?;

        let updated = self
            .ctx
            .roster_repo()
            .set_field(&request.username, &request.creature, field, request.value)
            .await?;

        debug!(username = %request.username, updated, "Creature stat update");

        Ok(MessageResponse::new(format!(
            "{} updated for {}",
            field, request.creature
        )))
    }
}
