//! Creature entity <-> model mapper

use critter_core::entities::Creature;

use crate::models::CreatureModel;

impl From<CreatureModel> for Creature {
    fn from(model: CreatureModel) -> Self {
        Creature {
            name: model.name,
            level: model.level,
            health: model.health,
            power: model.power,
        }
    }
}
