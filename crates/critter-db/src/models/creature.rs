//! Creature database model

use sqlx::FromRow;

/// Database model for the creatures table.
///
/// Roster order is the serial id; "first match" operations always resolve
/// to the lowest id.
#[derive(Debug, Clone, FromRow)]
pub struct CreatureModel {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub power: i32,
}
