//! Creature entity - a single roster member with mutable stats

/// Creature owned by a player.
///
/// Names need not be unique within a roster; removal and stat updates
/// match structurally by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub power: i32,
}

impl Creature {
    /// Default level for freshly caught creatures
    pub const DEFAULT_LEVEL: i32 = 1;
    /// Default health for freshly caught creatures
    pub const DEFAULT_HEALTH: i32 = 100;
    /// Default power for freshly caught creatures
    pub const DEFAULT_POWER: i32 = 10;

    /// Create a new Creature with default stats
    pub fn new(name: String) -> Self {
        Self {
            name,
            level: Self::DEFAULT_LEVEL,
            health: Self::DEFAULT_HEALTH,
            power: Self::DEFAULT_POWER,
        }
    }
}

/// Closed set of mutable creature stats.
///
/// The update operation only accepts these fields; arbitrary field names
/// are rejected rather than written through uninterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Level,
    Health,
    Power,
}

impl StatField {
    /// Parse a field name, returning None for anything outside the closed set
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "level" => Some(Self::Level),
            "health" => Some(Self::Health),
            "power" => Some(Self::Power),
            _ => None,
        }
    }

    /// Field name as it appears in requests and storage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Health => "health",
            Self::Power => "power",
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
