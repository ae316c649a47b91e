//! Game entity - a two-player session identified by a pairing code

use chrono::{DateTime, Utc};

/// Game lifecycle status. Transitions one way: active -> ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Ended,
}

impl GameStatus {
    /// Status as stored and serialized
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }

    /// Parse a stored status string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game session between two players.
///
/// The pairing code is random but not checked for uniqueness; collisions
/// are possible and accepted for this domain (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub code: String,
    pub player1: String,
    pub player2: String,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a new active Game
    pub fn new(code: String, player1: String, player2: String) -> Self {
        Self {
            code,
            player1,
            player2,
            status: GameStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Both player usernames, in join order
    pub fn players(&self) -> [&str; 2] {
        [&self.player1, &self.player2]
    }

    /// Check if the game has ended
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.status == GameStatus::Ended
    }
}
