use serde::{Deserialize, Serialize};

/// A registered player identity. Usernames are unique (case-sensitive)
/// across a game and carry no table state; chips and cards live on the
/// seat a player occupies.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    username: String,
}

impl Player {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Represents a player action during a betting round. There is no call or
/// all-in action; a wager is always a fresh bet amount.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no chips committed)
    Check,
    /// Wager the given amount
    Bet(u32),
}
