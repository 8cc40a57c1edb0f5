use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The forced-wager structure of the table. Validated on construction:
/// both blinds positive and the small blind strictly below the big.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Result<Self, GameError> {
        if small == 0 || big == 0 {
            return Err(GameError::BlindsZero);
        }
        if small >= big {
            return Err(GameError::BlindsOutOfOrder);
        }
        Ok(Self { small, big })
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 1, big: 2 }
    }
}

/// Validates a fresh wager against the stack and the standing bet.
///
/// A wager must fit the stack (there is no all-in), clear the big blind,
/// and at least double the current bet.
pub fn validate_bet(
    stack: u32,
    current_bet: u32,
    big_blind: u32,
    amount: u32,
) -> Result<(), GameError> {
    if amount > stack {
        return Err(GameError::InsufficientChips { amount, stack });
    }
    if amount < big_blind {
        return Err(GameError::BetBelowMinimum {
            amount,
            minimum: big_blind,
        });
    }
    if amount < current_bet * 2 {
        return Err(GameError::BetBelowMinimum {
            amount,
            minimum: current_bet * 2,
        });
    }
    Ok(())
}
