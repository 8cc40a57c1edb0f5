use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A single-hand deck of 52 unique cards with a seedable shuffle.
/// Rebuilt fresh at the start of every hand; cards are dealt from the tail.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new(shuffled: bool, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self {
            cards: full_deck(),
            rng,
        };
        if shuffled {
            deck.shuffle();
        }
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the last `n` cards. The deck is left untouched
    /// when fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.split_off(self.cards.len() - n))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
