use crate::cards::Card;
use crate::errors::GameError;
use crate::player::Player;

/// A permanent table position. The seat index is the seat's identity; the
/// occupant, stack, and per-hand state (hole cards, fold flag, last wager)
/// all live here. An empty seat reads as folded so the rotation skips it.
#[derive(Debug, Clone)]
pub struct Seat {
    player: Option<Player>,
    chips: u32,
    cards: Vec<Card>,
    folded: bool,
    last_bet: u32,
}

impl Seat {
    pub fn new() -> Self {
        Self {
            player: None,
            chips: 0,
            cards: Vec::new(),
            folded: true,
            last_bet: 0,
        }
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.player.as_ref().map(Player::username)
    }

    pub fn is_occupied(&self) -> bool {
        self.player.is_some()
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn folded(&self) -> bool {
        self.folded
    }

    pub fn last_bet(&self) -> u32 {
        self.last_bet
    }

    pub(crate) fn occupy(&mut self, player: Player, chips: u32) {
        self.player = Some(player);
        self.chips = chips;
    }

    pub(crate) fn vacate(&mut self) {
        self.player = None;
        self.chips = 0;
        self.reset_hand();
    }

    pub(crate) fn set_chips(&mut self, chips: u32) {
        self.chips = chips;
    }

    /// Hands the seat its hole cards and brings it into the hand.
    pub(crate) fn deal_in(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.folded = false;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    /// Moves `amount` out of the stack; the caller owns the pot side.
    /// Rejects any amount above the stack, so a seat can never go negative
    /// and no partial (all-in) payment exists.
    pub(crate) fn pay(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                amount,
                stack: self.chips,
            });
        }
        self.chips -= amount;
        Ok(())
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) fn set_last_bet(&mut self, amount: u32) {
        self.last_bet = amount;
    }

    /// Clears the hand-scoped state; occupancy and stack are untouched.
    pub(crate) fn reset_hand(&mut self) {
        self.cards.clear();
        self.folded = true;
        self.last_bet = 0;
    }
}

impl Default for Seat {
    fn default() -> Self {
        Self::new()
    }
}
