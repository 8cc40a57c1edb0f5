use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{self, HandStrength};
use crate::player::Player;
use crate::rotation;
use crate::rules::{self, Blinds};
use crate::seat::Seat;

/// Fixed number of table positions; the seat array is never resized.
pub const MAX_PLAYERS: usize = 9;

/// The lifecycle phase of the table. A hand walks `Preflop` through
/// `River`; `Showdown` settles and the table returns to `Waiting`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

const BETTING_PHASES: [Phase; 4] = [Phase::Preflop, Phase::Flop, Phase::Turn, Phase::River];
const CHECK_PHASES: [Phase; 3] = [Phase::Flop, Phase::Turn, Phase::River];

/// The central table aggregate: nine permanent seats, a player registry,
/// the betting state machine, and the shared rotation cursor.
///
/// All actions are synchronous and atomic: validation happens before any
/// mutation, so a failed call leaves the game unchanged. One logical caller
/// at a time; any concurrent host must serialize externally.
#[derive(Debug)]
pub struct Game {
    seats: [Seat; MAX_PLAYERS],
    players: Vec<Player>,
    deck: Deck,
    /// Shared rotation cursor; persists across calls and hands.
    cursor: usize,
    dealer_seat: Option<usize>,
    current_action_seat: Option<usize>,
    last_action_seat: Option<usize>,
    community_cards: Vec<Card>,
    pot: u32,
    current_bet: u32,
    blinds: Blinds,
    active_players: usize,
    phase: Phase,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Game {
    /// Creates an empty table. Without an explicit seed the master RNG is
    /// seeded from OS entropy; with one, every shuffle of the whole game is
    /// reproducible.
    pub fn new(blinds: Blinds, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seats: std::array::from_fn(|_| Seat::new()),
            players: Vec::new(),
            deck: Deck::new(false, seed),
            cursor: 0,
            dealer_seat: None,
            current_action_seat: None,
            last_action_seat: None,
            community_cards: Vec::new(),
            pot: 0,
            current_bet: 0,
            blinds,
            active_players: 0,
            phase: Phase::Waiting,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    // Registration and seating

    /// Registers a new player identity.
    pub fn add_player(&mut self, username: &str) -> Result<(), GameError> {
        if self.players.iter().any(|p| p.username() == username) {
            return Err(GameError::DuplicatePlayer(username.to_string()));
        }
        self.players.push(Player::new(username));
        Ok(())
    }

    /// Sits a registered player at an empty seat with the given stack.
    pub fn add_player_to_seat(
        &mut self,
        username: &str,
        chips: u32,
        seat_index: usize,
    ) -> Result<(), GameError> {
        if seat_index >= MAX_PLAYERS {
            return Err(GameError::SeatOutOfRange(seat_index));
        }
        if self.seats[seat_index].is_occupied() {
            return Err(GameError::SeatOccupied(seat_index));
        }
        let player = self
            .players
            .iter()
            .find(|p| p.username() == username)
            .cloned()
            .ok_or_else(|| GameError::UnknownPlayer(username.to_string()))?;
        if self.seat_of(username).is_some() {
            return Err(GameError::AlreadySeated(username.to_string()));
        }
        self.seats[seat_index].occupy(player, chips);
        Ok(())
    }

    /// Clears the seat a player occupies, stack included.
    pub fn remove_player_from_seat(&mut self, username: &str) -> Result<(), GameError> {
        let seat = self
            .seat_of(username)
            .ok_or_else(|| GameError::PlayerNotSeated(username.to_string()))?;
        self.seats[seat].vacate();
        Ok(())
    }

    /// Randomizes the seat order. Only between hands; seat indices are
    /// load-bearing while a hand runs.
    pub fn shuffle_seats(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::InvalidPhase(self.phase));
        }
        use rand::seq::SliceRandom;
        self.seats.shuffle(&mut self.rng);
        Ok(())
    }

    /// Replaces the blind structure; takes effect at the next hand.
    pub fn set_blinds(&mut self, small: u32, big: u32) -> Result<(), GameError> {
        self.blinds = Blinds::new(small, big)?;
        Ok(())
    }

    /// Overrides a seated player's stack.
    pub fn set_seat_chips(&mut self, username: &str, chips: u32) -> Result<(), GameError> {
        let seat = self
            .seat_of(username)
            .ok_or_else(|| GameError::PlayerNotSeated(username.to_string()))?;
        self.seats[seat].set_chips(chips);
        Ok(())
    }

    // Hand lifecycle

    /// Deals a fresh hand: new shuffled deck, two hole cards per occupied
    /// seat, dealer advanced one occupied seat, blinds posted.
    ///
    /// Heads-up, the dealer posts the small blind and acts first; otherwise
    /// the two seats after the dealer post the blinds and the seat after the
    /// big blind opens the action. The big blind seat marks the end of the
    /// betting round either way.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::InvalidPhase(self.phase));
        }
        self.active_players = self.occupied_count();
        if self.active_players < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        // Occupied seats are exactly the seats that will be un-folded once
        // dealt in, so blind positions can be computed and checked against
        // their stacks before anything is mutated. These walks leave the
        // shared cursor alone.
        let dealer = rotation::next_occupied(&self.seats, self.cursor);
        let heads_up = self.active_players == 2;
        let (small_seat, big_seat) = if heads_up {
            (dealer, rotation::next_occupied(&self.seats, dealer))
        } else {
            let sb = rotation::next_occupied(&self.seats, dealer);
            (sb, rotation::next_occupied(&self.seats, sb))
        };
        for (seat, amount) in [(small_seat, self.blinds.small), (big_seat, self.blinds.big)] {
            if amount > self.seats[seat].chips() {
                return Err(GameError::InsufficientChips {
                    amount,
                    stack: self.seats[seat].chips(),
                });
            }
        }

        self.deck = Deck::new(true, self.rng.next_u64());
        for index in 0..MAX_PLAYERS {
            if self.seats[index].is_occupied() {
                let cards = self.deck.deal(2)?;
                self.seats[index].deal_in(cards);
            }
        }

        let dealer = self.advance_cursor();
        self.dealer_seat = Some(dealer);
        self.post_blind(small_seat, self.blinds.small)?;
        self.post_blind(big_seat, self.blinds.big)?;
        self.last_action_seat = Some(big_seat);
        self.current_action_seat = Some(if heads_up {
            dealer
        } else {
            rotation::next_unfolded(&self.seats, big_seat)
        });
        self.current_bet = self.blinds.big;
        self.phase = Phase::Preflop;
        Ok(())
    }

    /// Folds the acting player's hand.
    pub fn fold(&mut self, username: &str) -> Result<(), GameError> {
        let seat = self.acting_seat(username, &BETTING_PHASES)?;
        self.seats[seat].fold();
        self.active_players -= 1;
        self.update()
    }

    /// Passes the action without committing chips. Not available preflop.
    pub fn check(&mut self, username: &str) -> Result<(), GameError> {
        self.acting_seat(username, &CHECK_PHASES)?;
        self.update()
    }

    /// Wagers `amount` from the acting player's stack. A new wager must be
    /// at least the big blind and at least double the standing bet.
    pub fn bet(&mut self, username: &str, amount: u32) -> Result<(), GameError> {
        let seat = self.acting_seat(username, &BETTING_PHASES)?;
        rules::validate_bet(
            self.seats[seat].chips(),
            self.current_bet,
            self.blinds.big,
            amount,
        )?;
        self.seats[seat].pay(amount)?;
        self.pot += amount;
        self.seats[seat].set_last_bet(amount);
        self.current_bet = amount;
        // last_action_seat is not moved on a raise; round completion still
        // keys off the big blind seat.
        self.update()
    }

    // Observers

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat_of(&self, username: &str) -> Option<usize> {
        self.seats
            .iter()
            .position(|s| s.username() == Some(username))
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer_seat(&self) -> Option<usize> {
        self.dealer_seat
    }

    pub fn current_action_seat(&self) -> Option<usize> {
        self.current_action_seat
    }

    pub fn last_action_seat(&self) -> Option<usize> {
        self.last_action_seat
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    pub fn active_players(&self) -> usize {
        self.active_players
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // Internals

    /// Validates phase, seating, and turn for an action by `username`.
    fn acting_seat(&self, username: &str, phases: &[Phase]) -> Result<usize, GameError> {
        if !phases.contains(&self.phase) {
            return Err(GameError::InvalidPhase(self.phase));
        }
        let seat = self
            .seat_of(username)
            .ok_or_else(|| GameError::PlayerNotSeated(username.to_string()))?;
        if self.current_action_seat != Some(seat) {
            return Err(GameError::NotYourTurn(username.to_string()));
        }
        Ok(seat)
    }

    /// Steps the shared cursor to the next seat still in the hand.
    fn advance_cursor(&mut self) -> usize {
        self.cursor = rotation::next_unfolded(&self.seats, self.cursor);
        self.cursor
    }

    fn post_blind(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        self.seats[seat].pay(amount)?;
        self.seats[seat].set_last_bet(amount);
        self.pot += amount;
        Ok(())
    }

    /// The transition function, run after every player action.
    ///
    /// A hand with one seat left ends immediately in that seat's favor.
    /// When the action returns to the round-completion marker the street
    /// advances (flop 3, turn 1, river 1; after the river, showdown) and no
    /// new action seat is assigned. Otherwise the action simply moves on.
    fn update(&mut self) -> Result<(), GameError> {
        if self.active_players <= 1 {
            let winner = self.advance_cursor();
            let pot = self.pot;
            self.seats[winner].add_chips(pot);
            self.pot = 0;
            self.end_hand();
            return Ok(());
        }
        if self.current_action_seat == self.last_action_seat {
            self.current_bet = 0;
            match self.phase {
                Phase::Preflop => {
                    let mut cards = self.deck.deal(3)?;
                    self.community_cards.append(&mut cards);
                    self.phase = Phase::Flop;
                }
                Phase::Flop => {
                    let mut cards = self.deck.deal(1)?;
                    self.community_cards.append(&mut cards);
                    self.phase = Phase::Turn;
                }
                Phase::Turn => {
                    let mut cards = self.deck.deal(1)?;
                    self.community_cards.append(&mut cards);
                    self.phase = Phase::River;
                }
                Phase::River => {
                    self.phase = Phase::Showdown;
                    self.settle_showdown()?;
                }
                Phase::Waiting | Phase::Showdown => {}
            }
            return Ok(());
        }
        self.current_action_seat = Some(self.advance_cursor());
        Ok(())
    }

    /// Compares every remaining seat's best five of seven and splits the
    /// pot among the winners, odd chips to the lowest winning seat index.
    fn settle_showdown(&mut self) -> Result<(), GameError> {
        let mut winners: Vec<usize> = Vec::new();
        let mut best: Option<HandStrength> = None;
        for (index, seat) in self.seats.iter().enumerate() {
            if seat.folded() {
                continue;
            }
            let strength = hand::best_of_seven(seat.hole_cards(), &self.community_cards)?;
            match best {
                Some(b) if strength < b => {}
                Some(b) if strength == b => winners.push(index),
                _ => {
                    best = Some(strength);
                    winners.clear();
                    winners.push(index);
                }
            }
        }
        if !winners.is_empty() {
            let share = self.pot / winners.len() as u32;
            let remainder = self.pot % winners.len() as u32;
            for &index in &winners {
                self.seats[index].add_chips(share);
            }
            self.seats[winners[0]].add_chips(remainder);
            self.pot = 0;
        }
        self.end_hand();
        Ok(())
    }

    /// Resets all hand-scoped state and re-syncs the rotation cursor to the
    /// previous dealer, so the next hand's rotation continues one seat on.
    fn end_hand(&mut self) {
        self.community_cards.clear();
        self.current_bet = 0;
        self.pot = 0;
        for seat in self.seats.iter_mut() {
            seat.reset_hand();
        }
        self.active_players = self.occupied_count();
        self.current_action_seat = None;
        self.last_action_seat = None;
        if let Some(dealer) = self.dealer_seat {
            self.cursor = dealer;
        }
        self.phase = Phase::Waiting;
    }

    fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }
}
