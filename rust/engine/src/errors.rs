use thiserror::Error;

use crate::game::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("insufficient cards in deck: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("hand evaluation requires exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("username '{0}' is already registered")]
    DuplicatePlayer(String),
    #[error("unknown player '{0}'")]
    UnknownPlayer(String),
    #[error("player '{0}' is not seated")]
    PlayerNotSeated(String),
    #[error("player '{0}' is already seated")]
    AlreadySeated(String),
    #[error("seat index {0} out of range")]
    SeatOutOfRange(usize),
    #[error("seat {0} is already occupied")]
    SeatOccupied(usize),
    #[error("at least 2 seated players are required to start a hand")]
    NotEnoughPlayers,
    #[error("action is not allowed in the {0:?} phase")]
    InvalidPhase(Phase),
    #[error("it is not {0}'s turn")]
    NotYourTurn(String),
    #[error("insufficient chips: needed {amount}, stack {stack}")]
    InsufficientChips { amount: u32, stack: u32 },
    #[error("bet of {amount} is below the minimum of {minimum}")]
    BetBelowMinimum { amount: u32, minimum: u32 },
    #[error("small blind must be less than big blind")]
    BlindsOutOfOrder,
    #[error("blinds must be greater than zero")]
    BlindsZero,
}
