//! Card, board, and action formatting plus card parsing for the terminal.
//!
//! Uses Unicode suit symbols where the terminal is likely to render them
//! and single-letter ASCII suits otherwise; parsing always accepts the
//! ASCII form ("As", "Td", "10d", "9c").

use nineseat_engine::cards::{Card, Rank, Suit};
use nineseat_engine::player::PlayerAction;

use crate::error::CliError;

/// Check if the terminal supports Unicode card symbols. On Windows this
/// looks for a modern terminal environment; elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// String like "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Bracketed board notation like "[A♠ K♥ Q♦]", or "[]" when empty.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
    }
}

/// Parses a card written as rank then suit letter: "As", "Td", "10d", "9c".
/// Ranks and suit letters are case-insensitive.
pub fn parse_card(input: &str) -> Result<Card, CliError> {
    let s = input.trim();
    if !s.is_ascii() || s.len() < 2 {
        return Err(CliError::InvalidInput(format!("unrecognized card '{input}'")));
    }
    let (rank_str, suit_str) = s.split_at(s.len() - 1);

    let rank = match rank_str.to_ascii_uppercase().as_str() {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" | "T" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        other => {
            return Err(CliError::InvalidInput(format!("unrecognized rank '{other}'")));
        }
    };
    let suit = match suit_str.to_ascii_lowercase().as_str() {
        "s" => Suit::Spades,
        "h" => Suit::Hearts,
        "c" => Suit::Clubs,
        "d" => Suit::Diamonds,
        other => {
            return Err(CliError::InvalidInput(format!("unrecognized suit '{other}'")));
        }
    };
    Ok(Card { suit, rank })
}
