//! Hand classification command.

use std::io::Write;

use nineseat_engine::cards::Card;
use nineseat_engine::hand::evaluate_hand;

use crate::error::CliError;
use crate::formatters::{format_board, parse_card};

/// Parses five card arguments, classifies them, and prints the category
/// and tiebreak value.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    if cards.len() != 5 {
        return Err(CliError::InvalidInput(format!(
            "expected 5 cards, got {}",
            cards.len()
        )));
    }
    let parsed: Vec<Card> = cards
        .iter()
        .map(|s| parse_card(s))
        .collect::<Result<_, _>>()?;

    let strength = evaluate_hand(&parsed)?;
    writeln!(out, "Hand: {}", format_board(&parsed))?;
    writeln!(out, "Category: {:?}", strength.category)?;
    writeln!(out, "Tiebreak: {}", strength.tiebreak)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cards: &[&str]) -> Vec<String> {
        cards.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classifies_a_royal_flush() {
        let mut out = Vec::new();
        handle_eval_command(&args(&["Ts", "Js", "Qs", "Ks", "As"]), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: RoyalFlush"));
        assert!(output.contains("Tiebreak: 14"));
    }

    #[test]
    fn classifies_a_pair_by_its_value() {
        let mut out = Vec::new();
        handle_eval_command(&args(&["2s", "2h", "5c", "9d", "Js"]), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: OnePair"));
        assert!(output.contains("Tiebreak: 2"));
    }

    #[test]
    fn rejects_wrong_card_counts() {
        let mut out = Vec::new();
        let result = handle_eval_command(&args(&["Ts", "Js"]), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn rejects_unparseable_cards() {
        let mut out = Vec::new();
        let result = handle_eval_command(&args(&["Ts", "Js", "Qs", "Ks", "Zx"]), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
