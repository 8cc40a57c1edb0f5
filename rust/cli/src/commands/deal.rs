//! Deal command handler: starts one seeded hand and shows the table.

use std::io::Write;

use nineseat_engine::game::Game;
use nineseat_engine::rules::Blinds;

use crate::error::CliError;
use crate::formatters::format_board;

/// Seats `players` console players, starts a hand, and prints every seat's
/// hole cards plus the table state. A fixed seed reproduces the deal.
pub fn handle_deal_command(
    players: u8,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = Game::new(Blinds::default(), Some(seed));
    for i in 0..players as usize {
        let name = format!("p{}", i + 1);
        game.add_player(&name)?;
        game.add_player_to_seat(&name, 100, i)?;
    }
    game.start_hand()?;

    writeln!(out, "Seed: {}", seed)?;
    for (index, seat) in game.seats().iter().enumerate() {
        if let Some(name) = seat.username() {
            writeln!(
                out,
                "Seat {} ({}): {}",
                index,
                name,
                format_board(seat.hole_cards())
            )?;
        }
    }
    if let Some(dealer) = game.dealer_seat() {
        writeln!(out, "Dealer: seat {}", dealer)?;
    }
    writeln!(out, "Pot: {}", game.pot())?;
    Ok(())
}
