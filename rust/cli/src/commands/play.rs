//! Interactive table loop: seats console players, reads actions from
//! stdin, and optionally appends JSONL hand records.

use std::io::{BufRead, Write};

use nineseat_engine::game::{Game, Phase};
use nineseat_engine::logger::{ActionRecord, HandLogger, HandRecord};
use nineseat_engine::player::PlayerAction;
use nineseat_engine::rules::Blinds;

use crate::error::CliError;
use crate::formatters::{format_action, format_board};

enum Input {
    Action(PlayerAction),
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("fold") => Input::Action(PlayerAction::Fold),
        Some("check") => Input::Action(PlayerAction::Check),
        Some("bet") => match parts.next().and_then(|v| v.parse::<u32>().ok()) {
            Some(amount) => Input::Action(PlayerAction::Bet(amount)),
            None => Input::Unknown(line.to_string()),
        },
        Some("q") | Some("quit") => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

fn in_betting_phase(phase: Phase) -> bool {
    matches!(
        phase,
        Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River
    )
}

/// Runs up to `hands` hands on a table of `players` console players.
///
/// Prompts the acting seat for `fold`, `check`, `bet N`, or `quit`;
/// rejected actions are reported on `err` and the seat is prompted again.
/// Completed hands are summarized on `out` and, when `log` is given,
/// appended to it as JSONL records.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    players: u8,
    chips: u32,
    hands: u32,
    seed: Option<u64>,
    blinds: Option<(u32, u32)>,
    log: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let blinds = match blinds {
        Some((small, big)) => Blinds::new(small, big)?,
        None => Blinds::default(),
    };
    let seed = seed.unwrap_or_else(rand::random);

    let mut game = Game::new(blinds, Some(seed));
    for i in 0..players as usize {
        let name = format!("p{}", i + 1);
        game.add_player(&name)?;
        game.add_player_to_seat(&name, chips, i)?;
    }
    let mut logger = match log {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: players={} chips={} hands={} seed={}",
        players, chips, hands, seed
    )?;
    writeln!(out, "Blinds: SB={} BB={}", blinds.small, blinds.big)?;

    let mut quit_requested = false;
    for hand_no in 1..=hands {
        if quit_requested {
            break;
        }
        let before: Vec<u32> = game.seats().iter().map(|s| s.chips()).collect();
        writeln!(out, "Hand {}", hand_no)?;
        game.start_hand()?;
        if let Some(dealer) = game.dealer_seat() {
            writeln!(out, "Dealer: seat {}", dealer)?;
        }

        let mut actions: Vec<ActionRecord> = Vec::new();
        let mut community = game.community_cards().to_vec();
        let mut final_pot = game.pot();

        while in_betting_phase(game.phase()) {
            let Some(seat) = game.current_action_seat() else {
                break;
            };
            let username = match game.seats()[seat].username() {
                Some(name) => name.to_string(),
                None => break,
            };
            writeln!(
                out,
                "{:?} | pot {} | to beat {} | board {}",
                game.phase(),
                game.pot(),
                game.current_bet(),
                format_board(game.community_cards())
            )?;
            writeln!(
                out,
                "{} holds {} ({} chips)",
                username,
                format_board(game.seats()[seat].hole_cards()),
                game.seats()[seat].chips()
            )?;
            write!(out, "{}> ", username)?;
            out.flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                quit_requested = true;
                break;
            }
            let phase = game.phase();
            match parse_input(&line) {
                Input::Quit => {
                    quit_requested = true;
                    break;
                }
                Input::Unknown(raw) => {
                    writeln!(err, "Unrecognized action: {}", raw.trim())?;
                }
                Input::Action(action) => {
                    let applied = match &action {
                        PlayerAction::Fold => game.fold(&username),
                        PlayerAction::Check => game.check(&username),
                        PlayerAction::Bet(amount) => game.bet(&username, *amount),
                    };
                    match applied {
                        Ok(()) => {
                            writeln!(out, "{} {}", username, format_action(&action))?;
                            actions.push(ActionRecord {
                                username,
                                phase,
                                action,
                            });
                        }
                        Err(e) => writeln!(err, "Rejected: {}", e)?,
                    }
                }
            }
            final_pot = final_pot.max(game.pot());
            if game.community_cards().len() > community.len() {
                community = game.community_cards().to_vec();
            }
        }

        if game.phase() == Phase::Waiting {
            let winners: Vec<String> = game
                .seats()
                .iter()
                .enumerate()
                .filter(|(i, s)| s.chips() > before[*i])
                .filter_map(|(_, s)| s.username().map(str::to_string))
                .collect();
            writeln!(out, "Hand over. Winners: {}", winners.join(", "))?;
            if let Some(logger) = logger.as_mut() {
                let record = HandRecord {
                    hand_id: logger.next_id(),
                    seed: Some(seed),
                    actions,
                    community,
                    pot: final_pot,
                    winners,
                    ts: None,
                };
                logger.write(&record)?;
            }
        }
    }
    writeln!(out, "Goodbye.")?;
    Ok(())
}
