//! # nineseat CLI
//!
//! Console harness for the nineseat table engine. Exposes three
//! subcommands:
//!
//! - `play`: run an interactive table, reading seat actions from stdin
//! - `deal`: deal one seeded hand and print every seat's hole cards
//! - `eval`: classify five cards given as rank+suit strings
//!
//! The primary entry point is [`run`], which parses arguments and
//! dispatches to the matching handler:
//!
//! ```no_run
//! use std::io;
//! let args = vec!["nineseat", "deal", "--seed", "42"];
//! let code = nineseat_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
mod error;
pub mod formatters;

use cli::{Commands, NineseatCli};
use commands::{handle_deal_command, handle_eval_command, handle_play_command};
pub use error::CliError;

/// Parses command-line arguments and runs the selected subcommand.
/// Returns the process exit code: 0 on success, 2 on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match NineseatCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                // help and version print to stdout and exit 0
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return 2;
                    }
                    2
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Play {
            players,
            chips,
            hands,
            seed,
            blinds,
            log,
        } => {
            let blinds = blinds.map(|b| (b[0], b[1]));
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                players,
                chips,
                hands,
                seed,
                blinds,
                log.as_deref(),
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return 2;
            }
            2
        }
    }
}
