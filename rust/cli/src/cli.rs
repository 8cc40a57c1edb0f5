//! Command-line definition for the `nineseat` binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nineseat",
    about = "Console harness for the nineseat Texas Hold'em table engine"
)]
pub struct NineseatCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive table, reading actions from stdin
    Play {
        /// Number of seated players
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        /// Starting stack per seat
        #[arg(long, default_value_t = 100)]
        chips: u32,
        /// Number of hands to play
        #[arg(long, default_value_t = 1)]
        hands: u32,
        /// RNG seed for reproducible decks (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Blind structure as SMALL BIG
        #[arg(long, num_args = 2, value_names = ["SMALL", "BIG"])]
        blinds: Option<Vec<u32>>,
        /// Append JSONL hand records to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one hand and show every seat's hole cards
    Deal {
        /// Number of seated players
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        /// RNG seed for deterministic dealing (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify five cards, e.g. `nineseat eval As Ks Qs Js Ts`
    Eval {
        /// Five cards as rank+suit (T J Q K A or 2-10, suits s h c d)
        #[arg(num_args = 5)]
        cards: Vec<String>,
    },
}
