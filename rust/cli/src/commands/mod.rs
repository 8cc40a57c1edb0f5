//! Command handler modules for the nineseat CLI.
//!
//! One module per subcommand, each exposing a
//! `handle_X_command(..., out: &mut dyn Write) -> Result<(), CliError>`
//! function with output streams injected for testability.

pub mod deal;
pub mod eval;
pub mod play;

pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
