//! Command dispatch and handlers.

pub mod check;
pub mod draw;
pub mod reveal;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Draw(args) => draw::run(args),
        Command::Reveal { file, giver } => reveal::run(file, giver),
        Command::Check { file, names } => check::run(file, names),
    }
}
