//! Core library entry for the `giftdraw` CLI.
//!
//! The heart of the crate is [`derangement`]: given participant names it
//! draws a uniformly random giver → receiver assignment in which nobody
//! draws themselves. Everything else feeds names in and shows results.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod derangement;
pub mod exchange;
pub mod export;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
