//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::derangement::Strategy;

/// Top-level CLI parser for `giftdraw`.
#[derive(Debug, Parser)]
#[command(name = "giftdraw", version, about = "Draw names for a gift exchange")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Output format for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One line per giver, receivers hidden unless revealed.
    #[default]
    Text,
    /// A JSON draw record.
    Json,
    /// A YAML draw record.
    Yaml,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw a giver → receiver assignment where nobody draws themselves.
    Draw(DrawArgs),
    /// Show who one giver buys for, from an exported draw.
    Reveal {
        /// Draw file written by `draw --output`.
        file: PathBuf,
        /// The giver whose receiver to show.
        giver: String,
    },
    /// Check that an exported draw is a valid assignment.
    Check {
        /// Draw file written by `draw --output`.
        file: PathBuf,
        /// Expected participants; when given, the draw must cover exactly these.
        names: Vec<String>,
    },
}

/// Arguments of `giftdraw draw`.
#[derive(Debug, clap::Args)]
pub struct DrawArgs {
    /// Participant names (at least two distinct).
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Candidate generation strategy [env: GIFTDRAW_STRATEGY].
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Rejection-sampling attempt budget [env: GIFTDRAW_MAX_ATTEMPTS].
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Give up after this many milliseconds.
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Seed for a reproducible draw [env: GIFTDRAW_SEED].
    #[arg(long, conflicts_with = "replay")]
    pub seed: Option<u64>,

    /// Show the receiver for this giver (repeatable).
    #[arg(long = "reveal", value_name = "GIVER")]
    pub reveal: Vec<String>,

    /// Show every receiver.
    #[arg(long)]
    pub reveal_all: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Export the draw to a file (`.json` for JSON, YAML otherwise).
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Record every random draw into cassettes in this directory [env: GIFTDRAW_RECORD].
    #[arg(long, conflicts_with = "replay")]
    pub record: Option<PathBuf>,

    /// Reproduce a recorded draw from the cassettes in this directory.
    #[arg(long)]
    pub replay: Option<PathBuf>,
}

fn parse_strategy(raw: &str) -> Result<Strategy, String> {
    raw.parse()
}
