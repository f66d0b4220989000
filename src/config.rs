//! Draw settings resolved from command-line flags, the environment and
//! built-in defaults, in that order of precedence.
//!
//! `main` loads a `.env` file first, so every variable below may also be
//! set there.

use std::path::PathBuf;
use std::time::Duration;

use crate::derangement::{DrawOptions, Strategy, DEFAULT_MAX_ATTEMPTS};

/// Default strategy (`rejection` or `direct`).
pub const ENV_STRATEGY: &str = "GIFTDRAW_STRATEGY";
/// Default rejection-sampling budget.
pub const ENV_MAX_ATTEMPTS: &str = "GIFTDRAW_MAX_ATTEMPTS";
/// Default seed; unset means OS randomness.
pub const ENV_SEED: &str = "GIFTDRAW_SEED";
/// Directory to record cassettes into.
pub const ENV_RECORD: &str = "GIFTDRAW_RECORD";

/// Values supplied on the command line; `None` falls through to the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--strategy`
    pub strategy: Option<Strategy>,
    /// `--max-attempts`
    pub max_attempts: Option<u32>,
    /// `--time-limit-ms`
    pub time_limit_ms: Option<u64>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--record`
    pub record: Option<PathBuf>,
}

/// Fully resolved settings for one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Generation options handed to the core.
    pub options: DrawOptions,
    /// Seed for reproducible draws.
    pub seed: Option<u64>,
    /// Where to record cassettes, if anywhere.
    pub record: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when an environment value does
    /// not parse.
    pub fn resolve(overrides: &Overrides) -> Result<Self, String> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves settings against an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when a value does not parse.
    pub fn resolve_with(
        overrides: &Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let strategy = match overrides.strategy {
            Some(strategy) => strategy,
            None => parse_var(&lookup, ENV_STRATEGY)?.unwrap_or_default(),
        };
        let max_attempts = match overrides.max_attempts {
            Some(n) => n,
            None => parse_var(&lookup, ENV_MAX_ATTEMPTS)?.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        };
        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_var(&lookup, ENV_SEED)?,
        };
        let record = overrides.record.clone().or_else(|| {
            lookup(ENV_RECORD).filter(|v| !v.trim().is_empty()).map(PathBuf::from)
        });

        Ok(Self {
            options: DrawOptions {
                strategy,
                max_attempts,
                time_limit: overrides.time_limit_ms.map(Duration::from_millis),
            },
            seed,
            record,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(|e| format!("Invalid {key}={raw:?}: {e}"))
        }
        _ => Ok(None),
    }
}
