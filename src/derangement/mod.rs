//! Derangement generation: the draw itself.
//!
//! [`generate`] turns a validated [`Participants`] list into an
//! [`Assignment`] where nobody draws themselves. Randomness comes from an
//! injected [`Entropy`]; the optional time limit is measured through an
//! injected [`Clock`]. The input is only borrowed and nothing is retained
//! between calls.

pub mod assignment;
pub mod error;
pub mod participants;
pub mod shuffle;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use assignment::{Assignment, Pair};
pub use error::{DrawError, IntegrityError};
pub use participants::{Participants, MIN_PARTICIPANTS};

use crate::ports::{Clock, Entropy};

/// Attempt budget for rejection sampling.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// How candidates are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Shuffle the receivers and retry while anyone drew themselves.
    #[default]
    Rejection,
    /// Build a derangement directly, one attempt, no retries.
    Direct,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejection => f.write_str("rejection"),
            Self::Direct => f.write_str("direct"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rejection" => Ok(Self::Rejection),
            "direct" => Ok(Self::Direct),
            other => Err(format!("unknown strategy {other:?} (expected rejection or direct)")),
        }
    }
}

/// Tuning for a single draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    /// Candidate generation strategy.
    pub strategy: Strategy,
    /// Maximum rejection-sampling attempts.
    pub max_attempts: u32,
    /// Optional wall-clock ceiling, checked between attempts.
    pub time_limit: Option<Duration>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { strategy: Strategy::Rejection, max_attempts: DEFAULT_MAX_ATTEMPTS, time_limit: None }
    }
}

/// A successful draw and what it took to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The assignment.
    pub assignment: Assignment,
    /// Candidates generated, including the accepted one.
    pub attempts: u32,
}

/// Draws an assignment with the default options.
///
/// Raw names are validated first with [`Participants::parse`], which is
/// where [`DrawError::InsufficientParticipants`] and
/// [`DrawError::DuplicateParticipant`] come from.
///
/// # Errors
///
/// Returns [`DrawError::Exhausted`] if every attempt in the budget was
/// rejected.
pub fn generate(
    participants: &Participants,
    entropy: &dyn Entropy,
) -> Result<Assignment, DrawError> {
    generate_with(participants, entropy, None, &DrawOptions::default())
        .map(|outcome| outcome.assignment)
}

/// Draws an assignment with explicit options.
///
/// `clock` is consulted only when `options.time_limit` is set.
///
/// # Errors
///
/// Returns [`DrawError::Exhausted`] when the attempt budget runs out and
/// [`DrawError::TimedOut`] when the time limit elapses first.
pub fn generate_with(
    participants: &Participants,
    entropy: &dyn Entropy,
    clock: Option<&dyn Clock>,
    options: &DrawOptions,
) -> Result<Outcome, DrawError> {
    match options.strategy {
        Strategy::Direct => {
            let receivers = shuffle::random_derangement(participants.len(), entropy);
            debug!("direct derangement of {} participants", participants.len());
            Ok(Outcome {
                assignment: Assignment::from_permutation(participants, &receivers),
                attempts: 1,
            })
        }
        Strategy::Rejection => rejection_sample(participants, entropy, clock, options),
    }
}

fn rejection_sample(
    participants: &Participants,
    entropy: &dyn Entropy,
    clock: Option<&dyn Clock>,
    options: &DrawOptions,
) -> Result<Outcome, DrawError> {
    let deadline = match (options.time_limit, clock) {
        (Some(limit), Some(clock)) => chrono::Duration::from_std(limit)
            .ok()
            .and_then(|limit| clock.now().checked_add_signed(limit))
            .map(|deadline| (clock, deadline)),
        _ => None,
    };

    let mut receivers: Vec<usize> = (0..participants.len()).collect();
    for attempt in 1..=options.max_attempts {
        if let Some((clock, deadline)) = deadline {
            if clock.now() >= deadline {
                let limit_ms = options.time_limit.map_or(0, |l| l.as_millis());
                warn!("draw timed out after {} attempts", attempt - 1);
                return Err(DrawError::TimedOut {
                    attempts: attempt - 1,
                    limit_ms: u64::try_from(limit_ms).unwrap_or(u64::MAX),
                });
            }
        }

        // Reshuffle from the current order; Fisher–Yates is uniform from any start.
        shuffle::fisher_yates(&mut receivers, entropy);
        if shuffle::is_derangement(&receivers) {
            debug!("accepted candidate on attempt {attempt} of {}", options.max_attempts);
            return Ok(Outcome {
                assignment: Assignment::from_permutation(participants, &receivers),
                attempts: attempt,
            });
        }
    }

    warn!("no valid assignment after {} attempts", options.max_attempts);
    Err(DrawError::Exhausted { attempts: options.max_attempts })
}
