//! Error types for drawing and checking assignments.

use thiserror::Error;

/// Why a draw could not produce an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer than two distinct non-empty names were supplied.
    #[error("insufficient participants: need at least 2 distinct names, got {found}")]
    InsufficientParticipants {
        /// Distinct non-empty names found.
        found: usize,
    },

    /// The same name was entered for two participants.
    #[error("duplicate participant: {name:?} appears more than once")]
    DuplicateParticipant {
        /// The repeated name.
        name: String,
    },

    /// Every attempt in the budget produced a self-assignment.
    #[error("exhausted retry budget: no valid assignment after {attempts} attempts")]
    Exhausted {
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// The wall-clock ceiling elapsed before a valid assignment was found.
    #[error("timed out after {limit_ms} ms ({attempts} attempts)")]
    TimedOut {
        /// Attempts made before the deadline.
        attempts: u32,
        /// The configured ceiling in milliseconds.
        limit_ms: u64,
    },
}

/// Why a stored assignment is not a valid derangement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A participant was assigned to themselves.
    #[error("{name:?} is assigned to themselves")]
    SelfAssignment {
        /// The offending participant.
        name: String,
    },

    /// A giver occurs in more than one pair.
    #[error("{name:?} gives more than once")]
    RepeatedGiver {
        /// The repeated giver.
        name: String,
    },

    /// A receiver occurs in more than one pair.
    #[error("{name:?} receives more than once")]
    RepeatedReceiver {
        /// The repeated receiver.
        name: String,
    },

    /// A receiver is not among the givers.
    #[error("{name:?} receives a gift but is not giving one")]
    UnknownReceiver {
        /// The stray receiver.
        name: String,
    },

    /// A pair names someone outside the expected participant list.
    #[error("{name:?} is not a participant")]
    UnknownParticipant {
        /// The unexpected name.
        name: String,
    },

    /// An expected participant has no pair.
    #[error("{name:?} has no assignment")]
    MissingParticipant {
        /// The participant without a pair.
        name: String,
    },

    /// Fewer than two pairs.
    #[error("an assignment needs at least 2 pairs, found {found}")]
    TooSmall {
        /// Pairs found.
        found: usize,
    },
}
