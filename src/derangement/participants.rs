//! Validated participant lists.

use std::collections::HashSet;

use super::error::DrawError;

/// Minimum number of participants a draw can work with.
pub const MIN_PARTICIPANTS: usize = 2;

/// An ordered list of trimmed, non-empty, unique participant names.
///
/// Construction is the only validation point: once a `Participants` value
/// exists the generator can assume at least two distinct names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants {
    names: Vec<String>,
}

impl Participants {
    /// Builds a participant list from raw form input.
    ///
    /// Entries are trimmed and blank entries are skipped. Order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientParticipants`] when fewer than two
    /// distinct names remain, and [`DrawError::DuplicateParticipant`] when
    /// the same name appears twice.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, DrawError> {
        let names: Vec<String> = raw
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let mut seen = HashSet::with_capacity(names.len());
        let mut duplicate = None;
        for name in &names {
            if !seen.insert(name.as_str()) && duplicate.is_none() {
                duplicate = Some(name.clone());
            }
        }

        if seen.len() < MIN_PARTICIPANTS {
            return Err(DrawError::InsufficientParticipants { found: seen.len() });
        }
        if let Some(name) = duplicate {
            return Err(DrawError::DuplicateParticipant { name });
        }

        Ok(Self { names })
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no participants; never the case once parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in input order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if `name` is one of the participants.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
