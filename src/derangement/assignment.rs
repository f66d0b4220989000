//! Giver → receiver assignments.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::IntegrityError;
use super::participants::{Participants, MIN_PARTICIPANTS};

/// One giver → receiver pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Participant buying the gift.
    pub giver: String,
    /// Participant receiving it.
    pub receiver: String,
}

/// A complete draw: every participant gives exactly once and receives
/// exactly once, and nobody draws themselves.
///
/// Pairs are kept in the givers' input order. Keying by position instead of
/// a name map means two pairs can never collapse into one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pair>", into = "Vec<Pair>")]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    /// Builds an assignment from participants and a derangement of their
    /// indices (`receivers[i]` is the index of the receiver for giver `i`).
    pub(crate) fn from_permutation(participants: &Participants, receivers: &[usize]) -> Self {
        let names = participants.names();
        let pairs = names
            .iter()
            .zip(receivers)
            .map(|(giver, &r)| Pair { giver: giver.clone(), receiver: names[r].clone() })
            .collect();
        Self { pairs }
    }

    /// Builds an assignment from explicit pairs, checking that they form a
    /// derangement over their givers.
    ///
    /// # Errors
    ///
    /// Returns the first [`IntegrityError`] found.
    pub fn from_pairs(pairs: Vec<Pair>) -> Result<Self, IntegrityError> {
        let assignment = Self { pairs };
        assignment.verify()?;
        Ok(assignment)
    }

    /// Re-checks the derangement invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`IntegrityError`] found.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        if self.pairs.len() < MIN_PARTICIPANTS {
            return Err(IntegrityError::TooSmall { found: self.pairs.len() });
        }

        let mut givers = HashSet::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            if pair.giver == pair.receiver {
                return Err(IntegrityError::SelfAssignment { name: pair.giver.clone() });
            }
            if !givers.insert(pair.giver.as_str()) {
                return Err(IntegrityError::RepeatedGiver { name: pair.giver.clone() });
            }
        }

        let mut receivers = HashSet::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            if !givers.contains(pair.receiver.as_str()) {
                return Err(IntegrityError::UnknownReceiver { name: pair.receiver.clone() });
            }
            if !receivers.insert(pair.receiver.as_str()) {
                return Err(IntegrityError::RepeatedReceiver { name: pair.receiver.clone() });
            }
        }
        Ok(())
    }

    /// Checks that this assignment covers exactly `participants`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityError::UnknownParticipant`] or
    /// [`IntegrityError::MissingParticipant`] on a mismatch.
    pub fn verify_covers(&self, participants: &Participants) -> Result<(), IntegrityError> {
        for pair in &self.pairs {
            if !participants.contains(&pair.giver) {
                return Err(IntegrityError::UnknownParticipant { name: pair.giver.clone() });
            }
        }
        for name in participants.names() {
            if self.receiver_for(name).is_none() {
                return Err(IntegrityError::MissingParticipant { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Returns who `giver` buys for, if `giver` is in this draw.
    #[must_use]
    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.pairs.iter().find(|p| p.giver == giver).map(|p| p.receiver.as_str())
    }

    /// Pairs in giver input order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Givers in input order.
    pub fn givers(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.giver.as_str())
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl TryFrom<Vec<Pair>> for Assignment {
    type Error = IntegrityError;

    fn try_from(pairs: Vec<Pair>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl From<Assignment> for Vec<Pair> {
    fn from(assignment: Assignment) -> Self {
        assignment.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(giver: &str, receiver: &str) -> Pair {
        Pair { giver: giver.into(), receiver: receiver.into() }
    }

    #[test]
    fn from_permutation_pairs_by_index() {
        let participants = Participants::parse(&["Alice", "Bob", "Carol"]).unwrap();
        let assignment = Assignment::from_permutation(&participants, &[2, 0, 1]);

        assert_eq!(
            assignment.pairs(),
            [pair("Alice", "Carol"), pair("Bob", "Alice"), pair("Carol", "Bob")]
        );
        assert!(assignment.verify().is_ok());
        assert_eq!(assignment.receiver_for("Bob"), Some("Alice"));
        assert_eq!(assignment.receiver_for("Dave"), None);
    }

    #[test]
    fn rejects_self_assignment() {
        let err = Assignment::from_pairs(vec![pair("A", "A"), pair("B", "B")]).unwrap_err();
        assert_eq!(err, IntegrityError::SelfAssignment { name: "A".into() });
    }

    #[test]
    fn rejects_repeated_receiver() {
        let err =
            Assignment::from_pairs(vec![pair("A", "C"), pair("B", "C"), pair("C", "A")])
                .unwrap_err();
        assert_eq!(err, IntegrityError::RepeatedReceiver { name: "C".into() });
    }

    #[test]
    fn rejects_repeated_giver() {
        let err = Assignment::from_pairs(vec![pair("A", "B"), pair("A", "C"), pair("B", "A")])
            .unwrap_err();
        assert_eq!(err, IntegrityError::RepeatedGiver { name: "A".into() });
    }

    #[test]
    fn rejects_receiver_outside_the_draw() {
        let err = Assignment::from_pairs(vec![pair("A", "B"), pair("B", "Z")]).unwrap_err();
        assert_eq!(err, IntegrityError::UnknownReceiver { name: "Z".into() });
    }

    #[test]
    fn rejects_single_pair() {
        let err = Assignment::from_pairs(vec![pair("A", "B")]).unwrap_err();
        assert_eq!(err, IntegrityError::TooSmall { found: 1 });
    }

    #[test]
    fn verify_covers_detects_mismatched_participants() {
        let assignment = Assignment::from_pairs(vec![pair("A", "B"), pair("B", "A")]).unwrap();

        let same = Participants::parse(&["B", "A"]).unwrap();
        assert!(assignment.verify_covers(&same).is_ok());

        let more = Participants::parse(&["A", "B", "C"]).unwrap();
        assert_eq!(
            assignment.verify_covers(&more).unwrap_err(),
            IntegrityError::MissingParticipant { name: "C".into() }
        );

        let other = Participants::parse(&["A", "C"]).unwrap();
        assert_eq!(
            assignment.verify_covers(&other).unwrap_err(),
            IntegrityError::UnknownParticipant { name: "B".into() }
        );
    }

    #[test]
    fn deserializing_checks_invariants() {
        let yaml = "- giver: A\n  receiver: A\n- giver: B\n  receiver: B\n";
        let result: Result<Assignment, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());

        let yaml = "- giver: A\n  receiver: B\n- giver: B\n  receiver: A\n";
        let assignment: Assignment = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(assignment.len(), 2);
    }
}
