//! Exchange state: the name fields, the current draw, and which pairings are
//! revealed.
//!
//! The state is a plain value owned by the caller. Every update takes the
//! state and returns the next one; nothing is mutated behind the caller's
//! back.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::derangement::{self, Assignment, DrawError, DrawOptions, Outcome, Participants};
use crate::ports::{Clock, Entropy};

/// Number of name fields a fresh exchange starts with, and the minimum kept.
pub const MIN_NAME_FIELDS: usize = 2;

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// Everything the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeState {
    /// Raw name fields, possibly blank.
    pub names: Vec<String>,
    /// The current draw, if any.
    pub assignment: Option<Assignment>,
    /// Givers whose receiver is currently shown.
    pub revealed: BTreeSet<String>,
    /// Display theme.
    pub theme: Theme,
}

impl Default for ExchangeState {
    fn default() -> Self {
        Self {
            names: vec![String::new(); MIN_NAME_FIELDS],
            assignment: None,
            revealed: BTreeSet::new(),
            theme: Theme::default(),
        }
    }
}

impl ExchangeState {
    /// Starts an exchange with the given names already filled in.
    #[must_use]
    pub fn with_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() < MIN_NAME_FIELDS {
            names.resize(MIN_NAME_FIELDS, String::new());
        }
        Self { names, ..Self::default() }
    }

    /// Appends a blank name field.
    #[must_use]
    pub fn add_name_field(mut self) -> Self {
        self.names.push(String::new());
        self
    }

    /// Removes the field at `index`; ignored when only the minimum remain
    /// or `index` is out of range.
    #[must_use]
    pub fn remove_name_field(mut self, index: usize) -> Self {
        if self.names.len() > MIN_NAME_FIELDS && index < self.names.len() {
            self.names.remove(index);
        }
        self
    }

    /// Replaces the text of field `index`; ignored when out of range.
    #[must_use]
    pub fn update_name(mut self, index: usize, value: impl Into<String>) -> Self {
        if let Some(slot) = self.names.get_mut(index) {
            *slot = value.into();
        }
        self
    }

    /// Draws a fresh assignment from the current fields.
    ///
    /// On success the previous draw is replaced wholesale and all reveals
    /// are hidden again.
    ///
    /// # Errors
    ///
    /// Returns the [`DrawError`] and leaves the state untouched (the caller
    /// still owns its previous value) when validation or generation fails.
    pub fn generate(
        &self,
        entropy: &dyn Entropy,
        clock: Option<&dyn Clock>,
        options: &DrawOptions,
    ) -> Result<(Self, u32), DrawError> {
        let participants = Participants::parse(&self.names)?;
        let Outcome { assignment, attempts } =
            derangement::generate_with(&participants, entropy, clock, options)?;
        let next = Self {
            names: self.names.clone(),
            assignment: Some(assignment),
            revealed: BTreeSet::new(),
            theme: self.theme,
        };
        Ok((next, attempts))
    }

    /// Shows or hides the receiver for `giver`; ignored for names that are
    /// not givers in the current draw.
    #[must_use]
    pub fn toggle_reveal(mut self, giver: &str) -> Self {
        let known = self
            .assignment
            .as_ref()
            .is_some_and(|assignment| assignment.receiver_for(giver).is_some());
        if known && !self.revealed.remove(giver) {
            self.revealed.insert(giver.to_string());
        }
        self
    }

    /// Reveals every pairing in the current draw.
    #[must_use]
    pub fn reveal_all(mut self) -> Self {
        if let Some(assignment) = &self.assignment {
            self.revealed = assignment.givers().map(str::to_string).collect();
        }
        self
    }

    /// Returns the receiver for `giver` if it is revealed.
    #[must_use]
    pub fn revealed_receiver(&self, giver: &str) -> Option<&str> {
        if !self.revealed.contains(giver) {
            return None;
        }
        self.assignment.as_ref().and_then(|a| a.receiver_for(giver))
    }

    /// Back to two blank fields, no draw, nothing revealed. The theme is kept.
    #[must_use]
    pub fn reset(self) -> Self {
        Self { theme: self.theme, ..Self::default() }
    }

    /// Switches between light and dark.
    #[must_use]
    pub fn toggle_theme(mut self) -> Self {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self
    }
}
