//! Card is a pair <term, definition> with a counter of wrong answers.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    term: String,
    definition: String,
    #[serde(default)]
    mistakes: u32,
}

impl Card {
    /// Creates a card that has not been answered wrongly yet.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Creates a card with a known mistake count, as read from a card file.
    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn add_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    pub fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }

    pub fn has_term(&self, term: &str) -> bool {
        same_text(&self.term, term)
    }

    pub fn has_definition(&self, definition: &str) -> bool {
        same_text(&self.definition, definition)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "term: {}, definition: {}", self.term, self.definition)
    }
}

/// Case-insensitive comparison used for terms, definitions and answers.
pub fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
