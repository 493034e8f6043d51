//! Core domain types for the flashcards system.

use std::fmt;

/// A single flashcard: a term, its definition and how often it was missed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl Card {
    /// Create a fresh card with no recorded mistakes
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Builder-style override of the mistake counter
    pub fn with_mistakes(mut self, mistakes: u32) -> Self {
        self.mistakes = mistakes;
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":\"{}\"", self.term, self.definition)
    }
}

/// Cards sharing the highest mistake count
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hardest {
    pub terms: Vec<String>,
    pub mistakes: u32,
}

impl Hardest {
    /// Message shown for the `hardest card` action
    pub fn message(&self) -> String {
        let terms = self
            .terms
            .iter()
            .map(|t| format!("\"{}\"", t))
            .collect::<Vec<_>>()
            .join(", ");

        if self.terms.len() == 1 {
            format!(
                "The hardest card is {}. You have {} errors answering it.",
                terms, self.mistakes
            )
        } else {
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                terms, self.mistakes
            )
        }
    }
}
