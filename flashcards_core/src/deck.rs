//! In-memory card store.
//!
//! Cards are kept in insertion order so exports and collision lookups are
//! deterministic. Decks are small; lookups are linear scans.

use crate::{Card, Error, Hardest, Result};

/// Insertion-ordered collection of cards keyed by term
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    pub fn get_index(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    /// First card (in insertion order) whose definition is exactly `definition`
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition == definition)
    }

    /// Add a new card with zero mistakes.
    ///
    /// Rejects a term that already exists or a definition used by another card;
    /// the deck is left untouched on error.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<()> {
        if self.contains_term(term) {
            return Err(Error::DuplicateTerm(term.to_string()));
        }
        if self.find_by_definition(definition).is_some() {
            return Err(Error::DuplicateDefinition(definition.to_string()));
        }

        self.cards.push(Card::new(term, definition));
        tracing::debug!("Added card {:?}", term);
        Ok(())
    }

    /// Insert or overwrite a card by term, keeping an existing card's position
    pub fn upsert(&mut self, card: Card) {
        match self.cards.iter_mut().find(|c| c.term == card.term) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
    }

    pub fn remove(&mut self, term: &str) -> Result<Card> {
        let index = self
            .cards
            .iter()
            .position(|c| c.term == term)
            .ok_or_else(|| Error::NoSuchCard(term.to_string()))?;

        tracing::debug!("Removed card {:?}", term);
        Ok(self.cards.remove(index))
    }

    /// Increment the mistake counter of `term`, returning the new count
    pub fn record_mistake(&mut self, term: &str) -> Result<u32> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.term == term)
            .ok_or_else(|| Error::NoSuchCard(term.to_string()))?;

        card.mistakes = card.mistakes.saturating_add(1);
        Ok(card.mistakes)
    }

    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.mistakes = 0;
        }
    }

    /// Cards with the highest mistake count, or `None` when no card has errors
    pub fn hardest(&self) -> Option<Hardest> {
        let max = self.cards.iter().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return None;
        }

        let terms = self
            .cards
            .iter()
            .filter(|c| c.mistakes == max)
            .map(|c| c.term.clone())
            .collect();

        Some(Hardest {
            terms,
            mistakes: max,
        })
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for card in iter {
            deck.upsert(card);
        }
        deck
    }
}
