//! Quiz engine for the `ask` action.
//!
//! Cards are drawn with replacement through a [`CardPicker`], so tests can
//! script the order in which cards come up.

use crate::{Console, Deck, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

/// Source of card indices for a quiz
pub trait CardPicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random picker backed by [`StdRng`]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CardPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Run one `ask` action: read the repetition count, then quiz that many cards.
///
/// A non-numeric count ends the action silently. Returns the number of
/// questions asked; fails with [`Error::EmptyDeck`] if questions were requested
/// but there are no cards.
pub fn ask<R, W, P>(deck: &mut Deck, console: &mut Console<R, W>, picker: &mut P) -> Result<usize>
where
    R: BufRead,
    W: Write,
    P: CardPicker + ?Sized,
{
    let reply = console.prompt("How many times to ask?")?;
    let Ok(times) = reply.parse::<i64>() else {
        tracing::debug!("Ignoring non-numeric repetition count {:?}", reply);
        return Ok(0);
    };
    if times <= 0 {
        return Ok(0);
    }
    if deck.is_empty() {
        return Err(Error::EmptyDeck);
    }

    let mut asked = 0;
    for _ in 0..times {
        let index = picker.pick(deck.len()) % deck.len();
        let Some(card) = deck.get_index(index).cloned() else {
            break;
        };
        tracing::debug!("Asking card {} ({:?})", index, card.term);

        let answer = console.prompt(format!("Print the definition of \"{}\":", card.term))?;
        asked += 1;

        if answer == card.definition {
            console.say("Correct!")?;
            continue;
        }

        let other_term = deck.find_by_definition(&answer).map(|c| c.term.clone());
        deck.record_mistake(&card.term)?;

        match other_term {
            Some(other) => console.say(format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                card.definition, other
            ))?,
            None => console.say(format!(
                "Wrong. The right answer is \"{}\".",
                card.definition
            ))?,
        }
    }

    Ok(asked)
}

/// Picker that replays a fixed list of indices, cycling when exhausted
#[cfg(test)]
pub(crate) struct ScriptedPicker {
    indices: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedPicker {
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }
}

#[cfg(test)]
impl CardPicker for ScriptedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index
    }
}
