//! Handlers for the interactive actions.
//!
//! Each handler takes the deck and console explicitly. Recoverable user
//! errors are reported on the console; I/O failures are returned.

use crate::{codec, Console, Deck, Error, Result};
use std::io::{BufRead, Write};
use std::path::Path;

pub fn add<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> Result<()> {
    let term = console.prompt("The card:")?;
    if deck.contains_term(&term) {
        return console.say(Error::DuplicateTerm(term).to_string());
    }

    let definition = console.prompt("The definition of the card:")?;
    match deck.add(&term, &definition) {
        Ok(()) => console.say(format!(
            "The pair (\"{}\":\"{}\") has been added.",
            term, definition
        )),
        Err(e @ (Error::DuplicateTerm(_) | Error::DuplicateDefinition(_))) => {
            console.say(e.to_string())
        }
        Err(e) => Err(e),
    }
}

pub fn remove<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> Result<()> {
    let term = console.prompt("Which card?")?;
    match deck.remove(&term) {
        Ok(_) => console.say("The card has been removed."),
        Err(e @ Error::NoSuchCard(_)) => console.say(e.to_string()),
        Err(e) => Err(e),
    }
}

pub fn import<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> Result<()> {
    let file_name = console.prompt("File name:")?;
    import_from(deck, console, Path::new(&file_name))
}

/// Import `path` and report the outcome; shared with the startup `-import`
pub fn import_from<R: BufRead, W: Write>(
    deck: &mut Deck,
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<()> {
    match codec::import_file(deck, path)? {
        Some(count) => console.say(format!("{} cards have been loaded.", count)),
        None => console.say("File not found."),
    }
}

pub fn export<R: BufRead, W: Write>(deck: &Deck, console: &mut Console<R, W>) -> Result<()> {
    let file_name = console.prompt("File name:")?;
    export_to(deck, console, Path::new(&file_name))
}

/// Export to `path` and report the count; shared with the exit auto-export
pub fn export_to<R: BufRead, W: Write>(
    deck: &Deck,
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<()> {
    let count = codec::export_file(deck, path)?;
    console.say(format!("{} cards have been saved.", count))
}

pub fn log<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let file_name = console.prompt("File name:")?;
    console.transcript().save(Path::new(&file_name))?;
    console.say("The log has been saved.")
}

pub fn hardest_card<R: BufRead, W: Write>(deck: &Deck, console: &mut Console<R, W>) -> Result<()> {
    match deck.hardest() {
        Some(hardest) => console.say(hardest.message()),
        None => console.say("There are no cards with errors."),
    }
}

pub fn reset_stats<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> Result<()> {
    deck.reset_stats();
    console.say("Card statistics have been reset.")
}
