//! Error types for the flashcards_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for flashcards_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A card with this term is already in the deck
    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),

    /// Another card already uses this definition
    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    /// No card with this term
    #[error("Can't remove \"{0}\": there is no such card.")]
    NoSuchCard(String),

    /// Quiz requested on a deck without cards
    #[error("There are no cards to ask about.")]
    EmptyDeck,

    /// Input line that is not one of the known actions
    #[error("Invalid action, try again.")]
    UnknownAction(String),

    /// Input stream ended before `exit`
    #[error("Input closed before exit")]
    InputClosed,
}
