#![forbid(unsafe_code)]

//! Core library for the flashcards memorization tool.
//!
//! This crate provides:
//! - The card store (insertion-ordered deck)
//! - Plain-text import/export
//! - The quiz engine with an injectable card picker
//! - Transcript logging of the whole dialogue
//! - The interactive session loop

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod deck;
pub mod codec;
pub mod transcript;
pub mod console;
pub mod quiz;
pub mod commands;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use deck::Deck;
pub use transcript::Transcript;
pub use console::Console;
pub use quiz::{CardPicker, RandomPicker};
pub use session::{Action, Flow, Session, MAIN_PROMPT};
