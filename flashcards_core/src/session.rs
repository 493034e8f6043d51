//! Interactive session: the main prompt loop and action dispatch.

use crate::quiz::{self, CardPicker};
use crate::{commands, Console, Deck, Error, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Prompt shown before every action
pub const MAIN_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Actions accepted at the main prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            "import" => Ok(Action::Import),
            "export" => Ok(Action::Export),
            "ask" => Ok(Action::Ask),
            "exit" => Ok(Action::Exit),
            "log" => Ok(Action::Log),
            "hardest card" => Ok(Action::HardestCard),
            "reset stats" => Ok(Action::ResetStats),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// Whether the loop keeps going after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Deck, console and quiz picker for one run of the program
pub struct Session<R, W, P> {
    deck: Deck,
    console: Console<R, W>,
    picker: P,
    export_on_exit: Option<PathBuf>,
}

impl<R: BufRead, W: Write, P: CardPicker> Session<R, W, P> {
    pub fn new(console: Console<R, W>, picker: P) -> Self {
        Self {
            deck: Deck::new(),
            console,
            picker,
            export_on_exit: None,
        }
    }

    /// Export the deck to `path` when the user exits
    pub fn with_export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Import a deck before the loop starts, reporting like the `import` action
    pub fn import_from(&mut self, path: &Path) -> Result<()> {
        commands::import_from(&mut self.deck, &mut self.console, path)
    }

    /// Prompt for actions until `exit`
    pub fn run(&mut self) -> Result<()> {
        loop {
            let line = self.console.prompt(MAIN_PROMPT)?;
            let flow = match line.parse::<Action>() {
                Ok(action) => self.dispatch(action)?,
                Err(e) => {
                    tracing::debug!("Unknown action {:?}", line);
                    self.console.say(e.to_string())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Run a single action
    pub fn dispatch(&mut self, action: Action) -> Result<Flow> {
        tracing::debug!("Dispatching {:?}", action);

        match action {
            Action::Add => commands::add(&mut self.deck, &mut self.console)?,
            Action::Remove => commands::remove(&mut self.deck, &mut self.console)?,
            Action::Import => commands::import(&mut self.deck, &mut self.console)?,
            Action::Export => commands::export(&self.deck, &mut self.console)?,
            Action::Ask => {
                match quiz::ask(&mut self.deck, &mut self.console, &mut self.picker) {
                    Ok(_) => {}
                    Err(e @ Error::EmptyDeck) => self.console.say(e.to_string())?,
                    Err(e) => return Err(e),
                }
            }
            Action::Log => commands::log(&mut self.console)?,
            Action::HardestCard => commands::hardest_card(&self.deck, &mut self.console)?,
            Action::ResetStats => commands::reset_stats(&mut self.deck, &mut self.console)?,
            Action::Exit => {
                self.console.say("Bye bye!")?;
                if let Some(path) = self.export_on_exit.clone() {
                    commands::export_to(&self.deck, &mut self.console, &path)?;
                }
                return Ok(Flow::Stop);
            }
        }

        Ok(Flow::Continue)
    }
}
