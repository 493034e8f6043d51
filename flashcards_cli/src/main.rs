use clap::Parser;
use flashcards_core::*;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(about = "Terminal flashcard trainer", long_about = None)]
struct Cli {
    /// Import cards from this file before the first prompt (also `-import`)
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Export cards to this file on exit (also `-export`)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for quiz card selection
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Stray arguments, ignored
    #[arg(hide = true)]
    rest: Vec<String>,
}

/// Accept the single-dash `-import`/`-export` spellings
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-import") => OsString::from("--import"),
            Some("-export") => OsString::from("--export"),
            _ => arg,
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Initialize logging
    if cli.verbose {
        flashcards_core::logging::init_with_level("debug");
    } else {
        flashcards_core::logging::init();
    }

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if !cli.rest.is_empty() {
        tracing::debug!("Ignoring extra arguments {:?}", cli.rest);
    }

    // Flags win over config
    let import = cli.import.or(config.session.import);
    let export = cli.export.or(config.session.export);
    let picker = match cli.seed.or(config.quiz.seed) {
        Some(seed) => {
            tracing::debug!("Using quiz seed {}", seed);
            RandomPicker::from_seed(seed)
        }
        None => RandomPicker::from_entropy(),
    };

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(console, picker).with_export_on_exit(export);

    if let Some(path) = import {
        session.import_from(&path)?;
    }

    session.run()
}
