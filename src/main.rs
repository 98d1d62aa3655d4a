//! Ordle - CLI
//!
//! Danish Wordle in the terminal, with a TUI mode and a simple CLI mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ordle::{
    commands::run_simple,
    core::WordLength,
    dictionary::{Dictionary, loader::load_from_file},
    engine::Difficulty,
    interactive::{App, run_tui},
    store::{JsonFileStore, LogSink, MemoryStore, Settings, SettingsStore},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ordle",
    about = "Danish Wordle in the terminal: guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: normal (default), hard, expert
    #[arg(short, long, global = true)]
    difficulty: Option<String>,

    /// Word length: 5, 6, or 7
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Path to the settings file
    #[arg(long, global = true, default_value = ".ordle.json")]
    settings: String,

    /// Do not persist settings or high scores
    #[arg(long, global = true)]
    no_save: bool,

    /// Path to a custom word list (one word per line, 5-7 letters)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one typed word per guess)
    Simple,
}

/// Build the dictionary from the embedded lists or a custom file.
fn load_dictionary(wordlist: Option<&str>) -> Result<Dictionary> {
    match wordlist {
        None => Ok(Dictionary::embedded()),
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            if words.is_empty() {
                bail!("word list '{path}' contains no playable words");
            }
            Ok(Dictionary::from_words(&words))
        }
    }
}

fn parse_difficulty(name: &str) -> Result<Difficulty> {
    Difficulty::from_name(name)
        .with_context(|| format!("unknown difficulty '{name}' (use normal, hard, or expert)"))
}

fn parse_length(length: usize) -> Result<WordLength> {
    WordLength::from_usize(length)
        .with_context(|| format!("unsupported word length {length} (use 5, 6, or 7)"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    let mut store: Box<dyn SettingsStore> = if cli.no_save {
        Box::new(MemoryStore::default())
    } else {
        Box::new(JsonFileStore::new(&cli.settings))
    };
    let settings = store.load().context("failed to load settings")?;

    let difficulty = match cli.difficulty.as_deref() {
        Some(name) => parse_difficulty(name)?,
        None => settings.difficulty,
    };
    let word_length = match cli.length {
        Some(length) => parse_length(length)?,
        None => settings.word_length,
    };

    let mut sink = LogSink;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(
                &dictionary,
                store.as_mut(),
                &mut sink,
                settings,
                difficulty,
                word_length,
            )?;
            run_tui(app)
        }
        Commands::Simple => run_simple(
            &dictionary,
            store.as_mut(),
            &mut sink,
            difficulty,
            word_length,
        ),
    }
}
