//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: one typed word per guess.

use crate::core::WordLength;
use crate::dictionary::Dictionary;
use crate::engine::{
    Difficulty, GUESS_LIMIT, GameError, GameOptions, GameState, Resolution, Session,
};
use crate::output::{print_game_over, print_guess_row};
use crate::store::{ScoreReport, ScoreSink, SettingsStore};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode.
///
/// # Errors
///
/// Returns an error if a game cannot be started, user input cannot be read,
/// or the settings cannot be saved.
pub fn run_simple(
    dictionary: &Dictionary,
    store: &mut dyn SettingsStore,
    sink: &mut dyn ScoreSink,
    difficulty: Difficulty,
    word_length: WordLength,
) -> Result<()> {
    let mut settings = store.load().context("failed to load settings")?;
    let mut total: i64 = 0;

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║           Ordle - Danish Wordle              ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the {word_length}-letter Danish word in {GUESS_LIMIT} tries.");
    println!("Difficulty: {difficulty}");
    println!("Commands: 'new' for a new word, 'giveup' to reveal it, 'quit' to exit\n");

    let mut session = Session::new(dictionary, difficulty, word_length);
    session
        .new_game(GameOptions::default())
        .context("failed to start a game")?;

    loop {
        let round = session.current_guess_index() + 1;
        let input = read_input(&format!("Guess {round}/{GUESS_LIMIT}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                break;
            }
            "new" | "n" => {
                if session.state() == GameState::Ongoing {
                    let resolution = session.give_up()?;
                    finish_game(&mut session, &resolution, sink, &mut total);
                }
                session.new_game(GameOptions::default())?;
                println!("\n🔄 New word!\n");
            }
            "giveup" | "g" => {
                if session.state() == GameState::Ongoing {
                    let resolution = session.give_up()?;
                    finish_game(&mut session, &resolution, sink, &mut total);
                    if !play_again(&mut session)? {
                        break;
                    }
                }
            }
            word => {
                if session.state() != GameState::Ongoing {
                    println!("No game in progress. Type 'new' to start one.\n");
                    continue;
                }
                match play_word(&mut session, word) {
                    Ok(Some(resolution)) => {
                        finish_game(&mut session, &resolution, sink, &mut total);
                        if !play_again(&mut session)? {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(GameError::Rejected(reason)) => {
                        println!("{} {reason}\n", "✗".red());
                    }
                    Err(GameError::InvalidLetter(letter)) => {
                        println!("{} '{letter}' is not a playable letter\n", "✗".red());
                    }
                    Err(GameError::ForbiddenLetter(letter)) => {
                        println!(
                            "{} '{letter}' is ruled out at this position\n",
                            "✗".red()
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }

    if settings.record_total(total) {
        println!("\n🏆 New high score: {total}!");
    }
    settings.difficulty = session.difficulty();
    settings.word_length = session.word_length();
    store.save(&settings).context("failed to save settings")?;

    println!("\n👋 Thanks for playing! Session total: {total}\n");
    Ok(())
}

/// Type one whole word into the row and submit it.
fn play_word(session: &mut Session<'_>, word: &str) -> Result<Option<Resolution>, GameError> {
    while !session.current_guess().is_empty() {
        session.backspace()?;
    }
    for ch in word.chars() {
        session.add_letter(ch)?;
    }

    let outcome = session.submit_guess()?;
    let round = session.records().len();
    if let Some(record) = session.records().last() {
        print_guess_row(round, record);
    }
    Ok(outcome.resolution)
}

/// Print the summary, report the game, and fold its total.
fn finish_game(
    session: &mut Session<'_>,
    resolution: &Resolution,
    sink: &mut dyn ScoreSink,
    total: &mut i64,
) {
    let target = session
        .target()
        .map_or_else(String::new, |word| word.text().to_string());
    print_game_over(
        session.state(),
        &target,
        &resolution.tally,
        resolution.wins_in_a_row,
    );

    *total += resolution.tally.total();
    println!("   Session total: {}\n", total.to_string().bright_cyan());

    sink.report(&ScoreReport {
        outcome: session.state(),
        difficulty: session.difficulty(),
        word_length: session.word_length(),
        guesses: session.records().len(),
        tally: resolution.tally,
        wins_in_a_row: resolution.wins_in_a_row,
    });
}

/// Ask whether to start another game; starts it on yes.
fn play_again(session: &mut Session<'_>) -> Result<bool> {
    let answer = read_input("Play again? (yes/no)")?.to_lowercase();
    if matches!(answer.as_str(), "yes" | "y" | "") {
        session.new_game(GameOptions::default())?;
        println!("\n🔄 New word!\n");
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Read one trimmed line of user input with a prompt.
fn read_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    Ok(input.trim().to_string())
}
