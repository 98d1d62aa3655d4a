//! Display functions for the plain-terminal game

use super::formatters::{signed_points, verdicts_to_emoji};
use crate::core::Verdict;
use crate::engine::{FinalTally, GameState, GuessRecord};
use colored::Colorize;

/// Print a submitted guess with per-letter coloring and its emoji row.
pub fn print_guess_row(round: usize, record: &GuessRecord) {
    let mut colored_word = String::new();
    for (ch, verdict) in record.word.chars().iter().zip(&record.verdicts) {
        let letter = ch.to_uppercase().to_string();
        let painted = match verdict {
            Verdict::Correct => letter.green().bold().to_string(),
            Verdict::Close => letter.yellow().bold().to_string(),
            Verdict::Absent => letter.bright_black().to_string(),
        };
        colored_word.push_str(&painted);
        colored_word.push(' ');
    }
    println!(
        "  {round}: {colored_word} {}",
        verdicts_to_emoji(&record.verdicts)
    );
}

/// Print the end-of-game summary with the score breakdown.
pub fn print_game_over(outcome: GameState, target: &str, tally: &FinalTally, wins_in_a_row: u32) {
    println!("\n{}", "─".repeat(40).cyan());
    match outcome {
        GameState::Won => {
            println!("{}", "🎉 You won!".green().bold());
        }
        GameState::Lost => {
            println!(
                "{} The word was {}",
                "❌ You lost.".red().bold(),
                target.to_uppercase().bright_yellow().bold()
            );
        }
        GameState::GaveUp => {
            println!(
                "{} The word was {}",
                "🏳️ You gave up.".yellow(),
                target.to_uppercase().bright_yellow().bold()
            );
        }
        GameState::None | GameState::Ongoing => {}
    }

    println!("\n{}", "Score:".bright_cyan().bold());
    println!("   Guesses:      {:>6}", signed_points(tally.guess_points));
    if outcome == GameState::Won {
        println!("   Time:         {:>6}", signed_points(tally.time_bonus));
        println!(
            "   Spots left:   {:>6}",
            signed_points(tally.spots_left_bonus)
        );
        println!(
            "   Win streak:   {:>6}",
            signed_points(tally.win_streak_bonus)
        );
    }
    println!(
        "   Total:        {}",
        format!("{:>6}", signed_points(tally.total()))
            .bright_yellow()
            .bold()
    );
    if wins_in_a_row > 1 {
        println!("\n   {wins_in_a_row} wins in a row! 🔥");
    }
    println!("{}", "─".repeat(40).cyan());
}
