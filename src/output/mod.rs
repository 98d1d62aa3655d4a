//! Terminal output formatting
//!
//! Display utilities for the plain-terminal game mode.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_guess_row};
