//! Ordle
//!
//! A Danish Wordle game engine and terminal client: guess the hidden word
//! in six tries, with difficulty-gated guess validation, a cumulative
//! scoring system, and win streaks carried across games.
//!
//! # Quick Start
//!
//! ```rust
//! use ordle::core::{Word, compare};
//!
//! let guess = Word::new("error").unwrap();
//! let target = Word::new("robot").unwrap();
//!
//! let verdicts = compare(&guess, &target).unwrap();
//! assert_eq!(verdicts.len(), 5);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Game engine
pub mod engine;

// Settings persistence and score reporting
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
