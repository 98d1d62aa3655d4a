//! The game engine: difficulty levels, letter knowledge, guess validation,
//! scoring, and the session state machine.

mod knowledge;
mod scoring;
mod session;
mod timer;
mod validator;

pub use knowledge::{KeyState, LetterKnowledge};
pub use scoring::{FinalTally, ScoreBoard};
pub use session::{
    GUESS_LIMIT, GameError, GameOptions, GameState, GuessRecord, Resolution, Session,
    SubmitOutcome,
};
pub use timer::GameTimer;
pub use validator::{RejectReason, validate};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels, ordered: higher difficulties include every restriction
/// of the lower ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Difficulty {
    /// No guess restrictions
    #[default]
    Normal,
    /// Discovered letters must be reused
    Hard,
    /// As Hard, plus known-bad keys are forbidden on the keyboard
    Expert,
}

impl Difficulty {
    /// Parse a difficulty from its name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        write!(f, "{name}")
    }
}
