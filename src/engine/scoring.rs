//! Scoring engine
//!
//! Per-guess points are awarded per letter verdict and weighted by
//! difficulty. End-of-game bonuses (time decay, spots left, win streak) are
//! computed only for won games.

use super::Difficulty;
use crate::core::Verdict;

/// Points for a letter in the correct position
pub const CORRECT_POINTS: i64 = 80;
/// Points for a misplaced letter
pub const CLOSE_POINTS: i64 = 50;
/// Penalty for a letter that fits nowhere
pub const ABSENT_POINTS: i64 = -10;

/// Maximum time bonus, before difficulty weighting
pub const TIME_BONUS_MAX: f64 = 5000.0;
/// Half-life of the time bonus decay, in milliseconds
pub const TIME_BONUS_HALF_LIFE_MS: f64 = 10_000.0;
/// Bonus per letter cell that was never needed
pub const SPOT_BONUS_POINTS: f64 = 70.0;
/// Cap (and scale) of the win-streak bonus, before difficulty weighting
pub const WIN_STREAK_BONUS_CAP: f64 = 250.0;

const MULTIPLIERS: [f64; 3] = [1.0, 1.5, 2.0];

impl Difficulty {
    /// Score multiplier for this difficulty.
    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        MULTIPLIERS[self as usize]
    }
}

/// Point value of a single letter verdict, before difficulty weighting.
#[inline]
#[must_use]
pub const fn letter_points(verdict: Verdict) -> i64 {
    match verdict {
        Verdict::Correct => CORRECT_POINTS,
        Verdict::Close => CLOSE_POINTS,
        Verdict::Absent => ABSENT_POINTS,
    }
}

/// Final score breakdown of a resolved game
///
/// The caller folds `total()` into the cross-session total exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinalTally {
    /// Accumulated per-guess points of the session
    pub guess_points: i64,
    /// Exponential-decay time bonus (won games only)
    pub time_bonus: i64,
    /// Bonus for unused letter cells (won games only)
    pub spots_left_bonus: i64,
    /// Bonus for consecutive wins (won games only)
    pub win_streak_bonus: i64,
}

impl FinalTally {
    /// Sum of all components.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.guess_points + self.time_bonus + self.spots_left_bonus + self.win_streak_bonus
    }
}

/// Running per-session score
///
/// Reset at the start of each game; bonuses are computed separately at
/// resolution and never flow back into the running score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBoard {
    score: i64,
}

impl ScoreBoard {
    /// Create a zeroed score board.
    #[must_use]
    pub const fn new() -> Self {
        Self { score: 0 }
    }

    /// The running per-session score. May be negative early in a poor game.
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Reset the running score for a new game.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Add a submitted guess's verdicts to the running score.
    ///
    /// Returns the difficulty-weighted delta that was applied.
    pub fn update(&mut self, difficulty: Difficulty, verdicts: &[Verdict]) -> i64 {
        let points: i64 = verdicts.iter().copied().map(letter_points).sum();
        let delta = (points as f64 * difficulty.multiplier()).round() as i64;
        self.score += delta;
        delta
    }

    /// Time bonus for a won game.
    ///
    /// Exponential decay with a 10-second half-life, measured from the first
    /// letter typed to the winning submission. A game won before the timer
    /// ever started counts as zero elapsed time and earns the full bonus.
    #[must_use]
    pub fn time_bonus(difficulty: Difficulty, elapsed_ms: u64) -> i64 {
        let decay = 0.5_f64.powf(elapsed_ms as f64 / TIME_BONUS_HALF_LIFE_MS);
        (TIME_BONUS_MAX * decay * difficulty.multiplier()).round() as i64
    }

    /// Bonus for letter cells that were never needed.
    #[must_use]
    pub fn spots_left_bonus(difficulty: Difficulty, spots_left: usize) -> i64 {
        (spots_left as f64 * SPOT_BONUS_POINTS * difficulty.multiplier()).round() as i64
    }

    /// Bonus for consecutive wins, evaluated on the post-increment streak.
    ///
    /// Zero for a first win, growing slower than linear, capped at
    /// 250 × multiplier (the cap is reached at ten wins in a row).
    #[must_use]
    pub fn win_streak_bonus(difficulty: Difficulty, wins_in_a_row: u32) -> i64 {
        let raw = WIN_STREAK_BONUS_CAP * 2.0_f64.powf((f64::from(wins_in_a_row) - 1.0) / 9.0)
            - WIN_STREAK_BONUS_CAP;
        (raw.min(WIN_STREAK_BONUS_CAP) * difficulty.multiplier()).round() as i64
    }
}
