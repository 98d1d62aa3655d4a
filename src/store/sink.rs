//! Score reporting
//!
//! Resolved games are reported through a [`ScoreSink`] so clients can ship
//! results wherever they like. The built-in sink emits a structured log
//! event.

use crate::core::WordLength;
use crate::engine::{Difficulty, FinalTally, GameState};
use tracing::info;

/// Everything a sink learns about one resolved game
#[derive(Debug, Clone, Copy)]
pub struct ScoreReport {
    /// How the game ended (`Won`, `Lost`, or `GaveUp`)
    pub outcome: GameState,
    /// Difficulty the game was played at
    pub difficulty: Difficulty,
    /// Word length the game was played at
    pub word_length: WordLength,
    /// Number of guesses submitted
    pub guesses: usize,
    /// Final score breakdown
    pub tally: FinalTally,
    /// Win streak after this game
    pub wins_in_a_row: u32,
}

/// Receives reports of resolved games
pub trait ScoreSink {
    /// Report one resolved game.
    fn report(&mut self, report: &ScoreReport);
}

/// Sink that emits each report as a structured log event
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ScoreSink for LogSink {
    fn report(&mut self, report: &ScoreReport) {
        info!(
            outcome = ?report.outcome,
            difficulty = %report.difficulty,
            word_length = %report.word_length,
            guesses = report.guesses,
            guess_points = report.tally.guess_points,
            time_bonus = report.tally.time_bonus,
            spots_left_bonus = report.tally.spots_left_bonus,
            win_streak_bonus = report.tally.win_streak_bonus,
            total = report.tally.total(),
            streak = report.wins_in_a_row,
            "game resolved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        reports: Vec<ScoreReport>,
    }

    impl ScoreSink for Recorder {
        fn report(&mut self, report: &ScoreReport) {
            self.reports.push(*report);
        }
    }

    #[test]
    fn sinks_receive_every_report() {
        let mut sink = Recorder::default();
        let report = ScoreReport {
            outcome: GameState::Won,
            difficulty: Difficulty::Hard,
            word_length: WordLength::Six,
            guesses: 3,
            tally: FinalTally {
                guess_points: 450,
                time_bonus: 1875,
                spots_left_bonus: 1890,
                win_streak_bonus: 0,
            },
            wins_in_a_row: 1,
        };
        sink.report(&report);
        sink.report(&report);
        assert_eq!(sink.reports.len(), 2);
        assert_eq!(sink.reports[0].tally.total(), 4215);
    }
}
