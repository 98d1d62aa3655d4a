//! The game session state machine
//!
//! A [`Session`] is the single owning value for one run of games: it holds
//! the hidden target, the guess history, the in-progress row, accumulated
//! letter knowledge, the running score, and the win streak carried across
//! games. The UI dispatches one action at a time; every operation is a
//! synchronous, total function over the session value.

use super::knowledge::{KeyState, LetterKnowledge};
use super::scoring::{FinalTally, ScoreBoard};
use super::timer::GameTimer;
use super::validator::{RejectReason, validate};
use super::Difficulty;
use crate::core::{
    CompareError, Verdict, Word, WordError, WordLength, alphabet, compare,
};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Maximum number of guesses per game
pub const GUESS_LIMIT: usize = 6;

/// Lifecycle of a game
///
/// `Ongoing` is the only state from which the three terminal states are
/// reachable; `new_game` is legal from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No game has been started yet
    #[default]
    None,
    /// A game is in progress
    Ongoing,
    /// The player gave up
    GaveUp,
    /// All guesses were used without finding the target
    Lost,
    /// The target was found
    Won,
}

impl GameState {
    /// Whether the game has ended (or never started).
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Options for starting a new game
///
/// Unset fields keep the session's current settings. A fixed target
/// bypasses random selection (used by tests and scripted games).
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    /// Difficulty for the new game
    pub difficulty: Option<Difficulty>,
    /// Word length for the new game
    pub word_length: Option<WordLength>,
    /// Fixed target word instead of a random pick
    pub target: Option<Word>,
}

/// A submitted guess and its verdict row
#[derive(Debug, Clone)]
pub struct GuessRecord {
    /// The submitted word
    pub word: Word,
    /// One verdict per letter position
    pub verdicts: Vec<Verdict>,
}

/// End-of-game result handed to the caller exactly once
///
/// The caller folds `tally.total()` into the cross-session total and
/// reports the streak to the score sink.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    /// Final score breakdown for this game
    pub tally: FinalTally,
    /// Win streak after this game resolved
    pub wins_in_a_row: u32,
}

/// Result of an accepted guess submission
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Verdicts for the submitted guess
    pub verdicts: Vec<Verdict>,
    /// Present when this submission ended the game
    pub resolution: Option<Resolution>,
}

/// Errors from session operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The operation requires an ongoing game
    #[error("no game in progress")]
    NotOngoing,
    /// The current row already holds a full word
    #[error("the current row is full")]
    RowFull,
    /// Input character outside the Danish alphabet
    #[error("'{0}' is not a playable letter")]
    InvalidLetter(char),
    /// Expert: the letter is known to be futile at the cursor position
    #[error("'{0}' cannot be used here")]
    ForbiddenLetter(char),
    /// The guess failed validation; session state is unchanged
    #[error(transparent)]
    Rejected(#[from] RejectReason),
    /// No target can be drawn for the requested word length
    #[error("no words available for length {0}")]
    EmptyDictionary(WordLength),
    /// A fixed target did not match the session word length
    #[error("fixed target '{target}' does not have {expected} letters")]
    TargetLengthMismatch {
        /// The offending target word
        target: String,
        /// The session's word length
        expected: WordLength,
    },
    /// Internal word construction failure (programming error)
    #[error(transparent)]
    Word(#[from] WordError),
    /// Internal comparator failure (programming error)
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// One run of games over a borrowed dictionary
#[derive(Debug)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    difficulty: Difficulty,
    word_length: WordLength,
    state: GameState,
    target: Option<Word>,
    records: Vec<GuessRecord>,
    current: Vec<char>,
    edit_index: Option<usize>,
    knowledge: LetterKnowledge,
    previous_targets: FxHashSet<String>,
    wins_in_a_row: u32,
    timer: GameTimer,
    score: ScoreBoard,
}

impl<'a> Session<'a> {
    /// Create a session in the `None` state.
    ///
    /// No target is drawn until the first [`Session::new_game`].
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, difficulty: Difficulty, word_length: WordLength) -> Self {
        Self {
            dictionary,
            difficulty,
            word_length,
            state: GameState::None,
            target: None,
            records: Vec::new(),
            current: Vec::new(),
            edit_index: None,
            knowledge: LetterKnowledge::new(word_length),
            previous_targets: FxHashSet::default(),
            wins_in_a_row: 0,
            timer: GameTimer::new(),
            score: ScoreBoard::new(),
        }
    }

    /// Start a new game. Legal from any state.
    ///
    /// Draws a random target from the dictionary partition, excluding every
    /// target used so far this run; when the pool is exhausted the exclusion
    /// set is reset to just the previous target. Changing difficulty after a
    /// game with at least one submitted guess resets the win streak.
    ///
    /// # Errors
    /// Returns `EmptyDictionary` when the partition has no words, or
    /// `TargetLengthMismatch` for a mis-sized fixed target.
    pub fn new_game(&mut self, options: GameOptions) -> Result<(), GameError> {
        let difficulty = options.difficulty.unwrap_or(self.difficulty);
        let word_length = options.word_length.unwrap_or(self.word_length);

        if difficulty != self.difficulty && !self.records.is_empty() {
            debug!(
                old = %self.difficulty,
                new = %difficulty,
                "difficulty changed mid-streak, resetting win streak"
            );
            self.wins_in_a_row = 0;
        }

        let target = match options.target {
            Some(target) => {
                if target.word_length() != word_length {
                    return Err(GameError::TargetLengthMismatch {
                        target: target.text().to_string(),
                        expected: word_length,
                    });
                }
                target
            }
            None => self.draw_target(word_length)?,
        };

        self.difficulty = difficulty;
        self.word_length = word_length;
        self.target = Some(target);
        self.state = GameState::Ongoing;
        self.records.clear();
        self.current.clear();
        self.edit_index = None;
        self.knowledge = LetterKnowledge::new(word_length);
        self.timer.reset();
        self.score.reset();

        info!(%difficulty, %word_length, "new game started");
        Ok(())
    }

    /// Draw a random target, excluding previously used ones.
    fn draw_target(&mut self, word_length: WordLength) -> Result<Word, GameError> {
        if let Some(previous) = &self.target {
            self.previous_targets.insert(previous.text().to_string());
        }

        let picked = match self.dictionary.random_word(word_length, &self.previous_targets) {
            Some(word) => word.to_string(),
            None => {
                // Every word has been used; forget all but the previous
                // target so it is still never picked twice in a row.
                let previous: FxHashSet<String> = self
                    .target
                    .iter()
                    .map(|word| word.text().to_string())
                    .collect();
                self.previous_targets = previous;

                self.dictionary
                    .random_word(word_length, &self.previous_targets)
                    .or_else(|| {
                        // Single-word partition: the previous target is the
                        // only choice left.
                        self.dictionary
                            .random_word(word_length, &FxHashSet::default())
                    })
                    .ok_or(GameError::EmptyDictionary(word_length))?
                    .to_string()
            }
        };

        Ok(Word::new(picked)?)
    }

    /// Type a letter into the current row.
    ///
    /// Appends to the row, or overwrites the edit position when one is set
    /// (clearing edit mode). At Expert, letters the keyboard marks forbidden
    /// at the cursor position are rejected. Starts the game timer on the
    /// very first letter.
    ///
    /// # Errors
    /// `NotOngoing` outside a game, `InvalidLetter` for characters outside
    /// the alphabet, `RowFull` when the row already holds a full word and no
    /// edit position is set, `ForbiddenLetter` at Expert for known-futile
    /// letters.
    pub fn add_letter(&mut self, letter: char) -> Result<(), GameError> {
        if self.state != GameState::Ongoing {
            return Err(GameError::NotOngoing);
        }
        let letter = alphabet::to_danish_lowercase(letter);
        if !alphabet::is_danish_letter(letter) {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.edit_index.is_none() && self.current.len() >= self.word_length.as_usize() {
            return Err(GameError::RowFull);
        }

        let cursor = self.edit_index.unwrap_or(self.current.len());
        if self.difficulty >= Difficulty::Expert && self.forbidden_at(cursor, letter) {
            return Err(GameError::ForbiddenLetter(letter));
        }

        if let Some(index) = self.edit_index.take() {
            // index < current.len() is guaranteed by set_edit_index
            self.current[index] = letter;
        } else {
            self.current.push(letter);
        }

        self.timer.start();
        Ok(())
    }

    /// Remove a letter from the current row.
    ///
    /// Removes the edit position when one is set (clearing edit mode),
    /// otherwise the last letter. A no-op on an empty row.
    ///
    /// # Errors
    /// `NotOngoing` outside a game.
    pub fn backspace(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Ongoing {
            return Err(GameError::NotOngoing);
        }
        if let Some(index) = self.edit_index.take() {
            if index < self.current.len() {
                self.current.remove(index);
            }
        } else {
            self.current.pop();
        }
        Ok(())
    }

    /// Set or clear the in-row edit position.
    ///
    /// Only already-typed positions can be edited; an index at or beyond the
    /// end of the buffer clears edit mode instead.
    pub fn set_edit_index(&mut self, index: Option<usize>) {
        self.edit_index = index.filter(|&i| i < self.current.len());
    }

    /// Submit the current row as a guess.
    ///
    /// The validator runs first; a rejection leaves all state untouched and
    /// is returned as `GameError::Rejected`. An accepted guess is compared,
    /// absorbed into the letter knowledge, recorded, and scored; winning or
    /// exhausting the guess limit resolves the game and produces a
    /// [`Resolution`].
    ///
    /// # Errors
    /// `NotOngoing` outside a game; `Rejected` with the validation reason.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, GameError> {
        if self.state != GameState::Ongoing {
            return Err(GameError::NotOngoing);
        }
        let target = self.target.clone().ok_or(GameError::NotOngoing)?;

        validate(
            &self.current,
            self.difficulty,
            self.word_length,
            &self.knowledge,
            self.dictionary,
        )?;

        let guess = Word::new(self.current.iter().collect::<String>())?;
        let verdicts = compare(&guess, &target)?;

        self.knowledge.absorb(&guess, &verdicts);
        self.score.update(self.difficulty, &verdicts);
        self.records.push(GuessRecord {
            word: guess.clone(),
            verdicts: verdicts.clone(),
        });

        info!(
            guess = %guess,
            round = self.records.len(),
            score = self.score.score(),
            "guess accepted"
        );

        let resolution = if guess == target {
            self.timer.stop();
            self.state = GameState::Won;
            self.wins_in_a_row += 1;
            Some(self.winning_resolution())
        } else if self.records.len() == GUESS_LIMIT {
            self.timer.stop();
            self.state = GameState::Lost;
            self.wins_in_a_row = 0;
            Some(Resolution {
                tally: FinalTally {
                    guess_points: self.score.score(),
                    ..FinalTally::default()
                },
                wins_in_a_row: 0,
            })
        } else {
            self.current.clear();
            self.edit_index = None;
            None
        };

        if let Some(resolution) = &resolution {
            info!(
                state = ?self.state,
                total = resolution.tally.total(),
                streak = resolution.wins_in_a_row,
                "game resolved"
            );
        }

        Ok(SubmitOutcome {
            verdicts,
            resolution,
        })
    }

    /// Final tally for a won game, bonuses included.
    ///
    /// A timer that never started counts as zero elapsed time (maximal
    /// time bonus).
    fn winning_resolution(&mut self) -> Resolution {
        let elapsed_ms = self
            .timer
            .elapsed()
            .map_or(0, |elapsed| elapsed.as_millis() as u64);
        let spots_left = (GUESS_LIMIT - self.records.len()) * self.word_length.as_usize();

        Resolution {
            tally: FinalTally {
                guess_points: self.score.score(),
                time_bonus: ScoreBoard::time_bonus(self.difficulty, elapsed_ms),
                spots_left_bonus: ScoreBoard::spots_left_bonus(self.difficulty, spots_left),
                win_streak_bonus: ScoreBoard::win_streak_bonus(self.difficulty, self.wins_in_a_row),
            },
            wins_in_a_row: self.wins_in_a_row,
        }
    }

    /// Abandon the current game.
    ///
    /// Transitions to `GaveUp`. The timer and win streak are left untouched
    /// and no bonuses are awarded.
    ///
    /// # Errors
    /// `NotOngoing` outside a game.
    pub fn give_up(&mut self) -> Result<Resolution, GameError> {
        if self.state != GameState::Ongoing {
            return Err(GameError::NotOngoing);
        }
        self.state = GameState::GaveUp;
        info!(score = self.score.score(), "player gave up");
        Ok(Resolution {
            tally: FinalTally {
                guess_points: self.score.score(),
                ..FinalTally::default()
            },
            wins_in_a_row: self.wins_in_a_row,
        })
    }

    /// Whether a letter is known futile at the given cursor position: known
    /// absent, Close here before, or conflicting with a confirmed letter.
    fn forbidden_at(&self, cursor: usize, letter: char) -> bool {
        self.knowledge.is_redundant(letter)
            || self.knowledge.was_close_at(cursor, letter)
            || self
                .knowledge
                .correct_at(cursor)
                .is_some_and(|expected| expected != letter)
    }

    /// Keyboard affordance for a letter key.
    ///
    /// Carries the letter's best-known verdict, whether the key is currently
    /// typeable, and (Expert only) whether pressing it here is known to be
    /// futile: the letter is known absent, was Close at the cursor position
    /// before, or conflicts with a confirmed letter at the cursor position.
    #[must_use]
    pub fn key_state(&self, key: char) -> KeyState {
        let cursor = self.edit_index.unwrap_or(self.current.len());
        let disabled = self.state != GameState::Ongoing
            || (self.current.len() >= self.word_length.as_usize() && self.edit_index.is_none());

        let forbidden = self.difficulty >= Difficulty::Expert && self.forbidden_at(cursor, key);

        KeyState {
            verdict: self.knowledge.best(key),
            disabled,
            forbidden,
        }
    }

    // Read accessors

    /// Current lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Session difficulty.
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Session word length.
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.word_length
    }

    /// The hidden target. Meant for display after the game resolves.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Submitted guesses with their verdicts, oldest first.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Zero-based index of the in-progress guess.
    #[inline]
    #[must_use]
    pub fn current_guess_index(&self) -> usize {
        self.records.len()
    }

    /// Letters of the in-progress row.
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        &self.current
    }

    /// The in-row edit position, if set.
    #[inline]
    #[must_use]
    pub const fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    /// Accumulated letter knowledge.
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// Consecutive wins carried across games.
    #[inline]
    #[must_use]
    pub const fn wins_in_a_row(&self) -> u32 {
        self.wins_in_a_row
    }

    /// Running per-game score.
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score.score()
    }

    /// Elapsed time captured by the stopped timer.
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> Option<std::time::Duration> {
        self.timer.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        let words: Vec<Word> = [
            "skole", "bolde", "solde", "bjerg", "femte", "endnu", "vandt", "gammel", "sommer",
            "billede",
        ]
        .iter()
        .map(|w| Word::new(w).unwrap())
        .collect();
        Dictionary::from_words(&words)
    }

    fn fixed_game<'a>(dictionary: &'a Dictionary, target: &str) -> Session<'a> {
        let mut session = Session::new(dictionary, Difficulty::Normal, WordLength::Five);
        session
            .new_game(GameOptions {
                target: Some(Word::new(target).unwrap()),
                ..GameOptions::default()
            })
            .unwrap();
        session
    }

    fn type_word(session: &mut Session<'_>, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch).unwrap();
        }
    }

    #[test]
    fn session_starts_in_none_state() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, Difficulty::Normal, WordLength::Five);
        assert_eq!(session.state(), GameState::None);
        assert!(session.target().is_none());
        assert!(session.add_letter('a').is_err());
    }

    #[test]
    fn new_game_transitions_to_ongoing() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, Difficulty::Normal, WordLength::Five);
        session.new_game(GameOptions::default()).unwrap();
        assert_eq!(session.state(), GameState::Ongoing);
        assert_eq!(session.current_guess_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.target().is_some());
    }

    #[test]
    fn winning_game_resolves_with_bonuses() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skole");

        let outcome = session.submit_guess().unwrap();
        assert_eq!(session.state(), GameState::Won);
        assert!(outcome.verdicts.iter().all(|&v| v == Verdict::Correct));

        let resolution = outcome.resolution.unwrap();
        assert_eq!(resolution.wins_in_a_row, 1);
        // First win: no streak bonus
        assert_eq!(resolution.tally.win_streak_bonus, 0);
        // Won on the first guess: 25 unused cells
        assert_eq!(resolution.tally.spots_left_bonus, 1750);
        // 5 correct letters at Normal
        assert_eq!(resolution.tally.guess_points, 400);
        assert!(resolution.tally.time_bonus > 0);
    }

    #[test]
    fn sixth_wrong_guess_loses_and_resets_streak() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        // Bank a win first so the streak is nonzero
        type_word(&mut session, "skole");
        session.submit_guess().unwrap();
        assert_eq!(session.wins_in_a_row(), 1);

        session
            .new_game(GameOptions {
                target: Some(Word::new("femte").unwrap()),
                ..GameOptions::default()
            })
            .unwrap();

        for round in 0..GUESS_LIMIT {
            type_word(&mut session, "vandt");
            let outcome = session.submit_guess().unwrap();
            if round < GUESS_LIMIT - 1 {
                assert!(outcome.resolution.is_none());
                assert_eq!(session.state(), GameState::Ongoing);
            } else {
                let resolution = outcome.resolution.unwrap();
                assert_eq!(session.state(), GameState::Lost);
                assert_eq!(resolution.wins_in_a_row, 0);
                // Lost games earn no bonuses
                assert_eq!(resolution.tally.time_bonus, 0);
                assert_eq!(resolution.tally.spots_left_bonus, 0);
                assert_eq!(resolution.tally.win_streak_bonus, 0);
            }
        }
        assert_eq!(session.wins_in_a_row(), 0);
    }

    #[test]
    fn records_track_guess_index_invariant() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        assert_eq!(session.records().len(), session.current_guess_index());

        type_word(&mut session, "vandt");
        session.submit_guess().unwrap();
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.current_guess_index(), 1);
        assert!(session.current_guess().is_empty());
    }

    #[test]
    fn rejected_guess_mutates_nothing() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "zzzzz");

        let err = session.submit_guess().unwrap_err();
        assert_eq!(err, GameError::Rejected(RejectReason::NotInDictionary));
        // Buffer, records, and score untouched
        assert_eq!(session.current_guess(), ['z', 'z', 'z', 'z', 'z']);
        assert!(session.records().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), GameState::Ongoing);
    }

    #[test]
    fn short_guess_is_rejected() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "sko");
        let err = session.submit_guess().unwrap_err();
        assert_eq!(err, GameError::Rejected(RejectReason::TooShort));
    }

    #[test]
    fn hard_mode_rejection_flows_through_submit() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, Difficulty::Hard, WordLength::Five);
        session
            .new_game(GameOptions {
                target: Some(Word::new("bolde").unwrap()),
                ..GameOptions::default()
            })
            .unwrap();

        type_word(&mut session, "skole");
        session.submit_guess().unwrap();

        // "bjerg" omits the discovered o and l and drops the pinned e
        type_word(&mut session, "bjerg");
        let err = session.submit_guess().unwrap_err();
        assert!(matches!(err, GameError::Rejected(_)));

        // The same guess is accepted at Normal difficulty
        let mut normal = Session::new(&dictionary, Difficulty::Normal, WordLength::Five);
        normal
            .new_game(GameOptions {
                target: Some(Word::new("bolde").unwrap()),
                ..GameOptions::default()
            })
            .unwrap();
        type_word(&mut normal, "skole");
        normal.submit_guess().unwrap();
        type_word(&mut normal, "bjerg");
        assert!(normal.submit_guess().is_ok());
    }

    #[test]
    fn give_up_is_terminal_and_keeps_streak() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skole");
        session.submit_guess().unwrap();

        session.new_game(GameOptions::default()).unwrap();
        let resolution = session.give_up().unwrap();
        assert_eq!(session.state(), GameState::GaveUp);
        assert_eq!(resolution.wins_in_a_row, 1);
        assert_eq!(resolution.tally.time_bonus, 0);
        assert_eq!(resolution.tally.win_streak_bonus, 0);

        // Terminal: no further moves
        assert_eq!(session.give_up().unwrap_err(), GameError::NotOngoing);
        assert_eq!(session.add_letter('a').unwrap_err(), GameError::NotOngoing);
        assert!(session.submit_guess().is_err());
    }

    #[test]
    fn new_game_avoids_the_previous_target() {
        // Two-word partition: the next target must always be the other word
        let words: Vec<Word> = ["skole", "bjerg"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let dictionary = Dictionary::from_words(&words);
        let mut session = Session::new(&dictionary, Difficulty::Normal, WordLength::Five);

        session.new_game(GameOptions::default()).unwrap();
        let mut previous = session.target().unwrap().text().to_string();
        for _ in 0..10 {
            session.new_game(GameOptions::default()).unwrap();
            let current = session.target().unwrap().text().to_string();
            assert_ne!(current, previous, "picked the previous target again");
            previous = current;
        }
    }

    #[test]
    fn single_word_partition_reuses_the_only_word() {
        let words = vec![Word::new("billede").unwrap()];
        let dictionary = Dictionary::from_words(&words);
        let mut session = Session::new(&dictionary, Difficulty::Normal, WordLength::Seven);

        session.new_game(GameOptions::default()).unwrap();
        session.new_game(GameOptions::default()).unwrap();
        assert_eq!(session.target().unwrap().text(), "billede");
    }

    #[test]
    fn empty_partition_is_an_error() {
        let dictionary = Dictionary::from_words(&[]);
        let mut session = Session::new(&dictionary, Difficulty::Normal, WordLength::Five);
        assert_eq!(
            session.new_game(GameOptions::default()).unwrap_err(),
            GameError::EmptyDictionary(WordLength::Five)
        );
    }

    #[test]
    fn changing_difficulty_mid_streak_resets_streak() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skole");
        session.submit_guess().unwrap();
        assert_eq!(session.wins_in_a_row(), 1);

        // The won game had a submitted guess, so switching difficulty
        // resets the streak.
        session
            .new_game(GameOptions {
                difficulty: Some(Difficulty::Hard),
                ..GameOptions::default()
            })
            .unwrap();
        assert_eq!(session.wins_in_a_row(), 0);
    }

    #[test]
    fn keeping_difficulty_preserves_streak() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skole");
        session.submit_guess().unwrap();

        session.new_game(GameOptions::default()).unwrap();
        assert_eq!(session.wins_in_a_row(), 1);
    }

    #[test]
    fn edit_index_overwrites_single_position() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skore");

        session.set_edit_index(Some(3));
        session.add_letter('l').unwrap();
        let text: String = session.current_guess().iter().collect();
        assert_eq!(text, "skole");
        // Edit mode cleared after the overwrite
        assert_eq!(session.edit_index(), None);
        assert!(session.submit_guess().is_ok());
    }

    #[test]
    fn backspace_removes_edit_position() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skole");

        session.set_edit_index(Some(0));
        session.backspace().unwrap();
        let text: String = session.current_guess().iter().collect();
        assert_eq!(text, "kole");
        assert_eq!(session.edit_index(), None);

        session.backspace().unwrap();
        assert_eq!(session.current_guess().len(), 3);
    }

    #[test]
    fn full_row_rejects_letters_unless_editing() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "skole");
        assert_eq!(session.add_letter('x').unwrap_err(), GameError::RowFull);

        session.set_edit_index(Some(2));
        assert!(session.add_letter('x').is_ok());
    }

    #[test]
    fn invalid_letters_are_rejected() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        assert_eq!(session.add_letter('3').unwrap_err(), GameError::InvalidLetter('3'));
        assert!(session.add_letter('ü').is_err());
        // Uppercase Danish letters are lowercased, not rejected
        assert!(session.add_letter('Ø').is_ok());
        assert_eq!(session.current_guess(), ['ø']);
    }

    #[test]
    fn edit_index_beyond_buffer_is_ignored() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        type_word(&mut session, "sk");

        // Only typed positions are editable
        session.set_edit_index(Some(4));
        assert_eq!(session.edit_index(), None);
        session.add_letter('o').unwrap();
        let text: String = session.current_guess().iter().collect();
        assert_eq!(text, "sko");

        session.set_edit_index(Some(1));
        assert_eq!(session.edit_index(), Some(1));
    }

    #[test]
    fn expert_blocks_typing_forbidden_letters() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, Difficulty::Expert, WordLength::Five);
        session
            .new_game(GameOptions {
                target: Some(Word::new("bolde").unwrap()),
                ..GameOptions::default()
            })
            .unwrap();
        type_word(&mut session, "skole");
        session.submit_guess().unwrap();

        // s came back Absent: it can no longer be typed at Expert
        assert_eq!(
            session.add_letter('s').unwrap_err(),
            GameError::ForbiddenLetter('s')
        );

        // A compliant word can still be typed letter by letter
        type_word(&mut session, "bold");
        // Position 4 is pinned to e, so any other letter is refused there
        assert_eq!(
            session.add_letter('r').unwrap_err(),
            GameError::ForbiddenLetter('r')
        );
        assert!(session.add_letter('e').is_ok());

        // Normal difficulty leaves typing unrestricted
        let mut normal = fixed_game(&dictionary, "bolde");
        type_word(&mut normal, "skole");
        normal.submit_guess().unwrap();
        assert!(normal.add_letter('s').is_ok());
    }

    #[test]
    fn expert_keyboard_marks_futile_keys() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, Difficulty::Expert, WordLength::Five);
        session
            .new_game(GameOptions {
                target: Some(Word::new("bolde").unwrap()),
                ..GameOptions::default()
            })
            .unwrap();

        type_word(&mut session, "skole");
        session.submit_guess().unwrap();

        // s came back Absent: forbidden at Expert
        assert!(session.key_state('s').forbidden);
        // o was Close at position 2; with an empty row the cursor is 0
        assert!(!session.key_state('o').forbidden);
        session.add_letter('b').unwrap();
        session.add_letter('o').unwrap();
        // cursor now at position 2 where o was Close before
        assert!(session.key_state('o').forbidden);

        // At Normal difficulty nothing is forbidden
        let mut normal = fixed_game(&dictionary, "bolde");
        type_word(&mut normal, "skole");
        normal.submit_guess().unwrap();
        assert!(!normal.key_state('s').forbidden);
    }

    #[test]
    fn keyboard_reports_best_verdicts() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "bolde");
        type_word(&mut session, "skole");
        session.submit_guess().unwrap();

        assert_eq!(session.key_state('e').verdict, Some(Verdict::Correct));
        assert_eq!(session.key_state('o').verdict, Some(Verdict::Close));
        assert_eq!(session.key_state('s').verdict, Some(Verdict::Absent));
        assert_eq!(session.key_state('x').verdict, None);
    }

    #[test]
    fn timer_starts_on_first_letter_only() {
        let dictionary = dictionary();
        let mut session = fixed_game(&dictionary, "skole");
        assert!(session.elapsed().is_none());

        type_word(&mut session, "skole");
        let outcome = session.submit_guess().unwrap();
        assert!(outcome.resolution.is_some());
        // Winning stopped the timer and captured an elapsed value
        assert!(session.elapsed().is_some());
    }
}
