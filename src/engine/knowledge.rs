//! Cross-guess letter knowledge
//!
//! Aggregates per-letter verdicts across all guesses of a session into a
//! single authoritative state per alphabet letter. This drives keyboard
//! coloring and the Hard/Expert guess restrictions. The aggregate is
//! distinct from a single guess's verdict row: a letter can be Close at one
//! position and Correct at another within the same game.

use crate::core::{Verdict, Word, WordLength};
use rustc_hash::{FxHashMap, FxHashSet};

/// Keyboard affordance for a single key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Best-known verdict for the letter, if it has been played
    pub verdict: Option<Verdict>,
    /// Key cannot be typed right now (row full, game over)
    pub disabled: bool,
    /// Expert only: typing this key here is known to be futile
    pub forbidden: bool,
}

/// Best-known verdict per letter, plus positional history
///
/// Knowledge only strengthens: Absent → Close → Correct. Once a letter is
/// known Correct it never regresses.
#[derive(Debug, Clone)]
pub struct LetterKnowledge {
    best: FxHashMap<char, Verdict>,
    close_by_position: Vec<FxHashSet<char>>,
    correct_by_position: Vec<Option<char>>,
}

impl LetterKnowledge {
    /// Create empty knowledge for a game of the given word length.
    #[must_use]
    pub fn new(word_length: WordLength) -> Self {
        let n = word_length.as_usize();
        Self {
            best: FxHashMap::default(),
            close_by_position: vec![FxHashSet::default(); n],
            correct_by_position: vec![None; n],
        }
    }

    /// Absorb a submitted guess and its verdicts.
    ///
    /// Callers guarantee `verdicts.len() == guess.len()` (both come from the
    /// comparator). Per position: the per-letter entry is upgraded if the new
    /// verdict is stronger (Correct is absorbing, Absent never downgrades),
    /// Close verdicts are recorded in the positional close history, and
    /// Correct verdicts pin the letter to the position.
    pub fn absorb(&mut self, guess: &Word, verdicts: &[Verdict]) {
        for (position, (&letter, &verdict)) in guess.chars().iter().zip(verdicts).enumerate() {
            self.best
                .entry(letter)
                .and_modify(|best| {
                    if verdict.rank() > best.rank() {
                        *best = verdict;
                    }
                })
                .or_insert(verdict);

            match verdict {
                Verdict::Close => {
                    self.close_by_position[position].insert(letter);
                }
                Verdict::Correct => {
                    self.correct_by_position[position] = Some(letter);
                }
                Verdict::Absent => {}
            }
        }
    }

    /// Best-known verdict for a letter, if it has been played.
    #[inline]
    #[must_use]
    pub fn best(&self, letter: char) -> Option<Verdict> {
        self.best.get(&letter).copied()
    }

    /// Letter confirmed Correct at the given position, if any.
    #[inline]
    #[must_use]
    pub fn correct_at(&self, position: usize) -> Option<char> {
        self.correct_by_position.get(position).copied().flatten()
    }

    /// Whether the letter has been Close at this exact position before.
    #[inline]
    #[must_use]
    pub fn was_close_at(&self, position: usize, letter: char) -> bool {
        self.close_by_position
            .get(position)
            .is_some_and(|set| set.contains(&letter))
    }

    /// Letters whose best-known verdict is Close, in alphabet order.
    ///
    /// These are the letters a Hard/Expert guess must include. Letters later
    /// confirmed Correct are not in this set.
    #[must_use]
    pub fn known_close_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .best
            .iter()
            .filter(|&(_, &v)| v == Verdict::Close)
            .map(|(&ch, _)| ch)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Whether the letter is known not to fit anywhere.
    #[inline]
    #[must_use]
    pub fn is_redundant(&self, letter: char) -> bool {
        self.best(letter) == Some(Verdict::Absent)
    }
}
