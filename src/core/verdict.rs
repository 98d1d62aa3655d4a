//! Per-letter guess feedback
//!
//! Comparing a guess against the target produces one [`Verdict`] per
//! position. Duplicate letters are handled with a remaining-pool multiset:
//! a letter appearing k times in the target is marked Correct/Close at most
//! k times in total across the guess.

use super::Word;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter not present at this position given the remaining duplicate pool
    Absent,
    /// Right letter, wrong position
    Close,
    /// Right letter, right position
    Correct,
}

impl Verdict {
    /// Strength ordering used by the knowledge aggregator:
    /// Correct dominates Close dominates Absent.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Close => 1,
            Self::Correct => 2,
        }
    }
}

/// Error type for mis-sized comparator inputs
///
/// A length mismatch is a programming error: the state machine only submits
/// full-length guesses against a same-length target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot compare a {guess_len}-letter guess against a {target_len}-letter target")]
pub struct CompareError {
    /// Letter count of the guess
    pub guess_len: usize,
    /// Letter count of the target
    pub target_len: usize,
}

/// Compare a guess against the target word
///
/// Returns one verdict per position, implementing the canonical
/// duplicate-letter rules.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and remove each from
///    the remaining pool
/// 2. Second pass: for every other position, mark Close if the letter is
///    still in the pool (consuming one occurrence), else Absent
///
/// # Errors
/// Returns `CompareError` if the two words differ in length.
///
/// # Examples
/// ```
/// use ordle::core::{Verdict, Word, compare};
///
/// let guess = Word::new("kanin").unwrap();
/// let target = Word::new("kanon").unwrap();
/// let verdicts = compare(&guess, &target).unwrap();
///
/// assert_eq!(
///     verdicts,
///     vec![
///         Verdict::Correct,
///         Verdict::Correct,
///         Verdict::Correct,
///         Verdict::Absent,
///         Verdict::Correct,
///     ]
/// );
/// ```
pub fn compare(guess: &Word, target: &Word) -> Result<Vec<Verdict>, CompareError> {
    if guess.len() != target.len() {
        return Err(CompareError {
            guess_len: guess.len(),
            target_len: target.len(),
        });
    }

    let n = guess.len();
    let mut verdicts = vec![Verdict::Absent; n];
    let mut remaining = target.char_counts();

    // First pass: exact matches consume their letter from the pool
    for i in 0..n {
        if guess.char_at(i) == target.char_at(i) {
            verdicts[i] = Verdict::Correct;
            if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, limited by the remaining pool
    for i in 0..n {
        if verdicts[i] != Verdict::Correct
            && let Some(count) = remaining.get_mut(&guess.char_at(i))
            && *count > 0
        {
            verdicts[i] = Verdict::Close;
            *count -= 1;
        }
    }

    Ok(verdicts)
}
