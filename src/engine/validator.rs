//! Guess validation
//!
//! Difficulty-gated acceptance rules applied before a guess is scored.
//! Checks run in a fixed order and the first failure wins; a rejection
//! never mutates session state.

use super::Difficulty;
use super::knowledge::LetterKnowledge;
use crate::core::WordLength;
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;

/// Why a candidate guess was rejected
///
/// These are user-facing, recoverable rejections: the guess buffer is left
/// untouched and the reason is surfaced as a transient warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The buffer has fewer letters than the word length
    #[error("the word is too short")]
    TooShort,
    /// Not a member of the word list for this word length
    #[error("the word is not in the word list")]
    NotInDictionary,
    /// Hard/Expert: a confirmed letter was not reused at its position
    #[error("letter {} must be '{letter}'", .position + 1)]
    MustReuseCorrectLetter {
        /// Zero-based position of the confirmed letter
        position: usize,
        /// The confirmed letter
        letter: char,
    },
    /// Hard/Expert: a letter known to be in the word is missing
    #[error("the word must include '{letter}'")]
    MustIncludeKnownLetter {
        /// The known-close letter
        letter: char,
    },
}

/// Validate a candidate guess against the session's accumulated knowledge.
///
/// Checks, in order (first failure wins):
/// 1. the candidate is full length;
/// 2. the candidate is in the dictionary partition;
/// 3. (Hard and up) confirmed-Correct positions are reused;
/// 4. (Hard and up) every known-Close letter appears, consuming one
///    occurrence per known letter.
///
/// Normal difficulty skips checks 3–4 entirely.
///
/// # Errors
/// Returns the first applicable `RejectReason`.
pub fn validate(
    candidate: &[char],
    difficulty: Difficulty,
    word_length: WordLength,
    knowledge: &LetterKnowledge,
    dictionary: &Dictionary,
) -> Result<(), RejectReason> {
    if candidate.len() != word_length.as_usize() {
        return Err(RejectReason::TooShort);
    }

    let text: String = candidate.iter().collect();
    if !dictionary.contains(&text, word_length) {
        return Err(RejectReason::NotInDictionary);
    }

    if difficulty >= Difficulty::Hard {
        for (position, &letter) in candidate.iter().enumerate() {
            if let Some(expected) = knowledge.correct_at(position)
                && letter != expected
            {
                return Err(RejectReason::MustReuseCorrectLetter {
                    position,
                    letter: expected,
                });
            }
        }

        let mut available: FxHashMap<char, u8> = FxHashMap::default();
        for &letter in candidate {
            *available.entry(letter).or_insert(0) += 1;
        }
        for letter in knowledge.known_close_letters() {
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return Err(RejectReason::MustIncludeKnownLetter { letter }),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, compare};

    fn dictionary() -> Dictionary {
        let words: Vec<Word> = ["skole", "bolde", "femte", "endnu", "bjerg", "solde"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        Dictionary::from_words(&words)
    }

    fn knowledge_after(guesses: &[&str], target: &str) -> LetterKnowledge {
        let target = Word::new(target).unwrap();
        let mut knowledge = LetterKnowledge::new(target.word_length());
        for guess in guesses {
            let guess = Word::new(guess).unwrap();
            let verdicts = compare(&guess, &target).unwrap();
            knowledge.absorb(&guess, &verdicts);
        }
        knowledge
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn short_guess_is_rejected_first() {
        let knowledge = LetterKnowledge::new(WordLength::Five);
        let result = validate(
            &chars("sko"),
            Difficulty::Normal,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(result, Err(RejectReason::TooShort));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let knowledge = LetterKnowledge::new(WordLength::Five);
        let result = validate(
            &chars("zzzzz"),
            Difficulty::Normal,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(result, Err(RejectReason::NotInDictionary));
    }

    #[test]
    fn normal_difficulty_ignores_discovered_letters() {
        // "skole" vs "bolde" leaves o and l known Close, e pinned at 4
        let knowledge = knowledge_after(&["skole"], "bolde");
        let result = validate(
            &chars("bjerg"),
            Difficulty::Normal,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn hard_requires_known_close_letters() {
        let knowledge = knowledge_after(&["skole"], "bolde");
        // "femte" reuses the pinned e at position 4 but omits the
        // known-close o and l
        let result = validate(
            &chars("femte"),
            Difficulty::Hard,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(
            result,
            Err(RejectReason::MustIncludeKnownLetter { letter: 'l' })
        );
    }

    #[test]
    fn expert_applies_the_same_nested_checks() {
        let knowledge = knowledge_after(&["skole"], "bolde");
        let result = validate(
            &chars("femte"),
            Difficulty::Expert,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert!(matches!(
            result,
            Err(RejectReason::MustIncludeKnownLetter { .. })
        ));
    }

    #[test]
    fn pinned_position_check_runs_before_inclusion_check() {
        let knowledge = knowledge_after(&["skole"], "bolde");
        // "bjerg" both drops the pinned e at position 4 and omits the
        // known-close letters; the position check fires first.
        let result = validate(
            &chars("bjerg"),
            Difficulty::Hard,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(
            result,
            Err(RejectReason::MustReuseCorrectLetter {
                position: 4,
                letter: 'e'
            })
        );
    }

    #[test]
    fn hard_requires_correct_positions_to_be_reused() {
        // "skole" vs "bolde" pins e at position 4
        let knowledge = knowledge_after(&["skole"], "bolde");
        // "endnu" has no e at position 4
        let result = validate(
            &chars("endnu"),
            Difficulty::Hard,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(
            result,
            Err(RejectReason::MustReuseCorrectLetter {
                position: 4,
                letter: 'e'
            })
        );
    }

    #[test]
    fn hard_accepts_a_compliant_guess() {
        let knowledge = knowledge_after(&["skole"], "bolde");
        // "solde" reuses e at position 4 and includes both o and l
        let result = validate(
            &chars("solde"),
            Difficulty::Hard,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejection_order_is_stable() {
        // A guess that is both unknown and missing known letters fails on
        // dictionary membership first.
        let knowledge = knowledge_after(&["skole"], "bolde");
        let result = validate(
            &chars("zzzzz"),
            Difficulty::Expert,
            WordLength::Five,
            &knowledge,
            &dictionary(),
        );
        assert_eq!(result, Err(RejectReason::NotInDictionary));
    }
}
