//! Word representation
//!
//! A `Word` stores a 5–7 letter Danish word along with its character
//! sequence for position-wise comparison.

use super::alphabet::{is_danish_letter, to_danish_lowercase};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playable word lengths, selecting the dictionary partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WordLength {
    /// Five-letter words
    Five,
    /// Six-letter words
    Six,
    /// Seven-letter words
    Seven,
}

impl WordLength {
    /// The number of letters for this word length.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
        }
    }

    /// Parse a word length from a letter count.
    #[must_use]
    pub const fn from_usize(n: usize) -> Option<Self> {
        match n {
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            _ => None,
        }
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// Length is not 5, 6, or 7 letters
    #[error("word must be 5 to 7 letters, got {0}")]
    InvalidLength(usize),
    /// Contains a character outside the Danish alphabet
    #[error("word contains a character outside the Danish alphabet: '{0}'")]
    InvalidCharacter(char),
}

/// A validated Danish game word
///
/// Stores the lowercased text and its character sequence. Equality is exact
/// (and case-insensitive by construction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Create a new `Word` from a string
    ///
    /// The input is lowercased (including Æ/Ø/Å).
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Letter count is not 5, 6, or 7
    /// - Any character falls outside the 29-letter Danish alphabet
    ///
    /// # Examples
    /// ```
    /// use ordle::core::Word;
    ///
    /// let word = Word::new("hjælp").unwrap();
    /// assert_eq!(word.text(), "hjælp");
    ///
    /// assert!(Word::new("alt").is_err());
    /// assert!(Word::new("sk0le").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let chars: Vec<char> = text.as_ref().chars().map(to_danish_lowercase).collect();

        if !(5..=7).contains(&chars.len()) {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if let Some(&bad) = chars.iter().find(|ch| !is_danish_letter(**ch)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text: String = chars.iter().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; words are 5–7 letters by construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The word length partition this word belongs to
    ///
    /// # Panics
    /// Will not panic - construction guarantees a 5–7 letter count.
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> WordLength {
        WordLength::from_usize(self.chars.len()).expect("length validated at construction")
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for verdict calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("skole").unwrap();
        assert_eq!(word.text(), "skole");
        assert_eq!(word.len(), 5);
        assert_eq!(word.word_length(), WordLength::Five);
    }

    #[test]
    fn word_creation_danish_letters() {
        let word = Word::new("hjælp").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(2), 'æ');

        let word = Word::new("sejlbåd").unwrap();
        assert_eq!(word.word_length(), WordLength::Seven);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("SKOLE").unwrap();
        assert_eq!(word.text(), "skole");

        let word2 = Word::new("HJÆLP").unwrap();
        assert_eq!(word2.text(), "hjælp");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("alt"), Err(WordError::InvalidLength(3))));
        assert!(matches!(
            Word::new("alledage"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("sk0le"),
            Err(WordError::InvalidCharacter('0'))
        ));
        assert!(Word::new("sko le").is_err());
        assert!(Word::new("skolé").is_err());
    }

    #[test]
    fn word_length_conversions() {
        assert_eq!(WordLength::Five.as_usize(), 5);
        assert_eq!(WordLength::Seven.as_usize(), 7);
        assert_eq!(WordLength::from_usize(6), Some(WordLength::Six));
        assert_eq!(WordLength::from_usize(4), None);
        assert_eq!(WordLength::from_usize(8), None);
    }

    #[test]
    fn word_char_counts_duplicates() {
        let word = Word::new("lille").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'l'), Some(&3));
        assert_eq!(counts.get(&'i'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&1));
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("skole").unwrap();
        let word2 = Word::new("SKOLE").unwrap();
        let word3 = Word::new("bjerg").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("færge").unwrap();
        assert_eq!(format!("{word}"), "færge");
    }
}
