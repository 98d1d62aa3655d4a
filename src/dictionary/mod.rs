//! The game dictionary
//!
//! Read-only word lists partitioned by word length, with exact membership
//! lookup and random target selection with an exclusion set.

mod embedded;
pub mod loader;

pub use embedded::{
    FIVE_LETTER_WORDS, FIVE_LETTER_WORDS_COUNT, SEVEN_LETTER_WORDS, SEVEN_LETTER_WORDS_COUNT,
    SIX_LETTER_WORDS, SIX_LETTER_WORDS_COUNT,
};

use crate::core::{Word, WordLength};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Word lists indexed by word length
///
/// Partitions are kept sorted so membership lookup is a binary search.
#[derive(Debug, Clone)]
pub struct Dictionary {
    five: Vec<String>,
    six: Vec<String>,
    seven: Vec<String>,
}

impl Dictionary {
    /// Build the dictionary from the embedded Danish word lists.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_partitions(
            FIVE_LETTER_WORDS.iter().map(ToString::to_string).collect(),
            SIX_LETTER_WORDS.iter().map(ToString::to_string).collect(),
            SEVEN_LETTER_WORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }

    /// Build a dictionary from explicit partitions.
    ///
    /// Each list is sorted and deduplicated; entries are trusted to have the
    /// right length for their partition.
    #[must_use]
    pub fn from_partitions(mut five: Vec<String>, mut six: Vec<String>, mut seven: Vec<String>) -> Self {
        for list in [&mut five, &mut six, &mut seven] {
            list.sort_unstable();
            list.dedup();
        }
        Self { five, six, seven }
    }

    /// Build a dictionary from a flat word collection, bucketing by length.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut five = Vec::new();
        let mut six = Vec::new();
        let mut seven = Vec::new();
        for word in words {
            let bucket = match word.word_length() {
                WordLength::Five => &mut five,
                WordLength::Six => &mut six,
                WordLength::Seven => &mut seven,
            };
            bucket.push(word.text().to_string());
        }
        Self::from_partitions(five, six, seven)
    }

    /// The sorted word list for a word length.
    #[inline]
    #[must_use]
    pub fn partition(&self, length: WordLength) -> &[String] {
        match length {
            WordLength::Five => &self.five,
            WordLength::Six => &self.six,
            WordLength::Seven => &self.seven,
        }
    }

    /// Exact membership test against the given partition.
    #[must_use]
    pub fn contains(&self, word: &str, length: WordLength) -> bool {
        self.partition(length)
            .binary_search_by(|entry| entry.as_str().cmp(word))
            .is_ok()
    }

    /// Pick a uniformly random word from a partition, excluding a set.
    ///
    /// Returns `None` when every word of the partition is excluded (or the
    /// partition is empty).
    #[must_use]
    pub fn random_word(&self, length: WordLength, excluding: &FxHashSet<String>) -> Option<&str> {
        let candidates: Vec<&String> = self
            .partition(length)
            .iter()
            .filter(|word| !excluding.contains(*word))
            .collect();

        let mut rng = rand::rng();
        candidates.choose(&mut rng).map(|word| word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dictionary() -> Dictionary {
        Dictionary::from_partitions(
            vec!["skole".into(), "bjerg".into(), "færge".into()],
            vec!["gammel".into(), "sommer".into()],
            vec!["billede".into()],
        )
    }

    #[test]
    fn embedded_partitions_are_nonempty() {
        let dictionary = Dictionary::embedded();
        assert_eq!(
            dictionary.partition(WordLength::Five).len(),
            FIVE_LETTER_WORDS_COUNT
        );
        assert_eq!(
            dictionary.partition(WordLength::Six).len(),
            SIX_LETTER_WORDS_COUNT
        );
        assert_eq!(
            dictionary.partition(WordLength::Seven).len(),
            SEVEN_LETTER_WORDS_COUNT
        );
        assert!(FIVE_LETTER_WORDS_COUNT > 0);
    }

    #[test]
    fn embedded_words_have_their_partition_length() {
        let dictionary = Dictionary::embedded();
        for length in [WordLength::Five, WordLength::Six, WordLength::Seven] {
            for word in dictionary.partition(length) {
                assert_eq!(
                    word.chars().count(),
                    length.as_usize(),
                    "'{word}' is in the wrong partition"
                );
            }
        }
    }

    #[test]
    fn contains_is_partition_scoped() {
        let dictionary = test_dictionary();
        assert!(dictionary.contains("skole", WordLength::Five));
        assert!(dictionary.contains("gammel", WordLength::Six));
        assert!(!dictionary.contains("skole", WordLength::Six));
        assert!(!dictionary.contains("kirke", WordLength::Five));
    }

    #[test]
    fn random_word_respects_exclusions() {
        let dictionary = test_dictionary();
        let mut excluding = FxHashSet::default();
        excluding.insert("skole".to_string());
        excluding.insert("bjerg".to_string());

        for _ in 0..20 {
            let word = dictionary.random_word(WordLength::Five, &excluding).unwrap();
            assert_eq!(word, "færge");
        }
    }

    #[test]
    fn random_word_exhausted_returns_none() {
        let dictionary = test_dictionary();
        let excluding: FxHashSet<String> =
            ["billede".to_string()].into_iter().collect();
        assert_eq!(dictionary.random_word(WordLength::Seven, &excluding), None);
    }

    #[test]
    fn from_words_buckets_by_length() {
        let words = vec![
            Word::new("skole").unwrap(),
            Word::new("gammel").unwrap(),
            Word::new("billede").unwrap(),
            Word::new("skole").unwrap(),
        ];
        let dictionary = Dictionary::from_words(&words);
        assert_eq!(dictionary.partition(WordLength::Five).len(), 1);
        assert_eq!(dictionary.partition(WordLength::Six).len(), 1);
        assert_eq!(dictionary.partition(WordLength::Seven).len(), 1);
    }
}
