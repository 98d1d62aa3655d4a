//! Core domain types: the Danish alphabet, validated words, and per-letter
//! guess verdicts.

pub mod alphabet;
mod verdict;
mod word;

pub use alphabet::{ALPHABET, ALPHABET_SIZE};
pub use verdict::{CompareError, Verdict, compare};
pub use word::{Word, WordError, WordLength};
