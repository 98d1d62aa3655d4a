//! Word list loading utilities
//!
//! Loads custom word lists from files, skipping entries that are not valid
//! game words.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns the valid words, skipping blank lines and entries that fail
/// word validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use ordle::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/five.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into valid words, skipping invalid entries.
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines("skole\n\nalt\ngammel\nsk0le\n  bjerg  \n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        // "alt" is too short and "sk0le" has a digit
        assert_eq!(texts, vec!["skole", "gammel", "bjerg"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skole\nfærge\nhjælp").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "færge");
    }

    #[test]
    fn load_from_file_missing_is_an_error() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
