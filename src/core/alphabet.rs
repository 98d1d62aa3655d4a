//! The Danish alphabet
//!
//! The game is played over the 29-letter Danish alphabet: a–z plus æ, ø, å.
//! All engine code works with lowercase letters from this set.

/// The 29 letters of the Danish alphabet, in collation order.
pub const ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'æ', 'ø', 'å',
];

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 29;

/// Check whether a character is a (lowercase) Danish letter.
#[inline]
#[must_use]
pub fn is_danish_letter(ch: char) -> bool {
    ch.is_ascii_lowercase() || matches!(ch, 'æ' | 'ø' | 'å')
}

/// Lowercase a character the Danish way.
///
/// Covers ASCII plus Æ/Ø/Å; other characters pass through unchanged.
#[inline]
#[must_use]
pub fn to_danish_lowercase(ch: char) -> char {
    match ch {
        'Æ' => 'æ',
        'Ø' => 'ø',
        'Å' => 'å',
        other => other.to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_29_letters() {
        assert_eq!(ALPHABET.len(), ALPHABET_SIZE);
    }

    #[test]
    fn alphabet_letters_are_valid() {
        for ch in ALPHABET {
            assert!(is_danish_letter(ch), "'{ch}' rejected by predicate");
        }
    }

    #[test]
    fn rejects_non_danish_letters() {
        assert!(!is_danish_letter('A'));
        assert!(!is_danish_letter('ü'));
        assert!(!is_danish_letter('3'));
        assert!(!is_danish_letter(' '));
    }

    #[test]
    fn lowercase_handles_danish_uppercase() {
        assert_eq!(to_danish_lowercase('Æ'), 'æ');
        assert_eq!(to_danish_lowercase('Ø'), 'ø');
        assert_eq!(to_danish_lowercase('Å'), 'å');
        assert_eq!(to_danish_lowercase('K'), 'k');
        assert_eq!(to_danish_lowercase('k'), 'k');
    }
}
