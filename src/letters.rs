//! Letter multiset module
//!
//! Normalized, case-insensitive counts of the letters a search may draw from.

use crate::error::{FinderError, Result};

/// Upper bound on input letters for the generative strategy
pub const MAX_GENERATIVE_LETTERS: usize = 13;

/// Upper bound on input letters for the dictionary scan
pub const MAX_SCAN_LETTERS: usize = 64;

const ALPHABET_SIZE: usize = 26;

/// Occurrence counts of the letters a-z
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: [usize; ALPHABET_SIZE],
    size: usize,
}

/// Index of an ASCII letter in the alphabet, case-folded
#[inline]
fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

impl LetterMultiset {
    /// Build a multiset from raw input, accepting at most `max_len` letters
    pub fn build(input: &str, max_len: usize) -> Result<Self> {
        if input.is_empty() {
            return Err(FinderError::invalid_input(input, "must provide at least 1 character"));
        }

        let len = input.chars().count();
        if len > max_len {
            return Err(FinderError::invalid_input(
                input,
                format!("{} characters given, at most {} accepted", len, max_len),
            ));
        }

        let mut counts = [0usize; ALPHABET_SIZE];
        for c in input.chars() {
            let idx = letter_index(c).ok_or_else(|| {
                FinderError::invalid_input(input, format!("'{}' is not a letter A-Z", c))
            })?;
            counts[idx] += 1;
        }

        Ok(Self { counts, size: len })
    }

    /// Occurrences of `letter` (0 for anything outside A-Z)
    pub fn count(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Total number of letters
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains_at_least(&self, letter: char, n: usize) -> bool {
        self.count(letter) >= n
    }

    /// All letters in alphabetical order, repeats included
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(self.size);
        for (i, &n) in self.counts.iter().enumerate() {
            let c = (b'a' + i as u8) as char;
            letters.extend(std::iter::repeat(c).take(n));
        }
        letters
    }

    /// Sub-multiset test: can `word` be spelled without reusing a letter
    /// more often than it occurs here?
    pub fn can_spell(&self, word: &str) -> bool {
        if word.len() > self.size {
            return false;
        }

        let mut remaining = self.counts;
        for c in word.chars() {
            let Some(idx) = letter_index(c) else {
                return false;
            };
            if remaining[idx] == 0 {
                return false;
            }
            remaining[idx] -= 1;
        }

        true
    }
}

impl std::fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: String = self.sorted_letters().into_iter().collect();
        f.write_str(&letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        let letters = LetterMultiset::build("BaNaNa", MAX_SCAN_LETTERS).unwrap();

        assert_eq!(letters.size(), 6);
        assert_eq!(letters.count('a'), 3);
        assert_eq!(letters.count('N'), 2);
        assert_eq!(letters.count('b'), 1);
        assert_eq!(letters.count('z'), 0);
        assert_eq!(letters.count('1'), 0);
        assert!(letters.contains_at_least('a', 3));
        assert!(!letters.contains_at_least('a', 4));
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let err = LetterMultiset::build("", MAX_SCAN_LETTERS).unwrap_err();
        assert_eq!(err.code(), "InvalidInput");

        let err = LetterMultiset::build("ab1", MAX_SCAN_LETTERS).unwrap_err();
        assert_eq!(err.code(), "InvalidInput");

        let err = LetterMultiset::build("ab c", MAX_SCAN_LETTERS).unwrap_err();
        assert_eq!(err.code(), "InvalidInput");

        let err = LetterMultiset::build("abcdefghijklmn", MAX_GENERATIVE_LETTERS).unwrap_err();
        assert_eq!(err.code(), "InvalidInput");
        assert!(LetterMultiset::build("abcdefghijklm", MAX_GENERATIVE_LETTERS).is_ok());
    }

    #[test]
    fn test_sorted_letters() {
        let letters = LetterMultiset::build("cabba", MAX_SCAN_LETTERS).unwrap();
        assert_eq!(letters.sorted_letters(), vec!['a', 'a', 'b', 'b', 'c']);
        assert_eq!(letters.to_string(), "aabbc");
    }

    #[test]
    fn test_can_spell_respects_multiplicity() {
        let letters = LetterMultiset::build("stop", MAX_SCAN_LETTERS).unwrap();

        assert!(letters.can_spell("top"));
        assert!(letters.can_spell("pots"));
        assert!(letters.can_spell("Spot"));
        assert!(!letters.can_spell("toot")); // only one 'o'
        assert!(!letters.can_spell("stops")); // longer than the letters
        assert!(!letters.can_spell("to-p"));
        assert!(letters.can_spell(""));
    }
}
