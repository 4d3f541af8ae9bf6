//! Wildcard pattern module
//!
//! A pattern is a fixed-length template of literal letters and wildcard
//! positions, e.g. `_o_`. A word matches when it has the same length and
//! agrees with every literal position.

use std::fmt;

use crate::error::{FinderError, Result};
use crate::letters::LetterMultiset;

/// Characters accepted as "any letter" in a pattern
pub const WILDCARDS: [char; 3] = ['_', '?', '.'];

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Literal(char),
    Wildcard,
}

/// A validated wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    /// Validate `raw` against the letters available to the search.
    /// `characters` is the input the letters were built from, as given.
    ///
    /// Literals are checked for presence only, not multiplicity: `aa_` is
    /// accepted with a single 'a' and then never matches anything.
    pub fn validate(raw: &str, characters: &str, letters: &LetterMultiset) -> Result<Self> {
        let pattern_len = raw.chars().count();
        if pattern_len > letters.size() {
            return Err(FinderError::PatternTooLong {
                pattern: raw.to_string(),
                pattern_len,
                available: letters.size(),
            });
        }

        let mut slots = Vec::with_capacity(pattern_len);
        for c in raw.chars() {
            if WILDCARDS.contains(&c) {
                slots.push(Slot::Wildcard);
                continue;
            }
            if letters.count(c) == 0 {
                return Err(FinderError::InvalidPatternChar {
                    invalid_char: c,
                    letters: characters.to_string(),
                });
            }
            slots.push(Slot::Literal(c.to_ascii_lowercase()));
        }

        Ok(Self { slots })
    }

    /// Does `candidate` fit this pattern? Case-insensitive.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        let len = if candidate.is_ascii() {
            candidate.len()
        } else {
            candidate.chars().count()
        };
        if len != self.slots.len() {
            return false;
        }

        self.slots
            .iter()
            .zip(candidate.chars())
            .all(|(slot, c)| match slot {
                Slot::Wildcard => true,
                Slot::Literal(l) => c.to_ascii_lowercase() == *l,
            })
    }

    /// Number of positions, which is also the mandatory word length
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn literal_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Literal(_)))
            .count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Literal(c) => write!(f, "{}", c)?,
                Slot::Wildcard => f.write_str("_")?,
            }
        }
        Ok(())
    }
}
