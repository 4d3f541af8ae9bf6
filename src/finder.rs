//! Word finder
//!
//! The entry point for searches. A [`WordFinder`] owns its dictionary and a
//! search strategy, and answers any number of queries against them.

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::strategy::{DictionaryScan, SearchStrategy, Window};

pub use crate::strategy::MatchResult;

/// Finds the dictionary words that can be spelled from a set of letters
pub struct WordFinder {
    dictionary: Dictionary,
    strategy: Box<dyn SearchStrategy>,
}

impl WordFinder {
    /// Finder using the dictionary scan
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_strategy(dictionary, Box::new(DictionaryScan))
    }

    pub fn with_strategy(dictionary: Dictionary, strategy: Box<dyn SearchStrategy>) -> Self {
        Self {
            dictionary,
            strategy,
        }
    }

    /// Every word spelled from `characters` with at least `min_length`
    /// letters, or exactly matching `pattern` when one is given.
    ///
    /// Sorted by length, then alphabetically, without duplicates.
    pub fn find_words(
        &self,
        characters: &str,
        min_length: usize,
        pattern: Option<&str>,
    ) -> Result<Vec<String>> {
        let result = self.search(characters, min_length, pattern, Window::all())?;
        Ok(result.words)
    }

    /// Like [`find_words`](Self::find_words) but returns only the
    /// `[offset, offset + limit)` slice of the matches, together with the
    /// total number of matches. `limit` is clamped to `1..=MAX_RETURN`.
    pub fn find_words_paginated(
        &self,
        characters: &str,
        min_length: usize,
        pattern: Option<&str>,
        offset: usize,
        limit: usize,
    ) -> Result<MatchResult> {
        self.search(characters, min_length, pattern, Window::new(offset, limit))
    }

    fn search(
        &self,
        characters: &str,
        min_length: usize,
        pattern: Option<&str>,
        window: Window,
    ) -> Result<MatchResult> {
        // An empty pattern means no pattern
        let pattern = pattern.filter(|p| !p.is_empty());

        self.strategy
            .search(&self.dictionary, characters, min_length, pattern, window)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn max_letters(&self) -> usize {
        self.strategy.max_letters()
    }
}
