//! Search strategies
//!
//! Two interchangeable ways to answer the same query:
//! - [`DictionaryScan`]: walk the dictionary once and keep every word that
//!   the letters can spell. Works for any number of letters.
//! - [`Generative`]: enumerate letter combinations of growing length, every
//!   distinct permutation of each, and look each candidate up.
//!
//! Both return words sorted by length, then alphabetically.

use ahash::RandomState;
use hashbrown::HashSet;

use crate::combinations::Combinations;
use crate::dictionary::{length_first, Dictionary};
use crate::error::{FinderError, Result};
use crate::letters::{LetterMultiset, MAX_GENERATIVE_LETTERS, MAX_SCAN_LETTERS};
use crate::pattern::Pattern;
use crate::permutations::Permutations;

/// Largest page a paginated search returns
pub const MAX_RETURN: usize = 1000;

/// The `[offset, offset + limit)` slice of the sorted matches to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: usize,
    pub limit: usize,
}

impl Window {
    /// A page of at most `limit` words; limits outside `1..=MAX_RETURN`
    /// fall back to `MAX_RETURN`.
    pub fn new(offset: usize, limit: usize) -> Self {
        let limit = if (1..=MAX_RETURN).contains(&limit) {
            limit
        } else {
            MAX_RETURN
        };
        Self { offset, limit }
    }

    /// Every match
    pub fn all() -> Self {
        Self {
            offset: 0,
            limit: usize::MAX,
        }
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index - self.offset < self.limit
    }
}

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Matches inside the requested window, in result order
    pub words: Vec<String>,
    /// Every match, regardless of the window
    pub total_matches: usize,
    /// Index of the first returned word within all matches
    pub offset: usize,
}

impl MatchResult {
    pub fn empty(offset: usize) -> Self {
        Self {
            words: Vec::new(),
            total_matches: 0,
            offset,
        }
    }

    /// Paginate an already sorted, deduplicated match list
    fn from_sorted(matches: Vec<String>, window: Window) -> Self {
        let total_matches = matches.len();
        let words = matches
            .into_iter()
            .skip(window.offset)
            .take(window.limit)
            .collect();

        Self {
            words,
            total_matches,
            offset: window.offset,
        }
    }
}

/// A way of finding the words spelled by a set of letters
pub trait SearchStrategy: Send + Sync {
    /// Short name for logs and display
    fn name(&self) -> &'static str;

    /// Most input letters this strategy accepts
    fn max_letters(&self) -> usize;

    /// Find matches for `characters` and return those inside `window`
    fn search(
        &self,
        dictionary: &Dictionary,
        characters: &str,
        min_length: usize,
        pattern: Option<&str>,
        window: Window,
    ) -> Result<MatchResult>;
}

/// Single pass over the dictionary with a sub-multiset test per word
///
/// A minimum length larger than the number of letters is not an error here:
/// nothing can match, so the result is empty with `total_matches = 0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DictionaryScan;

impl SearchStrategy for DictionaryScan {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn max_letters(&self) -> usize {
        MAX_SCAN_LETTERS
    }

    fn search(
        &self,
        dictionary: &Dictionary,
        characters: &str,
        min_length: usize,
        pattern: Option<&str>,
        window: Window,
    ) -> Result<MatchResult> {
        let letters = LetterMultiset::build(characters, self.max_letters())?;
        let pattern = pattern
            .map(|p| Pattern::validate(p, characters, &letters))
            .transpose()?;

        let (min_len, max_len) = match &pattern {
            Some(p) => (p.len(), p.len()),
            None => (min_length.max(1), letters.size()),
        };

        if letters.size() < min_len {
            return Ok(MatchResult::empty(window.offset));
        }

        let mut words = Vec::new();
        let mut total_matches = 0;

        for word in dictionary.words_with_length(min_len, max_len) {
            if !letters.can_spell(word) {
                continue;
            }
            if let Some(p) = &pattern {
                if !p.matches(word) {
                    continue;
                }
            }

            if window.contains(total_matches) {
                words.push(word.clone());
            }
            total_matches += 1;
        }

        log::debug!(
            "scan: '{}' min {} matched {} words",
            characters,
            min_len,
            total_matches
        );

        Ok(MatchResult {
            words,
            total_matches,
            offset: window.offset,
        })
    }
}

/// Combination and permutation enumeration with dictionary lookups
///
/// A minimum length outside `1..=letters` is rejected with
/// [`FinderError::InvalidArgument`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Generative;

impl SearchStrategy for Generative {
    fn name(&self) -> &'static str {
        "generative"
    }

    fn max_letters(&self) -> usize {
        MAX_GENERATIVE_LETTERS
    }

    fn search(
        &self,
        dictionary: &Dictionary,
        characters: &str,
        min_length: usize,
        pattern: Option<&str>,
        window: Window,
    ) -> Result<MatchResult> {
        let letters = LetterMultiset::build(characters, self.max_letters())?;
        let pattern = pattern
            .map(|p| Pattern::validate(p, characters, &letters))
            .transpose()?;

        let (start_len, max_len) = match &pattern {
            Some(p) => (p.len(), p.len()),
            None => {
                if min_length < 1 || min_length > letters.size() {
                    return Err(FinderError::InvalidArgument {
                        min_length,
                        max: letters.size(),
                    });
                }
                (min_length, letters.size())
            }
        };

        let mut found: HashSet<String, RandomState> = HashSet::with_hasher(RandomState::new());
        for word in GenerativeSearch::new(dictionary, &letters, start_len, max_len) {
            found.insert(word);
        }

        let mut matches: Vec<String> = match &pattern {
            Some(p) => found.into_iter().filter(|w| p.matches(w)).collect(),
            None => found.into_iter().collect(),
        };
        matches.sort_unstable_by(|a, b| length_first(a, b));

        log::debug!(
            "generative: '{}' lengths {}..={} matched {} words",
            characters,
            start_len,
            max_len,
            matches.len()
        );

        Ok(MatchResult::from_sorted(matches, window))
    }
}

/// Where the generative search currently is
enum SearchState {
    /// Trying orderings of the current combination
    Searching {
        k: usize,
        combinations: Combinations,
        permutations: Permutations,
    },
    /// Current combination used up; move to the next one of the same length
    AdvancingCombination { k: usize, combinations: Combinations },
    /// All combinations of length `k` used up
    AdvancingLength { k: usize },
    Exhausted,
}

/// Iterator over dictionary words found by growing-length enumeration
pub struct GenerativeSearch<'a> {
    dictionary: &'a Dictionary,
    pool: Vec<char>,
    max_len: usize,
    state: SearchState,
}

impl<'a> GenerativeSearch<'a> {
    /// Search word lengths `start_len..=max_len`
    pub fn new(
        dictionary: &'a Dictionary,
        letters: &LetterMultiset,
        start_len: usize,
        max_len: usize,
    ) -> Self {
        let pool = letters.sorted_letters();
        let max_len = max_len.min(pool.len());

        let state = if start_len > max_len {
            SearchState::Exhausted
        } else {
            SearchState::AdvancingCombination {
                k: start_len,
                combinations: Combinations::new(pool.clone(), start_len),
            }
        };

        Self {
            dictionary,
            pool,
            max_len,
            state,
        }
    }
}

impl Iterator for GenerativeSearch<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, SearchState::Exhausted) {
                SearchState::Searching {
                    k,
                    combinations,
                    mut permutations,
                } => match permutations.next() {
                    Some(candidate) => {
                        self.state = SearchState::Searching {
                            k,
                            combinations,
                            permutations,
                        };
                        let word: String = candidate.into_iter().collect();
                        if self.dictionary.contains(&word) {
                            return Some(word);
                        }
                    }
                    None => {
                        self.state = SearchState::AdvancingCombination { k, combinations };
                    }
                },
                SearchState::AdvancingCombination { k, mut combinations } => {
                    self.state = match combinations.next() {
                        Some(combination) => SearchState::Searching {
                            k,
                            combinations,
                            permutations: Permutations::new(combination),
                        },
                        None => SearchState::AdvancingLength { k },
                    };
                }
                SearchState::AdvancingLength { k } => {
                    let k = k + 1;
                    if k <= self.max_len {
                        self.state = SearchState::AdvancingCombination {
                            k,
                            combinations: Combinations::new(self.pool.clone(), k),
                        };
                    }
                }
                SearchState::Exhausted => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for GenerativeSearch<'_> {}

/// Factory for creating strategies based on configuration
pub fn create_strategy(kind: crate::cli::StrategyKind) -> Box<dyn SearchStrategy> {
    match kind {
        crate::cli::StrategyKind::Scan => Box::new(DictionaryScan),
        crate::cli::StrategyKind::Generative => Box::new(Generative),
    }
}
