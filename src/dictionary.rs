//! Dictionary module
//!
//! Holds the normalized word list every search runs against: lowercase,
//! letters only, deduplicated and sorted by length then alphabetically.
//! A dictionary is built once and never mutated afterwards.

use ahash::RandomState;
use bytesize::ByteSize;
use hashbrown::HashSet;
use std::cmp::Ordering;
use std::path::Path;

use crate::encoding::WordFileReader;

/// Order words shorter first, equal lengths alphabetically
pub fn length_first(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Counters collected while building a dictionary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines or entries seen, blank ones included
    pub entries: u64,
    /// Entries kept
    pub accepted: u64,
    /// Entries containing characters other than A-Z
    pub skipped: u64,
    /// Entries that repeated an earlier word after normalization
    pub duplicates: u64,
}

/// Normalized, read-only word list with constant-time membership
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String, RandomState>,
    stats: LoadStats,
}

impl Dictionary {
    /// Build from any collection of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = LoadStats::default();
        let mut index = HashSet::with_hasher(RandomState::new());

        for entry in words {
            stats.entries += 1;

            let word = entry.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
                stats.skipped += 1;
                continue;
            }

            if index.insert(word.to_ascii_lowercase()) {
                stats.accepted += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        let mut words: Vec<String> = index.iter().cloned().collect();
        words.sort_unstable_by(|a, b| length_first(a, b));

        Self { words, index, stats }
    }

    /// Load a word file, one word per line.
    ///
    /// Fails when the file cannot be read or holds no usable words, so that
    /// no search ever runs against an empty dictionary.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = WordFileReader::open(path)?;
        let size = reader.size();
        let encoding = reader.encoding().name;

        let dictionary = Self::from_words(reader.into_lines());
        let stats = dictionary.load_stats();

        if dictionary.is_empty() {
            anyhow::bail!("Dictionary {:?} contains no usable words", path);
        }

        log::info!(
            "Loaded {} words from {:?} ({}, {})",
            dictionary.len(),
            path,
            ByteSize(size as u64),
            encoding
        );
        log::debug!(
            "Dictionary entries: {} read, {} skipped, {} duplicates",
            stats.entries,
            stats.skipped,
            stats.duplicates
        );

        Ok(dictionary)
    }

    /// Exact membership test; `word` must already be lowercase
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// All words, sorted by length then alphabetically
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The contiguous run of words whose length is within `min..=max`
    pub fn words_with_length(&self, min: usize, max: usize) -> &[String] {
        if min > max {
            return &[];
        }
        let start = self.words.partition_point(|w| w.len() < min);
        let end = self.words.partition_point(|w| w.len() <= max);
        &self.words[start..end.max(start)]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn load_stats(&self) -> LoadStats {
        self.stats
    }
}
