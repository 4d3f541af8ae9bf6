//! # Wordfinder
//!
//! Finds every dictionary word that can be spelled from a set of letters.
//!
//! ## Features
//!
//! - **Multiset aware**: each letter is used at most as often as it is given
//! - **Minimum length**: only report words of at least N letters
//! - **Wildcard patterns**: fix the word length and some letters, e.g. `_o_`
//! - **Two strategies**: a single dictionary scan, or combination and
//!   permutation enumeration with dictionary lookups
//! - **Pagination**: total match count plus any `[offset, offset + limit)` page
//!
//! ## Usage
//!
//! ```bash
//! # Words of 3 or more letters from "stop"
//! wordfinder stop
//!
//! # 3-letter words with 'o' in the middle
//! wordfinder stop _o_
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordfinder::{Dictionary, WordFinder};
//!
//! let dictionary = Dictionary::from_words(["act", "cat", "top", "pot", "stop"]);
//! let finder = WordFinder::new(dictionary);
//!
//! assert_eq!(finder.find_words("tac", 3, None).unwrap(), vec!["act", "cat"]);
//! assert_eq!(finder.find_words("stop", 3, Some("_o_")).unwrap(), vec!["pot", "top"]);
//!
//! let page = finder.find_words_paginated("stop", 3, None, 1, 2).unwrap();
//! assert_eq!(page.words, vec!["top", "stop"]);
//! assert_eq!(page.total_matches, 3);
//! ```

pub mod cli;
pub mod combinations;
pub mod dictionary;
pub mod encoding;
pub mod error;
pub mod finder;
pub mod letters;
pub mod output;
pub mod pattern;
pub mod permutations;
pub mod progress;
pub mod runner;
pub mod strategy;

pub use dictionary::Dictionary;
pub use error::FinderError;
pub use finder::{MatchResult, WordFinder};
pub use strategy::{DictionaryScan, Generative, SearchStrategy};
