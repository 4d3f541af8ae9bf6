//! Integration tests for the word finder.
//!
//! These run both search strategies against a fixture word list and check the
//! properties every result must have, plus the end-to-end scenarios.

use std::collections::HashSet;
use std::path::Path;

use wordfinder::letters::{LetterMultiset, MAX_SCAN_LETTERS};
use wordfinder::strategy::MAX_RETURN;
use wordfinder::{Dictionary, DictionaryScan, FinderError, Generative, WordFinder};

fn load_dictionary() -> Dictionary {
    Dictionary::load(Path::new("tests/fixtures/words.txt")).expect("Failed to load fixture words")
}

fn scan_finder() -> WordFinder {
    WordFinder::with_strategy(load_dictionary(), Box::new(DictionaryScan))
}

fn generative_finder() -> WordFinder {
    WordFinder::with_strategy(load_dictionary(), Box::new(Generative))
}

fn both_finders() -> Vec<WordFinder> {
    vec![scan_finder(), generative_finder()]
}

/// Brute-force reference: filter the whole dictionary
fn reference(dictionary: &Dictionary, characters: &str, min_length: usize) -> Vec<String> {
    let letters = LetterMultiset::build(characters, MAX_SCAN_LETTERS).unwrap();
    dictionary
        .words()
        .iter()
        .filter(|w| w.len() >= min_length && letters.can_spell(w))
        .cloned()
        .collect()
}

const QUERIES: &[(&str, usize)] = &[
    ("cat", 1),
    ("stop", 2),
    ("aab", 1),
    ("banana", 3),
    ("retains", 3),
    ("Stars", 2),
    ("tabnoc", 2),
];

mod properties {
    use super::*;

    #[test]
    fn results_are_spellable_from_the_letters() {
        for finder in both_finders() {
            for &(chars, min) in QUERIES {
                let letters = LetterMultiset::build(chars, MAX_SCAN_LETTERS).unwrap();
                for word in finder.find_words(chars, min, None).unwrap() {
                    assert!(letters.can_spell(&word), "{} from {}", word, chars);
                    assert!(word.len() >= min);
                }
            }
        }
    }

    #[test]
    fn results_match_brute_force() {
        let dictionary = load_dictionary();
        for finder in both_finders() {
            for &(chars, min) in QUERIES {
                assert_eq!(
                    finder.find_words(chars, min, None).unwrap(),
                    reference(&dictionary, chars, min),
                    "{} strategy, input {}",
                    finder.strategy_name(),
                    chars
                );
            }
        }
    }

    #[test]
    fn strategies_agree() {
        let scan = scan_finder();
        let generative = generative_finder();

        for &(chars, min) in QUERIES {
            assert_eq!(
                scan.find_words(chars, min, None).unwrap(),
                generative.find_words(chars, min, None).unwrap()
            );
        }
        for (chars, pattern) in [("stop", "_o_"), ("retains", "r______"), ("stars", "?a??")] {
            assert_eq!(
                scan.find_words(chars, 1, Some(pattern)).unwrap(),
                generative.find_words(chars, 1, Some(pattern)).unwrap()
            );
        }
    }

    #[test]
    fn no_duplicates_and_sorted() {
        for finder in both_finders() {
            for &(chars, min) in QUERIES {
                let words = finder.find_words(chars, min, None).unwrap();

                let unique: HashSet<_> = words.iter().collect();
                assert_eq!(unique.len(), words.len());

                for pair in words.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    assert!(a.len() < b.len() || (a.len() == b.len() && a <= b), "{} before {}", a, b);
                }
            }
        }
    }

    #[test]
    fn idempotent() {
        for finder in both_finders() {
            let first = finder.find_words("retains", 3, None).unwrap();
            let second = finder.find_words("retains", 3, None).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn pattern_results_fit_the_pattern() {
        for finder in both_finders() {
            for word in finder.find_words("retains", 1, Some("r_t____")).unwrap() {
                assert_eq!(word.len(), 7);
                assert_eq!(word.as_bytes()[0], b'r');
                assert_eq!(word.as_bytes()[2], b't');
            }
        }
    }

    #[test]
    fn pagination_is_consistent() {
        for finder in both_finders() {
            let all = finder.find_words("stop", 1, None).unwrap();

            for (offset, limit) in [(0, 1), (0, 3), (2, 4), (5, 100), (all.len(), 5)] {
                let page = finder
                    .find_words_paginated("stop", 1, None, offset, limit)
                    .unwrap();

                assert_eq!(page.total_matches, all.len());
                assert_eq!(page.offset, offset);
                let end = (offset + limit).min(all.len());
                assert_eq!(page.words, all[offset.min(end)..end]);
            }

            let page = finder.find_words_paginated("stop", 1, None, 0, 0).unwrap();
            assert_eq!(page.words.len(), all.len().min(MAX_RETURN));
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn cat_min_three() {
        for finder in both_finders() {
            assert_eq!(finder.find_words("cat", 3, None).unwrap(), vec!["act", "cat"]);
        }
    }

    #[test]
    fn repeated_letter_words_appear_once() {
        for finder in both_finders() {
            assert_eq!(finder.find_words("aab", 2, None).unwrap(), vec!["aa", "ab", "ba"]);
        }
    }

    #[test]
    fn stop_with_middle_o() {
        for finder in both_finders() {
            assert_eq!(
                finder.find_words("stop", 3, Some("_o_")).unwrap(),
                vec!["pot", "sot", "top"]
            );
        }
    }

    #[test]
    fn empty_input_is_invalid() {
        for finder in both_finders() {
            let err = finder.find_words("", 1, None).unwrap_err();
            assert!(matches!(err, FinderError::InvalidInput { .. }));
        }
    }

    #[test]
    fn min_length_beyond_input_depends_on_strategy() {
        let err = generative_finder().find_words("ab", 3, None).unwrap_err();
        assert!(matches!(err, FinderError::InvalidArgument { min_length: 3, max: 2 }));

        let page = scan_finder().find_words_paginated("ab", 3, None, 0, 10).unwrap();
        assert!(page.words.is_empty());
        assert_eq!(page.total_matches, 0);
    }

    #[test]
    fn pattern_letter_missing_from_input() {
        for finder in both_finders() {
            let err = finder.find_words("xyz", 1, Some("a_c")).unwrap_err();
            assert!(matches!(err, FinderError::InvalidPatternChar { invalid_char: 'a', .. }));
        }
    }

    #[test]
    fn pattern_longer_than_input() {
        for finder in both_finders() {
            let err = finder.find_words("cat", 1, Some("____")).unwrap_err();
            assert!(matches!(err, FinderError::PatternTooLong { pattern_len: 4, available: 3, .. }));
        }
    }

    #[test]
    fn repeated_pattern_letter_validates_but_never_matches() {
        for finder in both_finders() {
            assert!(finder.find_words("stop", 1, Some("oo_")).unwrap().is_empty());
        }
    }

    #[test]
    fn seven_letter_anagrams() {
        for finder in both_finders() {
            let words = finder.find_words("RETAINS", 7, None).unwrap();
            assert_eq!(
                words,
                vec!["antsier", "nastier", "ratines", "retains", "retinas", "stainer"]
            );
        }
    }
}
