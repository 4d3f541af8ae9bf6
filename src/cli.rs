//! Command-line interface definition for wordfinder
//!
//! Provides argument parsing and validation for the word finder.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Minimum word length when none is given
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Find every dictionary word that can be spelled from a set of letters
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordfinder",
    author = "m0h1nd4",
    version,
    about = "Find every dictionary word that can be spelled from a set of letters",
    long_about = r#"
Find every dictionary word that can be spelled from a set of letters, each
letter used at most as often as it is given. Results are sorted by length,
then alphabetically.

The optional second argument is either a minimum word length or a pattern.
A pattern fixes the word length; use _, ? or . for any letter.

EXAMPLES:
    # Words of 3 or more letters from "stop"
    wordfinder stop

    # Words of 2 or more letters
    wordfinder stop 2

    # 3-letter words with 'o' in the middle
    wordfinder stop _o_

    # Second page of 20 results using the generative search
    wordfinder retains --strategy generative --offset 20 --limit 20
"#
)]
pub struct Args {
    /// Letters to build words from
    #[arg(value_name = "CHARACTERS")]
    pub characters: String,

    /// Minimum word length (a number) or pattern to match (anything else)
    #[arg(value_name = "MIN_LENGTH|PATTERN")]
    pub constraint: Option<String>,

    /// Minimum word length
    #[arg(short, long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Pattern to match, e.g. "_o_"
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Word list, one word per line
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "WORDFINDER_DICTIONARY",
        default_value = "words.txt"
    )]
    pub dictionary: PathBuf,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Scan)]
    pub strategy: StrategyKind,

    /// Index of the first result to show
    #[arg(long, value_name = "N")]
    pub offset: Option<usize>,

    /// Number of results to show (1-1000)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Write results to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only print the number of matches
    #[arg(long, default_value_t = false)]
    pub count_only: bool,

    /// Quiet mode - words only
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// How candidate words are found
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Test every dictionary word against the letters
    Scan,
    /// Enumerate letter combinations and permutations (at most 13 letters)
    Generative,
}

impl Args {
    /// Resolve the minimum length and pattern from the positional argument
    /// and the flags
    pub fn resolve_constraints(&self) -> anyhow::Result<(usize, Option<String>)> {
        let mut min_length = self.min_length;
        let mut pattern = self.pattern.clone();

        if let Some(ref constraint) = self.constraint {
            match constraint.trim().parse::<usize>() {
                Ok(n) => {
                    if min_length.is_some() {
                        anyhow::bail!("Minimum word length given twice: '{}' and --min-length", constraint);
                    }
                    min_length = Some(n);
                }
                Err(_) => {
                    if pattern.is_some() {
                        anyhow::bail!("Pattern given twice: '{}' and --pattern", constraint);
                    }
                    pattern = Some(constraint.clone());
                }
            }
        }

        let pattern = pattern.filter(|p| !p.is_empty());
        Ok((min_length.unwrap_or(DEFAULT_MIN_LENGTH), pattern))
    }

    /// Whether the paged form of the search was requested
    pub fn is_paginated(&self) -> bool {
        self.offset.is_some() || self.limit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordfinder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["stop"]);

        assert_eq!(args.characters, "stop");
        assert_eq!(args.strategy, StrategyKind::Scan);
        assert!(!args.is_paginated());
        assert_eq!(args.resolve_constraints().unwrap(), (DEFAULT_MIN_LENGTH, None));
    }

    #[test]
    fn test_positional_min_length() {
        let args = parse(&["stop", "2"]);
        assert_eq!(args.resolve_constraints().unwrap(), (2, None));
    }

    #[test]
    fn test_positional_pattern() {
        let args = parse(&["stop", "_o_"]);
        assert_eq!(
            args.resolve_constraints().unwrap(),
            (DEFAULT_MIN_LENGTH, Some("_o_".to_string()))
        );
    }

    #[test]
    fn test_flags() {
        let args = parse(&["stop", "-m", "4", "-p", "s___", "-s", "generative", "--limit", "5"]);

        assert_eq!(args.strategy, StrategyKind::Generative);
        assert!(args.is_paginated());
        assert_eq!(args.resolve_constraints().unwrap(), (4, Some("s___".to_string())));
    }

    #[test]
    fn test_conflicting_constraints() {
        assert!(parse(&["stop", "2", "-m", "3"]).resolve_constraints().is_err());
        assert!(parse(&["stop", "_o_", "-p", "s__"]).resolve_constraints().is_err());
    }
}
