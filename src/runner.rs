//! Command-line run driver
//!
//! Loads the dictionary, runs one search and writes the results.

use colored::*;
use std::path::PathBuf;

use crate::cli::{Args, StrategyKind};
use crate::dictionary::Dictionary;
use crate::finder::{MatchResult, WordFinder};
use crate::output::OutputWriter;
use crate::progress::{
    create_spinner, print_bullet, print_header, print_info, print_success, print_warning,
    SearchStats,
};
use crate::strategy::create_strategy;

/// Run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub characters: String,
    pub min_length: usize,
    pub pattern: Option<String>,
    pub dictionary: PathBuf,
    pub strategy: StrategyKind,
    /// `(offset, limit)` when the paged form was requested
    pub page: Option<(usize, usize)>,
    pub output: Option<PathBuf>,
    pub count_only: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl RunConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let (min_length, pattern) = args.resolve_constraints()?;

        let page = if args.is_paginated() {
            // Out-of-range limits are clamped by the finder
            Some((args.offset.unwrap_or(0), args.limit.unwrap_or(0)))
        } else {
            None
        };

        Ok(Self {
            characters: args.characters.trim().to_string(),
            min_length,
            pattern,
            dictionary: args.dictionary.clone(),
            strategy: args.strategy,
            page,
            output: args.output.clone(),
            count_only: args.count_only,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Main driver
pub struct Runner {
    config: RunConfig,
    stats: SearchStats,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    /// Load, search, write
    pub fn run(&mut self) -> anyhow::Result<MatchResult> {
        let dictionary = self.load_dictionary()?;
        let finder = WordFinder::with_strategy(dictionary, create_strategy(self.config.strategy));

        if !self.config.quiet && self.config.verbose {
            self.print_config(&finder);
        }

        let result = self.search(&finder)?;
        self.write_results(&result)?;

        if !self.config.quiet {
            self.print_page_info(&result);
            self.stats.print_summary(self.config.verbose);
        }

        Ok(result)
    }

    fn load_dictionary(&mut self) -> anyhow::Result<Dictionary> {
        let pb = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_spinner(&format!("Loading dictionary {:?}...", self.config.dictionary))
        };

        self.stats.start();
        let dictionary = Dictionary::load(&self.config.dictionary);
        pb.finish_and_clear();

        let dictionary = dictionary?;
        self.stats.finish_load(dictionary.len());

        Ok(dictionary)
    }

    fn search(&mut self, finder: &WordFinder) -> anyhow::Result<MatchResult> {
        let pattern = self.config.pattern.as_deref();

        self.stats.start();
        let result = match self.config.page {
            Some((offset, limit)) => finder.find_words_paginated(
                &self.config.characters,
                self.config.min_length,
                pattern,
                offset,
                limit,
            )?,
            None => {
                let words =
                    finder.find_words(&self.config.characters, self.config.min_length, pattern)?;
                MatchResult {
                    total_matches: words.len(),
                    words,
                    offset: 0,
                }
            }
        };
        self.stats.finish_search(result.total_matches, result.words.len());

        Ok(result)
    }

    fn write_results(&self, result: &MatchResult) -> anyhow::Result<()> {
        let mut output = OutputWriter::create(self.config.output.clone())?;

        if self.config.count_only {
            output.write_line(&result.total_matches.to_string())?;
        } else {
            output.write_words(&result.words)?;
        }
        output.flush()?;

        if !self.config.quiet && !output.is_stdout() {
            print_success(&format!(
                "Wrote {} lines to {}",
                output.lines_written(),
                output.target()
            ));
        }

        Ok(())
    }

    fn print_page_info(&self, result: &MatchResult) {
        if result.total_matches == 0 {
            print_warning("No words found");
            return;
        }

        if self.config.page.is_some() {
            if result.words.is_empty() {
                print_warning(&format!(
                    "Offset {} is past the last of {} matches",
                    result.offset, result.total_matches
                ));
            } else {
                print_info(&format!(
                    "Showing {}-{} of {} matches",
                    result.offset + 1,
                    result.offset + result.words.len(),
                    result.total_matches
                ));
            }
        }
    }

    fn print_config(&self, finder: &WordFinder) {
        print_header("Configuration");

        print_bullet(&format!("Characters:   {}", self.config.characters));
        print_bullet(&format!("Min length:   {}", self.config.min_length));
        if let Some(ref pattern) = self.config.pattern {
            print_bullet(&format!("Pattern:      {}", pattern));
        }
        print_bullet(&format!(
            "Strategy:     {} (up to {} letters)",
            finder.strategy_name().cyan(),
            finder.max_letters()
        ));
        print_bullet(&format!(
            "Dictionary:   {:?} ({} words)",
            self.config.dictionary,
            finder.dictionary().len()
        ));
        if let Some((offset, limit)) = self.config.page {
            print_bullet(&format!("Page:         offset {}, limit {}", offset, limit));
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
