//! Console display module
//!
//! Styled status lines, a spinner for dictionary loading, and the timing
//! summary printed after a search.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════╗
║   W O R D F I N D E R                                    ║
║   Every word hiding in your letters                      ║
╚══════════════════════════════════════════════════════════╝"#;

    eprintln!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    eprintln!("  {} {}", "•".green(), text);
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Timings and counts for one run
#[derive(Debug)]
pub struct SearchStats {
    pub dictionary_words: usize,
    pub load_time: Duration,
    pub search_time: Duration,
    pub total_matches: usize,
    pub shown: usize,
    start: Option<Instant>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            dictionary_words: 0,
            load_time: Duration::ZERO,
            search_time: Duration::ZERO,
            total_matches: 0,
            shown: 0,
            start: None,
        }
    }

    /// Begin timing a phase
    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn lap(&mut self) -> Duration {
        self.start.take().map_or(Duration::ZERO, |s| s.elapsed())
    }

    pub fn finish_load(&mut self, dictionary_words: usize) {
        self.load_time = self.lap();
        self.dictionary_words = dictionary_words;
    }

    pub fn finish_search(&mut self, total_matches: usize, shown: usize) {
        self.search_time = self.lap();
        self.total_matches = total_matches;
        self.shown = shown;
    }

    /// The classic one-line result summary
    pub fn summary_line(&self) -> String {
        format!(
            "Found {} words in {} ms",
            format_number(self.total_matches as u64),
            self.search_time.as_millis()
        )
    }

    /// Print final statistics
    pub fn print_summary(&self, verbose: bool) {
        eprintln!();
        eprintln!("  {}", self.summary_line().green().bold());

        if verbose {
            eprintln!(
                "  {} {} words in {}",
                "Dictionary:".green(),
                format_number(self.dictionary_words as u64),
                format_duration(self.load_time)
            );
            eprintln!(
                "  {} {}",
                "Shown:     ".green(),
                format_number(self.shown as u64)
            );
        }
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();

    if millis < 1000 {
        format!("{}ms", millis)
    } else if duration.as_secs() < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
