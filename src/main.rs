//! Wordfinder - find every word hiding in a set of letters
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordfinder::cli::Args;
use wordfinder::progress::{print_banner, print_error};
use wordfinder::runner::{RunConfig, Runner};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet && args.verbose {
        print_banner();
    }

    let config = RunConfig::from_args(&args)?;
    log::debug!("Run configuration: {:?}", config);

    let mut runner = Runner::new(config);
    runner.run()?;

    Ok(())
}
