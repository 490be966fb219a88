//! Main entry point for the cliprip CLI.
//!
//! Handles command-line argument parsing, logging setup, and dispatch to the
//! extraction run. Per-job ffmpeg failures are reported in the final summary;
//! only pre-flight and parse errors terminate the process early.

use clap::Parser;
use log::{error, info};
use std::process;

mod cli;
mod extract;

fn main() {
    let args = cli::Cli::parse();

    // RUST_LOG still wins over the flag when set explicitly.
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match extract::run_extract(&args) {
        Ok(summary) => {
            info!(
                "Extraction finished: {} operation(s) performed, {} error(s)",
                summary.total_jobs, summary.error_count
            );
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
