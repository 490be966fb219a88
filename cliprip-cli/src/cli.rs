// cliprip-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "cliprip: Extract timeline clips from a video-editing project",
    long_about = "Reads an MLT-style project file, resolves every clip placed on the \
                  timeline against its producer definition, and extracts each one into \
                  a standalone file using ffmpeg in stream-copy mode."
)]
pub struct Cli {
    /// Project file describing the timeline (XML)
    #[arg(required = true, value_name = "PROJECT_FILE")]
    pub project_file: PathBuf,

    /// Directory where extracted clips are written
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Enable detailed logging output
    #[arg(short, long)]
    pub verbose: bool,
}
