//! External tool integration.
//!
//! Everything that talks to ffmpeg lives here. Process spawning sits behind
//! the `FfmpegSpawner` trait so the extraction pipeline can be exercised in
//! tests without a real ffmpeg binary.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

pub mod ffmpeg_executor;

pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, extract_command,
};

/// Checks if a required external command is available and executable.
///
/// Runs `<cmd_name> -version` with output discarded; only the ability to
/// start the process matters.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
