//! FFmpeg process management.
//!
//! `FfmpegSpawner` and `FfmpegProcess` mirror the lifecycle of a spawned
//! ffmpeg child so the job runner can be driven by a mock in tests. The
//! default implementation wraps `ffmpeg-sidecar`.

use std::process::ExitStatus;

use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;

use crate::error::{CoreError, CoreResult};
use crate::planning::ExtractionJob;

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an `FfmpegProcess`.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(FfmpegChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            CoreError::OperationFailed(format!("failed to read ffmpeg events: {e}"))
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| CoreError::CommandWait("ffmpeg".to_string(), e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| CoreError::OperationFailed(format!("failed to start ffmpeg: {e}")))
    }
}

/// Builds the trim-copy command for one extraction job from its
/// materialized argument list.
#[must_use]
pub fn extract_command(job: &ExtractionJob) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    for arg in &job.args {
        cmd.arg(arg);
    }
    cmd
}
