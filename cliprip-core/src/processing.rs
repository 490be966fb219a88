//! Sequential execution of extraction jobs.
//!
//! Jobs run strictly one at a time; each ffmpeg invocation blocks until the
//! child process exits. A failing job is counted and logged, and the
//! remaining jobs still run. There is no retry and no timeout.

use ffmpeg_sidecar::event::FfmpegEvent;

use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegProcess, FfmpegSpawner, extract_command};
use crate::planning::ExtractionJob;

/// Aggregate outcome of one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_jobs: usize,
    /// Jobs whose ffmpeg invocation failed to start or exited non-zero.
    pub error_count: usize,
}

/// Runs every job in order, one blocking ffmpeg process at a time.
pub fn run_extractions<S: FfmpegSpawner>(spawner: &S, jobs: &[ExtractionJob]) -> RunSummary {
    let mut summary = RunSummary {
        total_jobs: jobs.len(),
        error_count: 0,
    };

    for job in jobs {
        log::info!(
            "Extracting {} ({:.3}s + {:.3}s) from {}",
            job.output_path.display(),
            job.start_seconds,
            job.duration_seconds,
            job.resource
        );
        if let Err(e) = run_single(spawner, job) {
            log::error!("Extraction failed for '{}': {e}", job.output_path.display());
            summary.error_count += 1;
        }
    }

    summary
}

fn run_single<S: FfmpegSpawner>(spawner: &S, job: &ExtractionJob) -> CoreResult<()> {
    log::debug!("Running: ffmpeg {}", job.args.join(" "));

    let mut process = spawner.spawn(extract_command(job))?;
    process.handle_events(|event| {
        if let FfmpegEvent::Log(_, line) | FfmpegEvent::Error(line) = event {
            log::debug!("ffmpeg: {line}");
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(CoreError::OperationFailed(format!(
            "ffmpeg exited with {status}"
        )))
    }
}
