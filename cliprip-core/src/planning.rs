//! Extraction job planning.
//!
//! Joins each playlist entry to its producer definition, converts the entry's
//! frame range into time offsets using the project frame rate, and
//! materializes the full ffmpeg invocation for the clip. Producers are
//! processed in document order, and matching entries in document order within
//! each producer, so the resulting job sequence is reproducible.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::project::{PlaylistEntry, Producer, Project};

/// One resolved (producer, playlist entry) pair, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionJob {
    pub producer_id: String,
    /// Path or URI of the source media file.
    pub resource: String,
    pub start_frame: i64,
    pub end_frame: i64,
    pub duration_frames: i64,
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub duration_seconds: f64,
    /// Destination file, `<output_dir>/<base>-<startSec>-<endSec><ext>`.
    pub output_path: PathBuf,
    /// Materialized ffmpeg argument list (everything after the binary name).
    pub args: Vec<String>,
}

/// Plans the ordered sequence of extraction jobs for a parsed project.
///
/// Entries that reference no known producer are silently excluded. An entry
/// with `in > out` aborts planning; no jobs are attempted in that case.
pub fn plan_jobs(project: &Project, output_dir: &Path) -> CoreResult<Vec<ExtractionJob>> {
    let frame_rate = project.profile.frame_rate();
    let mut jobs = Vec::new();

    for producer in &project.producers {
        let (base, ext) = split_clip_name(&producer.name);
        if ext.is_empty() {
            // Non-fatal: the clip is still extracted under the bare name.
            log::error!(
                "No extension found in producer name '{}'; using the whole name as the clip base",
                producer.name
            );
        }

        for entry in project
            .entries
            .iter()
            .filter(|e| references_producer(&e.producer, &producer.id))
        {
            jobs.push(build_job(producer, base, ext, entry, frame_rate, output_dir)?);
        }
    }

    Ok(jobs)
}

/// True when a playlist entry reference points at the given producer.
///
/// A producer placed on a secondary track is referenced as `<id>_<track>`;
/// on the first track it appears bare. Plain prefix matching is not enough
/// here: id `5` must not match an entry referencing producer `50`.
#[must_use]
pub fn references_producer(entry_ref: &str, producer_id: &str) -> bool {
    entry_ref == producer_id
        || entry_ref
            .strip_prefix(producer_id)
            .is_some_and(|rest| rest.starts_with('_'))
}

/// Splits a producer name on the last `.` into base name and extension
/// (extension keeps its leading dot). A name without a dot yields the whole
/// name as the base and an empty extension.
fn split_clip_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

fn build_job(
    producer: &Producer,
    base: &str,
    ext: &str,
    entry: &PlaylistEntry,
    frame_rate: f64,
    output_dir: &Path,
) -> CoreResult<ExtractionJob> {
    if entry.in_frame > entry.out_frame {
        return Err(CoreError::InvalidRange(format!(
            "entry for producer '{}' has in={} > out={}",
            entry.producer, entry.in_frame, entry.out_frame
        )));
    }

    let start_seconds = entry.in_frame as f64 / frame_rate;
    let end_seconds = entry.out_frame as f64 / frame_rate;
    let duration_seconds = end_seconds - start_seconds;

    // Second offsets in the file name are truncated, not rounded; they must
    // agree with what the summary reports for the same clip.
    let file_name = format!(
        "{base}-{}-{}{ext}",
        start_seconds.floor() as i64,
        end_seconds.floor() as i64
    );
    let output_path = output_dir.join(file_name);

    let args = vec![
        "-y".to_string(),
        "-i".to_string(),
        producer.resource.clone(),
        "-ss".to_string(),
        format!("{start_seconds:.3}"),
        "-t".to_string(),
        format!("{duration_seconds:.3}"),
        "-c".to_string(),
        "copy".to_string(),
        output_path.to_string_lossy().into_owned(),
    ];

    Ok(ExtractionJob {
        producer_id: producer.id.clone(),
        resource: producer.resource.clone(),
        start_frame: entry.in_frame,
        end_frame: entry.out_frame,
        duration_frames: entry.out_frame - entry.in_frame,
        start_seconds,
        end_seconds,
        duration_seconds,
        output_path,
        args,
    })
}
