//! Core library for extracting timeline clips from a video-editing project.
//!
//! This crate parses an MLT-style project document, resolves every clip
//! instance placed on the timeline against its producer definition, converts
//! frame ranges to time offsets, and runs ffmpeg in lossless stream-copy mode
//! to write each clip out as a standalone file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cliprip_core::{Project, SidecarSpawner, plan_jobs, run_extractions};
//! use std::path::Path;
//!
//! let project = Project::load(Path::new("edit.mlt")).unwrap();
//! let jobs = plan_jobs(&project, Path::new("clips")).unwrap();
//! let summary = run_extractions(&SidecarSpawner, &jobs);
//! println!("{} job(s), {} error(s)", summary.total_jobs, summary.error_count);
//! ```

pub mod error;
pub mod external;
pub mod planning;
pub mod processing;
pub mod project;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::{SidecarSpawner, check_dependency};
pub use planning::{ExtractionJob, plan_jobs};
pub use processing::{RunSummary, run_extractions};
pub use project::{PlaylistEntry, Producer, Profile, Project};
