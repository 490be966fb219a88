//! Implementation of the extraction run.
//!
//! Validates the input and output paths before anything is parsed, loads the
//! project, plans the jobs, and hands them to the core job runner.

use std::fs;

use log::info;

use cliprip_core::{
    CoreError, CoreResult, Project, RunSummary, SidecarSpawner, check_dependency, plan_jobs,
    run_extractions,
};

use crate::cli::Cli;

/// Runs the whole pipeline for one invocation and returns the summary.
pub fn run_extract(args: &Cli) -> CoreResult<RunSummary> {
    validate_paths(args)?;

    let project = Project::load(&args.project_file)?;
    let jobs = plan_jobs(&project, &args.output_dir)?;
    info!(
        "Found {} clip(s) to extract from {}",
        jobs.len(),
        args.project_file.display()
    );

    if jobs.is_empty() {
        return Ok(RunSummary::default());
    }

    check_dependency("ffmpeg")?;
    Ok(run_extractions(&SidecarSpawner, &jobs))
}

/// Pre-flight checks, performed before the document is even opened.
fn validate_paths(args: &Cli) -> CoreResult<()> {
    let metadata = fs::metadata(&args.project_file).map_err(|e| {
        CoreError::PathError(format!(
            "Cannot access project file '{}': {}",
            args.project_file.display(),
            e
        ))
    })?;
    if !metadata.is_file() {
        return Err(CoreError::PathError(format!(
            "Project path '{}' is not a regular file",
            args.project_file.display()
        )));
    }

    if args.output_dir.exists() {
        if !args.output_dir.is_dir() {
            return Err(CoreError::PathError(format!(
                "Output path '{}' is not a directory",
                args.output_dir.display()
            )));
        }
    } else {
        fs::create_dir_all(&args.output_dir).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create output directory '{}': {}",
                args.output_dir.display(),
                e
            ))
        })?;
    }

    Ok(())
}
