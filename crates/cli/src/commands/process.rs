use std::io::Write;

use anyhow::{Context, Result};
use comment_lower_core::{process_file, resolve_pattern, FileOutcome, ProcessError, RunConfig};
use tracing::{debug, error};

/// Totals for one invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files handed to the pipeline.
    pub files: usize,
    /// Files with at least one rewritten comment.
    pub modified: usize,
    /// Per-pattern and per-file failures that were reported and skipped.
    pub errors: usize,
}

/// Process every pattern of `config` in order, writing results to `out`.
///
/// Bad patterns, unreadable directories, unparsable files and failed writes are
/// logged and skipped. Only a failure to write to `out` itself aborts the run.
pub fn process_patterns_command(config: &RunConfig, out: &mut dyn Write) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for pattern in &config.patterns {
        let resolution = match resolve_pattern(pattern) {
            Ok(resolution) => resolution,
            Err(err) => {
                error!("{err}");
                summary.errors += 1;
                continue;
            }
        };

        for err in &resolution.errors {
            error!("{err}");
        }
        summary.errors += resolution.errors.len();

        for path in &resolution.files {
            summary.files += 1;
            match process_file(path, config.mode, out) {
                Ok(FileOutcome::Modified { .. }) => summary.modified += 1,
                Ok(FileOutcome::Unchanged) => {}
                Err(err @ ProcessError::Output { .. }) => {
                    return Err(err).context("Failed to write to the output stream");
                }
                Err(err) => {
                    error!("{err}");
                    summary.errors += 1;
                }
            }
        }
    }

    debug!(
        "{} file(s) processed, {} modified, {} error(s)",
        summary.files, summary.modified, summary.errors
    );
    Ok(summary)
}
