//! Single-file pipeline: read, parse, lowercase, render, emit.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::OutputMode;
use crate::error::{ParseError, ProcessError, ProcessResult};
use crate::parser::SourceTree;
use crate::render::{emit, render};
use crate::transform::lowercase_function_comments;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No comment needed rewriting. Nothing was written or printed.
    Unchanged,
    /// `comments` comments were rewritten and the result was emitted.
    Modified { comments: usize },
}

impl FileOutcome {
    pub fn is_modified(self) -> bool {
        matches!(self, FileOutcome::Modified { .. })
    }
}

/// Lowercase the in-function comments of a source string.
///
/// Returns `None` when nothing changed, otherwise the rewritten source and the
/// number of rewritten comments.
pub fn lowercase_source(source: &str) -> Result<Option<(String, usize)>, ParseError> {
    let tree = lowercase_function_comments(SourceTree::parse(source)?);
    if !tree.is_modified() {
        return Ok(None);
    }
    Ok(Some((render(&tree), tree.modified_count())))
}

/// Run the whole pipeline for `path`, sending any output to `out`.
pub fn process_file(
    path: &Path,
    mode: OutputMode,
    out: &mut dyn Write,
) -> ProcessResult<FileOutcome> {
    let bytes = fs::read(path)
        .map_err(|source| ProcessError::Read { path: path.to_path_buf(), source })?;
    let original = String::from_utf8(bytes).map_err(|err| ProcessError::Parse {
        path: path.to_path_buf(),
        source: invalid_utf8(err.as_bytes(), err.utf8_error().valid_up_to()),
    })?;

    let tree = SourceTree::parse(original)
        .map_err(|source| ProcessError::Parse { path: path.to_path_buf(), source })?;
    let tree = lowercase_function_comments(tree);

    if !tree.is_modified() {
        debug!("{}: no comments to change", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    let comments = tree.modified_count();
    debug!("{}: {comments} comment(s) lowercased, emitting as {mode}", path.display());
    let rendered = render(&tree);
    emit(mode, path, tree.source(), &rendered, out)?;

    Ok(FileOutcome::Modified { comments })
}

/// Parse error pointing at the first byte that is not valid UTF-8.
fn invalid_utf8(bytes: &[u8], valid_up_to: usize) -> ParseError {
    let prefix = &bytes[..valid_up_to];
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    ParseError::new(line, valid_up_to - line_start + 1, "invalid UTF-8 encoding")
}
