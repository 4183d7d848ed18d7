//! Expansion of command-line patterns into Go file paths.
//!
//! Supported forms:
//! - `./...`, `dir/...`, `dir...`: every `.go` file under `dir`, recursively.
//! - Globs (`*.go`, `pkg/*_test.go`) and plain file paths.
//! - Directories named literally (`.`, `pkg`, `pkg/`): the `.go` files directly
//!   inside them. Directories matched by a wildcard are skipped.
//!
//! Only paths ending in `.go` are returned.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ProcessError, ProcessResult};

const GO_EXTENSION: &str = ".go";
const RECURSIVE_SUFFIX: &str = "...";

/// Files a pattern expanded to, plus any non-fatal walk failures met on the way.
#[derive(Debug, Default)]
pub struct Resolution {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ProcessError>,
}

/// Expand one pattern.
///
/// An invalid glob fails the whole pattern. Unreadable directories met during a
/// recursive walk are recorded in [`Resolution::errors`] and skipped.
pub fn resolve_pattern(pattern: &str) -> ProcessResult<Resolution> {
    if let Some(root) = recursive_root(pattern) {
        let resolution = walk_go_files(&root);
        debug!(
            "{pattern}: {} file(s) found recursively under {}",
            resolution.files.len(),
            root.display()
        );
        return Ok(resolution);
    }

    let paths = glob::glob(pattern)
        .map_err(|source| ProcessError::Glob { pattern: pattern.to_string(), source })?;

    let mut resolution = Resolution::default();
    // Unreadable glob entries are skipped, same as an unmatched path.
    let matches: Vec<PathBuf> = paths.filter_map(Result::ok).collect();

    // Directories are expanded only when named literally; a wildcard that
    // happens to match a directory does not pull in its children.
    let literal = Path::new(pattern.trim_end_matches('/'));
    if matches.is_empty() && !pattern.is_empty() && literal.is_dir() {
        collect_dir_go_files(literal, &mut resolution);
    }

    for path in matches {
        if path.is_dir() {
            if path.as_path() == literal {
                collect_dir_go_files(&path, &mut resolution);
            }
        } else if is_go_file(&path) {
            resolution.files.push(path);
        }
    }

    debug!("{pattern}: {} file(s) matched", resolution.files.len());
    Ok(resolution)
}

/// Root directory of a recursive pattern, or `None` for anything else.
///
/// `./...` and `...` walk `.`; `pkg/...` and `pkg...` walk `pkg`.
pub fn recursive_root(pattern: &str) -> Option<PathBuf> {
    if pattern == "./..." {
        return Some(PathBuf::from("."));
    }
    if !pattern.ends_with(RECURSIVE_SUFFIX) {
        return None;
    }
    let dir = pattern.strip_suffix("/...").unwrap_or(pattern);
    let dir = dir.strip_suffix(RECURSIVE_SUFFIX).unwrap_or(dir);
    Some(if dir.is_empty() { PathBuf::from(".") } else { PathBuf::from(dir) })
}

/// Every `.go` file under `root`, in lexical order.
pub fn walk_go_files(root: &Path) -> Resolution {
    let mut resolution = Resolution::default();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && is_go_file(entry.path()) {
                    resolution.files.push(entry.into_path());
                }
            }
            Err(source) => {
                let dir = source.path().unwrap_or(root).to_path_buf();
                resolution.errors.push(ProcessError::DirWalk { dir, source });
            }
        }
    }
    resolution
}

fn collect_dir_go_files(dir: &Path, resolution: &mut Resolution) {
    let entries = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in entries {
        match entry {
            Ok(entry) if !entry.file_type().is_dir() && is_go_file(entry.path()) => {
                resolution.files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(source) => {
                resolution.errors.push(ProcessError::DirWalk { dir: dir.to_path_buf(), source });
            }
        }
    }
}

fn is_go_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with(GO_EXTENSION)
}
