//! Re-serialization and output dispatch.
//!
//! Rendering splices each comment's current text into the original source.
//! Bytes outside comment spans are copied verbatim, so identifiers, literals
//! and layout come out exactly as they went in.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::OutputMode;
use crate::error::{ProcessError, ProcessResult};
use crate::parser::SourceTree;

/// Source text of `tree` with every comment replaced by its current text.
pub fn render(tree: &SourceTree) -> String {
    let source = tree.source();
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for comment in tree.comments() {
        out.push_str(&source[cursor..comment.start]);
        out.push_str(&comment.text);
        cursor = comment.end;
    }
    out.push_str(&source[cursor..]);
    out
}

/// Positional line comparison.
///
/// Line `i` of `original` is paired with line `i` of `modified`. Differing
/// pairs are emitted as `- old` then `+ new`; lines past the end of the shorter
/// side are pure removals or additions. This is not an LCS diff.
pub fn simple_diff(original: &str, modified: &str) -> String {
    let orig_lines: Vec<&str> = original.split('\n').collect();
    let mod_lines: Vec<&str> = modified.split('\n').collect();

    let mut diff = String::new();
    for i in 0..orig_lines.len().max(mod_lines.len()) {
        match (orig_lines.get(i), mod_lines.get(i)) {
            (None, Some(added)) => {
                diff.push_str(&format!("+ {added}\n"));
            }
            (Some(removed), None) => {
                diff.push_str(&format!("- {removed}\n"));
            }
            (Some(old), Some(new)) if old != new => {
                diff.push_str(&format!("- {old}\n"));
                diff.push_str(&format!("+ {new}\n"));
            }
            _ => {}
        }
    }
    diff
}

/// Dispatch rendered text for `path` according to `mode`.
///
/// - `Inplace` truncates and rewrites the file, then reports `Updated: <path>` on `out`.
/// - `Print` writes the rendered text to `out`.
/// - `Diff` writes a header and the [`simple_diff`] of `original` vs `rendered` to `out`.
pub fn emit(
    mode: OutputMode,
    path: &Path,
    original: &str,
    rendered: &str,
    out: &mut dyn Write,
) -> ProcessResult<()> {
    let output_err = |source: io::Error| ProcessError::Output { path: path.to_path_buf(), source };

    match mode {
        OutputMode::Inplace => {
            write_file(path, rendered)?;
            writeln!(out, "Updated: {}", path.display()).map_err(output_err)?;
        }
        OutputMode::Print => {
            out.write_all(rendered.as_bytes()).map_err(output_err)?;
        }
        OutputMode::Diff => {
            writeln!(out, "--- {} (original)", path.display()).map_err(output_err)?;
            writeln!(out, "+++ {} (modified)", path.display()).map_err(output_err)?;
            writeln!(out, "{}", simple_diff(original, rendered)).map_err(output_err)?;
        }
    }
    out.flush().map_err(output_err)
}

fn write_file(path: &Path, contents: &str) -> ProcessResult<()> {
    let write_err = |source: io::Error| ProcessError::Write { path: path.to_path_buf(), source };
    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)
}
