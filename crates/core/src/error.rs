//! Error types shared by the parser, the output driver, and the pattern resolver.
//!
//! Every error here is scoped to a single unit of work (one file or one pattern).
//! Frontends report them and move on to the next unit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The source text is not syntactically valid Go.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    /// 1-based line of the first offending token.
    pub line: usize,
    /// 1-based column (in bytes) of the first offending token.
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self { line, column, message: message.into() }
    }
}

/// Error type for processing a single file or pattern.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The file could not be parsed; it is skipped.
    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The original file could not be read.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rewritten file could not be opened or written.
    #[error("Error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Printing to the output stream (stdout in the CLI) failed.
    #[error("Error writing output for {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pattern is not a valid glob.
    #[error("Error globbing pattern {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Part of a recursive directory walk failed; only that subtree is skipped.
    #[error("Error walking directory {}: {source}", dir.display())]
    DirWalk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Convenience result type for processing operations.
pub type ProcessResult<T> = Result<T, ProcessError>;
