//! comment-lower-core
//!
//! Core library for lowercasing the comments that live inside Go function bodies.
//!
//! Pipeline per file:
//! - `parser`: Go source → `SourceTree` (tree-sitter-go) with a flat comment list
//! - `scope`: which comments sit inside a function body
//! - `transform`: lowercase those comments, delimiters untouched
//! - `render`: splice the new text back in and write, print, or diff it
//!
//! `resolve` turns command-line patterns into file lists and `process` ties the
//! steps together. Frontends only need `RunConfig`, `resolve_pattern` and
//! `process_file`.

pub mod config;
pub mod error;
pub mod parser;
pub mod process;
pub mod render;
pub mod resolve;
pub mod scope;
pub mod transform;

pub use config::{OutputMode, RunConfig};
pub use error::{ParseError, ProcessError, ProcessResult};
pub use parser::{CommentToken, SourceTree};
pub use process::{process_file, FileOutcome};
pub use resolve::{resolve_pattern, Resolution};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
