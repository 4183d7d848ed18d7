use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Where rewritten source goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Overwrite the original file.
    #[default]
    Inplace,
    /// Print the rewritten file to the output stream.
    Print,
    /// Print a line-level diff against the original.
    Diff,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Inplace => "inplace",
            OutputMode::Print => "print",
            OutputMode::Diff => "diff",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid output mode '{0}'. Allowed: inplace, print, diff")]
pub struct UnknownOutputMode(pub String);

impl FromStr for OutputMode {
    type Err = UnknownOutputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inplace" => Ok(OutputMode::Inplace),
            "print" => Ok(OutputMode::Print),
            "diff" => Ok(OutputMode::Diff),
            other => Err(UnknownOutputMode(other.to_string())),
        }
    }
}

/// Settings for one invocation, built once from arguments and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: OutputMode,
    /// File, glob, directory, or recursive (`...`) patterns. Never empty.
    pub patterns: Vec<String>,
}

impl RunConfig {
    /// `dry_run` forces [`OutputMode::Diff`]; no patterns means the current directory.
    pub fn new(mode: OutputMode, dry_run: bool, patterns: Vec<String>) -> Self {
        let mode = if dry_run { OutputMode::Diff } else { mode };
        let patterns = if patterns.is_empty() { vec![".".to_string()] } else { patterns };
        Self { mode, patterns }
    }
}
