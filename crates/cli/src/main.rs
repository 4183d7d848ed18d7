use std::io;

use anyhow::Result;
use clap::Parser;
use comment_lower::commands::process_patterns_command;
use comment_lower::{init_logging, normalize_flag_args};
use comment_lower_core::{OutputMode, RunConfig};

const EXAMPLES: &str = "\
Examples:
  comment-lower                        # Process all .go files in current directory
  comment-lower file.go                # Process specific file
  comment-lower ./...                  # Process all .go files recursively
  comment-lower -output=print file.go  # Print modified file to stdout
  comment-lower -output=diff *.go      # Show diff for all .go files";

/// Convert in-function comments to lowercase.
///
/// Only comments inside Go function bodies are touched; package, type and
/// declaration comments are left alone. Flags accept Go-style single dashes
/// (`-output=diff`) as well as `--output=diff`.
#[derive(Parser, Debug)]
#[command(
    name = "comment-lower",
    version,
    about = "Convert in-function comments to lowercase",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Output mode: inplace, print, diff.
    #[arg(long, value_name = "MODE", default_value = "inplace")]
    output: OutputMode,

    /// Don't modify files, just show what would be changed (same as -output=diff).
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Log per-file decisions to stderr.
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Files, globs, directories, or recursive patterns (`./...`). Defaults to `.`.
    #[arg(value_name = "FILE/PATTERN")]
    patterns: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_flag_args(std::env::args_os()));
    init_logging(cli.verbose);

    let config = RunConfig::new(cli.output, cli.dry_run, cli.patterns);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    process_patterns_command(&config, &mut out)?;

    Ok(())
}
