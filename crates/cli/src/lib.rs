use std::ffi::OsString;

use tracing::level_filters::LevelFilter;

pub mod commands;

/// Long flags that may also be spelled with a single dash (`-output=diff`, `-dry-run`).
const LONG_FLAGS: &[&str] = &["output", "dry-run", "help", "verbose", "version"];

/// Rewrite single-dash long flags into clap's double-dash form.
///
/// `-output=diff` becomes `--output=diff` and `-dry-run` becomes `--dry-run`.
/// The program name, short flags, unknown flags, and everything after `--`
/// are passed through untouched.
pub fn normalize_flag_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || after_terminator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_terminator = true;
                    arg
                }
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Install the stderr diagnostics subscriber.
///
/// Lines carry no timestamp, level, or target so per-file errors read as plain
/// messages. `verbose` lowers the threshold from WARN to DEBUG.
pub fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .init();
}
