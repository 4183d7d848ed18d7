use std::ffi::OsString;
use std::fs;

use comment_lower::commands::{process_patterns_command, RunSummary};
use comment_lower::normalize_flag_args;
use comment_lower_core::{OutputMode, RunConfig};
use tempfile::tempdir;

fn normalized(args: &[&str]) -> Vec<OsString> {
    normalize_flag_args(args.iter().copied())
}

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn single_dash_long_flags_gain_a_dash() {
    assert_eq!(
        normalized(&["comment-lower", "-output=diff", "-dry-run", "-help", "-verbose"]),
        os(&["comment-lower", "--output=diff", "--dry-run", "--help", "--verbose"])
    );
    assert_eq!(
        normalized(&["comment-lower", "-output", "print", "main.go"]),
        os(&["comment-lower", "--output", "print", "main.go"])
    );
}

#[test]
fn other_arguments_pass_through() {
    assert_eq!(
        normalized(&["comment-lower", "--output=print", "-h", "-x", "main.go", "./..."]),
        os(&["comment-lower", "--output=print", "-h", "-x", "main.go", "./..."])
    );
}

#[test]
fn arguments_after_terminator_are_untouched() {
    assert_eq!(
        normalized(&["comment-lower", "--", "-output=diff"]),
        os(&["comment-lower", "--", "-output=diff"])
    );
}

#[test]
fn process_patterns_counts_files_modifications_and_errors() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.go"), "package a\n\nfunc A() {\n\t// Upper\n}\n").expect("write");
    fs::write(dir.path().join("b.go"), "package a\n\nfunc B() {\n\t// lower\n}\n").expect("write");
    fs::write(dir.path().join("c.go"), "package a\n\nfunc C( {\n").expect("write");

    let config = RunConfig::new(
        OutputMode::Print,
        false,
        vec![format!("{}/*.go", dir.path().display()), "[".to_string()],
    );
    let mut out = Vec::new();
    let summary = process_patterns_command(&config, &mut out).expect("run");

    assert_eq!(summary, RunSummary { files: 3, modified: 1, errors: 2 });
    assert_eq!(String::from_utf8(out).expect("utf8"), "package a\n\nfunc A() {\n\t// upper\n}\n");
}

#[test]
fn dry_run_config_never_writes() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("a.go");
    let source = "package a\n\nfunc A() {\n\t/* Upper */\n}\n";
    fs::write(&file, source).expect("write");

    let config = RunConfig::new(OutputMode::Inplace, true, vec![file.display().to_string()]);
    let mut out = Vec::new();
    let summary = process_patterns_command(&config, &mut out).expect("run");

    assert_eq!(summary.modified, 1);
    assert_eq!(fs::read_to_string(&file).expect("read"), source);
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("- \t/* Upper */\n+ \t/* upper */\n"), "unexpected diff: {text}");
}
