//! Comment lowercasing.

use tracing::debug;

use crate::parser::SourceTree;
use crate::scope;

/// Lowercase a comment's text, leaving its delimiters byte-identical.
///
/// `// Foo` becomes `// foo` and `/* Foo\n Bar */` becomes `/* foo\n bar */`.
/// Text that is neither form is returned as is. Applying this twice gives the
/// same result as applying it once.
pub fn lowercase_comment(comment: &str) -> String {
    if let Some(content) = comment.strip_prefix("//") {
        return format!("//{}", lowercase_chars(content));
    }
    if let Some(content) = comment.strip_prefix("/*").and_then(|rest| rest.strip_suffix("*/")) {
        return format!("/*{}*/", lowercase_chars(content));
    }
    comment.to_string()
}

/// Char-by-char simple lowercase mapping: one char in, one char out.
///
/// Unlike `str::to_lowercase` there is no final-sigma context (`ΟΔΟΣ` gives
/// `οδοσ`), and `İ` maps to a plain `i` without a combining dot.
fn lowercase_chars(text: &str) -> String {
    text.chars().map(|c| c.to_lowercase().next().unwrap_or(c)).collect()
}

/// Rewrite every comment inside a function body.
///
/// Builds a new comment list: inside-function comments whose lowercase form
/// differs are replaced by modified copies, everything else is carried over.
/// Already-lowercase comments are not marked as modified.
pub fn lowercase_function_comments(tree: SourceTree) -> SourceTree {
    let inside = scope::classify(&tree);
    let comments = tree
        .comments()
        .iter()
        .zip(inside)
        .map(|(comment, inside)| {
            if !inside {
                return comment.clone();
            }
            let lower = lowercase_comment(&comment.text);
            if lower == comment.text {
                comment.clone()
            } else {
                debug!("lowercasing comment at {}:{}", comment.line, comment.column);
                comment.rewritten(lower)
            }
        })
        .collect();
    tree.with_comments(comments)
}
