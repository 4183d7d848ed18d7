//! Go source parsing.
//!
//! Wraps tree-sitter-go and exposes:
//! - `SourceTree`: the original text, its syntax tree, and every comment in the file.
//! - `CommentToken`: one comment occurrence with its delimiters and position.
//!
//! Comments are collected as a flat, source-ordered list no matter where they
//! sit (standalone, trailing, doc comment). Which of them live inside a function
//! body is decided separately by [`crate::scope`].

pub mod cursor;

use tree_sitter::{Parser, Tree};

use crate::error::ParseError;
use cursor::{first_error, for_each_node, node_text, start_line_col};

/// tree-sitter-go node kind for both `//` and `/* */` comments.
const COMMENT_KIND: &str = "comment";

const PACKAGE_KIND: &str = "package_clause";

/// Node kinds Go allows at file level. tree-sitter-go also accepts statements there.
const TOP_LEVEL_KINDS: &[&str] = &[
    PACKAGE_KIND,
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "const_declaration",
    "var_declaration",
    "type_declaration",
    COMMENT_KIND,
];

/// One comment in a source file, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    /// Current text. Equal to the source slice unless `modified` is set.
    pub text: String,
    /// Byte offset of the first delimiter character in the original source.
    pub start: usize,
    /// Byte offset one past the last comment byte in the original source.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based byte column of `start`.
    pub column: usize,
    /// Set once the text has been rewritten.
    pub modified: bool,
}

impl CommentToken {
    /// `/* ... */` rather than `// ...`.
    pub fn is_block(&self) -> bool {
        self.text.starts_with("/*")
    }

    /// Copy of this token carrying `text` and marked as modified.
    pub fn rewritten(&self, text: String) -> Self {
        Self { text, modified: true, ..self.clone() }
    }
}

/// Parsed representation of one Go file.
///
/// Owned by the per-file pipeline and dropped when that file is done.
#[derive(Debug, Clone)]
pub struct SourceTree {
    source: String,
    tree: Tree,
    comments: Vec<CommentToken>,
}

impl SourceTree {
    /// Parse Go source text.
    ///
    /// Any error or missing node in the resulting tree is reported as a
    /// `ParseError` pointing at the first offending token. So is a file without
    /// a leading package clause or with statements at file level.
    pub fn parse(source: impl Into<String>) -> Result<Self, ParseError> {
        let source = source.into();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| ParseError::new(1, 1, format!("failed to load Go grammar: {e}")))?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::new(1, 1, "parser produced no tree"))?;

        if let Some(bad) = first_error(tree.root_node()) {
            let (line, column) = start_line_col(&bad);
            let message = if bad.is_missing() {
                format!("missing `{}`", bad.kind())
            } else {
                describe_unexpected(node_text(&bad, &source))
            };
            return Err(ParseError::new(line, column, message));
        }
        check_top_level(&tree, &source)?;

        let comments = collect_comments(&tree, &source);
        Ok(Self { source, tree, comments })
    }

    /// The original, unmodified source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The underlying tree-sitter tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// All comments, in source order.
    pub fn comments(&self) -> &[CommentToken] {
        &self.comments
    }

    /// Replace the comment list, keeping source and tree.
    ///
    /// The new list must describe the same spans as the old one; only text and
    /// the `modified` flag are expected to differ.
    pub fn with_comments(self, comments: Vec<CommentToken>) -> Self {
        debug_assert_eq!(comments.len(), self.comments.len());
        Self { comments, ..self }
    }

    /// Whether any comment has been rewritten.
    pub fn is_modified(&self) -> bool {
        self.comments.iter().any(|c| c.modified)
    }

    /// Number of rewritten comments.
    pub fn modified_count(&self) -> usize {
        self.comments.iter().filter(|c| c.modified).count()
    }
}

fn collect_comments(tree: &Tree, source: &str) -> Vec<CommentToken> {
    let mut comments = Vec::new();
    for_each_node(tree, |node| {
        if node.kind() != COMMENT_KIND {
            return;
        }
        let (line, column) = start_line_col(&node);
        comments.push(CommentToken {
            text: node_text(&node, source).to_string(),
            start: node.start_byte(),
            end: node.end_byte(),
            line,
            column,
            modified: false,
        });
    });
    comments
}

/// A package clause first, then only declarations.
fn check_top_level(tree: &Tree, source: &str) -> Result<(), ParseError> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let mut seen_package = false;
    for child in root.named_children(&mut cursor) {
        let kind = child.kind();
        if kind == COMMENT_KIND {
            continue;
        }
        if !seen_package {
            if kind != PACKAGE_KIND {
                let (line, column) = start_line_col(&child);
                return Err(ParseError::new(line, column, "expected `package` clause"));
            }
            seen_package = true;
            continue;
        }
        if kind == PACKAGE_KIND || !TOP_LEVEL_KINDS.contains(&kind) {
            let (line, column) = start_line_col(&child);
            let unexpected = describe_unexpected(node_text(&child, source));
            let message = format!("{unexpected} outside function body");
            return Err(ParseError::new(line, column, message));
        }
    }
    if seen_package {
        Ok(())
    } else {
        let point = root.end_position();
        Err(ParseError::new(point.row + 1, point.column + 1, "expected `package` clause"))
    }
}

fn describe_unexpected(text: &str) -> String {
    let snippet: String = text.lines().next().unwrap_or_default().chars().take(24).collect();
    if snippet.trim().is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected `{}`", snippet.trim())
    }
}
