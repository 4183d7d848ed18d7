//! Function-body containment.
//!
//! A comment is "inside a function" when its first byte lies within the body
//! of any function-like declaration, braces included:
//! `body_start <= comment.start <= body_end`.
//!
//! Nested function literals need no special handling. Their bodies sit inside
//! the enclosing body, so membership in any span is enough.

use crate::parser::cursor::for_each_node;
use crate::parser::SourceTree;

/// Node kinds that declare a callable with a `body` field.
const FUNCTION_KINDS: &[&str] = &["function_declaration", "method_declaration", "func_literal"];

/// Byte range of one function body, from its `{` to its `}` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpan {
    pub start: usize,
    pub end: usize,
}

impl FunctionSpan {
    /// Every function body in the tree, found in a single pre-order pass.
    ///
    /// Declarations without a body (e.g. `func now() int64` implemented in
    /// assembly) contribute nothing.
    pub fn collect(tree: &SourceTree) -> Vec<FunctionSpan> {
        let mut spans = Vec::new();
        for_each_node(tree.tree(), |node| {
            if !FUNCTION_KINDS.contains(&node.kind()) {
                return;
            }
            if let Some(body) = node.child_by_field_name("body") {
                // end_byte is exclusive; the closing brace is the byte before it.
                spans.push(FunctionSpan {
                    start: body.start_byte(),
                    end: body.end_byte().saturating_sub(1),
                });
            }
        });
        spans
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Whether `offset` falls inside at least one span. Stops at the first match.
pub fn is_inside_function(spans: &[FunctionSpan], offset: usize) -> bool {
    spans.iter().any(|span| span.contains(offset))
}

/// Inside/outside verdict for every comment of `tree`, in comment order.
pub fn classify(tree: &SourceTree) -> Vec<bool> {
    let spans = FunctionSpan::collect(tree);
    tree.comments().iter().map(|c| is_inside_function(&spans, c.start)).collect()
}
