//! Generic tree-sitter traversal helpers.

use tree_sitter::{Node, Tree};

/// Visit every node of `tree` in pre-order (source order).
pub fn for_each_node<'tree>(tree: &'tree Tree, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = tree.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// First error or missing node under `node`, descending only into subtrees that contain one.
pub fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Source text covered by a node.
pub fn node_text<'a>(node: &Node<'_>, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// 1-based (line, column) of a node's first byte.
pub fn start_line_col(node: &Node<'_>) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column + 1)
}
