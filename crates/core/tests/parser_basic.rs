use comment_lower_core::{version, SourceTree};

const SAMPLE: &str = r#"// Package demo Does Things.
package demo

import "fmt"

// Greet Prints A Greeting.
func Greet(name string) {
	// Say Hello
	fmt.Println("Hello, // Not A Comment") // Trailing Note
	/* Block
	   Comment */
}
"#;

#[test]
fn version_is_non_empty() {
    assert!(!version().is_empty());
}

#[test]
fn parse_collects_every_comment_in_source_order() {
    let tree = SourceTree::parse(SAMPLE).expect("parse sample");
    let texts: Vec<&str> = tree.comments().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "// Package demo Does Things.",
            "// Greet Prints A Greeting.",
            "// Say Hello",
            "// Trailing Note",
            "/* Block\n\t   Comment */",
        ]
    );
}

#[test]
fn comment_positions_point_at_the_delimiter() {
    let tree = SourceTree::parse(SAMPLE).expect("parse sample");
    for comment in tree.comments() {
        assert_eq!(&SAMPLE[comment.start..comment.end], comment.text);
        assert!(!comment.modified);
    }

    let say_hello = &tree.comments()[2];
    assert_eq!(say_hello.line, 8);
    assert_eq!(say_hello.column, 2);

    let block = &tree.comments()[4];
    assert!(block.is_block());
    assert!(!say_hello.is_block());
}

#[test]
fn string_literals_that_look_like_comments_are_not_comments() {
    let tree = SourceTree::parse(SAMPLE).expect("parse sample");
    assert!(tree.comments().iter().all(|c| !c.text.contains("Not A Comment")));
}

#[test]
fn fresh_tree_is_not_modified() {
    let tree = SourceTree::parse(SAMPLE).expect("parse sample");
    assert!(!tree.is_modified());
    assert_eq!(tree.modified_count(), 0);
    assert_eq!(tree.source(), SAMPLE);
}

#[test]
fn file_without_comments_has_empty_comment_list() {
    let tree = SourceTree::parse("package demo\n\nfunc F() {}\n").expect("parse");
    assert!(tree.comments().is_empty());
}

#[test]
fn invalid_source_is_a_parse_error() {
    let err = SourceTree::parse("package demo\n\nfunc Broken( {\n\tx :=\n").unwrap_err();
    assert!(err.line >= 1);
    assert!(err.column >= 1);
    assert!(!err.message.is_empty());
    assert!(err.to_string().contains("at line"), "unexpected error: {err}");
}

#[test]
fn unbalanced_braces_are_a_parse_error() {
    let result = SourceTree::parse("package demo\n\nfunc F() {\n\t// Open\n");
    assert!(result.is_err(), "missing closing brace should not parse");
}

#[test]
fn file_without_package_clause_is_a_parse_error() {
    let err = SourceTree::parse("func F() {\n\t// Hello\n}\n").unwrap_err();
    assert_eq!((err.line, err.column), (1, 1));
    assert!(err.message.contains("package"), "unexpected error: {err}");
}

#[test]
fn empty_file_is_a_parse_error() {
    let err = SourceTree::parse("").unwrap_err();
    assert!(err.message.contains("package"), "unexpected error: {err}");

    let only_comment = SourceTree::parse("// Just A Comment\n");
    assert!(only_comment.is_err(), "comment-only file has no package clause");
}

#[test]
fn statements_at_file_level_are_a_parse_error() {
    let err = SourceTree::parse("package demo\n\nx := 1\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("outside function body"), "unexpected error: {err}");
}

#[test]
fn second_package_clause_is_a_parse_error() {
    assert!(SourceTree::parse("package demo\n\npackage other\n").is_err());
}
