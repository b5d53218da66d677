//! Comment handling around removed syntax.

use ts2js_emitter::{StripOptions, print, strip};
use ts2js_parser::parse;

fn convert(source: &str) -> String {
    let tree = parse("test.ts", source).expect("parse");
    let output = strip(&tree, &StripOptions::default());
    print(&output.tree, &tree.source)
}

#[test]
fn test_doc_comment_goes_with_removed_declaration() {
    assert_eq!(
        convert("/** Shape. */\ninterface Shape {}\nconst a = 1;\n"),
        "const a = 1;\n"
    );
}

#[test]
fn test_detached_comment_is_kept() {
    assert_eq!(
        convert("// Types\n\ninterface Shape {}\nconst a = 1;\n"),
        "// Types\n\nconst a = 1;\n"
    );
}

#[test]
fn test_triple_slash_directive_is_kept() {
    assert_eq!(
        convert("/// <reference types=\"node\" />\ninterface A {}\nconst a = 1;\n"),
        "/// <reference types=\"node\" />\nconst a = 1;\n"
    );
}

#[test]
fn test_comment_inside_annotation_moves_forward() {
    assert_eq!(convert("let x: /* n */ number = 1;\n"), "let x /* n */ = 1;\n");
}

#[test]
fn test_comments_on_kept_code_are_untouched() {
    let source = "/** Adds. */\nfunction add(a /* left */, b) {\n  // sum\n  return a + b;\n}\n";
    assert_eq!(convert(source), source);
}

#[test]
fn test_removed_member_gives_way_to_next_comment() {
    let source = "class A {\n    /** The id. */\n    id: string;\n\n    // helpers\n    run() {}\n}\n";
    assert_eq!(convert(source), "class A {\n    // helpers\n    run() {}\n}\n");
}
