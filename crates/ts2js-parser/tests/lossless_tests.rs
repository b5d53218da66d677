//! Concatenating every token with its leading trivia reproduces the input.

use ts2js_parser::{NodeKind, SyntaxTree, parse};

fn reprint(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    for node in tree.arena.descendants(tree.root) {
        if !tree.arena.kind(node).is_some_and(NodeKind::is_token) {
            continue;
        }
        let n = &tree.arena[node];
        out.push_str(&tree.source[n.pos as usize..n.end as usize]);
    }
    out
}

fn assert_lossless(file_name: &str, source: &str) {
    let tree = parse(file_name, source).expect("parse");
    assert_eq!(reprint(&tree), source);
    let root = &tree.arena[tree.root];
    assert_eq!(root.pos, 0);
    assert_eq!(root.end as usize, source.len());
}

#[test]
fn test_comments_and_blank_lines() {
    assert_lossless(
        "a.ts",
        "#!/usr/bin/env node\n/// <reference types=\"node\" />\n\n/** doc */\nexport const a = 1; // trailing\n\n\n/* block */ let b;\n// end\n",
    );
}

#[test]
fn test_line_endings_and_whitespace() {
    assert_lossless("a.ts", "let a = 1;\r\nlet b = 2;\r\n\tif (a) {\r\n\t\tb++;\r\n\t}\r\n");
    assert_lossless("a.ts", "");
    assert_lossless("a.ts", "   \n\n");
}

#[test]
fn test_byte_order_mark_and_unicode() {
    assert_lossless("a.ts", "\u{feff}const caf\u{e9} = \"\u{1f600}\";\nconst \u{3c0} = 3.14;\n");
}

#[test]
fn test_templates_and_regular_expressions() {
    assert_lossless(
        "a.ts",
        "const s = `a ${b + `nested ${c}`} d`;\nconst r = /[/]+\\d/gu.test(s) ? 1 / 2 : 3;\n",
    );
}

#[test]
fn test_type_heavy_source() {
    assert_lossless(
        "a.ts",
        "export interface Box<T> {\n  value: T; // the value\n}\nexport function open<T>(box: Box<T> /* in */): T {\n  return box.value as T;\n}\n",
    );
}

#[test]
fn test_jsx_source() {
    assert_lossless(
        "a.tsx",
        "const el = (\n  <List items={items as Item[]}>\n    {/* comment */}\n    text &amp; more\n    <Item key=\"a\" {...rest} />\n  </List>\n);\n",
    );
}
