use std::sync::Arc;

use crate::parser::{LanguageVariant, NodeArena, NodeFlags, NodeIndex, NodeKind, ParserState};
use ts2js_scanner::SyntaxKind;

fn parse_source(source: &str) -> (NodeArena, NodeIndex) {
    let mut parser = ParserState::new("test.ts", Arc::from(source), LanguageVariant::Standard);
    let root = parser.parse_source_file().expect("parse");
    (parser.into_parts().0, root)
}

#[test]
fn test_first_and_last_token() {
    let source = "  let a = 1;";
    let (arena, root) = parse_source(source);
    let statement = arena.children(root)[0];
    let first = arena.first_token(statement);
    assert!(arena.is_token_of(first, SyntaxKind::LetKeyword));
    assert_eq!(arena.leading_trivia(source, first), "  ");
    let last = arena.last_token(statement);
    assert!(arena.is_token_of(last, SyntaxKind::SemicolonToken));
}

#[test]
fn test_leading_trivia_override_and_synthetic() {
    let source = "a;";
    let (mut arena, root) = parse_source(source);
    let token = arena.first_token(root);
    arena[token].leading_trivia = Some("\n".into());
    assert_eq!(arena.leading_trivia(source, token), "\n");

    let synthetic = arena.add_synthetic("b;", 0);
    assert_eq!(arena.leading_trivia(source, synthetic), "");
    assert!(arena[synthetic].flags.contains(NodeFlags::SYNTHETIC));
}

#[test]
fn test_node_and_identifier_text() {
    let source = "const answer = 42;";
    let (arena, root) = parse_source(source);
    let statement = arena.children(root)[0];
    assert_eq!(arena.node_text(source, statement), source);
    let name = arena
        .descendants(root)
        .into_iter()
        .find(|&n| arena.identifier_text(source, n).is_some())
        .expect("identifier");
    assert_eq!(arena.identifier_text(source, name), Some("answer"));
}

#[test]
fn test_descendants_are_in_document_order() {
    let source = "f(a, b);";
    let (arena, root) = parse_source(source);
    let tokens: Vec<&str> = arena
        .descendants(root)
        .into_iter()
        .filter(|&n| arena.kind(n).is_some_and(NodeKind::is_token))
        .map(|n| arena.node_text(source, n))
        .collect();
    assert_eq!(tokens, vec!["f", "(", "a", ",", "b", ")", ";", ""]);
}

#[test]
fn test_count_kind_and_mark_dirty() {
    let (mut arena, root) = parse_source("let a: A; let b: B;");
    assert_eq!(arena.count_kind(root, NodeKind::TypeAnnotation), 2);
    assert_eq!(arena.count_kind(root, NodeKind::VariableStatement), 2);
    assert!(!arena[root].is_dirty());
    arena.mark_dirty(root);
    assert!(arena[root].is_dirty());
}
