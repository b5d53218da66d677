//! Tests for tree shapes produced by the parser.
use std::sync::Arc;

use crate::parser::{LanguageVariant, NodeArena, NodeIndex, NodeKind, ParserState};
use ts2js_scanner::SyntaxKind;

fn parse_source(source: &str) -> (NodeArena, NodeIndex) {
    let mut parser = ParserState::new("test.ts", Arc::from(source), LanguageVariant::Standard);
    let root = parser.parse_source_file().expect("parse");
    let (arena, _) = parser.into_parts();
    (arena, root)
}

fn first_statement(arena: &NodeArena, root: NodeIndex) -> NodeIndex {
    arena.children(root)[0]
}

fn kinds(arena: &NodeArena, node: NodeIndex) -> Vec<NodeKind> {
    arena.children(node).iter().filter_map(|&c| arena.kind(c)).collect()
}

#[test]
fn parse_source_file_ends_with_end_of_file_token() {
    let (arena, root) = parse_source("a;\nb;\n");
    assert_eq!(arena.kind(root), Some(NodeKind::SourceFile));
    let children = arena.children(root);
    assert_eq!(children.len(), 3);
    assert!(arena.is_token_of(children[2], SyntaxKind::EndOfFileToken));
}

#[test]
fn parse_variable_declaration_with_annotation() {
    let (arena, root) = parse_source("let x: number = 1;");
    let statement = first_statement(&arena, root);
    assert_eq!(arena.kind(statement), Some(NodeKind::VariableStatement));
    let list = arena.children(statement)[0];
    let declaration = arena.children(list)[1];
    assert_eq!(
        kinds(&arena, declaration),
        vec![
            NodeKind::Token(SyntaxKind::Identifier),
            NodeKind::TypeAnnotation,
            NodeKind::Token(SyntaxKind::EqualsToken),
            NodeKind::Token(SyntaxKind::NumericLiteral),
        ]
    );
}

#[test]
fn parse_function_overload_has_no_body() {
    let (arena, root) = parse_source("function f(a: string): void;\nfunction f(a) {}");
    let overload = first_statement(&arena, root);
    assert_eq!(arena.kind(overload), Some(NodeKind::FunctionDeclaration));
    assert!(arena.child_of_kind(overload, NodeKind::Block).is_none());
    assert!(arena.child_of_kind(overload, NodeKind::TypeAnnotation).is_some());
    let implementation = arena.children(root)[1];
    assert!(arena.child_of_kind(implementation, NodeKind::Block).is_some());
}

#[test]
fn parse_class_modifiers_stay_keyword_tokens() {
    let (arena, root) = parse_source("abstract class A { private readonly x = 1; }");
    let class = first_statement(&arena, root);
    assert!(arena.has_token_child(class, SyntaxKind::AbstractKeyword));
    let property = arena
        .child_of_kind(class, NodeKind::PropertyDeclaration)
        .expect("property");
    assert!(arena.has_token_child(property, SyntaxKind::PrivateKeyword));
    assert!(arena.has_token_child(property, SyntaxKind::ReadonlyKeyword));
}

#[test]
fn parse_import_clause_bindings() {
    let (arena, root) = parse_source("import D, { type A, b as c } from \"m\";");
    let import = first_statement(&arena, root);
    let clause = arena
        .child_of_kind(import, NodeKind::ImportClause)
        .expect("clause");
    let named = arena
        .child_of_kind(clause, NodeKind::NamedImports)
        .expect("named imports");
    let specifiers: Vec<NodeIndex> = arena
        .children(named)
        .iter()
        .copied()
        .filter(|&c| arena.kind(c) == Some(NodeKind::ImportSpecifier))
        .collect();
    assert_eq!(specifiers.len(), 2);
    assert!(arena.has_token_child(specifiers[0], SyntaxKind::TypeKeyword));
    assert!(!arena.has_token_child(specifiers[1], SyntaxKind::TypeKeyword));
}

#[test]
fn parse_type_assertion_and_as_expression() {
    let (arena, root) = parse_source("<any>x;\ny as T;");
    let assertion = arena.children(first_statement(&arena, root))[0];
    assert_eq!(arena.kind(assertion), Some(NodeKind::TypeAssertionExpression));
    assert_eq!(arena.children(assertion).len(), 4);

    let cast = arena.children(arena.children(root)[1])[0];
    assert_eq!(arena.kind(cast), Some(NodeKind::AsExpression));
}

#[test]
fn parse_generic_arrow_function() {
    let (arena, root) = parse_source("const id = <T>(x: T): T => x;");
    let arrow = arena
        .descendants(root)
        .into_iter()
        .find(|&n| arena.kind(n) == Some(NodeKind::ArrowFunction))
        .expect("arrow");
    assert_eq!(
        kinds(&arena, arrow),
        vec![
            NodeKind::TypeParameters,
            NodeKind::ParameterList,
            NodeKind::TypeAnnotation,
            NodeKind::Token(SyntaxKind::EqualsGreaterThanToken),
            NodeKind::Token(SyntaxKind::Identifier),
        ]
    );
}

#[test]
fn parse_less_than_is_jsx_in_tsx_files() {
    let mut parser = ParserState::new("view.tsx", Arc::from("<div>{x}</div>;"), LanguageVariant::Jsx);
    let root = parser.parse_source_file().expect("parse");
    let (arena, _) = parser.into_parts();
    let expression = arena.children(arena.children(root)[0])[0];
    assert_eq!(arena.kind(expression), Some(NodeKind::JsxElement));
}
