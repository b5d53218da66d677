use super::strip::{ChildPolicy, child_policy};
use ts2js_parser::NodeKind;
use ts2js_scanner::SyntaxKind;

#[test]
fn test_leaves() {
    assert_eq!(child_policy(NodeKind::Token(SyntaxKind::Identifier)), ChildPolicy::Leaf);
    assert_eq!(child_policy(NodeKind::SyntheticText), ChildPolicy::Leaf);
}

#[test]
fn test_statement_lists() {
    for kind in [
        NodeKind::SourceFile,
        NodeKind::Block,
        NodeKind::ModuleBlock,
        NodeKind::CaseClause,
        NodeKind::DefaultClause,
    ] {
        assert_eq!(child_policy(kind), ChildPolicy::Statements, "{kind:?}");
    }
}

#[test]
fn test_type_only_kinds_are_never_walked() {
    for kind in [
        NodeKind::InterfaceDeclaration,
        NodeKind::TypeAliasDeclaration,
        NodeKind::TypeAnnotation,
        NodeKind::TypeArguments,
        NodeKind::UnionType,
        NodeKind::TypePredicate,
    ] {
        assert_eq!(child_policy(kind), ChildPolicy::TypeOnly, "{kind:?}");
    }
}

#[test]
fn test_casts() {
    assert_eq!(child_policy(NodeKind::AsExpression), ChildPolicy::CastSuffix);
    assert_eq!(child_policy(NodeKind::SatisfiesExpression), ChildPolicy::CastSuffix);
    assert_eq!(child_policy(NodeKind::NonNullExpression), ChildPolicy::CastSuffix);
    assert_eq!(child_policy(NodeKind::TypeAssertionExpression), ChildPolicy::TypeAssertion);
}

#[test]
fn test_runtime_kinds_with_type_children() {
    assert_eq!(child_policy(NodeKind::ArrowFunction), ChildPolicy::Arrow);
    assert_eq!(child_policy(NodeKind::Parameter), ChildPolicy::Member);
    assert_eq!(child_policy(NodeKind::FunctionDeclaration), ChildPolicy::Plain);
    assert_eq!(child_policy(NodeKind::InstantiationExpression), ChildPolicy::Plain);
}
