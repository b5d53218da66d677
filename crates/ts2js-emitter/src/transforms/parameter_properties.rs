//! Parameter properties.
//!
//! `constructor(private x: number) {}` declares and assigns a field. Once
//! the modifier is stripped the assignment has to be written out:
//!
//! ```javascript
//! constructor(x) {
//!     this.x = x;
//! }
//! ```

use ts2js_common::comments::has_line_break;
use ts2js_common::indent::{line_indentation, trailing_indentation};
use ts2js_parser::{NodeArena, NodeIndex, NodeKind, NodeList};
use ts2js_scanner::SyntaxKind;

/// Names of the constructor parameters that declare a property.
pub(crate) fn parameter_property_names(arena: &NodeArena, source: &str, constructor: NodeIndex) -> Vec<String> {
    let Some(parameters) = arena.child_of_kind(constructor, NodeKind::ParameterList) else {
        return Vec::new();
    };
    arena
        .children(parameters)
        .iter()
        .filter(|&&p| arena.kind(p) == Some(NodeKind::Parameter))
        .filter(|&&p| {
            arena.children(p).iter().any(|&c| {
                arena.kind(c).and_then(NodeKind::token).is_some_and(|kind| {
                    kind.is_type_only_modifier()
                        && !matches!(kind, SyntaxKind::AbstractKeyword | SyntaxKind::DeclareKeyword)
                })
            })
        })
        .filter_map(|&p| {
            arena
                .children(p)
                .iter()
                .find_map(|&c| arena.identifier_text(source, c))
        })
        .map(str::to_string)
        .collect()
}

/// Insert `this.name = name;` statements at the start of the constructor
/// body, after a leading `super(...)` call if there is one.
pub(crate) fn insert_assignments(
    arena: &mut NodeArena,
    source: &str,
    constructor: NodeIndex,
    names: &[String],
    indent_unit: &str,
) {
    if names.is_empty() {
        return;
    }
    let Some(body) = arena.child_of_kind(constructor, NodeKind::Block) else {
        return;
    };
    let Some(constructor_start) = arena.get(constructor).map(|n| n.start) else {
        return;
    };
    let base_indent = line_indentation(source, constructor_start).to_string();

    let statements: Vec<NodeIndex> = arena
        .children(body)
        .iter()
        .copied()
        .filter(|&c| !arena.kind(c).is_some_and(NodeKind::is_token))
        .collect();
    let body_indent = statements
        .first()
        .and_then(|&s| trailing_indentation(arena.leading_trivia(source, arena.first_token(s))))
        .map_or_else(|| format!("{base_indent}{indent_unit}"), str::to_string);

    let super_call = statements.iter().position(|&s| is_super_call(arena, s));
    let insert_at = match super_call {
        Some(i) => {
            let statement = statements[i];
            arena.children(body).iter().position(|&c| c == statement).map_or(1, |p| p + 1)
        }
        None => 1,
    };

    let mut inserted = NodeList::new();
    for name in names {
        let assignment = arena.add_synthetic(format!("this.{name} = {name};"), constructor_start);
        arena[assignment].leading_trivia = Some(format!("\n{body_indent}").into());
        inserted.push(assignment);
    }
    let mut children: NodeList = arena.children(body).into();
    let tail: NodeList = children.drain(insert_at.min(children.len())..).collect();
    children.extend(inserted);
    children.extend(tail);

    if let Some(&close) = children.last() {
        let close_on_same_line = arena.is_token_of(close, SyntaxKind::CloseBraceToken)
            && !has_line_break(arena.leading_trivia(source, close));
        if close_on_same_line {
            arena[close].leading_trivia = Some(format!("\n{base_indent}").into());
            arena.mark_dirty(close);
        }
    }
    arena[body].children = children;
}

/// `super(...);` as a statement.
fn is_super_call(arena: &NodeArena, statement: NodeIndex) -> bool {
    if arena.kind(statement) != Some(NodeKind::ExpressionStatement) {
        return false;
    }
    let Some(&call) = arena.children(statement).first() else {
        return false;
    };
    arena.kind(call) == Some(NodeKind::CallExpression)
        && arena
            .children(call)
            .first()
            .is_some_and(|&callee| arena.is_token_of(callee, SyntaxKind::SuperKeyword))
}
