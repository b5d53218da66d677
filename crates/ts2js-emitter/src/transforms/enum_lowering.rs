//! Enum lowering.
//!
//! ```typescript
//! enum E { A, B = 5, S = "s" }
//! ```
//! becomes
//! ```javascript
//! var E;
//! (function (E) {
//!     E[E["A"] = 0] = "A";
//!     E[E["B"] = 5] = "B";
//!     E["S"] = "s";
//! })(E || (E = {}));
//! ```
//!
//! Member values are folded at conversion time. A member whose value can't
//! be folded keeps its initializer text; if a later member depends on it
//! (implicitly, or by naming it) the enum is not lowered at all.

use rustc_hash::{FxHashMap, FxHashSet};
use ts2js_parser::{NodeArena, NodeIndex, NodeKind};
use ts2js_scanner::SyntaxKind;
use ts2js_scanner::literals::{cook_string_literal, parse_numeric_literal};

use crate::source_writer::SourceWriter;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EnumValue {
    Number(f64),
    String(String),
}

enum MemberValue {
    Constant(EnumValue),
    Computed(String),
}

struct LoweredMember {
    name: String,
    value: MemberValue,
}

/// Lower an enum declaration to a variable and an initializer function.
/// Returns `None` when the enum can't be lowered.
pub(crate) fn lower_enum(
    arena: &NodeArena,
    source: &str,
    node: NodeIndex,
    base_indent: &str,
    indent_unit: &str,
) -> Option<String> {
    let children = arena.children(node);
    let is_exported = children
        .iter()
        .any(|&c| arena.is_token_of(c, SyntaxKind::ExportKeyword));
    let name = children
        .iter()
        .find_map(|&c| arena.identifier_text(source, c))?
        .to_string();

    let member_nodes: Vec<NodeIndex> = children
        .iter()
        .copied()
        .filter(|&c| arena.kind(c) == Some(NodeKind::EnumMember))
        .collect();
    let members = evaluate_members(arena, source, &name, &member_nodes)?;

    let mut writer = SourceWriter::new(base_indent, indent_unit);
    if is_exported {
        writer.write("export ");
    }
    writer.write(&format!("var {name};"));
    writer.write_line();
    writer.write(&format!("(function ({name}) {{"));
    writer.increase_indent();
    for member in &members {
        let key = quote(&member.name)?;
        writer.write_line();
        let line = match &member.value {
            MemberValue::Constant(EnumValue::String(value)) => {
                format!("{name}[{key}] = {};", quote(value)?)
            }
            MemberValue::Constant(EnumValue::Number(value)) => {
                format!("{name}[{name}[{key}] = {}] = {key};", js_number(*value))
            }
            MemberValue::Computed(text) => format!("{name}[{name}[{key}] = {text}] = {key};"),
        };
        writer.write(&line);
    }
    writer.decrease_indent();
    writer.write_line();
    writer.write(&format!("}})({name} || ({name} = {{}}));"));
    Some(writer.into_string())
}

fn evaluate_members(
    arena: &NodeArena,
    source: &str,
    enum_name: &str,
    member_nodes: &[NodeIndex],
) -> Option<Vec<LoweredMember>> {
    let mut names = Vec::with_capacity(member_nodes.len());
    for &member in member_nodes {
        let &name_node = arena.children(member).first()?;
        names.push(member_name(arena, source, name_node)?);
    }
    let all_names: FxHashSet<&str> = names.iter().map(String::as_str).collect();

    let mut evaluator = ConstantEvaluator {
        arena,
        source,
        enum_name,
        known: FxHashMap::default(),
    };
    let mut next: Option<f64> = Some(0.0);
    let mut lowered = Vec::with_capacity(member_nodes.len());
    for (&member, name) in member_nodes.iter().zip(&names) {
        let initializer = arena.children(member).get(2).copied();
        let value = match initializer {
            None => MemberValue::Constant(EnumValue::Number(next?)),
            Some(expr) => match evaluator.evaluate(expr) {
                Some(value) => MemberValue::Constant(value),
                None => {
                    if mentions_any(arena, source, expr, &all_names) || contains_type_syntax(arena, expr) {
                        return None;
                    }
                    MemberValue::Computed(arena.node_text(source, expr).to_string())
                }
            },
        };
        next = match &value {
            MemberValue::Constant(EnumValue::Number(n)) => Some(n + 1.0),
            _ => None,
        };
        if let MemberValue::Constant(constant) = &value {
            evaluator.known.insert(name.clone(), constant.clone());
        }
        lowered.push(LoweredMember {
            name: name.clone(),
            value,
        });
    }
    Some(lowered)
}

fn member_name(arena: &NodeArena, source: &str, name: NodeIndex) -> Option<String> {
    match arena.kind(name)? {
        NodeKind::Token(SyntaxKind::Identifier) => Some(arena.node_text(source, name).to_string()),
        NodeKind::Token(SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral) => {
            cook_string_literal(arena.node_text(source, name))
        }
        NodeKind::Token(SyntaxKind::NumericLiteral) => {
            parse_numeric_literal(arena.node_text(source, name)).map(js_number)
        }
        _ => None,
    }
}

struct ConstantEvaluator<'a> {
    arena: &'a NodeArena,
    source: &'a str,
    enum_name: &'a str,
    known: FxHashMap<String, EnumValue>,
}

impl ConstantEvaluator<'_> {
    fn evaluate(&self, expr: NodeIndex) -> Option<EnumValue> {
        let arena = self.arena;
        let children = arena.children(expr);
        match arena.kind(expr)? {
            NodeKind::Token(SyntaxKind::NumericLiteral) => {
                parse_numeric_literal(self.text(expr)).map(EnumValue::Number)
            }
            NodeKind::Token(SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral) => {
                cook_string_literal(self.text(expr)).map(EnumValue::String)
            }
            NodeKind::Token(SyntaxKind::Identifier) => match self.text(expr) {
                "Infinity" => Some(EnumValue::Number(f64::INFINITY)),
                "NaN" => Some(EnumValue::Number(f64::NAN)),
                name => self.known.get(name).cloned(),
            },
            NodeKind::ParenthesizedExpression => self.evaluate(*children.get(1)?),
            NodeKind::PrefixUnaryExpression => {
                let operator = arena.kind(*children.first()?)?.token()?;
                let EnumValue::Number(value) = self.evaluate(*children.get(1)?)? else {
                    return None;
                };
                let result = match operator {
                    SyntaxKind::PlusToken => value,
                    SyntaxKind::MinusToken => -value,
                    SyntaxKind::TildeToken => f64::from(!to_int32(value)),
                    _ => return None,
                };
                Some(EnumValue::Number(result))
            }
            NodeKind::BinaryExpression => {
                let operator = arena.kind(*children.get(1)?)?.token()?;
                let left = self.evaluate(*children.first()?)?;
                let right = self.evaluate(*children.get(2)?)?;
                binary(operator, left, right)
            }
            NodeKind::PropertyAccessExpression => {
                let (&object, &property) = (children.first()?, children.last()?);
                if self.text(object) != self.enum_name {
                    return None;
                }
                self.known.get(self.text(property)).cloned()
            }
            NodeKind::ElementAccessExpression => {
                let &object = children.first()?;
                let &key = children.get(2)?;
                if self.text(object) != self.enum_name {
                    return None;
                }
                match self.evaluate(key)? {
                    EnumValue::String(key) => self.known.get(&key).cloned(),
                    EnumValue::Number(_) => None,
                }
            }
            _ => None,
        }
    }

    fn text(&self, node: NodeIndex) -> &str {
        self.arena.node_text(self.source, node)
    }
}

fn binary(operator: SyntaxKind, left: EnumValue, right: EnumValue) -> Option<EnumValue> {
    use EnumValue::{Number, String};
    let value = match (left, right) {
        (Number(l), Number(r)) => Number(match operator {
            SyntaxKind::PlusToken => l + r,
            SyntaxKind::MinusToken => l - r,
            SyntaxKind::AsteriskToken => l * r,
            SyntaxKind::SlashToken => l / r,
            SyntaxKind::PercentToken => l % r,
            SyntaxKind::AsteriskAsteriskToken => l.powf(r),
            SyntaxKind::LessThanLessThanToken => f64::from(to_int32(l).wrapping_shl(to_uint32(r) & 31)),
            SyntaxKind::GreaterThanGreaterThanToken => {
                f64::from(to_int32(l).wrapping_shr(to_uint32(r) & 31))
            }
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => {
                f64::from(to_uint32(l).wrapping_shr(to_uint32(r) & 31))
            }
            SyntaxKind::AmpersandToken => f64::from(to_int32(l) & to_int32(r)),
            SyntaxKind::BarToken => f64::from(to_int32(l) | to_int32(r)),
            SyntaxKind::CaretToken => f64::from(to_int32(l) ^ to_int32(r)),
            _ => return None,
        }),
        (String(l), String(r)) if operator == SyntaxKind::PlusToken => String(l + &r),
        (String(l), Number(r)) if operator == SyntaxKind::PlusToken => String(l + &js_number(r)),
        (Number(l), String(r)) if operator == SyntaxKind::PlusToken => String(js_number(l) + &r),
        _ => return None,
    };
    Some(value)
}

/// ECMAScript ToInt32.
fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

/// ECMAScript ToUint32.
fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// Number formatting as JavaScript's `String(n)` does for common values.
pub(crate) fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{}", value as i128);
    }
    format!("{value}")
}

fn quote(text: &str) -> Option<String> {
    serde_json::to_string(text).ok()
}

fn mentions_any(arena: &NodeArena, source: &str, expr: NodeIndex, names: &FxHashSet<&str>) -> bool {
    arena.descendants(expr).into_iter().any(|node| {
        arena
            .identifier_text(source, node)
            .is_some_and(|text| names.contains(text))
    })
}

fn contains_type_syntax(arena: &NodeArena, expr: NodeIndex) -> bool {
    arena
        .descendants(expr)
        .into_iter()
        .any(|node| arena.kind(node).is_some_and(NodeKind::is_type_only))
}
