//! Type-stripping visitor.
//!
//! Walks the tree in document order. For each node the children are
//! classified first (keep, remove, replace), list separators of removed
//! elements are planned, and then the kept children are visited. A visit
//! reports whether anything below changed; changed nodes are marked dirty
//! so the printer regenerates them.
//!
//! Trivia of removed syntax is not printed directly. It is parked in
//! `PendingTrivia` and merged into the leading trivia of the next token
//! that survives.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;
use ts2js_common::Diagnostic;
use ts2js_common::comments::has_line_break;
use ts2js_common::diagnostics::{diagnostic_codes, diagnostic_messages, format_message};
use ts2js_common::indent::line_indentation;
use ts2js_parser::{NodeArena, NodeFlags, NodeIndex, NodeKind, NodeList};
use ts2js_scanner::SyntaxKind;

use super::StripOptions;
use super::enum_lowering::lower_enum;
use super::parameter_properties::{insert_assignments, parameter_property_names};
use super::trivia::{
    PendingTrivia, Removal, continues_expression, inline_comments, needs_separator, unit_gap,
};
use super::usage::{NameUsage, declaration_name, import_bindings};

/// What happens to the children of a node of a given kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChildPolicy {
    /// Tokens and synthetic text.
    Leaf,
    /// Children are statements.
    Statements,
    /// Class header and members.
    Class,
    /// Modifiers, `?` and `!` on a member or parameter.
    Member,
    /// `!` after a variable name.
    Variable,
    /// Parameters separated by commas; `this` parameters go.
    ParameterList,
    /// Leading type parameters and the return type go.
    Arrow,
    /// `<T>expr`
    TypeAssertion,
    /// `expr as T`, `expr satisfies T`, `expr!`
    CastSuffix,
    /// Default, namespace and named bindings of an import.
    ImportClause,
    /// `{ a, b }` of an import or export.
    NamedBindings,
    /// `import x = ...`
    ImportEquals,
    /// `export = e` and `export default e`
    ExportAssignment,
    /// Only the generic rules apply (annotations, type arguments).
    Plain,
    /// Type syntax; never kept on purpose.
    TypeOnly,
}

/// Every node kind has a policy. Adding a kind to `NodeKind` fails to
/// compile until it is given one here.
pub(crate) fn child_policy(kind: NodeKind) -> ChildPolicy {
    use ChildPolicy::*;
    match kind {
        NodeKind::Token(_) | NodeKind::SyntheticText => Leaf,

        NodeKind::SourceFile
        | NodeKind::Block
        | NodeKind::ModuleBlock
        | NodeKind::CaseClause
        | NodeKind::DefaultClause => Statements,

        NodeKind::QualifiedName
        | NodeKind::ComputedPropertyName
        | NodeKind::EmptyStatement
        | NodeKind::VariableStatement
        | NodeKind::VariableDeclarationList
        | NodeKind::ExpressionStatement
        | NodeKind::IfStatement
        | NodeKind::DoStatement
        | NodeKind::WhileStatement
        | NodeKind::ForStatement
        | NodeKind::ForInStatement
        | NodeKind::ForOfStatement
        | NodeKind::ContinueStatement
        | NodeKind::BreakStatement
        | NodeKind::ReturnStatement
        | NodeKind::WithStatement
        | NodeKind::SwitchStatement
        | NodeKind::CaseBlock
        | NodeKind::LabeledStatement
        | NodeKind::ThrowStatement
        | NodeKind::TryStatement
        | NodeKind::CatchClause
        | NodeKind::DebuggerStatement => Plain,

        NodeKind::VariableDeclaration => Variable,

        NodeKind::FunctionDeclaration
        | NodeKind::EnumDeclaration
        | NodeKind::EnumMember
        | NodeKind::ModuleDeclaration
        | NodeKind::ImportDeclaration
        | NodeKind::NamespaceImport
        | NodeKind::ImportSpecifier
        | NodeKind::ExternalModuleReference
        | NodeKind::ImportAttributes
        | NodeKind::ImportAttribute
        | NodeKind::ExportDeclaration
        | NodeKind::NamespaceExport
        | NodeKind::ExportSpecifier => Plain,

        NodeKind::ClassDeclaration | NodeKind::ClassExpression => Class,
        NodeKind::ImportClause => ImportClause,
        NodeKind::NamedImports | NodeKind::NamedExports => NamedBindings,
        NodeKind::ImportEqualsDeclaration => ImportEquals,
        NodeKind::ExportAssignment => ExportAssignment,

        NodeKind::PropertyDeclaration
        | NodeKind::MethodDeclaration
        | NodeKind::Constructor
        | NodeKind::GetAccessor
        | NodeKind::SetAccessor
        | NodeKind::Parameter => Member,
        NodeKind::ParameterList => ParameterList,

        NodeKind::ClassStaticBlockDeclaration
        | NodeKind::SemicolonClassElement
        | NodeKind::HeritageClause
        | NodeKind::ExpressionWithTypeArguments
        | NodeKind::Decorator => Plain,

        NodeKind::ObjectBindingPattern | NodeKind::ArrayBindingPattern | NodeKind::BindingElement => Plain,

        NodeKind::ArrayLiteralExpression
        | NodeKind::ObjectLiteralExpression
        | NodeKind::PropertyAssignment
        | NodeKind::ShorthandPropertyAssignment
        | NodeKind::SpreadAssignment
        | NodeKind::SpreadElement
        | NodeKind::PropertyAccessExpression
        | NodeKind::ElementAccessExpression
        | NodeKind::CallExpression
        | NodeKind::NewExpression
        | NodeKind::TaggedTemplateExpression
        | NodeKind::ParenthesizedExpression
        | NodeKind::FunctionExpression
        | NodeKind::DeleteExpression
        | NodeKind::TypeOfExpression
        | NodeKind::VoidExpression
        | NodeKind::AwaitExpression
        | NodeKind::PrefixUnaryExpression
        | NodeKind::PostfixUnaryExpression
        | NodeKind::BinaryExpression
        | NodeKind::ConditionalExpression
        | NodeKind::TemplateExpression
        | NodeKind::TemplateSpan
        | NodeKind::YieldExpression
        | NodeKind::MetaProperty
        | NodeKind::InstantiationExpression => Plain,

        NodeKind::ArrowFunction => Arrow,
        NodeKind::TypeAssertionExpression => TypeAssertion,
        NodeKind::AsExpression | NodeKind::SatisfiesExpression | NodeKind::NonNullExpression => CastSuffix,

        NodeKind::JsxElement
        | NodeKind::JsxSelfClosingElement
        | NodeKind::JsxOpeningElement
        | NodeKind::JsxClosingElement
        | NodeKind::JsxFragment
        | NodeKind::JsxOpeningFragment
        | NodeKind::JsxClosingFragment
        | NodeKind::JsxAttribute
        | NodeKind::JsxSpreadAttribute
        | NodeKind::JsxExpression
        | NodeKind::JsxNamespacedName => Plain,

        NodeKind::InterfaceDeclaration
        | NodeKind::TypeAliasDeclaration
        | NodeKind::NamespaceExportDeclaration
        | NodeKind::IndexSignature
        | NodeKind::TypeParameter
        | NodeKind::PropertySignature
        | NodeKind::MethodSignature
        | NodeKind::CallSignature
        | NodeKind::ConstructSignature
        | NodeKind::TypeAnnotation
        | NodeKind::TypeParameters
        | NodeKind::TypeArguments
        | NodeKind::KeywordType
        | NodeKind::TypeReference
        | NodeKind::FunctionType
        | NodeKind::ConstructorType
        | NodeKind::TypeQuery
        | NodeKind::TypeLiteral
        | NodeKind::ArrayType
        | NodeKind::TupleType
        | NodeKind::NamedTupleMember
        | NodeKind::OptionalType
        | NodeKind::RestType
        | NodeKind::UnionType
        | NodeKind::IntersectionType
        | NodeKind::ConditionalType
        | NodeKind::InferType
        | NodeKind::ParenthesizedType
        | NodeKind::ThisType
        | NodeKind::TypeOperator
        | NodeKind::IndexedAccessType
        | NodeKind::MappedType
        | NodeKind::LiteralType
        | NodeKind::TemplateLiteralType
        | NodeKind::TemplateLiteralTypeSpan
        | NodeKind::ImportType
        | NodeKind::TypePredicate => TypeOnly,
    }
}

#[derive(Clone, Debug)]
enum Action {
    Keep,
    Remove(Removal),
    Replace(NodeList),
}

/// Where an expression sits, for deciding whether a removed type assertion
/// leaves its operand in an ambiguous spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OperandPosition {
    /// First thing of an expression statement or a concise arrow body.
    StatementStart,
    /// Right after `return`, `throw` or `yield`, where a line break ends
    /// the statement.
    AfterRestrictedKeyword,
}

/// A namespace rewritten to `var N; (function (N) { ... })(N || (N = {}));`.
#[derive(Clone, Debug)]
struct NamespaceLowering {
    name: String,
    indent: String,
    /// Argument of the immediately invoked function.
    argument: String,
}

pub(crate) struct Stripper<'a> {
    pub(crate) arena: NodeArena,
    source: &'a str,
    file_name: &'a str,
    options: &'a StripOptions,
    usage: NameUsage,
    indent_unit: String,
    pending: PendingTrivia,
    /// Last character of the most recently kept token.
    last_char: Option<char>,
    /// Import bindings and export specifiers to drop.
    elided: FxHashSet<NodeIndex>,
    /// Type assertions whose operand needs parentheses once the assertion
    /// is gone.
    wrap_operand: FxHashSet<NodeIndex>,
    /// Something was removed after the last kept token.
    removed_since_kept: bool,
    /// The next kept token starts a statement or class member.
    at_statement_start: bool,
    namespaces: FxHashMap<NodeIndex, NamespaceLowering>,
    /// Exported nested namespaces and the namespace that holds them.
    namespace_parents: FxHashMap<NodeIndex, String>,
    /// Bodies of lowered namespaces.
    lowered_blocks: FxHashSet<NodeIndex>,
    /// Statements that lose their `export` keyword.
    unexported: FxHashSet<NodeIndex>,
    /// Exported functions and classes, followed by `N.f = f;`.
    export_assignments: FxHashMap<NodeIndex, String>,
    /// Initializers of exported constants, preceded by `N.a =`.
    export_prefixes: FxHashMap<NodeIndex, String>,
    pub(crate) warnings: Vec<Diagnostic>,
    removed: usize,
}

impl<'a> Stripper<'a> {
    pub(crate) fn new(
        arena: NodeArena,
        root: NodeIndex,
        source: &'a str,
        file_name: &'a str,
        options: &'a StripOptions,
    ) -> Self {
        let mut usage = NameUsage::collect(&arena, source, root);
        if usage.has_jsx {
            let factory_root = options.jsx_factory.split('.').next().unwrap_or_default();
            usage.value_names.insert(factory_root.to_string());
        }
        Stripper {
            arena,
            source,
            file_name,
            options,
            usage,
            indent_unit: ts2js_common::indent::detect_indent_unit(source),
            pending: PendingTrivia::default(),
            last_char: None,
            elided: FxHashSet::default(),
            wrap_operand: FxHashSet::default(),
            removed_since_kept: false,
            at_statement_start: false,
            namespaces: FxHashMap::default(),
            namespace_parents: FxHashMap::default(),
            lowered_blocks: FxHashSet::default(),
            unexported: FxHashSet::default(),
            export_assignments: FxHashMap::default(),
            export_prefixes: FxHashMap::default(),
            warnings: Vec::new(),
            removed: 0,
        }
    }

    pub(crate) fn run(&mut self, root: NodeIndex) {
        self.visit(root);
        debug!(
            file = self.file_name,
            removed = self.removed,
            warnings = self.warnings.len(),
            "stripped"
        );
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    fn visit(&mut self, node: NodeIndex) -> bool {
        let Some(kind) = self.arena.kind(node) else {
            return false;
        };
        let policy = child_policy(kind);
        match policy {
            ChildPolicy::Leaf => return self.visit_token(node),
            ChildPolicy::TypeOnly => {
                self.warn(
                    node,
                    diagnostic_codes::TYPE_SYNTAX_LEFT_IN_PLACE,
                    diagnostic_messages::TYPE_SYNTAX_LEFT_IN_PLACE,
                    self.arena.node_text(self.source, node),
                );
                return self.keep_verbatim(node);
            }
            _ => {}
        }

        match kind {
            NodeKind::Constructor => {
                let names = parameter_property_names(&self.arena, self.source, node);
                insert_assignments(&mut self.arena, self.source, node, &names, &self.indent_unit);
            }
            NodeKind::ExpressionStatement => {
                if let Some(&expression) = self.arena.children(node).first() {
                    self.mark_leading_operand(expression, OperandPosition::StatementStart);
                }
            }
            NodeKind::ArrowFunction => {
                if let Some(&body) = self.arena.children(node).last()
                    && self.arena.kind(body) != Some(NodeKind::Block)
                {
                    self.mark_leading_operand(body, OperandPosition::StatementStart);
                }
            }
            NodeKind::ReturnStatement | NodeKind::ThrowStatement | NodeKind::YieldExpression => {
                let operand = self
                    .arena
                    .children(node)
                    .iter()
                    .copied()
                    .find(|&c| !self.arena.kind(c).is_some_and(NodeKind::is_token));
                if let Some(operand) = operand {
                    self.mark_leading_operand(operand, OperandPosition::AfterRestrictedKeyword);
                }
            }
            _ => {}
        }

        let children: NodeList = self.arena.children(node).into();
        let mut actions = self.classify_children(node, policy, &children);
        if matches!(
            policy,
            ChildPolicy::ParameterList | ChildPolicy::ImportClause | ChildPolicy::NamedBindings
        ) {
            self.plan_separators(&children, &mut actions);
        }

        let holds_units = matches!(policy, ChildPolicy::Statements | ChildPolicy::Class);
        let mut changed = false;
        let mut restructured = false;
        let mut kept = NodeList::new();
        let mut last_kept: Option<NodeIndex> = None;
        for (&child, action) in children.iter().zip(actions) {
            match action {
                Action::Keep => {
                    if holds_units {
                        self.at_statement_start = self.starts_unit(policy, child, last_kept);
                    }
                    changed |= self.visit(child);
                    if holds_units {
                        self.at_statement_start = false;
                    }
                    kept.push(child);
                    last_kept = Some(child);
                }
                Action::Remove(removal) => {
                    self.record_removal(child, removal, last_kept);
                    changed = true;
                    restructured = true;
                }
                Action::Replace(replacement) => {
                    if holds_units {
                        self.at_statement_start = self.starts_unit(policy, child, last_kept);
                    }
                    for &new_child in &replacement {
                        self.visit(new_child);
                        if holds_units {
                            self.at_statement_start = false;
                        }
                        kept.push(new_child);
                        last_kept = Some(new_child);
                    }
                    changed = true;
                    restructured = true;
                }
            }
        }

        if restructured {
            self.arena[node].children = kept;
        }
        if changed {
            self.arena[node].flags |= NodeFlags::DIRTY;
        }
        changed
    }

    /// Leaf: receives pending trivia, if any.
    fn visit_token(&mut self, leaf: NodeIndex) -> bool {
        let node = &self.arena[leaf];
        let synthetic = node.is_synthetic();
        let is_end_of_file = node.kind.is_token_of(SyntaxKind::EndOfFileToken);
        let text = if synthetic {
            node.text.as_deref().unwrap_or("")
        } else {
            self.source.get(node.start as usize..node.end as usize).unwrap_or("")
        };
        let first_char = text.chars().next();
        let last_char = text.chars().next_back();
        let at_statement_start = first_char.is_some() && std::mem::take(&mut self.at_statement_start);
        let needs_semicolon = at_statement_start
            && self.removed_since_kept
            && first_char.is_some_and(continues_expression)
            && self.last_char.is_some_and(|c| !matches!(c, ';' | '{' | ':'));

        let mut changed = synthetic;
        if !self.pending.is_empty() || needs_semicolon {
            let own = self.arena.leading_trivia(self.source, leaf).to_string();
            let mut trivia = self.pending.apply(&own, is_end_of_file);
            if needs_semicolon {
                // Without the removed syntax the previous line runs on into this one.
                trivia.insert(0, ';');
            } else if trivia.is_empty()
                && let (Some(previous), Some(next)) = (self.last_char, first_char)
                && needs_separator(previous, next)
            {
                trivia.push(' ');
            }
            if trivia != own {
                self.set_leading_trivia(leaf, trivia);
                changed = true;
            }
        }
        if last_char.is_some() {
            self.last_char = last_char;
        }
        if first_char.is_some() {
            self.removed_since_kept = false;
        }
        changed
    }

    /// Whether `child` begins a statement or class member that could be read
    /// as a continuation of the previous one.
    fn starts_unit(&self, policy: ChildPolicy, child: NodeIndex, last_kept: Option<NodeIndex>) -> bool {
        let Some(kind) = self.arena.kind(child) else {
            return false;
        };
        let is_unit = match policy {
            ChildPolicy::Class => matches!(
                kind,
                NodeKind::PropertyDeclaration
                    | NodeKind::MethodDeclaration
                    | NodeKind::Constructor
                    | NodeKind::GetAccessor
                    | NodeKind::SetAccessor
                    | NodeKind::ClassStaticBlockDeclaration
            ),
            // The expression of a `case` clause is not a statement.
            _ => {
                !kind.is_token() && !last_kept.is_some_and(|n| self.arena.is_token_of(n, SyntaxKind::CaseKeyword))
            }
        };
        is_unit && !self.is_closed_unit(last_kept)
    }

    /// A kept statement or member whose closing `}` cannot run on into
    /// what follows.
    fn is_closed_unit(&self, node: Option<NodeIndex>) -> bool {
        matches!(
            node.and_then(|n| self.arena.kind(n)),
            Some(
                NodeKind::FunctionDeclaration
                    | NodeKind::ClassDeclaration
                    | NodeKind::ModuleDeclaration
                    | NodeKind::Block
                    | NodeKind::TryStatement
                    | NodeKind::SwitchStatement
                    | NodeKind::MethodDeclaration
                    | NodeKind::Constructor
                    | NodeKind::GetAccessor
                    | NodeKind::SetAccessor
                    | NodeKind::ClassStaticBlockDeclaration
            )
        )
    }

    /// Keep a subtree untouched apart from pending trivia on its first token.
    fn keep_verbatim(&mut self, node: NodeIndex) -> bool {
        let first = self.arena.first_token(node);
        let changed = self.visit_token(first);
        if changed {
            let mut current = node;
            loop {
                self.arena.mark_dirty(current);
                match self.arena.children(current).first() {
                    Some(&child) => current = child,
                    None => break,
                }
            }
        }
        let last = self.arena.last_token(node);
        if let Some(text) = self.arena.get(last).map(|n| self.source.get(n.start as usize..n.end as usize).unwrap_or(""))
            && let Some(c) = text.chars().next_back()
        {
            self.last_char = Some(c);
        }
        changed
    }

    fn set_leading_trivia(&mut self, leaf: NodeIndex, trivia: String) {
        let node = &mut self.arena[leaf];
        node.leading_trivia = Some(trivia.into());
        node.flags |= NodeFlags::DIRTY;
    }

    fn record_removal(&mut self, child: NodeIndex, removal: Removal, last_kept: Option<NodeIndex>) {
        self.removed += 1;
        self.removed_since_kept = true;
        let first_token = self.arena.first_token(child);
        let trivia = self.arena.leading_trivia(self.source, first_token);
        match removal {
            Removal::Unit => {
                let gap = unit_gap(trivia);
                let first = self.is_first_in_list(last_kept);
                self.pending.collapse(gap, first);
            }
            Removal::Modifier => {
                let gap = trivia.to_string();
                let first = self.is_first_in_list(last_kept);
                self.pending.collapse(gap, first);
            }
            Removal::Prefix => {
                let gap = trivia.to_string();
                self.pending.collapse(gap, true);
            }
            Removal::Inline => {
                for node in self.arena.descendants(child) {
                    if !self.arena.kind(node).is_some_and(NodeKind::is_token) {
                        continue;
                    }
                    if let Some(comments) = inline_comments(self.arena.leading_trivia(self.source, node)) {
                        self.pending.inherit(&comments);
                    }
                }
            }
            Removal::Drop => {}
        }
    }

    /// No kept sibling precedes, or only an opening bracket does.
    fn is_first_in_list(&self, last_kept: Option<NodeIndex>) -> bool {
        match last_kept.and_then(|n| self.arena.kind(n)) {
            None => true,
            Some(kind) => matches!(
                kind.token(),
                Some(
                    SyntaxKind::OpenBraceToken
                        | SyntaxKind::OpenParenToken
                        | SyntaxKind::OpenBracketToken
                        | SyntaxKind::LessThanToken
                )
            ),
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================

    fn classify_children(&mut self, node: NodeIndex, policy: ChildPolicy, children: &[NodeIndex]) -> Vec<Action> {
        let namespace = self.namespaces.remove(&node);
        let unexported = self.unexported.contains(&node);
        let mut actions = Vec::with_capacity(children.len());
        for (index, &child) in children.iter().enumerate() {
            let Some(child_kind) = self.arena.kind(child) else {
                actions.push(Action::Keep);
                continue;
            };
            if let Some(target) = self.export_prefixes.remove(&child) {
                let anchor = self.arena[child].pos;
                let prefix = self.arena.add_synthetic(target, anchor);
                self.arena[prefix].leading_trivia = Some(" ".into());
                actions.push(Action::Replace(smallvec::smallvec![prefix, child]));
                continue;
            }
            let action = match child_kind {
                NodeKind::Token(SyntaxKind::ExportKeyword) if unexported => Action::Remove(Removal::Modifier),
                NodeKind::TypeAnnotation if policy == ChildPolicy::Arrow => Action::Remove(Removal::Drop),
                NodeKind::TypeParameters if policy == ChildPolicy::Arrow => Action::Remove(Removal::Prefix),
                NodeKind::TypeAnnotation | NodeKind::TypeParameters | NodeKind::TypeArguments => {
                    Action::Remove(Removal::Inline)
                }
                _ => match &namespace {
                    Some(lowering) => self.classify_namespace_child(lowering, child, child_kind),
                    None => self.classify_child(node, policy, index, child, child_kind),
                },
            };
            actions.push(action);
        }
        actions
    }

    fn classify_child(
        &mut self,
        node: NodeIndex,
        policy: ChildPolicy,
        index: usize,
        child: NodeIndex,
        child_kind: NodeKind,
    ) -> Action {
        let token = child_kind.token();
        match policy {
            ChildPolicy::Statements => match token {
                Some(_) => Action::Keep,
                None => {
                    let action = self.classify_statement(node, child, child_kind);
                    match (action, self.export_assignments.remove(&child)) {
                        (Action::Keep, Some(assignment)) => {
                            let (start, end) = (self.arena[child].start, self.arena[child].end);
                            let indent = line_indentation(self.source, start);
                            let assignment = self.arena.add_synthetic(assignment, end);
                            self.arena[assignment].leading_trivia = Some(format!("\n{indent}").into());
                            Action::Replace(smallvec::smallvec![child, assignment])
                        }
                        (action, _) => action,
                    }
                }
            },
            ChildPolicy::Class => match child_kind {
                NodeKind::Token(kind) if kind.is_type_only_modifier() => Action::Remove(Removal::Modifier),
                NodeKind::HeritageClause if self.arena.has_token_child(child, SyntaxKind::ImplementsKeyword) => {
                    Action::Remove(Removal::Inline)
                }
                NodeKind::PropertyDeclaration
                | NodeKind::MethodDeclaration
                | NodeKind::Constructor
                | NodeKind::GetAccessor
                | NodeKind::SetAccessor
                | NodeKind::IndexSignature => self.classify_member(child, child_kind),
                _ => Action::Keep,
            },
            ChildPolicy::Member => match token {
                Some(kind) if kind.is_type_only_modifier() => Action::Remove(Removal::Modifier),
                Some(SyntaxKind::QuestionToken | SyntaxKind::ExclamationToken) => Action::Remove(Removal::Inline),
                _ => Action::Keep,
            },
            ChildPolicy::Variable => match token {
                Some(SyntaxKind::ExclamationToken) => Action::Remove(Removal::Inline),
                _ => Action::Keep,
            },
            ChildPolicy::ParameterList => {
                let is_this_parameter = child_kind == NodeKind::Parameter
                    && self.arena.has_token_child(child, SyntaxKind::ThisKeyword);
                if is_this_parameter {
                    Action::Remove(Removal::Unit)
                } else {
                    Action::Keep
                }
            }
            ChildPolicy::TypeAssertion => {
                let is_operand = index + 1 == self.arena.children(node).len();
                if !is_operand {
                    Action::Remove(Removal::Prefix)
                } else if self.wrap_operand.contains(&node) {
                    let anchor = self.arena[child].pos;
                    let open = self.arena.add_synthetic("(", anchor);
                    let close = self.arena.add_synthetic(")", anchor);
                    Action::Replace(smallvec::smallvec![open, child, close])
                } else {
                    Action::Keep
                }
            }
            ChildPolicy::CastSuffix => {
                if index == 0 {
                    Action::Keep
                } else {
                    Action::Remove(Removal::Inline)
                }
            }
            ChildPolicy::ImportClause => match child_kind {
                NodeKind::NamedImports => {
                    let specifiers: Vec<NodeIndex> = self
                        .arena
                        .children(child)
                        .iter()
                        .copied()
                        .filter(|&s| self.arena.kind(s) == Some(NodeKind::ImportSpecifier))
                        .collect();
                    if !specifiers.is_empty() && specifiers.iter().all(|s| self.elided.contains(s)) {
                        Action::Remove(Removal::Unit)
                    } else {
                        Action::Keep
                    }
                }
                _ if self.elided.contains(&child) => Action::Remove(Removal::Unit),
                _ => Action::Keep,
            },
            ChildPolicy::NamedBindings => {
                if self.elided.contains(&child) {
                    Action::Remove(Removal::Unit)
                } else {
                    Action::Keep
                }
            }
            ChildPolicy::ImportEquals => match token {
                Some(SyntaxKind::ImportKeyword) => self.replace_token(child, "const"),
                _ => Action::Keep,
            },
            ChildPolicy::ExportAssignment => {
                let is_export_equals = self
                    .arena
                    .children(node)
                    .get(1)
                    .is_some_and(|&c| self.arena.is_token_of(c, SyntaxKind::EqualsToken));
                if index == 0 && is_export_equals {
                    self.replace_token(child, "module.exports")
                } else {
                    Action::Keep
                }
            }
            ChildPolicy::Arrow | ChildPolicy::Plain => Action::Keep,
            ChildPolicy::Leaf | ChildPolicy::TypeOnly => Action::Keep,
        }
    }

    /// Synthetic text in place of a token, keeping the token's trivia.
    fn replace_token(&mut self, token: NodeIndex, text: &str) -> Action {
        let trivia = self.arena.leading_trivia(self.source, token).to_string();
        let anchor = self.arena[token].pos;
        let replacement = self.arena.add_synthetic(text, anchor);
        self.arena[replacement].leading_trivia = Some(trivia.into());
        Action::Replace(smallvec::smallvec![replacement])
    }

    /// `scope` is the block, module body or file holding `statement`.
    fn classify_statement(&mut self, scope: NodeIndex, statement: NodeIndex, kind: NodeKind) -> Action {
        let remove = Action::Remove(Removal::Unit);
        match kind {
            NodeKind::InterfaceDeclaration
            | NodeKind::TypeAliasDeclaration
            | NodeKind::NamespaceExportDeclaration => return remove,
            _ => {}
        }
        if self.arena.has_token_child(statement, SyntaxKind::DeclareKeyword) {
            return remove;
        }
        match kind {
            NodeKind::FunctionDeclaration => {
                if self.arena.child_of_kind(statement, NodeKind::Block).is_none() {
                    return remove;
                }
                Action::Keep
            }
            NodeKind::ModuleDeclaration => {
                if self.is_type_only_module(statement) {
                    return remove;
                }
                let in_lowered_scope = self.arena.kind(scope) != Some(NodeKind::ModuleBlock)
                    || self.lowered_blocks.contains(&scope);
                if in_lowered_scope && self.is_lowerable_namespace(scope, statement) {
                    self.plan_namespace(statement);
                    return Action::Keep;
                }
                let name = declaration_name(&self.arena, self.source, statement).unwrap_or_default();
                self.warn(
                    statement,
                    diagnostic_codes::NAMESPACE_WITH_RUNTIME_MEMBERS,
                    diagnostic_messages::NAMESPACE_WITH_RUNTIME_MEMBERS,
                    &name,
                );
                Action::Keep
            }
            NodeKind::ImportDeclaration => self.classify_import(statement),
            NodeKind::ImportEqualsDeclaration => {
                if self.arena.has_token_child(statement, SyntaxKind::TypeKeyword) {
                    return remove;
                }
                let name = declaration_name(&self.arena, self.source, statement).unwrap_or_default();
                if self.options.elide_type_only_imports && self.usage.is_type_only_binding(&name) {
                    return remove;
                }
                Action::Keep
            }
            NodeKind::ExportDeclaration => self.classify_export(statement),
            NodeKind::ExportAssignment => {
                let exports_type = self
                    .arena
                    .children(statement)
                    .get(2)
                    .and_then(|&e| self.arena.identifier_text(self.source, e))
                    .is_some_and(|name| self.usage.is_type_only_declaration(name));
                if exports_type { remove } else { Action::Keep }
            }
            NodeKind::EnumDeclaration => self.classify_enum(statement),
            _ => Action::Keep,
        }
    }

    fn classify_member(&mut self, member: NodeIndex, kind: NodeKind) -> Action {
        let remove = Action::Remove(Removal::Unit);
        if kind == NodeKind::IndexSignature
            || self.arena.has_token_child(member, SyntaxKind::AbstractKeyword)
            || self.arena.has_token_child(member, SyntaxKind::DeclareKeyword)
        {
            return remove;
        }
        match kind {
            NodeKind::MethodDeclaration
            | NodeKind::Constructor
            | NodeKind::GetAccessor
            | NodeKind::SetAccessor => {
                if self.arena.child_of_kind(member, NodeKind::Block).is_none() {
                    return remove;
                }
                Action::Keep
            }
            NodeKind::PropertyDeclaration => {
                let arena = &self.arena;
                let has_initializer = arena.has_token_child(member, SyntaxKind::EqualsToken);
                let has_type_syntax = arena.child_of_kind(member, NodeKind::TypeAnnotation).is_some()
                    || arena.has_token_child(member, SyntaxKind::ExclamationToken)
                    || arena.has_token_child(member, SyntaxKind::QuestionToken);
                let always_kept = arena.has_token_child(member, SyntaxKind::PrivateIdentifier)
                    || arena.child_of_kind(member, NodeKind::Decorator).is_some();
                if !self.options.preserve_uninitialized_fields
                    && !has_initializer
                    && has_type_syntax
                    && !always_kept
                {
                    return remove;
                }
                Action::Keep
            }
            _ => Action::Keep,
        }
    }

    fn classify_import(&mut self, import: NodeIndex) -> Action {
        let Some(clause) = self.arena.child_of_kind(import, NodeKind::ImportClause) else {
            return Action::Keep;
        };
        if self.arena.has_token_child(clause, SyntaxKind::TypeKeyword) {
            return Action::Remove(Removal::Unit);
        }
        let bindings = import_bindings(&self.arena, self.source, import);
        if bindings.is_empty() {
            return Action::Keep;
        }
        let mut dropped = 0;
        for (binding, name) in &bindings {
            let marked_type = self.arena.kind(*binding) == Some(NodeKind::ImportSpecifier)
                && self.arena.has_token_child(*binding, SyntaxKind::TypeKeyword);
            let used_as_type_only =
                self.options.elide_type_only_imports && self.usage.is_type_only_binding(name);
            if marked_type || used_as_type_only {
                self.elided.insert(*binding);
                dropped += 1;
            }
        }
        if dropped == bindings.len() {
            Action::Remove(Removal::Unit)
        } else {
            Action::Keep
        }
    }

    fn classify_export(&mut self, export: NodeIndex) -> Action {
        let arena = &self.arena;
        let children = arena.children(export);
        if children
            .get(1)
            .is_some_and(|&c| arena.is_token_of(c, SyntaxKind::TypeKeyword))
        {
            return Action::Remove(Removal::Unit);
        }
        let Some(named) = arena.child_of_kind(export, NodeKind::NamedExports) else {
            return Action::Keep;
        };
        let reexport = arena.has_token_child(export, SyntaxKind::FromKeyword);
        let specifiers: Vec<NodeIndex> = arena
            .children(named)
            .iter()
            .copied()
            .filter(|&s| arena.kind(s) == Some(NodeKind::ExportSpecifier))
            .collect();
        if specifiers.is_empty() {
            return Action::Keep;
        }
        let mut dropped = Vec::new();
        for &specifier in &specifiers {
            let marked_type = arena.has_token_child(specifier, SyntaxKind::TypeKeyword);
            let exports_type = !reexport
                && arena
                    .children(specifier)
                    .iter()
                    .find(|&&c| !arena.is_token_of(c, SyntaxKind::TypeKeyword))
                    .and_then(|&local| arena.identifier_text(self.source, local))
                    .is_some_and(|local| self.usage.is_type_only_declaration(local));
            if marked_type || exports_type {
                dropped.push(specifier);
            }
        }
        let all_dropped = dropped.len() == specifiers.len();
        self.elided.extend(dropped);
        if all_dropped {
            Action::Remove(Removal::Unit)
        } else {
            Action::Keep
        }
    }

    fn classify_enum(&mut self, declaration: NodeIndex) -> Action {
        let start = self.arena[declaration].start;
        let base_indent = line_indentation(self.source, start);
        match lower_enum(&self.arena, self.source, declaration, base_indent, &self.indent_unit) {
            Some(code) => {
                let first = self.arena.first_token(declaration);
                let trivia = self.arena.leading_trivia(self.source, first).to_string();
                let anchor = self.arena[declaration].pos;
                let lowered = self.arena.add_synthetic(code, anchor);
                let node = &mut self.arena[lowered];
                node.leading_trivia = Some(trivia.into());
                node.flags |= NodeFlags::LOWERED;
                Action::Replace(smallvec::smallvec![lowered])
            }
            None => {
                let name = declaration_name(&self.arena, self.source, declaration).unwrap_or_default();
                self.warn(
                    declaration,
                    diagnostic_codes::ENUM_MEMBER_NOT_LOWERABLE,
                    diagnostic_messages::ENUM_MEMBER_NOT_LOWERABLE,
                    &name,
                );
                Action::Keep
            }
        }
    }

    // =========================================================================
    // Namespaces
    // =========================================================================

    /// Name of a namespace declared as a single identifier. Dotted names,
    /// string names and `global` have none.
    fn namespace_name(&self, module: NodeIndex) -> Option<&'a str> {
        let arena = &self.arena;
        let named_plainly = [SyntaxKind::DotToken, SyntaxKind::StringLiteral, SyntaxKind::GlobalKeyword]
            .into_iter()
            .all(|kind| !arena.has_token_child(module, kind));
        if !named_plainly {
            return None;
        }
        arena
            .children(module)
            .iter()
            .find_map(|&child| arena.identifier_text(self.source, child))
    }

    /// Whether `module` can become an immediately invoked function. Every
    /// exported member must be a function, a named class, a `const` with
    /// plain names and initializers, or another such namespace.
    fn is_lowerable_namespace(&self, scope: NodeIndex, module: NodeIndex) -> bool {
        let arena = &self.arena;
        let Some(block) = arena.child_of_kind(module, NodeKind::ModuleBlock) else {
            return false;
        };
        let Some(name) = self.namespace_name(module) else {
            return false;
        };
        // `var N` next to `class N` or `function N` does not compile.
        let merges_with_declaration = arena.children(scope).iter().any(|&sibling| {
            matches!(
                arena.kind(sibling),
                Some(NodeKind::FunctionDeclaration | NodeKind::ClassDeclaration)
            ) && declaration_name(arena, self.source, sibling).as_deref() == Some(name)
        });
        if merges_with_declaration {
            return false;
        }
        arena
            .children(block)
            .iter()
            .filter(|&&c| !arena.kind(c).is_some_and(NodeKind::is_token))
            .all(|&statement| self.is_lowerable_member(block, statement))
    }

    fn is_lowerable_member(&self, block: NodeIndex, statement: NodeIndex) -> bool {
        if self.is_type_only_statement(statement) {
            return true;
        }
        let arena = &self.arena;
        let exported = arena.has_token_child(statement, SyntaxKind::ExportKeyword);
        match arena.kind(statement) {
            Some(NodeKind::ModuleDeclaration) => self.is_lowerable_namespace(block, statement),
            _ if !exported => true,
            Some(NodeKind::FunctionDeclaration | NodeKind::ClassDeclaration) => {
                declaration_name(arena, self.source, statement).is_some()
            }
            Some(NodeKind::VariableStatement) => self.exported_constants(statement).is_some(),
            _ => false,
        }
    }

    /// `(name, initializer)` of each declarator of `export const ...`.
    fn exported_constants(&self, statement: NodeIndex) -> Option<Vec<(&'a str, NodeIndex)>> {
        let arena = &self.arena;
        let list = arena.child_of_kind(statement, NodeKind::VariableDeclarationList)?;
        if !arena.has_token_child(list, SyntaxKind::ConstKeyword) {
            return None;
        }
        let mut constants = Vec::new();
        for &declaration in arena.children(list) {
            if arena.kind(declaration) != Some(NodeKind::VariableDeclaration) {
                continue;
            }
            let children = arena.children(declaration);
            let name = arena.identifier_text(self.source, *children.first()?)?;
            let equals = children
                .iter()
                .position(|&c| arena.is_token_of(c, SyntaxKind::EqualsToken))?;
            constants.push((name, *children.get(equals + 1)?));
        }
        Some(constants)
    }

    /// Record the rewrites of a lowerable namespace and of its exported
    /// members. They are applied as the namespace is visited.
    fn plan_namespace(&mut self, module: NodeIndex) {
        let Some(name) = self.namespace_name(module) else {
            return;
        };
        let Some(block) = self.arena.child_of_kind(module, NodeKind::ModuleBlock) else {
            return;
        };
        let argument = match self.namespace_parents.remove(&module) {
            Some(parent) => format!("{name} = {parent}.{name} || ({parent}.{name} = {{}})"),
            None => format!("{name} || ({name} = {{}})"),
        };
        let indent = line_indentation(self.source, self.arena[module].start).to_string();
        debug!(file = self.file_name, namespace = name, "lowering namespace");
        self.namespaces.insert(
            module,
            NamespaceLowering {
                name: name.to_string(),
                indent,
                argument,
            },
        );
        self.arena[module].flags |= NodeFlags::LOWERED;
        self.lowered_blocks.insert(block);

        let statements: NodeList = self.arena.children(block).into();
        for statement in statements {
            if self.arena.kind(statement).is_none_or(NodeKind::is_token)
                || self.is_type_only_statement(statement)
                || !self.arena.has_token_child(statement, SyntaxKind::ExportKeyword)
            {
                continue;
            }
            self.unexported.insert(statement);
            match self.arena.kind(statement) {
                Some(NodeKind::FunctionDeclaration | NodeKind::ClassDeclaration) => {
                    if let Some(local) = declaration_name(&self.arena, self.source, statement) {
                        self.export_assignments
                            .insert(statement, format!("{name}.{local} = {local};"));
                    }
                }
                Some(NodeKind::VariableStatement) => {
                    for (local, initializer) in self.exported_constants(statement).unwrap_or_default() {
                        self.export_prefixes.insert(initializer, format!("{name}.{local} ="));
                    }
                }
                Some(NodeKind::ModuleDeclaration) => {
                    self.namespace_parents.insert(statement, name.to_string());
                }
                _ => {}
            }
        }
    }

    fn classify_namespace_child(
        &mut self,
        lowering: &NamespaceLowering,
        child: NodeIndex,
        kind: NodeKind,
    ) -> Action {
        match kind {
            NodeKind::Token(SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword) => {
                self.replace_token(child, "var")
            }
            NodeKind::Token(SyntaxKind::Identifier) => {
                let anchor = self.arena[child].end;
                let header = format!(";\n{}(function ({})", lowering.indent, lowering.name);
                let header = self.arena.add_synthetic(header, anchor);
                Action::Replace(smallvec::smallvec![child, header])
            }
            NodeKind::ModuleBlock => {
                let anchor = self.arena[child].end;
                let call = self.arena.add_synthetic(format!(")({});", lowering.argument), anchor);
                Action::Replace(smallvec::smallvec![child, call])
            }
            _ => Action::Keep,
        }
    }

    /// A namespace with nothing that exists at runtime.
    fn is_type_only_module(&self, module: NodeIndex) -> bool {
        let Some(block) = self.arena.child_of_kind(module, NodeKind::ModuleBlock) else {
            return true;
        };
        self.arena
            .children(block)
            .iter()
            .filter(|&&c| !self.arena.kind(c).is_some_and(NodeKind::is_token))
            .all(|&statement| self.is_type_only_statement(statement))
    }

    fn is_type_only_statement(&self, statement: NodeIndex) -> bool {
        let arena = &self.arena;
        match arena.kind(statement) {
            Some(
                NodeKind::InterfaceDeclaration
                | NodeKind::TypeAliasDeclaration
                | NodeKind::NamespaceExportDeclaration,
            ) => true,
            _ if arena.has_token_child(statement, SyntaxKind::DeclareKeyword) => true,
            Some(NodeKind::FunctionDeclaration) => arena.child_of_kind(statement, NodeKind::Block).is_none(),
            Some(NodeKind::ModuleDeclaration) => self.is_type_only_module(statement),
            Some(NodeKind::ImportDeclaration) => arena
                .child_of_kind(statement, NodeKind::ImportClause)
                .is_some_and(|c| arena.has_token_child(c, SyntaxKind::TypeKeyword)),
            Some(NodeKind::ImportEqualsDeclaration) => arena.has_token_child(statement, SyntaxKind::TypeKeyword),
            Some(NodeKind::ExportDeclaration) => arena
                .children(statement)
                .get(1)
                .is_some_and(|&c| arena.is_token_of(c, SyntaxKind::TypeKeyword)),
            _ => false,
        }
    }

    // =========================================================================
    // Separators
    // =========================================================================

    /// A removed list element takes one comma with it: the one before it if
    /// that is still there, otherwise the one after it.
    fn plan_separators(&self, children: &[NodeIndex], actions: &mut [Action]) {
        let is_comma = |i: usize| {
            children
                .get(i)
                .is_some_and(|&c| self.arena.is_token_of(c, SyntaxKind::CommaToken))
        };
        for index in 0..children.len() {
            if !matches!(actions[index], Action::Remove(Removal::Unit)) || is_comma(index) {
                continue;
            }
            if index > 0 && is_comma(index - 1) && matches!(actions[index - 1], Action::Keep) {
                actions[index - 1] = Action::Remove(Removal::Unit);
            } else if is_comma(index + 1) && matches!(actions[index + 1], Action::Keep) {
                actions[index + 1] = Action::Remove(Removal::Unit);
            }
        }
    }

    // =========================================================================
    // Ambiguous operands
    // =========================================================================

    /// Follow the leftmost chain of `expression`. A type assertion whose
    /// operand would become ambiguous once the assertion is gone gets its
    /// operand parenthesized: at the start of a statement that is an operand
    /// starting with `{`, `function` or `class`; after `return`, `throw` or
    /// `yield` it is an operand on a later line.
    fn mark_leading_operand(&mut self, mut expression: NodeIndex, position: OperandPosition) {
        loop {
            let Some(kind) = self.arena.kind(expression) else {
                return;
            };
            let next = match kind {
                NodeKind::TypeAssertionExpression => {
                    let Some(&operand) = self.arena.children(expression).last() else {
                        return;
                    };
                    let first = self.arena.first_token(operand);
                    let ambiguous = match position {
                        OperandPosition::StatementStart => matches!(
                            self.arena.kind(first).and_then(NodeKind::token),
                            Some(
                                SyntaxKind::OpenBraceToken
                                    | SyntaxKind::FunctionKeyword
                                    | SyntaxKind::ClassKeyword
                            )
                        ),
                        OperandPosition::AfterRestrictedKeyword => {
                            self.arena.kind(operand) != Some(NodeKind::TypeAssertionExpression)
                                && has_line_break(self.arena.leading_trivia(self.source, first))
                        }
                    };
                    if ambiguous {
                        self.wrap_operand.insert(expression);
                        return;
                    }
                    operand
                }
                NodeKind::BinaryExpression
                | NodeKind::ConditionalExpression
                | NodeKind::CallExpression
                | NodeKind::PropertyAccessExpression
                | NodeKind::ElementAccessExpression
                | NodeKind::TaggedTemplateExpression
                | NodeKind::PostfixUnaryExpression
                | NodeKind::AsExpression
                | NodeKind::SatisfiesExpression
                | NodeKind::NonNullExpression
                | NodeKind::InstantiationExpression => match self.arena.children(expression).first() {
                    Some(&first) => first,
                    None => return,
                },
                _ => return,
            };
            expression = next;
        }
    }

    // =========================================================================
    // Warnings
    // =========================================================================

    fn warn(&mut self, node: NodeIndex, code: u32, message: &str, argument: &str) {
        let Some(n) = self.arena.get(node) else {
            return;
        };
        let (start, length) = (n.start, n.end.saturating_sub(n.start));
        let argument: String = argument.chars().take(60).collect();
        self.warnings.push(Diagnostic::warning(
            self.file_name,
            start,
            length,
            format_message(message, &[&argument]),
            code,
        ));
    }
}
