//! Name usage for import elision.
//!
//! An import binding may only be dropped when every reference to it sits in
//! a type position. References are collected by name; shadowing is ignored,
//! which can only keep an import that could have been dropped.

use rustc_hash::FxHashSet;
use ts2js_parser::{NodeArena, NodeIndex, NodeKind};
use ts2js_scanner::SyntaxKind;

#[derive(Debug, Default)]
pub(crate) struct NameUsage {
    /// Identifiers referenced from runtime code.
    pub(crate) value_names: FxHashSet<String>,
    /// Identifiers referenced from type positions.
    pub(crate) type_names: FxHashSet<String>,
    /// Names declared at the top level by interfaces, type aliases and
    /// type-only imports.
    pub(crate) type_declared: FxHashSet<String>,
    /// Names declared at the top level by anything with a runtime value.
    pub(crate) value_declared: FxHashSet<String>,
    pub(crate) has_jsx: bool,
}

impl NameUsage {
    pub(crate) fn collect(arena: &NodeArena, source: &str, root: NodeIndex) -> Self {
        let mut usage = NameUsage::default();
        let mut stack = vec![(root, false)];
        while let Some((node, in_type)) = stack.pop() {
            let Some(kind) = arena.kind(node) else {
                continue;
            };
            match kind {
                NodeKind::Token(SyntaxKind::Identifier) => {
                    let name = arena.node_text(source, node).to_string();
                    if in_type {
                        usage.type_names.insert(name);
                    } else {
                        usage.value_names.insert(name);
                    }
                    continue;
                }
                NodeKind::ImportDeclaration => continue,
                NodeKind::ImportEqualsDeclaration => {
                    // Only the module reference is a use.
                    if let Some(&reference) = arena.children(node).iter().rev().find(|&&c| {
                        !arena.kind(c).is_some_and(|k| k.is_token_of(SyntaxKind::SemicolonToken))
                    }) {
                        stack.push((reference, in_type));
                    }
                    continue;
                }
                NodeKind::JsxElement
                | NodeKind::JsxSelfClosingElement
                | NodeKind::JsxFragment => usage.has_jsx = true,
                _ => {}
            }
            let child_in_type = in_type || is_type_context(arena, node, kind);
            for &child in arena.children(node) {
                stack.push((child, child_in_type));
            }
        }
        usage.collect_declarations(arena, source, root);
        usage
    }

    fn collect_declarations(&mut self, arena: &NodeArena, source: &str, root: NodeIndex) {
        for &statement in arena.children(root) {
            let Some(kind) = arena.kind(statement) else {
                continue;
            };
            match kind {
                NodeKind::InterfaceDeclaration | NodeKind::TypeAliasDeclaration => {
                    if let Some(name) = declaration_name(arena, source, statement) {
                        self.type_declared.insert(name);
                    }
                }
                NodeKind::ImportDeclaration => {
                    let clause = arena.child_of_kind(statement, NodeKind::ImportClause);
                    let type_only = clause.is_some_and(|c| arena.has_token_child(c, SyntaxKind::TypeKeyword));
                    for (specifier, name) in import_bindings(arena, source, statement) {
                        let is_type = type_only
                            || (arena.kind(specifier) == Some(NodeKind::ImportSpecifier)
                                && arena.has_token_child(specifier, SyntaxKind::TypeKeyword));
                        if is_type {
                            self.type_declared.insert(name);
                        } else {
                            self.value_declared.insert(name);
                        }
                    }
                }
                NodeKind::VariableStatement => {
                    let mut stack: Vec<NodeIndex> = arena.children(statement).to_vec();
                    while let Some(node) = stack.pop() {
                        match arena.kind(node) {
                            Some(NodeKind::Token(SyntaxKind::Identifier)) => {
                                self.value_declared.insert(arena.node_text(source, node).to_string());
                            }
                            Some(
                                NodeKind::VariableDeclarationList
                                | NodeKind::ObjectBindingPattern
                                | NodeKind::ArrayBindingPattern
                                | NodeKind::BindingElement,
                            ) => stack.extend(arena.children(node).iter().copied()),
                            Some(NodeKind::VariableDeclaration) => {
                                if let Some(&name) = arena.children(node).first() {
                                    stack.push(name);
                                }
                            }
                            _ => {}
                        }
                    }
                }
                NodeKind::FunctionDeclaration
                | NodeKind::ClassDeclaration
                | NodeKind::EnumDeclaration
                | NodeKind::ModuleDeclaration
                | NodeKind::ImportEqualsDeclaration => {
                    if let Some(name) = declaration_name(arena, source, statement) {
                        self.value_declared.insert(name);
                    }
                }
                _ => {}
            }
        }
    }

    /// An import binding referenced from types only.
    pub(crate) fn is_type_only_binding(&self, name: &str) -> bool {
        self.type_names.contains(name) && !self.value_names.contains(name)
    }

    /// A top-level name with no runtime declaration.
    pub(crate) fn is_type_only_declaration(&self, name: &str) -> bool {
        self.type_declared.contains(name) && !self.value_declared.contains(name)
    }
}

/// Nodes whose children are in type position.
fn is_type_context(arena: &NodeArena, node: NodeIndex, kind: NodeKind) -> bool {
    if kind.is_type_node() {
        return true;
    }
    match kind {
        NodeKind::TypeAnnotation
        | NodeKind::TypeParameters
        | NodeKind::TypeArguments
        | NodeKind::InterfaceDeclaration
        | NodeKind::TypeAliasDeclaration
        | NodeKind::IndexSignature
        | NodeKind::PropertySignature
        | NodeKind::MethodSignature
        | NodeKind::CallSignature
        | NodeKind::ConstructSignature => true,
        NodeKind::HeritageClause => arena.has_token_child(node, SyntaxKind::ImplementsKeyword),
        _ => false,
    }
}

/// First identifier child: the declared name of a declaration.
pub(crate) fn declaration_name(arena: &NodeArena, source: &str, node: NodeIndex) -> Option<String> {
    arena
        .children(node)
        .iter()
        .find_map(|&child| arena.identifier_text(source, child))
        .map(str::to_string)
}

/// `(binding node, local name)` for every binding of an import declaration.
/// The binding node is the default-name identifier, the namespace import or
/// the import specifier.
pub(crate) fn import_bindings(arena: &NodeArena, source: &str, import: NodeIndex) -> Vec<(NodeIndex, String)> {
    let mut bindings = Vec::new();
    let Some(clause) = arena.child_of_kind(import, NodeKind::ImportClause) else {
        return bindings;
    };
    for &child in arena.children(clause) {
        match arena.kind(child) {
            Some(NodeKind::Token(SyntaxKind::Identifier)) => {
                bindings.push((child, arena.node_text(source, child).to_string()));
            }
            Some(NodeKind::NamespaceImport) => {
                if let Some(&name) = arena.children(child).last() {
                    bindings.push((child, arena.node_text(source, name).to_string()));
                }
            }
            Some(NodeKind::NamedImports) => {
                for &specifier in arena.children(child) {
                    if arena.kind(specifier) != Some(NodeKind::ImportSpecifier) {
                        continue;
                    }
                    if let Some(&name) = arena.children(specifier).last() {
                        bindings.push((specifier, arena.node_text(source, name).to_string()));
                    }
                }
            }
            _ => {}
        }
    }
    bindings
}
