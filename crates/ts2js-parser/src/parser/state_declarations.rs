//! Parser state - declarations, modules, imports and exports

use ts2js_scanner::SyntaxKind;

use super::state::ParserState;
use super::{NodeKind, NodeList, ParseResult};

impl ParserState {
    // =========================================================================
    // Declaration detection
    // =========================================================================

    /// Whether the current token starts a declaration (possibly behind
    /// modifiers such as `export`, `declare`, `abstract`, `async`).
    pub(crate) fn is_start_of_declaration(&mut self) -> bool {
        self.look_ahead(|p| p.scan_declaration_start())
    }

    fn scan_declaration_start(&mut self) -> bool {
        loop {
            match self.token() {
                SyntaxKind::VarKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::AtToken
                | SyntaxKind::ExportKeyword => return true,
                SyntaxKind::LetKeyword => return self.is_let_declaration(),
                SyntaxKind::UsingKeyword => return self.next_token_is_identifier_on_same_line(),
                SyntaxKind::InterfaceKeyword | SyntaxKind::TypeKeyword => {
                    return self.next_token_is_identifier_on_same_line();
                }
                SyntaxKind::ModuleKeyword | SyntaxKind::NamespaceKeyword => {
                    self.next_token();
                    return !self.has_preceding_line_break()
                        && (self.is_identifier() || self.is_token(SyntaxKind::StringLiteral));
                }
                SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword => {
                    self.next_token();
                    if self.has_preceding_line_break() {
                        return false;
                    }
                }
                SyntaxKind::StaticKeyword => {
                    self.next_token();
                }
                SyntaxKind::GlobalKeyword => {
                    self.next_token();
                    return matches!(
                        self.token(),
                        SyntaxKind::OpenBraceToken | SyntaxKind::ExportKeyword
                    ) || self.is_identifier();
                }
                SyntaxKind::ImportKeyword => {
                    self.next_token();
                    return matches!(
                        self.token(),
                        SyntaxKind::StringLiteral
                            | SyntaxKind::AsteriskToken
                            | SyntaxKind::OpenBraceToken
                    ) || self.is_identifier();
                }
                _ => return false,
            }
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub(crate) fn parse_declaration(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        self.parse_decorators(&mut children)?;

        if self.is_token(SyntaxKind::ExportKeyword) {
            let next = self.look_ahead(|p| p.next_token());
            match next {
                SyntaxKind::EqualsToken => return self.parse_export_assignment(children),
                SyntaxKind::AsteriskToken | SyntaxKind::OpenBraceToken => {
                    return self.parse_export_declaration(children);
                }
                SyntaxKind::TypeKeyword
                    if self.look_ahead(|p| {
                        p.next_token();
                        p.next_token();
                        matches!(p.token(), SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken)
                    }) =>
                {
                    return self.parse_export_declaration(children);
                }
                SyntaxKind::AsKeyword => return self.parse_namespace_export_declaration(children),
                SyntaxKind::DefaultKeyword => {
                    children.push(self.eat());
                    children.push(self.eat());
                    if !self.is_start_of_default_declaration() {
                        return self.parse_export_default_expression(children);
                    }
                }
                _ => children.push(self.eat()),
            }
        }

        self.parse_declaration_modifiers(&mut children)?;

        match self.token() {
            SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::UsingKeyword
            | SyntaxKind::AwaitKeyword => self.parse_variable_statement(children),
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(children),
            SyntaxKind::ClassKeyword => self.parse_class_declaration(children),
            SyntaxKind::InterfaceKeyword => self.parse_interface_declaration(children),
            SyntaxKind::TypeKeyword => self.parse_type_alias_declaration(children),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(children),
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword | SyntaxKind::GlobalKeyword => {
                self.parse_module_declaration(children)
            }
            SyntaxKind::ImportKeyword => self.parse_import_declaration(children),
            _ => Err(self.error("Declaration or statement expected.")),
        }
    }

    fn is_start_of_default_declaration(&mut self) -> bool {
        match self.token() {
            SyntaxKind::FunctionKeyword | SyntaxKind::ClassKeyword | SyntaxKind::AtToken => true,
            SyntaxKind::InterfaceKeyword => self.next_token_is_identifier_on_same_line(),
            SyntaxKind::AbstractKeyword => self.next_token_is(|p| {
                p.is_token(SyntaxKind::ClassKeyword) && !p.has_preceding_line_break()
            }),
            SyntaxKind::AsyncKeyword => self.next_token_is(|p| {
                p.is_token(SyntaxKind::FunctionKeyword) && !p.has_preceding_line_break()
            }),
            _ => false,
        }
    }

    /// `declare`, `abstract`, `async`, `const` (before `enum`), `export`.
    fn parse_declaration_modifiers(&mut self, children: &mut NodeList) -> ParseResult<()> {
        loop {
            let is_modifier = match self.token() {
                SyntaxKind::ExportKeyword => true,
                SyntaxKind::DeclareKeyword | SyntaxKind::AbstractKeyword | SyntaxKind::AsyncKeyword => {
                    self.next_token_is(|p| !p.has_preceding_line_break())
                }
                SyntaxKind::ConstKeyword => self.next_token_is_kind(SyntaxKind::EnumKeyword),
                _ => false,
            };
            if !is_modifier {
                return Ok(());
            }
            children.push(self.eat());
        }
    }

    // =========================================================================
    // Exports
    // =========================================================================

    /// `export = e;`
    fn parse_export_assignment(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        children.push(self.eat());
        children.push(self.parse_assignment_expression()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ExportAssignment, children))
    }

    /// `export default e;` (`export default` already consumed).
    fn parse_export_default_expression(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.parse_assignment_expression()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ExportAssignment, children))
    }

    /// `export as namespace X;`
    fn parse_namespace_export_declaration(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        children.push(self.parse_expected(SyntaxKind::AsKeyword)?);
        children.push(self.parse_expected(SyntaxKind::NamespaceKeyword)?);
        children.push(self.parse_identifier()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::NamespaceExportDeclaration, children))
    }

    /// `export [type] * [as ns] from "m";` and `export [type] { a, b as c } [from "m"];`
    fn parse_export_declaration(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        if self.is_token(SyntaxKind::TypeKeyword) {
            children.push(self.eat());
        }
        let mut has_from = true;
        if self.is_token(SyntaxKind::AsteriskToken) {
            let star = self.eat();
            if self.is_token(SyntaxKind::AsKeyword) {
                let mut namespace = NodeList::new();
                namespace.push(star);
                namespace.push(self.eat());
                namespace.push(self.parse_module_export_name()?);
                children.push(self.finish(NodeKind::NamespaceExport, namespace));
            } else {
                children.push(star);
            }
        } else {
            children.push(self.parse_named_imports_or_exports(NodeKind::NamedExports)?);
            has_from = self.is_token(SyntaxKind::FromKeyword);
        }
        if has_from {
            children.push(self.parse_expected(SyntaxKind::FromKeyword)?);
            children.push(self.parse_expected(SyntaxKind::StringLiteral)?);
            self.parse_import_attributes(&mut children)?;
        }
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ExportDeclaration, children))
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// `import ...` declaration or `import x = ...`; `children` holds any
    /// `export` modifier.
    pub(crate) fn parse_import_declaration(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.parse_expected(SyntaxKind::ImportKeyword)?);

        if self.is_token(SyntaxKind::StringLiteral) {
            children.push(self.eat());
            self.parse_import_attributes(&mut children)?;
            self.parse_semicolon(&mut children)?;
            return Ok(self.finish(NodeKind::ImportDeclaration, children));
        }

        let mut clause = NodeList::new();
        if self.is_token(SyntaxKind::TypeKeyword) && self.is_type_modifier_on_import() {
            clause.push(self.eat());
        }

        if self.is_identifier() && self.next_token_is_kind(SyntaxKind::EqualsToken) {
            children.extend(clause);
            children.push(self.parse_identifier()?);
            children.push(self.eat());
            children.push(self.parse_module_reference()?);
            self.parse_semicolon(&mut children)?;
            return Ok(self.finish(NodeKind::ImportEqualsDeclaration, children));
        }

        let mut needs_bindings = true;
        if self.is_identifier() {
            clause.push(self.parse_identifier()?);
            needs_bindings = self.parse_optional(SyntaxKind::CommaToken, &mut clause);
        }
        if needs_bindings {
            if self.is_token(SyntaxKind::AsteriskToken) {
                let mut namespace = NodeList::new();
                namespace.push(self.eat());
                namespace.push(self.parse_expected(SyntaxKind::AsKeyword)?);
                namespace.push(self.parse_identifier()?);
                clause.push(self.finish(NodeKind::NamespaceImport, namespace));
            } else {
                clause.push(self.parse_named_imports_or_exports(NodeKind::NamedImports)?);
            }
        }
        children.push(self.finish(NodeKind::ImportClause, clause));
        children.push(self.parse_expected(SyntaxKind::FromKeyword)?);
        children.push(self.parse_expected(SyntaxKind::StringLiteral)?);
        self.parse_import_attributes(&mut children)?;
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ImportDeclaration, children))
    }

    /// `import type X from`, `import type {..}`, `import type * as`, but not
    /// `import type from "m"` (a default import named `type`).
    fn is_type_modifier_on_import(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            match p.token() {
                SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken => true,
                SyntaxKind::FromKeyword => !p.next_token_is_kind(SyntaxKind::StringLiteral),
                SyntaxKind::CommaToken => false,
                _ => p.is_identifier(),
            }
        })
    }

    /// `require("m")` or an entity name.
    fn parse_module_reference(&mut self) -> ParseResult {
        let is_external = self.is_token(SyntaxKind::RequireKeyword)
            && self.next_token_is_kind(SyntaxKind::OpenParenToken);
        if !is_external {
            return self.parse_entity_name();
        }
        let mut children = NodeList::new();
        children.push(self.eat_as(SyntaxKind::Identifier));
        children.push(self.parse_expected(SyntaxKind::OpenParenToken)?);
        children.push(self.parse_expected(SyntaxKind::StringLiteral)?);
        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        Ok(self.finish(NodeKind::ExternalModuleReference, children))
    }

    /// `A.B.C` as nested `QualifiedName`s.
    pub(crate) fn parse_entity_name(&mut self) -> ParseResult {
        let mut name = self.parse_identifier()?;
        while self.is_token(SyntaxKind::DotToken) {
            let mut children = NodeList::new();
            children.push(name);
            children.push(self.eat());
            children.push(self.parse_identifier_name()?);
            name = self.finish(NodeKind::QualifiedName, children);
        }
        Ok(name)
    }

    fn parse_import_attributes(&mut self, children: &mut NodeList) -> ParseResult<()> {
        let is_attributes = match self.token() {
            SyntaxKind::WithKeyword => true,
            SyntaxKind::AssertKeyword => !self.has_preceding_line_break(),
            _ => false,
        };
        if !is_attributes {
            return Ok(());
        }
        let mut attributes = NodeList::new();
        attributes.push(self.eat());
        attributes.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let mut attribute = NodeList::new();
            attribute.push(self.parse_module_export_name()?);
            attribute.push(self.parse_expected(SyntaxKind::ColonToken)?);
            attribute.push(self.parse_assignment_expression()?);
            attributes.push(self.finish(NodeKind::ImportAttribute, attribute));
            if !self.parse_optional(SyntaxKind::CommaToken, &mut attributes) {
                break;
            }
        }
        attributes.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        children.push(self.finish(NodeKind::ImportAttributes, attributes));
        Ok(())
    }

    /// `{ a, type b, c as d }` for imports (`NamedImports`) or exports.
    fn parse_named_imports_or_exports(&mut self, kind: NodeKind) -> ParseResult {
        let specifier_kind = if kind == NodeKind::NamedImports {
            NodeKind::ImportSpecifier
        } else {
            NodeKind::ExportSpecifier
        };
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            children.push(self.parse_import_or_export_specifier(specifier_kind)?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(kind, children))
    }

    fn parse_import_or_export_specifier(&mut self, kind: NodeKind) -> ParseResult {
        let mut children = NodeList::new();
        if self.is_token(SyntaxKind::TypeKeyword) && self.is_type_modifier_on_specifier() {
            children.push(self.eat());
        }
        children.push(self.parse_module_export_name()?);
        if self.is_token(SyntaxKind::AsKeyword) {
            children.push(self.eat());
            children.push(self.parse_module_export_name()?);
        }
        Ok(self.finish(kind, children))
    }

    /// Decide whether a leading `type` in a specifier is a modifier:
    /// `{ type }` and `{ type as x }` name a binding called `type`;
    /// `{ type x }`, `{ type as }` and `{ type as as x }` are type-only.
    fn is_type_modifier_on_specifier(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if !p.is_module_export_name() {
                return false;
            }
            if !p.is_token(SyntaxKind::AsKeyword) {
                return true;
            }
            p.next_token();
            if p.is_token(SyntaxKind::AsKeyword) {
                p.next_token();
                p.is_module_export_name()
            } else {
                !p.is_module_export_name()
            }
        })
    }

    fn is_module_export_name(&self) -> bool {
        self.is_identifier_or_keyword() || self.is_token(SyntaxKind::StringLiteral)
    }

    fn parse_module_export_name(&mut self) -> ParseResult {
        if self.is_token(SyntaxKind::StringLiteral) {
            Ok(self.eat())
        } else {
            self.parse_identifier_name()
        }
    }

    // =========================================================================
    // TypeScript declarations
    // =========================================================================

    fn parse_interface_declaration(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        children.push(self.parse_identifier()?);
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        while matches!(
            self.token(),
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
        ) {
            children.push(self.parse_heritage_clause()?);
        }
        self.parse_type_member_block(&mut children)?;
        Ok(self.finish(NodeKind::InterfaceDeclaration, children))
    }

    fn parse_type_alias_declaration(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        children.push(self.parse_identifier()?);
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        children.push(self.parse_expected(SyntaxKind::EqualsToken)?);
        children.push(self.parse_type()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::TypeAliasDeclaration, children))
    }

    fn parse_enum_declaration(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        children.push(self.parse_identifier()?);
        children.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let mut member = NodeList::new();
            member.push(self.parse_property_name()?);
            if self.parse_optional(SyntaxKind::EqualsToken, &mut member) {
                member.push(self.parse_assignment_expression()?);
            }
            children.push(self.finish(NodeKind::EnumMember, member));
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(NodeKind::EnumDeclaration, children))
    }

    /// `namespace A.B { }`, `module "m" { }`, `declare module "m";`, `global { }`.
    fn parse_module_declaration(&mut self, mut children: NodeList) -> ParseResult {
        let keyword = self.token();
        children.push(self.eat());
        if keyword != SyntaxKind::GlobalKeyword {
            if self.is_token(SyntaxKind::StringLiteral) {
                children.push(self.eat());
            } else {
                children.push(self.parse_identifier()?);
                while self.is_token(SyntaxKind::DotToken) {
                    children.push(self.eat());
                    children.push(self.parse_identifier()?);
                }
            }
        }
        if self.is_token(SyntaxKind::OpenBraceToken) {
            let mut block = NodeList::new();
            block.push(self.eat());
            self.parse_statement_list(&mut block)?;
            block.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
            children.push(self.finish(NodeKind::ModuleBlock, block));
        } else {
            self.parse_semicolon(&mut children)?;
        }
        Ok(self.finish(NodeKind::ModuleDeclaration, children))
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(crate) fn parse_class_declaration(&mut self, children: NodeList) -> ParseResult {
        self.parse_class_like(children, NodeKind::ClassDeclaration)
    }

    pub(crate) fn parse_class_like(&mut self, mut children: NodeList, kind: NodeKind) -> ParseResult {
        children.push(self.parse_expected(SyntaxKind::ClassKeyword)?);
        if self.is_identifier() && !self.is_token(SyntaxKind::ImplementsKeyword) {
            children.push(self.parse_identifier()?);
        }
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        while matches!(
            self.token(),
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
        ) {
            children.push(self.parse_heritage_clause()?);
        }
        children.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            children.push(self.parse_class_member()?);
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(kind, children))
    }

    /// `extends A<T>` or `implements I, J<T>`.
    fn parse_heritage_clause(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        loop {
            children.push(self.parse_expression_with_type_arguments()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        Ok(self.finish(NodeKind::HeritageClause, children))
    }

    fn parse_expression_with_type_arguments(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_left_hand_side_expression()?);
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_arguments()?);
        }
        Ok(self.finish(NodeKind::ExpressionWithTypeArguments, children))
    }
}
