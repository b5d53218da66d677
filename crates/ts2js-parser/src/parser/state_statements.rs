//! Parser state - statement parsing methods

use ts2js_scanner::SyntaxKind;

use super::state::{CONTEXT_FLAG_DISALLOW_IN, ParserState};
use super::{NodeIndex, NodeKind, NodeList, ParseResult};

impl ParserState {
    // =========================================================================
    // Parse Methods - Statements
    // =========================================================================

    pub(crate) fn parse_statement(&mut self) -> ParseResult {
        self.with_depth(|p| p.parse_statement_worker())
    }

    fn parse_statement_worker(&mut self) -> ParseResult {
        match self.token() {
            SyntaxKind::SemicolonToken => {
                let semicolon = self.eat();
                Ok(self.finish(NodeKind::EmptyStatement, smallvec::smallvec![semicolon]))
            }
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::VarKeyword => self.parse_variable_statement(NodeList::new()),
            SyntaxKind::LetKeyword if self.is_let_declaration() => {
                self.parse_variable_statement(NodeList::new())
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(NodeList::new()),
            SyntaxKind::ClassKeyword => self.parse_class_declaration(NodeList::new()),
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ContinueKeyword => self.parse_break_or_continue(NodeKind::ContinueStatement),
            SyntaxKind::BreakKeyword => self.parse_break_or_continue(NodeKind::BreakStatement),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::WithKeyword => self.parse_with_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::DebuggerKeyword => {
                let mut children = NodeList::new();
                children.push(self.eat());
                self.parse_semicolon(&mut children)?;
                Ok(self.finish(NodeKind::DebuggerStatement, children))
            }
            _ if self.is_start_of_declaration() => self.parse_declaration(),
            _ if self.is_identifier() && self.next_token_is_kind(SyntaxKind::ColonToken) => {
                self.parse_labeled_statement()
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// `let` starts a declaration when followed by a binding name or pattern.
    pub(crate) fn is_let_declaration(&mut self) -> bool {
        self.next_token_is(|p| {
            p.is_identifier() || p.is_token(SyntaxKind::OpenBraceToken) || p.is_token(SyntaxKind::OpenBracketToken)
        })
    }

    /// Parse statements up to (not including) `}` or end of file.
    pub(crate) fn parse_statement_list(&mut self, children: &mut NodeList) -> ParseResult<()> {
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            children.push(self.parse_statement()?);
        }
        Ok(())
    }

    pub(crate) fn parse_block(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        self.parse_statement_list(&mut children)?;
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(NodeKind::Block, children))
    }

    pub(crate) fn parse_expression_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expression()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ExpressionStatement, children))
    }

    fn parse_labeled_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_identifier()?);
        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        children.push(self.parse_statement()?);
        Ok(self.finish(NodeKind::LabeledStatement, children))
    }

    /// `(` expression `)` shared by if/while/with/switch/do.
    fn parse_parenthesized_condition(&mut self, children: &mut NodeList) -> ParseResult<()> {
        children.push(self.parse_expected(SyntaxKind::OpenParenToken)?);
        children.push(self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_expression())?);
        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        Ok(())
    }

    fn parse_if_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        self.parse_parenthesized_condition(&mut children)?;
        children.push(self.parse_statement()?);
        if self.parse_optional(SyntaxKind::ElseKeyword, &mut children) {
            children.push(self.parse_statement()?);
        }
        Ok(self.finish(NodeKind::IfStatement, children))
    }

    fn parse_do_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.parse_statement()?);
        children.push(self.parse_expected(SyntaxKind::WhileKeyword)?);
        self.parse_parenthesized_condition(&mut children)?;
        // The semicolon after do-while is always optional.
        self.parse_optional(SyntaxKind::SemicolonToken, &mut children);
        Ok(self.finish(NodeKind::DoStatement, children))
    }

    fn parse_while_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        self.parse_parenthesized_condition(&mut children)?;
        children.push(self.parse_statement()?);
        Ok(self.finish(NodeKind::WhileStatement, children))
    }

    fn parse_with_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        self.parse_parenthesized_condition(&mut children)?;
        children.push(self.parse_statement()?);
        Ok(self.finish(NodeKind::WithStatement, children))
    }

    fn parse_for_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if self.is_token(SyntaxKind::AwaitKeyword) {
            children.push(self.eat());
        }
        children.push(self.parse_expected(SyntaxKind::OpenParenToken)?);

        if !self.is_token(SyntaxKind::SemicolonToken) {
            let initializer = self.with_context(CONTEXT_FLAG_DISALLOW_IN, 0, |p| {
                if p.is_start_of_variable_declaration_list() {
                    p.parse_variable_declaration_list()
                } else {
                    p.parse_expression()
                }
            })?;
            children.push(initializer);
        }

        let kind = match self.token() {
            SyntaxKind::OfKeyword => {
                children.push(self.eat());
                children.push(self.parse_assignment_expression()?);
                NodeKind::ForOfStatement
            }
            SyntaxKind::InKeyword => {
                children.push(self.eat());
                children.push(self.parse_expression()?);
                NodeKind::ForInStatement
            }
            _ => {
                children.push(self.parse_expected(SyntaxKind::SemicolonToken)?);
                if !self.is_token(SyntaxKind::SemicolonToken) {
                    children.push(self.parse_expression()?);
                }
                children.push(self.parse_expected(SyntaxKind::SemicolonToken)?);
                if !self.is_token(SyntaxKind::CloseParenToken) {
                    children.push(self.parse_expression()?);
                }
                NodeKind::ForStatement
            }
        };

        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        children.push(self.parse_statement()?);
        Ok(self.finish(kind, children))
    }

    fn is_start_of_variable_declaration_list(&mut self) -> bool {
        match self.token() {
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => true,
            SyntaxKind::LetKeyword => self.is_let_declaration(),
            SyntaxKind::UsingKeyword => self.next_token_is_identifier_on_same_line(),
            SyntaxKind::AwaitKeyword => self.next_token_is(|p| {
                p.is_token(SyntaxKind::UsingKeyword) && p.next_token_is_identifier_on_same_line()
            }),
            _ => false,
        }
    }

    fn parse_break_or_continue(&mut self, kind: NodeKind) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if self.is_identifier() && !self.has_preceding_line_break() {
            children.push(self.parse_identifier()?);
        }
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(kind, children))
    }

    fn parse_return_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if !self.can_parse_semicolon() {
            children.push(self.parse_expression()?);
        }
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ReturnStatement, children))
    }

    fn parse_throw_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if self.has_preceding_line_break() {
            return Err(self.error("Line break not permitted here."));
        }
        children.push(self.parse_expression()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::ThrowStatement, children))
    }

    fn parse_switch_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        self.parse_parenthesized_condition(&mut children)?;

        let mut block = NodeList::new();
        block.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            block.push(self.parse_case_or_default_clause()?);
        }
        block.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        children.push(self.finish(NodeKind::CaseBlock, block));
        Ok(self.finish(NodeKind::SwitchStatement, children))
    }

    fn parse_case_or_default_clause(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        let kind = match self.token() {
            SyntaxKind::CaseKeyword => {
                children.push(self.eat());
                children.push(self.parse_expression()?);
                NodeKind::CaseClause
            }
            SyntaxKind::DefaultKeyword => {
                children.push(self.eat());
                NodeKind::DefaultClause
            }
            _ => return Err(self.error_expected("case")),
        };
        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        while !matches!(
            self.token(),
            SyntaxKind::CaseKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        ) {
            children.push(self.parse_statement()?);
        }
        Ok(self.finish(kind, children))
    }

    fn parse_try_statement(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.parse_block()?);

        if self.is_token(SyntaxKind::CatchKeyword) {
            let mut clause = NodeList::new();
            clause.push(self.eat());
            if self.parse_optional(SyntaxKind::OpenParenToken, &mut clause) {
                clause.push(self.parse_variable_declaration()?);
                clause.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
            }
            clause.push(self.parse_block()?);
            children.push(self.finish(NodeKind::CatchClause, clause));
        }
        if self.parse_optional(SyntaxKind::FinallyKeyword, &mut children) {
            children.push(self.parse_block()?);
        }
        if children.len() == 2 {
            return Err(self.error_expected("catch"));
        }
        Ok(self.finish(NodeKind::TryStatement, children))
    }

    // =========================================================================
    // Variables
    // =========================================================================

    /// `modifiers` are already-parsed decorators/modifiers (`export`, `declare`).
    pub(crate) fn parse_variable_statement(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.parse_variable_declaration_list()?);
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::VariableStatement, children))
    }

    pub(crate) fn parse_variable_declaration_list(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        if self.is_token(SyntaxKind::AwaitKeyword) {
            children.push(self.eat());
        }
        match self.token() {
            SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::UsingKeyword => children.push(self.eat()),
            _ => return Err(self.error_expected("var")),
        }
        loop {
            children.push(self.parse_variable_declaration()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        Ok(self.finish(NodeKind::VariableDeclarationList, children))
    }

    /// `name [!] [: T] [= init]`; also the catch clause binding.
    pub(crate) fn parse_variable_declaration(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_binding_name()?);
        if self.is_token(SyntaxKind::ExclamationToken) && !self.has_preceding_line_break() {
            children.push(self.eat());
        }
        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_type_annotation()?);
        }
        if self.parse_optional(SyntaxKind::EqualsToken, &mut children) {
            children.push(self.parse_assignment_expression()?);
        }
        Ok(self.finish(NodeKind::VariableDeclaration, children))
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    pub(crate) fn parse_binding_name(&mut self) -> ParseResult {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_object_binding_pattern(),
            SyntaxKind::OpenBracketToken => self.parse_array_binding_pattern(),
            _ => self.parse_identifier(),
        }
    }

    fn parse_object_binding_pattern(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let mut element = NodeList::new();
            if self.parse_optional(SyntaxKind::DotDotDotToken, &mut element) {
                element.push(self.parse_identifier()?);
            } else {
                let is_shorthand = self.is_identifier()
                    && !self.next_token_is_kind(SyntaxKind::ColonToken);
                if is_shorthand {
                    element.push(self.parse_identifier()?);
                } else {
                    element.push(self.parse_property_name()?);
                    element.push(self.parse_expected(SyntaxKind::ColonToken)?);
                    element.push(self.parse_binding_name()?);
                }
            }
            if self.parse_optional(SyntaxKind::EqualsToken, &mut element) {
                element.push(self.parse_assignment_expression()?);
            }
            children.push(self.finish(NodeKind::BindingElement, element));
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(NodeKind::ObjectBindingPattern, children))
    }

    fn parse_array_binding_pattern(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.is_token(SyntaxKind::CommaToken) {
                // Elision
                children.push(self.eat());
                continue;
            }
            let mut element = NodeList::new();
            self.parse_optional(SyntaxKind::DotDotDotToken, &mut element);
            element.push(self.parse_binding_name()?);
            if self.parse_optional(SyntaxKind::EqualsToken, &mut element) {
                element.push(self.parse_assignment_expression()?);
            }
            children.push(self.finish(NodeKind::BindingElement, element));
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        Ok(self.finish(NodeKind::ArrayBindingPattern, children))
    }

    // =========================================================================
    // Functions
    // =========================================================================

    pub(crate) fn parse_function_declaration(&mut self, mut children: NodeList) -> ParseResult {
        let is_async = children
            .iter()
            .any(|&m| self.node_is_token(m, SyntaxKind::AsyncKeyword));
        children.push(self.parse_expected(SyntaxKind::FunctionKeyword)?);
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken, &mut children);
        // `export default function () {}` has no name.
        if self.is_identifier() {
            children.push(self.parse_identifier()?);
        }
        self.parse_function_signature_and_body(&mut children, is_async, is_generator, true)?;
        Ok(self.finish(NodeKind::FunctionDeclaration, children))
    }

    /// `<T>(params): R { body }`; the body may be missing (overloads,
    /// ambient declarations) when `allow_missing_body` is set.
    pub(crate) fn parse_function_signature_and_body(
        &mut self,
        children: &mut NodeList,
        is_async: bool,
        is_generator: bool,
        allow_missing_body: bool,
    ) -> ParseResult<()> {
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        children.push(self.parse_parameter_list()?);
        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_return_type_annotation()?);
        }
        if self.is_token(SyntaxKind::OpenBraceToken) {
            children.push(self.parse_function_body(is_async, is_generator)?);
        } else if allow_missing_body {
            self.parse_semicolon(children)?;
        } else {
            return Err(self.error_expected("{"));
        }
        Ok(())
    }

    pub(crate) fn parse_function_body(&mut self, is_async: bool, is_generator: bool) -> ParseResult {
        use super::state::{CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_GENERATOR, CONTEXT_FLAG_IN_CONDITIONAL_TRUE};
        let mut set = 0;
        let mut clear = CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE;
        if is_async {
            set |= CONTEXT_FLAG_ASYNC;
        } else {
            clear |= CONTEXT_FLAG_ASYNC;
        }
        if is_generator {
            set |= CONTEXT_FLAG_GENERATOR;
        } else {
            clear |= CONTEXT_FLAG_GENERATOR;
        }
        self.with_context(set, clear, |p| p.parse_block())
    }

    pub(crate) fn parse_parameter_list(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::OpenParenToken)?);
        while !self.is_token(SyntaxKind::CloseParenToken) {
            children.push(self.parse_parameter()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        Ok(self.finish(NodeKind::ParameterList, children))
    }

    pub(crate) fn parse_parameter(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        self.parse_decorators(&mut children)?;
        while self.is_parameter_modifier() {
            children.push(self.eat());
        }
        if self.is_token(SyntaxKind::ThisKeyword) {
            children.push(self.eat());
        } else {
            self.parse_optional(SyntaxKind::DotDotDotToken, &mut children);
            children.push(self.parse_binding_name()?);
        }
        self.parse_optional(SyntaxKind::QuestionToken, &mut children);
        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_type_annotation()?);
        }
        if self.parse_optional(SyntaxKind::EqualsToken, &mut children) {
            children.push(self.parse_assignment_expression()?);
        }
        Ok(self.finish(NodeKind::Parameter, children))
    }

    fn is_parameter_modifier(&mut self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::OverrideKeyword
        ) && self.next_token_is(|p| {
            p.is_identifier()
                || p.is_token(SyntaxKind::OpenBraceToken)
                || p.is_token(SyntaxKind::OpenBracketToken)
                || p.is_token(SyntaxKind::DotDotDotToken)
                || p.is_token(SyntaxKind::ThisKeyword)
        })
    }

    /// `@expr` decorators, appended to `children`.
    pub(crate) fn parse_decorators(&mut self, children: &mut NodeList) -> ParseResult<()> {
        while self.is_token(SyntaxKind::AtToken) {
            let mut decorator = NodeList::new();
            decorator.push(self.eat());
            decorator.push(self.parse_decorator_expression()?);
            children.push(self.finish(NodeKind::Decorator, decorator));
        }
        Ok(())
    }

    pub(crate) fn node_is_token(&self, node: NodeIndex, kind: SyntaxKind) -> bool {
        self.arena.kind(node) == Some(NodeKind::Token(kind))
    }
}
