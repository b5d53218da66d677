//! Parser state - expression parsing methods

use ts2js_scanner::SyntaxKind;

use super::base::LanguageVariant;
use super::state::{
    CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_DECORATOR, CONTEXT_FLAG_DISALLOW_IN, CONTEXT_FLAG_GENERATOR,
    CONTEXT_FLAG_IN_CONDITIONAL_TRUE, ParserState,
};
use super::{NodeIndex, NodeKind, NodeList, ParseResult};

/// Answer of the cheap arrow-function pre-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tristate {
    False,
    True,
    Unknown,
}

/// Binary operator precedence; 0 means "not a binary operator".
pub(crate) fn binary_precedence(kind: SyntaxKind) -> u8 {
    use SyntaxKind::*;
    match kind {
        QuestionQuestionToken => 1,
        BarBarToken => 2,
        AmpersandAmpersandToken => 3,
        BarToken => 4,
        CaretToken => 5,
        AmpersandToken => 6,
        EqualsEqualsToken
        | ExclamationEqualsToken
        | EqualsEqualsEqualsToken
        | ExclamationEqualsEqualsToken => 7,
        LessThanToken
        | GreaterThanToken
        | LessThanEqualsToken
        | GreaterThanEqualsToken
        | InstanceOfKeyword
        | InKeyword
        | AsKeyword
        | SatisfiesKeyword => 8,
        LessThanLessThanToken
        | GreaterThanGreaterThanToken
        | GreaterThanGreaterThanGreaterThanToken => 9,
        PlusToken | MinusToken => 10,
        AsteriskToken | SlashToken | PercentToken => 11,
        AsteriskAsteriskToken => 12,
        _ => 0,
    }
}

impl ParserState {
    // =========================================================================
    // Entry points
    // =========================================================================

    /// `a, b, c`
    pub(crate) fn parse_expression(&mut self) -> ParseResult {
        self.with_context(0, CONTEXT_FLAG_IN_CONDITIONAL_TRUE | CONTEXT_FLAG_DECORATOR, |p| {
            let mut expr = p.parse_assignment_expression()?;
            while p.is_token(SyntaxKind::CommaToken) {
                let mut children = NodeList::new();
                children.push(expr);
                children.push(p.eat());
                children.push(p.parse_assignment_expression()?);
                expr = p.finish(NodeKind::BinaryExpression, children);
            }
            Ok(expr)
        })
    }

    /// Expression with `in` allowed and conditional context reset, as in
    /// parentheses, brackets and argument lists.
    fn parse_nested_assignment_expression(&mut self) -> ParseResult {
        self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE | CONTEXT_FLAG_DECORATOR,
            |p| p.parse_assignment_expression(),
        )
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult {
        self.with_depth(|p| p.parse_assignment_expression_worker())
    }

    fn parse_assignment_expression_worker(&mut self) -> ParseResult {
        if self.is_yield_expression() {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_parenthesized_arrow_function()? {
            return Ok(arrow);
        }
        if let Some(arrow) = self.try_parse_async_simple_arrow_function()? {
            return Ok(arrow);
        }

        let expr = self.parse_binary_expression(0)?;

        if self.node_is_token(expr, SyntaxKind::Identifier) && self.is_token(SyntaxKind::EqualsGreaterThanToken) {
            let mut children = NodeList::new();
            children.push(self.finish(NodeKind::Parameter, smallvec::smallvec![expr]));
            return self.parse_arrow_function_rest(children, false);
        }

        if self.token().is_assignment_operator() && self.is_left_hand_side(expr) {
            let mut children = NodeList::new();
            children.push(expr);
            children.push(self.eat());
            children.push(self.parse_assignment_expression()?);
            return Ok(self.finish(NodeKind::BinaryExpression, children));
        }

        self.parse_conditional_expression_rest(expr)
    }

    fn is_left_hand_side(&self, expr: NodeIndex) -> bool {
        match self.arena.kind(expr) {
            Some(NodeKind::Token(kind)) => {
                kind.is_identifier_like() || kind == SyntaxKind::ThisKeyword
            }
            Some(
                NodeKind::PropertyAccessExpression
                | NodeKind::ElementAccessExpression
                | NodeKind::CallExpression
                | NodeKind::ParenthesizedExpression
                | NodeKind::ArrayLiteralExpression
                | NodeKind::ObjectLiteralExpression
                | NodeKind::NonNullExpression
                | NodeKind::TaggedTemplateExpression
                | NodeKind::MetaProperty,
            ) => true,
            _ => false,
        }
    }

    fn parse_conditional_expression_rest(&mut self, condition: NodeIndex) -> ParseResult {
        if !self.is_token(SyntaxKind::QuestionToken) {
            return Ok(condition);
        }
        let mut children = NodeList::new();
        children.push(condition);
        children.push(self.eat());
        children.push(self.with_context(
            CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            CONTEXT_FLAG_DISALLOW_IN,
            |p| p.parse_assignment_expression(),
        )?);
        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        children.push(self.parse_assignment_expression()?);
        Ok(self.finish(NodeKind::ConditionalExpression, children))
    }

    // =========================================================================
    // Yield
    // =========================================================================

    fn is_yield_expression(&mut self) -> bool {
        if !self.is_token(SyntaxKind::YieldKeyword) {
            return false;
        }
        if self.in_context(CONTEXT_FLAG_GENERATOR) {
            return true;
        }
        self.next_token_is(|p| p.is_identifier_or_keyword_or_literal_on_same_line())
    }

    fn is_identifier_or_keyword_or_literal_on_same_line(&self) -> bool {
        !self.has_preceding_line_break()
            && (self.is_identifier_or_keyword()
                || matches!(
                    self.token(),
                    SyntaxKind::NumericLiteral
                        | SyntaxKind::BigIntLiteral
                        | SyntaxKind::StringLiteral
                        | SyntaxKind::NoSubstitutionTemplateLiteral
                        | SyntaxKind::TemplateHead
                ))
    }

    fn parse_yield_expression(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if !self.has_preceding_line_break()
            && (self.is_token(SyntaxKind::AsteriskToken) || self.is_start_of_expression())
        {
            self.parse_optional(SyntaxKind::AsteriskToken, &mut children);
            children.push(self.parse_assignment_expression()?);
        }
        Ok(self.finish(NodeKind::YieldExpression, children))
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    fn try_parse_parenthesized_arrow_function(&mut self) -> ParseResult<Option<NodeIndex>> {
        let tristate = self.is_parenthesized_arrow_function();
        match tristate {
            Tristate::False => Ok(None),
            Tristate::True => self.parse_parenthesized_arrow_function(true).map(Some),
            Tristate::Unknown => {
                let start = self.token_start();
                if self.not_parenthesized_arrow.contains(&start) {
                    return Ok(None);
                }
                let arrow = self.try_parse(|p| p.parse_parenthesized_arrow_function(false));
                if arrow.is_none() {
                    self.not_parenthesized_arrow.insert(start);
                }
                Ok(arrow)
            }
        }
    }

    fn is_parenthesized_arrow_function(&mut self) -> Tristate {
        if !matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken | SyntaxKind::AsyncKeyword
        ) {
            return Tristate::False;
        }
        self.look_ahead(|p| p.is_parenthesized_arrow_function_worker())
    }

    fn is_parenthesized_arrow_function_worker(&mut self) -> Tristate {
        if self.is_token(SyntaxKind::AsyncKeyword) {
            self.next_token();
            if self.has_preceding_line_break()
                || !matches!(
                    self.token(),
                    SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
                )
            {
                return Tristate::False;
            }
        }

        let first = self.token();
        let second = self.next_token();

        if first == SyntaxKind::OpenParenToken {
            match second {
                SyntaxKind::CloseParenToken => {
                    return match self.next_token() {
                        SyntaxKind::EqualsGreaterThanToken
                        | SyntaxKind::ColonToken
                        | SyntaxKind::OpenBraceToken => Tristate::True,
                        _ => Tristate::False,
                    };
                }
                SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken => return Tristate::Unknown,
                SyntaxKind::DotDotDotToken => return Tristate::True,
                _ => {}
            }
            if second.is_modifier()
                && second != SyntaxKind::AsyncKeyword
                && self.next_token_is(|p| p.is_identifier())
            {
                return if self.next_token() == SyntaxKind::AsKeyword {
                    Tristate::False
                } else {
                    Tristate::True
                };
            }
            if !self.is_identifier() && second != SyntaxKind::ThisKeyword {
                return Tristate::False;
            }
            return match self.next_token() {
                SyntaxKind::ColonToken => Tristate::True,
                SyntaxKind::QuestionToken => {
                    self.next_token();
                    if matches!(
                        self.token(),
                        SyntaxKind::ColonToken
                            | SyntaxKind::CommaToken
                            | SyntaxKind::EqualsToken
                            | SyntaxKind::CloseParenToken
                    ) {
                        Tristate::True
                    } else {
                        Tristate::False
                    }
                }
                SyntaxKind::CommaToken | SyntaxKind::EqualsToken | SyntaxKind::CloseParenToken => {
                    Tristate::Unknown
                }
                _ => Tristate::False,
            };
        }

        // `<T>(...) =>`
        if !self.is_identifier() && second != SyntaxKind::ConstKeyword {
            return Tristate::False;
        }
        if self.variant != LanguageVariant::Jsx {
            return Tristate::Unknown;
        }
        // In JSX `<T>` is an element unless it reads as `<T,>`, `<T = X>`
        // or `<T extends U>`.
        if second == SyntaxKind::ConstKeyword {
            self.next_token();
        }
        match self.next_token() {
            SyntaxKind::ExtendsKeyword => match self.next_token() {
                SyntaxKind::EqualsToken | SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken => {
                    Tristate::False
                }
                _ => Tristate::True,
            },
            SyntaxKind::CommaToken | SyntaxKind::EqualsToken => Tristate::True,
            _ => Tristate::False,
        }
    }

    /// `[async] [<T>] (params) [: R] => body`. Without `allow_ambiguity`
    /// every shape check that could mean "not an arrow" fails the parse so
    /// the caller can rewind.
    fn parse_parenthesized_arrow_function(&mut self, allow_ambiguity: bool) -> ParseResult {
        let allow_return_type = allow_ambiguity || !self.in_context(CONTEXT_FLAG_IN_CONDITIONAL_TRUE);
        let mut children = NodeList::new();
        let is_async = self.is_token(SyntaxKind::AsyncKeyword);
        if is_async {
            children.push(self.eat());
        }
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        let (set, clear) = if is_async {
            (CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_GENERATOR)
        } else {
            (0, CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR)
        };
        children.push(self.with_context(set, clear, |p| p.parse_parameter_list())?);

        let has_return_type = self.is_token(SyntaxKind::ColonToken);
        if has_return_type {
            children.push(self.parse_return_type_annotation()?);
        }
        if !allow_ambiguity
            && !matches!(
                self.token(),
                SyntaxKind::EqualsGreaterThanToken | SyntaxKind::OpenBraceToken
            )
        {
            return Err(self.error_expected("=>"));
        }

        let arrow = self.parse_arrow_function_rest(children, is_async)?;
        if !allow_return_type && has_return_type && !self.is_token(SyntaxKind::ColonToken) {
            return Err(self.error_expected(":"));
        }
        Ok(arrow)
    }

    /// `async x => body`
    fn try_parse_async_simple_arrow_function(&mut self) -> ParseResult<Option<NodeIndex>> {
        let is_async_arrow = self.is_token(SyntaxKind::AsyncKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                if p.has_preceding_line_break() || !p.is_identifier() {
                    return false;
                }
                p.next_token();
                p.is_token(SyntaxKind::EqualsGreaterThanToken)
            });
        if !is_async_arrow {
            return Ok(None);
        }
        let mut children = NodeList::new();
        children.push(self.eat());
        let parameter = self.parse_identifier()?;
        children.push(self.finish(NodeKind::Parameter, smallvec::smallvec![parameter]));
        self.parse_arrow_function_rest(children, true).map(Some)
    }

    /// `=> body`, finishing the arrow whose head is in `children`.
    fn parse_arrow_function_rest(&mut self, mut children: NodeList, is_async: bool) -> ParseResult {
        children.push(self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?);
        if self.is_token(SyntaxKind::OpenBraceToken) {
            children.push(self.parse_function_body(is_async, false)?);
        } else {
            let (set, clear) = if is_async {
                (CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_GENERATOR)
            } else {
                (0, CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR)
            };
            children.push(self.with_context(set, clear, |p| p.parse_assignment_expression())?);
        }
        Ok(self.finish(NodeKind::ArrowFunction, children))
    }

    // =========================================================================
    // Binary and unary expressions
    // =========================================================================

    fn parse_binary_expression(&mut self, precedence: u8) -> ParseResult {
        let left = self.parse_unary_expression()?;
        self.parse_binary_expression_rest(precedence, left)
    }

    fn parse_binary_expression_rest(&mut self, precedence: u8, mut left: NodeIndex) -> ParseResult {
        loop {
            self.re_scan_greater_token();
            let operator = self.token();
            let new_precedence = binary_precedence(operator);
            let consume = new_precedence > 0
                && if operator == SyntaxKind::AsteriskAsteriskToken {
                    new_precedence >= precedence
                } else {
                    new_precedence > precedence
                };
            if !consume {
                return Ok(left);
            }
            if operator == SyntaxKind::InKeyword && self.in_context(CONTEXT_FLAG_DISALLOW_IN) {
                return Ok(left);
            }

            let mut children = NodeList::new();
            children.push(left);
            if matches!(operator, SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword) {
                if self.has_preceding_line_break() {
                    return Ok(left);
                }
                children.push(self.eat());
                if operator == SyntaxKind::AsKeyword {
                    children.push(self.parse_assertion_type()?);
                } else {
                    children.push(self.parse_type()?);
                }
                let kind = if operator == SyntaxKind::AsKeyword {
                    NodeKind::AsExpression
                } else {
                    NodeKind::SatisfiesExpression
                };
                left = self.finish(kind, children);
            } else {
                children.push(self.eat());
                children.push(self.parse_binary_expression(new_precedence)?);
                left = self.finish(NodeKind::BinaryExpression, children);
            }
        }
    }

    fn parse_unary_expression(&mut self) -> ParseResult {
        self.with_depth(|p| {
            if p.is_update_expression() {
                return p.parse_update_expression();
            }
            let operand = p.parse_simple_unary_expression()?;
            if p.is_token(SyntaxKind::AsteriskAsteriskToken) {
                return Err(p.error(
                    "An unary expression cannot appear on the left-hand side of a '**' expression.",
                ));
            }
            Ok(operand)
        })
    }

    fn is_update_expression(&mut self) -> bool {
        match self.token() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword => false,
            SyntaxKind::AwaitKeyword => !self.is_await_expression(),
            SyntaxKind::LessThanToken => self.variant == LanguageVariant::Jsx,
            _ => true,
        }
    }

    fn is_await_expression(&mut self) -> bool {
        self.is_token(SyntaxKind::AwaitKeyword)
            && (self.in_context(CONTEXT_FLAG_ASYNC)
                || self.next_token_is(|p| p.is_identifier_or_keyword_or_literal_on_same_line()))
    }

    fn parse_simple_unary_expression(&mut self) -> ParseResult {
        let kind = match self.token() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken => NodeKind::PrefixUnaryExpression,
            SyntaxKind::DeleteKeyword => NodeKind::DeleteExpression,
            SyntaxKind::TypeOfKeyword => NodeKind::TypeOfExpression,
            SyntaxKind::VoidKeyword => NodeKind::VoidExpression,
            SyntaxKind::AwaitKeyword if self.is_await_expression() => NodeKind::AwaitExpression,
            SyntaxKind::LessThanToken => return self.parse_type_assertion(),
            _ => return self.parse_update_expression(),
        };
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.parse_unary_expression_operand()?);
        Ok(self.finish(kind, children))
    }

    fn parse_unary_expression_operand(&mut self) -> ParseResult {
        self.with_depth(|p| p.parse_simple_unary_expression())
    }

    /// `<T>expr` (not available in JSX files).
    fn parse_type_assertion(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.parse_assertion_type()?);
        children.push(self.parse_expected(SyntaxKind::GreaterThanToken)?);
        children.push(self.parse_unary_expression_operand()?);
        Ok(self.finish(NodeKind::TypeAssertionExpression, children))
    }

    /// The type of `e as T` or `<T>e`, where `const` is also accepted.
    fn parse_assertion_type(&mut self) -> ParseResult {
        if self.is_token(SyntaxKind::ConstKeyword) {
            let keyword = self.eat();
            return Ok(self.finish(NodeKind::KeywordType, smallvec::smallvec![keyword]));
        }
        self.parse_type()
    }

    fn parse_update_expression(&mut self) -> ParseResult {
        if matches!(
            self.token(),
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
        ) {
            let mut children = NodeList::new();
            children.push(self.eat());
            children.push(self.parse_left_hand_side_expression()?);
            return Ok(self.finish(NodeKind::PrefixUnaryExpression, children));
        }
        if self.variant == LanguageVariant::Jsx && self.is_token(SyntaxKind::LessThanToken) {
            return self.parse_jsx_element_or_fragment(true);
        }

        let expr = self.parse_left_hand_side_expression()?;
        if matches!(
            self.token(),
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
        ) && !self.has_preceding_line_break()
        {
            let mut children = NodeList::new();
            children.push(expr);
            children.push(self.eat());
            return Ok(self.finish(NodeKind::PostfixUnaryExpression, children));
        }
        Ok(expr)
    }

    // =========================================================================
    // Left-hand side expressions
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression(&mut self) -> ParseResult {
        let expr = match self.token() {
            SyntaxKind::ImportKeyword
                if self.next_token_is(|p| {
                    matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
                }) =>
            {
                self.eat()
            }
            SyntaxKind::ImportKeyword if self.next_token_is_kind(SyntaxKind::DotToken) => {
                self.parse_meta_property()?
            }
            SyntaxKind::SuperKeyword => self.eat(),
            _ => self.parse_member_expression()?,
        };
        self.parse_call_expression_rest(expr)
    }

    /// `new.target`, `import.meta`
    fn parse_meta_property(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.parse_expected(SyntaxKind::DotToken)?);
        children.push(self.parse_identifier_name()?);
        Ok(self.finish(NodeKind::MetaProperty, children))
    }

    fn parse_member_expression(&mut self) -> ParseResult {
        let expr = self.parse_primary_expression()?;
        self.parse_member_expression_rest(expr, true)
    }

    fn parse_member_expression_rest(&mut self, mut expr: NodeIndex, allow_optional_chain: bool) -> ParseResult {
        loop {
            let is_optional = allow_optional_chain
                && self.is_token(SyntaxKind::QuestionDotToken)
                && self.next_token_is(|p| {
                    p.is_identifier_or_keyword()
                        || matches!(
                            p.token(),
                            SyntaxKind::PrivateIdentifier | SyntaxKind::OpenBracketToken
                        )
                });
            let mut children = NodeList::new();
            children.push(expr);

            if is_optional || self.is_token(SyntaxKind::DotToken) {
                children.push(self.eat());
                if self.is_token(SyntaxKind::OpenBracketToken) {
                    expr = self.parse_element_access(children)?;
                } else {
                    children.push(self.parse_identifier_name()?);
                    expr = self.finish(NodeKind::PropertyAccessExpression, children);
                }
                continue;
            }

            match self.token() {
                SyntaxKind::ExclamationToken if !self.has_preceding_line_break() => {
                    children.push(self.eat());
                    expr = self.finish(NodeKind::NonNullExpression, children);
                }
                SyntaxKind::OpenBracketToken if !self.in_context(CONTEXT_FLAG_DECORATOR) => {
                    expr = self.parse_element_access(children)?;
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    children.push(self.parse_template_literal()?);
                    expr = self.finish(NodeKind::TaggedTemplateExpression, children);
                }
                SyntaxKind::LessThanToken => {
                    match self.try_parse(|p| p.parse_type_arguments_in_expression()) {
                        Some(type_arguments) => {
                            children.push(type_arguments);
                            expr = self.finish(NodeKind::InstantiationExpression, children);
                        }
                        None => return Ok(expr),
                    }
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_element_access(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.parse_expected(SyntaxKind::OpenBracketToken)?);
        children.push(self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE | CONTEXT_FLAG_DECORATOR,
            |p| p.parse_expression(),
        )?);
        children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        Ok(self.finish(NodeKind::ElementAccessExpression, children))
    }

    fn parse_call_expression_rest(&mut self, mut expr: NodeIndex) -> ParseResult {
        loop {
            expr = self.parse_member_expression_rest(expr, true)?;
            let mut children = NodeList::new();

            // `f<T>(x)` arrives here as an instantiation of `f`.
            if self.is_token(SyntaxKind::OpenParenToken)
                && self.arena.kind(expr) == Some(NodeKind::InstantiationExpression)
            {
                children.extend(self.arena.children(expr).iter().copied());
                children.extend(self.parse_argument_list()?);
                expr = self.finish(NodeKind::CallExpression, children);
                continue;
            }

            children.push(expr);
            if self.is_token(SyntaxKind::QuestionDotToken) {
                children.push(self.eat());
                if self.is_token(SyntaxKind::LessThanToken) {
                    children.push(self.parse_type_arguments_in_expression()?);
                }
                if !self.is_token(SyntaxKind::OpenParenToken) {
                    return Err(self.error_expected("("));
                }
            } else if !self.is_token(SyntaxKind::OpenParenToken) {
                return Ok(expr);
            }
            children.extend(self.parse_argument_list()?);
            expr = self.finish(NodeKind::CallExpression, children);
        }
    }

    /// `(a, ...b)` as a flat token/expression list.
    fn parse_argument_list(&mut self) -> ParseResult<NodeList> {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::OpenParenToken)?);
        while !self.is_token(SyntaxKind::CloseParenToken) {
            children.push(self.parse_argument_or_array_element()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        Ok(children)
    }

    fn parse_argument_or_array_element(&mut self) -> ParseResult {
        if self.is_token(SyntaxKind::DotDotDotToken) {
            let mut children = NodeList::new();
            children.push(self.eat());
            children.push(self.parse_nested_assignment_expression()?);
            return Ok(self.finish(NodeKind::SpreadElement, children));
        }
        self.parse_nested_assignment_expression()
    }

    /// `<T, U>` followed by something that cannot continue a comparison.
    fn parse_type_arguments_in_expression(&mut self) -> ParseResult {
        let type_arguments = self.parse_type_arguments()?;
        if self.can_follow_type_arguments_in_expression() {
            Ok(type_arguments)
        } else {
            Err(self.error("Type arguments cannot be followed by this token."))
        }
    }

    fn can_follow_type_arguments_in_expression(&mut self) -> bool {
        match self.token() {
            SyntaxKind::OpenParenToken
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead => true,
            SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken => false,
            kind => {
                self.has_preceding_line_break()
                    || binary_precedence(kind) > 0
                    || !self.is_start_of_expression()
            }
        }
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult {
        match self.token() {
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::PrivateIdentifier => Ok(self.eat()),
            SyntaxKind::TemplateHead => self.parse_template_literal(),
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::AsyncKeyword
                if self.next_token_is(|p| {
                    p.is_token(SyntaxKind::FunctionKeyword) && !p.has_preceding_line_break()
                }) =>
            {
                self.parse_function_expression()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            SyntaxKind::ClassKeyword | SyntaxKind::AtToken => {
                let mut children = NodeList::new();
                self.parse_decorators(&mut children)?;
                self.parse_class_like(children, NodeKind::ClassExpression)
            }
            SyntaxKind::NewKeyword => self.parse_new_expression(),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                self.re_scan_slash_token();
                Ok(self.eat())
            }
            _ if self.is_identifier() => self.parse_identifier(),
            _ => Err(self.error("Expression expected.")),
        }
    }

    fn parse_parenthesized_expression(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_DECORATOR,
            |p| p.parse_expression(),
        )?);
        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        Ok(self.finish(NodeKind::ParenthesizedExpression, children))
    }

    fn parse_template_literal(&mut self) -> ParseResult {
        if self.is_token(SyntaxKind::NoSubstitutionTemplateLiteral) {
            return Ok(self.eat());
        }
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::TemplateHead)?);
        loop {
            let mut span = NodeList::new();
            span.push(self.parse_expression()?);
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                return Err(self.error_expected("}"));
            }
            let literal = self.re_scan_template_token();
            span.push(self.eat());
            children.push(self.finish(NodeKind::TemplateSpan, span));
            if literal != SyntaxKind::TemplateMiddle {
                break;
            }
        }
        Ok(self.finish(NodeKind::TemplateExpression, children))
    }

    fn parse_array_literal(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.is_token(SyntaxKind::CommaToken) {
                // Elision
                children.push(self.eat());
                continue;
            }
            children.push(self.parse_argument_or_array_element()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        Ok(self.finish(NodeKind::ArrayLiteralExpression, children))
    }

    fn parse_object_literal(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            children.push(self.with_depth(|p| p.parse_object_literal_element())?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(NodeKind::ObjectLiteralExpression, children))
    }

    fn parse_object_literal_element(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        if self.is_token(SyntaxKind::DotDotDotToken) {
            children.push(self.eat());
            children.push(self.parse_nested_assignment_expression()?);
            return Ok(self.finish(NodeKind::SpreadAssignment, children));
        }

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.next_token_is(|p| !p.has_preceding_line_break() && p.is_property_name_start())
        {
            let kind = if self.is_token(SyntaxKind::GetKeyword) {
                NodeKind::GetAccessor
            } else {
                NodeKind::SetAccessor
            };
            children.push(self.eat());
            children.push(self.parse_property_name()?);
            self.parse_function_signature_and_body(&mut children, false, false, false)?;
            return Ok(self.finish(kind, children));
        }

        let is_async = self.is_token(SyntaxKind::AsyncKeyword)
            && self.next_token_is(|p| {
                !p.has_preceding_line_break()
                    && (p.is_property_name_start() || p.is_token(SyntaxKind::AsteriskToken))
            });
        if is_async {
            children.push(self.eat());
        }
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken, &mut children);
        let is_shorthand_candidate = self.is_identifier();
        children.push(self.parse_property_name()?);
        self.parse_optional(SyntaxKind::QuestionToken, &mut children);

        if is_async
            || is_generator
            || matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
        {
            self.parse_function_signature_and_body(&mut children, is_async, is_generator, false)?;
            return Ok(self.finish(NodeKind::MethodDeclaration, children));
        }

        if is_shorthand_candidate
            && matches!(
                self.token(),
                SyntaxKind::CommaToken | SyntaxKind::CloseBraceToken | SyntaxKind::EqualsToken
            )
        {
            if self.parse_optional(SyntaxKind::EqualsToken, &mut children) {
                children.push(self.parse_nested_assignment_expression()?);
            }
            return Ok(self.finish(NodeKind::ShorthandPropertyAssignment, children));
        }

        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        children.push(self.parse_nested_assignment_expression()?);
        Ok(self.finish(NodeKind::PropertyAssignment, children))
    }

    fn parse_function_expression(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword, &mut children);
        children.push(self.parse_expected(SyntaxKind::FunctionKeyword)?);
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken, &mut children);
        if self.is_identifier() {
            children.push(self.parse_identifier()?);
        }
        self.parse_function_signature_and_body(&mut children, is_async, is_generator, false)?;
        Ok(self.finish(NodeKind::FunctionExpression, children))
    }

    /// `new C<T>(args)`, `new C`, `new.target`
    fn parse_new_expression(&mut self) -> ParseResult {
        if self.next_token_is_kind(SyntaxKind::DotToken) {
            return self.parse_meta_property();
        }
        let mut children = NodeList::new();
        children.push(self.eat());
        let callee = self.parse_primary_expression()?;
        let callee = self.parse_member_expression_rest(callee, false)?;
        if self.arena.kind(callee) == Some(NodeKind::InstantiationExpression) {
            children.extend(self.arena.children(callee).iter().copied());
        } else {
            children.push(callee);
        }
        if self.is_token(SyntaxKind::OpenParenToken) {
            children.extend(self.parse_argument_list()?);
        }
        Ok(self.finish(NodeKind::NewExpression, children))
    }

    // =========================================================================
    // Decorators
    // =========================================================================

    /// The expression after `@`: a member chain with optional calls, where
    /// `[` never continues the expression.
    pub(crate) fn parse_decorator_expression(&mut self) -> ParseResult {
        self.with_context(CONTEXT_FLAG_DECORATOR, 0, |p| p.parse_left_hand_side_expression())
    }

    // =========================================================================
    // Lookahead
    // =========================================================================

    pub(crate) fn is_start_of_expression(&mut self) -> bool {
        match self.token() {
            SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::OpenParenToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::NewKeyword
            | SyntaxKind::SlashToken
            | SyntaxKind::SlashEqualsToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::AwaitKeyword
            | SyntaxKind::YieldKeyword
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::AtToken => true,
            SyntaxKind::ImportKeyword => self.next_token_is(|p| {
                matches!(
                    p.token(),
                    SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken | SyntaxKind::DotToken
                )
            }),
            _ => self.is_identifier(),
        }
    }
}
