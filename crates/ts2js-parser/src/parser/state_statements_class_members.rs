//! Parser state - class members, type members and property names

use ts2js_scanner::SyntaxKind;

use super::state::{CONTEXT_FLAG_DISALLOW_IN, ParserState};
use super::{NodeKind, NodeList, ParseResult};

impl ParserState {
    // =========================================================================
    // Property names
    // =========================================================================

    /// Identifier, keyword, string, number, private name, or `[expr]`.
    pub(crate) fn parse_property_name(&mut self) -> ParseResult {
        match self.token() {
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::PrivateIdentifier => Ok(self.eat()),
            SyntaxKind::OpenBracketToken => {
                let mut children = NodeList::new();
                children.push(self.eat());
                children.push(
                    self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_assignment_expression())?,
                );
                children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
                Ok(self.finish(NodeKind::ComputedPropertyName, children))
            }
            _ => self.parse_identifier_name(),
        }
    }

    pub(crate) fn is_property_name_start(&self) -> bool {
        self.is_identifier_or_keyword()
            || matches!(
                self.token(),
                SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::PrivateIdentifier
                    | SyntaxKind::OpenBracketToken
            )
    }

    fn can_follow_modifier(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken | SyntaxKind::DotDotDotToken
        ) || self.is_property_name_start()
    }

    /// A modifier keyword is a modifier only when a member can follow it.
    fn is_class_member_modifier(&mut self) -> bool {
        let kind = self.token();
        if !kind.is_modifier() || matches!(kind, SyntaxKind::InKeyword | SyntaxKind::OutKeyword) {
            return false;
        }
        if kind == SyntaxKind::StaticKeyword {
            return self.next_token_is(|p| {
                !p.is_token(SyntaxKind::OpenBraceToken) && p.can_follow_modifier()
            });
        }
        self.next_token_is(|p| !p.has_preceding_line_break() && p.can_follow_modifier())
    }

    // =========================================================================
    // Class members
    // =========================================================================

    pub(crate) fn parse_class_member(&mut self) -> ParseResult {
        self.with_depth(|p| p.parse_class_member_worker())
    }

    fn parse_class_member_worker(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        if self.parse_optional(SyntaxKind::SemicolonToken, &mut children) {
            return Ok(self.finish(NodeKind::SemicolonClassElement, children));
        }
        if self.is_token(SyntaxKind::StaticKeyword) && self.next_token_is_kind(SyntaxKind::OpenBraceToken) {
            children.push(self.eat());
            children.push(self.parse_function_body(false, false)?);
            return Ok(self.finish(NodeKind::ClassStaticBlockDeclaration, children));
        }

        self.parse_decorators(&mut children)?;
        let mut is_async = false;
        while self.is_class_member_modifier() {
            is_async |= self.is_token(SyntaxKind::AsyncKeyword);
            children.push(self.eat());
        }

        if self.is_token(SyntaxKind::ConstructorKeyword)
            && self.next_token_is(|p| {
                matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
            })
        {
            children.push(self.eat());
            self.parse_function_signature_and_body(&mut children, false, false, true)?;
            return Ok(self.finish(NodeKind::Constructor, children));
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
            self.parse_function_signature_and_body(&mut children, false, false, true)?;
            return Ok(self.finish(kind, children));
        }

        if self.is_token(SyntaxKind::OpenBracketToken) && self.is_index_signature() {
            return self.parse_index_signature(children);
        }

        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken, &mut children);
        children.push(self.parse_property_name()?);
        if matches!(self.token(), SyntaxKind::QuestionToken | SyntaxKind::ExclamationToken) {
            children.push(self.eat());
        }

        if is_generator
            || matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
        {
            self.parse_function_signature_and_body(&mut children, is_async, is_generator, true)?;
            return Ok(self.finish(NodeKind::MethodDeclaration, children));
        }

        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_type_annotation()?);
        }
        if self.parse_optional(SyntaxKind::EqualsToken, &mut children) {
            children.push(
                self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_assignment_expression())?,
            );
        }
        self.parse_semicolon(&mut children)?;
        Ok(self.finish(NodeKind::PropertyDeclaration, children))
    }

    // =========================================================================
    // Index signatures
    // =========================================================================

    /// `[key: string]` as opposed to a computed property name `[key]`.
    pub(crate) fn is_index_signature(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if matches!(
                p.token(),
                SyntaxKind::DotDotDotToken | SyntaxKind::CloseBracketToken
            ) {
                return true;
            }
            if p.token().is_modifier() {
                p.next_token();
                if p.is_identifier() {
                    return true;
                }
            } else if !p.is_identifier() {
                return false;
            } else {
                p.next_token();
            }
            if matches!(p.token(), SyntaxKind::ColonToken | SyntaxKind::CommaToken) {
                return true;
            }
            if !p.is_token(SyntaxKind::QuestionToken) {
                return false;
            }
            p.next_token();
            matches!(
                p.token(),
                SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken
            )
        })
    }

    fn parse_index_signature(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.eat());
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            children.push(self.parse_parameter()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_type_annotation()?);
        }
        self.parse_type_member_separator(&mut children)?;
        Ok(self.finish(NodeKind::IndexSignature, children))
    }

    // =========================================================================
    // Type members (interfaces and type literals)
    // =========================================================================

    /// `{ members }`, appended flat to `children`.
    pub(crate) fn parse_type_member_block(&mut self, children: &mut NodeList) -> ParseResult<()> {
        children.push(self.parse_expected(SyntaxKind::OpenBraceToken)?);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            children.push(self.with_depth(|p| p.parse_type_member())?);
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(())
    }

    fn parse_type_member(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            self.parse_signature(&mut children)?;
            self.parse_type_member_separator(&mut children)?;
            return Ok(self.finish(NodeKind::CallSignature, children));
        }
        if self.is_token(SyntaxKind::NewKeyword)
            && self.next_token_is(|p| {
                matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
            })
        {
            children.push(self.eat());
            self.parse_signature(&mut children)?;
            self.parse_type_member_separator(&mut children)?;
            return Ok(self.finish(NodeKind::ConstructSignature, children));
        }

        while self.is_class_member_modifier()
            || (matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
                && self.next_token_is(|p| !p.has_preceding_line_break() && p.is_property_name_start()))
        {
            children.push(self.eat());
        }

        if self.is_token(SyntaxKind::OpenBracketToken) && self.is_index_signature() {
            return self.parse_index_signature(children);
        }

        children.push(self.parse_property_name()?);
        self.parse_optional(SyntaxKind::QuestionToken, &mut children);
        let kind = if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            self.parse_signature(&mut children)?;
            NodeKind::MethodSignature
        } else {
            if self.is_token(SyntaxKind::ColonToken) {
                children.push(self.parse_type_annotation()?);
            }
            NodeKind::PropertySignature
        };
        self.parse_type_member_separator(&mut children)?;
        Ok(self.finish(kind, children))
    }

    /// `<T>(params): R` without a body.
    fn parse_signature(&mut self, children: &mut NodeList) -> ParseResult<()> {
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        children.push(self.parse_parameter_list()?);
        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_return_type_annotation()?);
        }
        Ok(())
    }

    fn parse_type_member_separator(&mut self, children: &mut NodeList) -> ParseResult<()> {
        if self.parse_optional(SyntaxKind::CommaToken, children) {
            return Ok(());
        }
        self.parse_semicolon(children)
    }
}
