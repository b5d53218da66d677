//! Parser state - type annotations, type parameters and type nodes

use ts2js_scanner::SyntaxKind;

use super::state::{CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES, ParserState};
use super::{NodeKind, NodeList, ParseResult};

impl ParserState {
    // =========================================================================
    // Annotations
    // =========================================================================

    /// `: T`
    pub(crate) fn parse_type_annotation(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        children.push(self.parse_type_allowing_conditional()?);
        Ok(self.finish(NodeKind::TypeAnnotation, children))
    }

    /// `: T`, `: x is T`, `: asserts x [is T]`
    pub(crate) fn parse_return_type_annotation(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        children.push(self.parse_type_or_type_predicate()?);
        Ok(self.finish(NodeKind::TypeAnnotation, children))
    }

    fn parse_type_or_type_predicate(&mut self) -> ParseResult {
        let is_asserts = self.is_token(SyntaxKind::AssertsKeyword)
            && self.next_token_is(|p| {
                !p.has_preceding_line_break()
                    && (p.is_identifier() || p.is_token(SyntaxKind::ThisKeyword))
            });
        let is_predicate = (self.is_identifier() || self.is_token(SyntaxKind::ThisKeyword))
            && self.next_token_is(|p| {
                p.is_token(SyntaxKind::IsKeyword) && !p.has_preceding_line_break()
            });
        if !is_asserts && !is_predicate {
            return self.parse_type_allowing_conditional();
        }

        let mut children = NodeList::new();
        if is_asserts {
            children.push(self.eat());
        }
        if self.is_token(SyntaxKind::ThisKeyword) {
            children.push(self.eat());
        } else {
            children.push(self.parse_identifier()?);
        }
        if self.parse_optional(SyntaxKind::IsKeyword, &mut children) {
            children.push(self.parse_type_allowing_conditional()?);
        }
        Ok(self.finish(NodeKind::TypePredicate, children))
    }

    // =========================================================================
    // Type parameters and arguments
    // =========================================================================

    /// `<T extends U = D, const V>` on a declaration.
    pub(crate) fn parse_type_parameters(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::LessThanToken)?);
        while !self.is_token(SyntaxKind::GreaterThanToken) {
            children.push(self.parse_type_parameter()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::GreaterThanToken)?);
        Ok(self.finish(NodeKind::TypeParameters, children))
    }

    fn parse_type_parameter(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        while matches!(
            self.token(),
            SyntaxKind::ConstKeyword | SyntaxKind::InKeyword | SyntaxKind::OutKeyword
        ) && self.next_token_is(|p| p.is_identifier())
        {
            children.push(self.eat());
        }
        children.push(self.parse_identifier()?);
        if self.parse_optional(SyntaxKind::ExtendsKeyword, &mut children) {
            children.push(self.parse_type_allowing_conditional()?);
        }
        if self.parse_optional(SyntaxKind::EqualsToken, &mut children) {
            children.push(self.parse_type_allowing_conditional()?);
        }
        Ok(self.finish(NodeKind::TypeParameter, children))
    }

    /// `<A, B>` on a reference, call or heritage expression.
    pub(crate) fn parse_type_arguments(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::LessThanToken)?);
        loop {
            children.push(self.parse_type_allowing_conditional()?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::GreaterThanToken)?);
        Ok(self.finish(NodeKind::TypeArguments, children))
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type_allowing_conditional(&mut self) -> ParseResult {
        self.with_context(0, CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES, |p| p.parse_type())
    }

    pub(crate) fn parse_type(&mut self) -> ParseResult {
        self.with_depth(|p| p.parse_type_worker())
    }

    fn parse_type_worker(&mut self) -> ParseResult {
        if self.is_start_of_function_or_constructor_type() {
            return self.parse_function_or_constructor_type();
        }
        let check_type = self.parse_union_type()?;
        if self.in_context(CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES)
            || self.has_preceding_line_break()
            || !self.is_token(SyntaxKind::ExtendsKeyword)
        {
            return Ok(check_type);
        }

        let mut children = NodeList::new();
        children.push(check_type);
        children.push(self.eat());
        children.push(self.with_context(CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES, 0, |p| p.parse_type())?);
        children.push(self.parse_expected(SyntaxKind::QuestionToken)?);
        children.push(self.parse_type_allowing_conditional()?);
        children.push(self.parse_expected(SyntaxKind::ColonToken)?);
        children.push(self.parse_type_allowing_conditional()?);
        Ok(self.finish(NodeKind::ConditionalType, children))
    }

    fn is_start_of_function_or_constructor_type(&mut self) -> bool {
        match self.token() {
            SyntaxKind::LessThanToken | SyntaxKind::NewKeyword => true,
            SyntaxKind::OpenParenToken => {
                self.look_ahead(|p| p.is_unambiguously_start_of_function_type())
            }
            SyntaxKind::AbstractKeyword => self.next_token_is_kind(SyntaxKind::NewKeyword),
            _ => false,
        }
    }

    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.next_token();
        if matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::DotDotDotToken
        ) {
            return true;
        }
        if self.skip_parameter_start() {
            if matches!(
                self.token(),
                SyntaxKind::ColonToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::QuestionToken
                    | SyntaxKind::EqualsToken
            ) {
                return true;
            }
            if self.is_token(SyntaxKind::CloseParenToken)
                && self.next_token() == SyntaxKind::EqualsGreaterThanToken
            {
                return true;
            }
        }
        false
    }

    /// Skip modifiers and a parameter name or binding pattern.
    fn skip_parameter_start(&mut self) -> bool {
        while self.token().is_modifier() && self.next_token_is(|p| p.is_identifier()) {
            self.next_token();
        }
        if self.is_identifier() || self.is_token(SyntaxKind::ThisKeyword) {
            self.next_token();
            return true;
        }
        if !matches!(
            self.token(),
            SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
        ) {
            return false;
        }
        let mut depth = 0usize;
        loop {
            match self.token() {
                SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken => {
                    depth -= 1;
                    if depth == 0 {
                        self.next_token();
                        return true;
                    }
                }
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
            self.next_token();
        }
    }

    /// `<T>(a: A) => R` and `[abstract] new (a: A) => R`
    fn parse_function_or_constructor_type(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        let mut kind = NodeKind::FunctionType;
        if self.is_token(SyntaxKind::AbstractKeyword) {
            children.push(self.eat());
        }
        if self.is_token(SyntaxKind::NewKeyword) {
            children.push(self.eat());
            kind = NodeKind::ConstructorType;
        }
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_parameters()?);
        }
        children.push(self.parse_parameter_list()?);
        children.push(self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?);
        children.push(self.parse_type_or_type_predicate()?);
        Ok(self.finish(kind, children))
    }

    fn parse_union_type(&mut self) -> ParseResult {
        self.parse_union_or_intersection_type(SyntaxKind::BarToken, NodeKind::UnionType, |p| {
            p.parse_intersection_type()
        })
    }

    fn parse_intersection_type(&mut self) -> ParseResult {
        self.parse_union_or_intersection_type(
            SyntaxKind::AmpersandToken,
            NodeKind::IntersectionType,
            |p| p.parse_type_operator(),
        )
    }

    /// `[op] A op B op C`; a single operand without a leading operator is
    /// returned as is.
    fn parse_union_or_intersection_type(
        &mut self,
        operator: SyntaxKind,
        kind: NodeKind,
        mut parse_constituent: impl FnMut(&mut Self) -> ParseResult,
    ) -> ParseResult {
        let mut children = NodeList::new();
        let has_leading_operator = self.parse_optional(operator, &mut children);
        children.push(if self.is_start_of_function_or_constructor_type() {
            self.parse_function_or_constructor_type()?
        } else {
            parse_constituent(self)?
        });
        while self.parse_optional(operator, &mut children) {
            children.push(if self.is_start_of_function_or_constructor_type() {
                self.parse_function_or_constructor_type()?
            } else {
                parse_constituent(self)?
            });
        }
        if children.len() == 1 && !has_leading_operator {
            return Ok(children[0]);
        }
        Ok(self.finish(kind, children))
    }

    fn parse_type_operator(&mut self) -> ParseResult {
        match self.token() {
            SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword => {
                let mut children = NodeList::new();
                children.push(self.eat());
                children.push(self.with_depth(|p| p.parse_type_operator())?);
                Ok(self.finish(NodeKind::TypeOperator, children))
            }
            SyntaxKind::InferKeyword => self.parse_infer_type(),
            _ => self.parse_postfix_type(),
        }
    }

    /// `infer U [extends C]`
    fn parse_infer_type(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        children.push(self.parse_identifier()?);
        let constraint = self.try_parse(|p| {
            let mut constraint = NodeList::new();
            constraint.push(p.parse_expected(SyntaxKind::ExtendsKeyword)?);
            constraint.push(p.with_context(CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES, 0, |p| p.parse_type())?);
            if p.in_context(CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES) || !p.is_token(SyntaxKind::QuestionToken) {
                Ok(constraint)
            } else {
                Err(p.error("Constraint belongs to the enclosing conditional type."))
            }
        });
        if let Some(constraint) = constraint {
            children.extend(constraint);
        }
        Ok(self.finish(NodeKind::InferType, children))
    }

    /// `T[]`, `T[K]`
    fn parse_postfix_type(&mut self) -> ParseResult {
        let mut ty = self.parse_non_array_type()?;
        while self.is_token(SyntaxKind::OpenBracketToken) && !self.has_preceding_line_break() {
            let mut children = NodeList::new();
            children.push(ty);
            children.push(self.eat());
            if self.parse_optional(SyntaxKind::CloseBracketToken, &mut children) {
                ty = self.finish(NodeKind::ArrayType, children);
            } else {
                children.push(self.parse_type_allowing_conditional()?);
                children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
                ty = self.finish(NodeKind::IndexedAccessType, children);
            }
        }
        Ok(ty)
    }

    fn parse_non_array_type(&mut self) -> ParseResult {
        match self.token() {
            SyntaxKind::AnyKeyword
            | SyntaxKind::UnknownKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::BigIntKeyword
            | SyntaxKind::SymbolKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::UndefinedKeyword
            | SyntaxKind::NeverKeyword
            | SyntaxKind::ObjectKeyword
            | SyntaxKind::IntrinsicKeyword
                if !self.next_token_is_kind(SyntaxKind::DotToken) =>
            {
                let keyword = self.eat();
                Ok(self.finish(NodeKind::KeywordType, smallvec::smallvec![keyword]))
            }
            SyntaxKind::VoidKeyword | SyntaxKind::NullKeyword => {
                let keyword = self.eat();
                Ok(self.finish(NodeKind::KeywordType, smallvec::smallvec![keyword]))
            }
            SyntaxKind::ThisKeyword => {
                let this = self.eat();
                Ok(self.finish(NodeKind::ThisType, smallvec::smallvec![this]))
            }
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NoSubstitutionTemplateLiteral => {
                let literal = self.eat();
                Ok(self.finish(NodeKind::LiteralType, smallvec::smallvec![literal]))
            }
            SyntaxKind::MinusToken
                if self.next_token_is(|p| {
                    matches!(p.token(), SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral)
                }) =>
            {
                let mut children = NodeList::new();
                children.push(self.eat());
                children.push(self.eat());
                Ok(self.finish(NodeKind::LiteralType, children))
            }
            SyntaxKind::TemplateHead => self.parse_template_literal_type(),
            SyntaxKind::TypeOfKeyword => self.parse_type_query(),
            SyntaxKind::ImportKeyword => self.parse_import_type(NodeList::new()),
            SyntaxKind::OpenBraceToken => {
                if self.look_ahead(|p| p.is_start_of_mapped_type()) {
                    self.parse_mapped_type()
                } else {
                    let mut children = NodeList::new();
                    self.with_context(0, CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES, |p| {
                        p.parse_type_member_block(&mut children)
                    })?;
                    Ok(self.finish(NodeKind::TypeLiteral, children))
                }
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenParenToken => {
                let mut children = NodeList::new();
                children.push(self.eat());
                children.push(self.parse_type_allowing_conditional()?);
                children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
                Ok(self.finish(NodeKind::ParenthesizedType, children))
            }
            _ => self.parse_type_reference(),
        }
    }

    /// `A.B<T>`
    fn parse_type_reference(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_entity_name()?);
        if self.is_token(SyntaxKind::LessThanToken) && !self.has_preceding_line_break() {
            children.push(self.parse_type_arguments()?);
        }
        Ok(self.finish(NodeKind::TypeReference, children))
    }

    /// `typeof x.y<T>` or `typeof import("m")`
    fn parse_type_query(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if self.is_token(SyntaxKind::ImportKeyword) {
            return self.parse_import_type(children);
        }
        children.push(self.parse_entity_name()?);
        if self.is_token(SyntaxKind::LessThanToken) && !self.has_preceding_line_break() {
            children.push(self.parse_type_arguments()?);
        }
        Ok(self.finish(NodeKind::TypeQuery, children))
    }

    /// `import("m").A.B<T>`; `children` may already hold `typeof`.
    fn parse_import_type(&mut self, mut children: NodeList) -> ParseResult {
        children.push(self.parse_expected(SyntaxKind::ImportKeyword)?);
        children.push(self.parse_expected(SyntaxKind::OpenParenToken)?);
        children.push(self.parse_type_allowing_conditional()?);
        if self.parse_optional(SyntaxKind::CommaToken, &mut children)
            && !self.is_token(SyntaxKind::CloseParenToken)
        {
            children.push(self.parse_nested_type_object()?);
            self.parse_optional(SyntaxKind::CommaToken, &mut children);
        }
        children.push(self.parse_expected(SyntaxKind::CloseParenToken)?);
        while self.parse_optional(SyntaxKind::DotToken, &mut children) {
            children.push(self.parse_identifier_name()?);
        }
        if self.is_token(SyntaxKind::LessThanToken) && !self.has_preceding_line_break() {
            children.push(self.parse_type_arguments()?);
        }
        Ok(self.finish(NodeKind::ImportType, children))
    }

    /// `{ with: { ... } }` options of an import type, kept as an expression.
    fn parse_nested_type_object(&mut self) -> ParseResult {
        self.parse_assignment_expression()
    }

    fn parse_template_literal_type(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        loop {
            let mut span = NodeList::new();
            span.push(self.parse_type_allowing_conditional()?);
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                return Err(self.error_expected("}"));
            }
            let literal = self.re_scan_template_token();
            span.push(self.eat());
            children.push(self.finish(NodeKind::TemplateLiteralTypeSpan, span));
            if literal != SyntaxKind::TemplateMiddle {
                break;
            }
        }
        Ok(self.finish(NodeKind::TemplateLiteralType, children))
    }

    fn is_start_of_mapped_type(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            return self.next_token() == SyntaxKind::ReadonlyKeyword;
        }
        if self.is_token(SyntaxKind::ReadonlyKeyword) {
            self.next_token();
        }
        self.is_token(SyntaxKind::OpenBracketToken)
            && self.next_token_is(|p| p.is_identifier())
            && {
                self.next_token();
                self.next_token() == SyntaxKind::InKeyword
            }
    }

    /// `{ readonly [K in T as N]?: V }`
    fn parse_mapped_type(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if matches!(self.token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            children.push(self.eat());
            children.push(self.parse_expected(SyntaxKind::ReadonlyKeyword)?);
        } else {
            self.parse_optional(SyntaxKind::ReadonlyKeyword, &mut children);
        }
        children.push(self.parse_expected(SyntaxKind::OpenBracketToken)?);
        let mut parameter = NodeList::new();
        parameter.push(self.parse_identifier()?);
        parameter.push(self.parse_expected(SyntaxKind::InKeyword)?);
        parameter.push(self.parse_type_allowing_conditional()?);
        children.push(self.finish(NodeKind::TypeParameter, parameter));
        if self.parse_optional(SyntaxKind::AsKeyword, &mut children) {
            children.push(self.parse_type_allowing_conditional()?);
        }
        children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        if matches!(self.token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            children.push(self.eat());
            children.push(self.parse_expected(SyntaxKind::QuestionToken)?);
        } else {
            self.parse_optional(SyntaxKind::QuestionToken, &mut children);
        }
        if self.is_token(SyntaxKind::ColonToken) {
            children.push(self.parse_type_annotation()?);
        }
        if !self.parse_optional(SyntaxKind::SemicolonToken, &mut children) {
            self.parse_optional(SyntaxKind::CommaToken, &mut children);
        }
        children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
        Ok(self.finish(NodeKind::MappedType, children))
    }

    /// `[A, b?: B, ...C[]]`
    fn parse_tuple_type(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            children.push(self.with_depth(|p| p.parse_tuple_element())?);
            if !self.parse_optional(SyntaxKind::CommaToken, &mut children) {
                break;
            }
        }
        children.push(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        Ok(self.finish(NodeKind::TupleType, children))
    }

    fn parse_tuple_element(&mut self) -> ParseResult {
        let is_named = self.look_ahead(|p| {
            if p.is_token(SyntaxKind::DotDotDotToken) {
                p.next_token();
            }
            if !p.is_identifier_or_keyword() {
                return false;
            }
            match p.next_token() {
                SyntaxKind::ColonToken => true,
                SyntaxKind::QuestionToken => p.next_token() == SyntaxKind::ColonToken,
                _ => false,
            }
        });
        let mut children = NodeList::new();
        if is_named {
            self.parse_optional(SyntaxKind::DotDotDotToken, &mut children);
            children.push(self.parse_identifier_name()?);
            self.parse_optional(SyntaxKind::QuestionToken, &mut children);
            children.push(self.parse_expected(SyntaxKind::ColonToken)?);
            children.push(self.parse_type_allowing_conditional()?);
            return Ok(self.finish(NodeKind::NamedTupleMember, children));
        }
        if self.parse_optional(SyntaxKind::DotDotDotToken, &mut children) {
            children.push(self.parse_type_allowing_conditional()?);
            return Ok(self.finish(NodeKind::RestType, children));
        }
        let ty = self.parse_type_allowing_conditional()?;
        if self.is_token(SyntaxKind::QuestionToken) {
            children.push(ty);
            children.push(self.eat());
            return Ok(self.finish(NodeKind::OptionalType, children));
        }
        Ok(ty)
    }
}
