//! Parser state - JSX elements, fragments and attributes

use ts2js_scanner::SyntaxKind;

use super::state::ParserState;
use super::{NodeIndex, NodeKind, NodeList, ParseResult};

impl ParserState {
    /// `<Tag ...>children</Tag>`, `<Tag ... />` or `<>children</>`.
    ///
    /// `in_expression_context` is false for elements nested in another
    /// element's children; their closing `>` is followed by JSX text rather
    /// than ordinary tokens.
    pub(crate) fn parse_jsx_element_or_fragment(&mut self, in_expression_context: bool) -> ParseResult {
        self.with_depth(|p| p.parse_jsx_element_or_fragment_worker(in_expression_context))
    }

    fn parse_jsx_element_or_fragment_worker(&mut self, in_expression_context: bool) -> ParseResult {
        let opening = self.parse_jsx_opening_or_self_closing(in_expression_context)?;
        let (element_kind, closing_kind) = match self.arena.kind(opening) {
            Some(NodeKind::JsxOpeningElement) => (NodeKind::JsxElement, NodeKind::JsxClosingElement),
            Some(NodeKind::JsxOpeningFragment) => (NodeKind::JsxFragment, NodeKind::JsxClosingFragment),
            _ => return Ok(opening),
        };

        let mut children = NodeList::new();
        children.push(opening);
        loop {
            match self.token() {
                SyntaxKind::LessThanSlashToken => break,
                SyntaxKind::JsxText => children.push(self.eat_jsx()),
                SyntaxKind::OpenBraceToken => children.push(self.parse_jsx_expression(false)?),
                SyntaxKind::LessThanToken => children.push(self.parse_jsx_element_or_fragment(false)?),
                _ => return Err(self.error_expected("</")),
            }
        }

        let mut closing = NodeList::new();
        closing.push(self.eat());
        if closing_kind == NodeKind::JsxClosingElement {
            closing.push(self.parse_jsx_tag_name()?);
        }
        closing.push(self.parse_jsx_closing_greater_than(in_expression_context)?);
        children.push(self.finish(closing_kind, closing));
        Ok(self.finish(element_kind, children))
    }

    fn parse_jsx_opening_or_self_closing(&mut self, in_expression_context: bool) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.parse_expected(SyntaxKind::LessThanToken)?);
        if self.is_token(SyntaxKind::GreaterThanToken) {
            children.push(self.eat_jsx());
            return Ok(self.finish(NodeKind::JsxOpeningFragment, children));
        }

        children.push(self.parse_jsx_tag_name()?);
        if self.is_token(SyntaxKind::LessThanToken) {
            children.push(self.parse_type_arguments()?);
        }
        while !matches!(
            self.token(),
            SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken | SyntaxKind::EndOfFileToken
        ) {
            children.push(self.parse_jsx_attribute()?);
        }

        if self.is_token(SyntaxKind::GreaterThanToken) {
            children.push(self.eat_jsx());
            return Ok(self.finish(NodeKind::JsxOpeningElement, children));
        }
        children.push(self.parse_expected(SyntaxKind::SlashToken)?);
        children.push(self.parse_jsx_closing_greater_than(in_expression_context)?);
        Ok(self.finish(NodeKind::JsxSelfClosingElement, children))
    }

    fn parse_jsx_closing_greater_than(&mut self, in_expression_context: bool) -> ParseResult {
        if !self.is_token(SyntaxKind::GreaterThanToken) {
            return Err(self.error_expected(">"));
        }
        Ok(if in_expression_context {
            self.eat()
        } else {
            self.eat_jsx()
        })
    }

    /// `div`, `my-element`, `Foo.Bar`, `this.Item`, `svg:rect`
    fn parse_jsx_tag_name(&mut self) -> ParseResult {
        if self.is_token(SyntaxKind::ThisKeyword) {
            let this = self.eat();
            return self.parse_jsx_member_rest(this);
        }
        let name = self.parse_jsx_identifier()?;
        if self.is_token(SyntaxKind::ColonToken) {
            return self.parse_jsx_namespaced_name(name);
        }
        self.parse_jsx_member_rest(name)
    }

    fn parse_jsx_member_rest(&mut self, mut expr: NodeIndex) -> ParseResult {
        while self.is_token(SyntaxKind::DotToken) {
            let mut children = NodeList::new();
            children.push(expr);
            children.push(self.eat());
            children.push(self.parse_identifier_name()?);
            expr = self.finish(NodeKind::PropertyAccessExpression, children);
        }
        Ok(expr)
    }

    fn parse_jsx_namespaced_name(&mut self, namespace: NodeIndex) -> ParseResult {
        let mut children = NodeList::new();
        children.push(namespace);
        children.push(self.eat());
        children.push(self.parse_jsx_identifier()?);
        Ok(self.finish(NodeKind::JsxNamespacedName, children))
    }

    fn parse_jsx_identifier(&mut self) -> ParseResult {
        self.current_token = self.scanner.re_scan_jsx_identifier();
        if self.is_token(SyntaxKind::Identifier) {
            Ok(self.eat())
        } else {
            Err(self.error("Identifier expected."))
        }
    }

    fn parse_jsx_attribute(&mut self) -> ParseResult {
        let mut children = NodeList::new();
        if self.is_token(SyntaxKind::OpenBraceToken) {
            children.push(self.eat());
            children.push(self.parse_expected(SyntaxKind::DotDotDotToken)?);
            children.push(self.parse_expression()?);
            children.push(self.parse_expected(SyntaxKind::CloseBraceToken)?);
            return Ok(self.finish(NodeKind::JsxSpreadAttribute, children));
        }

        let name = self.parse_jsx_identifier()?;
        children.push(if self.is_token(SyntaxKind::ColonToken) {
            self.parse_jsx_namespaced_name(name)?
        } else {
            name
        });
        if self.parse_optional(SyntaxKind::EqualsToken, &mut children) {
            children.push(match self.token() {
                SyntaxKind::StringLiteral => {
                    self.current_token = self.scanner.re_scan_jsx_attribute_value();
                    self.eat()
                }
                SyntaxKind::OpenBraceToken => self.parse_jsx_expression(true)?,
                SyntaxKind::LessThanToken => self.parse_jsx_element_or_fragment(true)?,
                _ => return Err(self.error("JSX attribute value expected.")),
            });
        }
        Ok(self.finish(NodeKind::JsxAttribute, children))
    }

    /// `{expr}`, `{...spread}` or `{/* empty */}`.
    fn parse_jsx_expression(&mut self, in_expression_context: bool) -> ParseResult {
        let mut children = NodeList::new();
        children.push(self.eat());
        if !self.is_token(SyntaxKind::CloseBraceToken) {
            self.parse_optional(SyntaxKind::DotDotDotToken, &mut children);
            children.push(self.parse_expression()?);
        }
        if !self.is_token(SyntaxKind::CloseBraceToken) {
            return Err(self.error_expected("}"));
        }
        children.push(if in_expression_context {
            self.eat()
        } else {
            self.eat_jsx()
        });
        Ok(self.finish(NodeKind::JsxExpression, children))
    }
}
