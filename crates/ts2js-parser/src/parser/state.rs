//! Parser state - token handling, speculation and the source file entry point.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use ts2js_common::Diagnostic;
use ts2js_common::limits::MAX_PARSE_DEPTH;
use ts2js_scanner::{ScannerState, SyntaxKind};

use super::{LanguageVariant, NodeArena, NodeIndex, NodeKind, NodeList, ParseError, ParseResult};

pub const CONTEXT_FLAG_DISALLOW_IN: u32 = 1 << 0;
pub const CONTEXT_FLAG_GENERATOR: u32 = 1 << 1;
pub const CONTEXT_FLAG_ASYNC: u32 = 1 << 2;
/// Inside the `a ? [here] : b` branch; a `:` belongs to the conditional.
pub const CONTEXT_FLAG_IN_CONDITIONAL_TRUE: u32 = 1 << 3;
pub const CONTEXT_FLAG_DISALLOW_CONDITIONAL_TYPES: u32 = 1 << 4;
/// Parsing `@expr`; `[` does not start an element access.
pub const CONTEXT_FLAG_DECORATOR: u32 = 1 << 5;

/// Rewind point for speculative parsing.
#[derive(Clone, Copy)]
pub(crate) struct ParserSnapshot {
    scanner: ts2js_scanner::ScannerSnapshot,
    current_token: SyntaxKind,
    arena_len: usize,
}

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) current_token: SyntaxKind,
    pub(crate) context_flags: u32,
    pub(crate) variant: LanguageVariant,
    /// Token starts where a parenthesized arrow function already failed.
    pub(crate) not_parenthesized_arrow: FxHashSet<u32>,
    depth: u32,
}

impl ParserState {
    pub fn new(file_name: impl Into<String>, source: Arc<str>, variant: LanguageVariant) -> Self {
        let arena = NodeArena::with_source_capacity(source.len());
        ParserState {
            scanner: ScannerState::new(file_name, source),
            arena,
            current_token: SyntaxKind::Unknown,
            context_flags: 0,
            variant,
            not_parenthesized_arrow: FxHashSet::default(),
            depth: 0,
        }
    }

    /// Parse the whole text. Returns the `SourceFile` node.
    pub fn parse_source_file(&mut self) -> ParseResult {
        self.next_token();
        let mut children = NodeList::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            children.push(self.parse_statement()?);
        }
        children.push(self.eat());
        Ok(self.finish(NodeKind::SourceFile, children))
    }

    pub fn into_parts(mut self) -> (NodeArena, Vec<Diagnostic>) {
        let diagnostics = self.scanner.take_diagnostics();
        (self.arena, diagnostics)
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.scan();
        self.current_token
    }

    #[inline]
    pub(crate) fn next_jsx_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.scan_jsx_token();
        self.current_token
    }

    #[inline]
    pub(crate) fn token_start(&self) -> u32 {
        self.scanner.get_token_start()
    }

    #[inline]
    pub(crate) fn token_text(&self) -> &str {
        self.scanner.get_token_text()
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    /// Identifier, or a keyword usable as one.
    #[inline]
    pub(crate) fn is_identifier(&self) -> bool {
        self.current_token.is_identifier_like()
    }

    /// Any identifier or keyword (property names, JSX names).
    #[inline]
    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        self.current_token.is_identifier_or_keyword()
    }

    pub(crate) fn re_scan_greater_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_greater_token();
        self.current_token
    }

    pub(crate) fn re_scan_slash_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_slash_token();
        self.current_token
    }

    pub(crate) fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_template_token();
        self.current_token
    }

    // =========================================================================
    // Node creation
    // =========================================================================

    /// Leaf for the current token, recorded as `kind`.
    pub(crate) fn make_token_as(&mut self, kind: SyntaxKind) -> NodeIndex {
        let pos = self.scanner.get_token_full_start();
        let start = self.scanner.get_token_start();
        let end = self.scanner.get_token_end();
        self.arena.add_token(kind, pos, start, end)
    }

    /// Consume the current token.
    pub(crate) fn eat(&mut self) -> NodeIndex {
        let token = self.make_token_as(self.current_token);
        self.next_token();
        token
    }

    /// Consume the current token and continue in JSX children context.
    pub(crate) fn eat_jsx(&mut self) -> NodeIndex {
        let token = self.make_token_as(self.current_token);
        self.next_jsx_token();
        token
    }

    /// Consume the current token, recording it as `kind`.
    pub(crate) fn eat_as(&mut self, kind: SyntaxKind) -> NodeIndex {
        let token = self.make_token_as(kind);
        self.next_token();
        token
    }

    pub(crate) fn finish(&mut self, kind: NodeKind, children: NodeList) -> NodeIndex {
        self.arena.add_node(kind, children)
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult {
        if self.is_token(kind) {
            Ok(self.eat())
        } else {
            Err(self.error_expected(kind.text().unwrap_or("token")))
        }
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind, children: &mut NodeList) -> bool {
        if self.is_token(kind) {
            children.push(self.eat());
            true
        } else {
            false
        }
    }

    /// Binding or reference name. Keywords usable as identifiers are
    /// recorded as `Identifier`.
    pub(crate) fn parse_identifier(&mut self) -> ParseResult {
        if self.is_identifier() {
            Ok(self.eat_as(SyntaxKind::Identifier))
        } else {
            Err(self.error("Identifier expected."))
        }
    }

    /// Name after `.` or in a property position: any identifier or keyword.
    pub(crate) fn parse_identifier_name(&mut self) -> ParseResult {
        if self.is_identifier_or_keyword() {
            Ok(self.eat_as(SyntaxKind::Identifier))
        } else if self.is_token(SyntaxKind::PrivateIdentifier) {
            Ok(self.eat())
        } else {
            Err(self.error("Identifier expected."))
        }
    }

    // =========================================================================
    // Semicolons
    // =========================================================================

    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    /// Explicit `;`, or automatic insertion.
    pub(crate) fn parse_semicolon(&mut self, children: &mut NodeList) -> ParseResult<()> {
        if self.parse_optional(SyntaxKind::SemicolonToken, children) || self.can_parse_semicolon() {
            Ok(())
        } else {
            Err(self.error_expected(";"))
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::at(self.token_start(), message)
    }

    pub(crate) fn error_expected(&self, what: &str) -> ParseError {
        if self.is_token(SyntaxKind::EndOfFileToken) {
            self.error(format!("'{what}' expected but reached end of file."))
        } else {
            self.error(format!("'{what}' expected, found '{}'.", self.token_text()))
        }
    }

    // =========================================================================
    // Speculation
    // =========================================================================

    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            scanner: self.scanner.save_state(),
            current_token: self.current_token,
            arena_len: self.arena.len(),
        }
    }

    pub(crate) fn rewind(&mut self, snapshot: ParserSnapshot) {
        self.scanner.restore_state(snapshot.scanner);
        self.current_token = snapshot.current_token;
        self.arena.truncate(snapshot.arena_len);
    }

    /// Run `f` and rewind, keeping only its answer.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let flags = self.context_flags;
        let result = f(self);
        self.context_flags = flags;
        self.rewind(snapshot);
        result
    }

    /// Run `f`; on failure rewind as if nothing had been consumed.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let flags = self.context_flags;
        let depth = self.depth;
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.context_flags = flags;
                self.depth = depth;
                self.rewind(snapshot);
                None
            }
        }
    }

    /// True when the token after the current one satisfies `f`.
    pub(crate) fn next_token_is(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            f(p)
        })
    }

    pub(crate) fn next_token_is_kind(&mut self, kind: SyntaxKind) -> bool {
        self.next_token_is(|p| p.is_token(kind))
    }

    pub(crate) fn next_token_is_identifier_on_same_line(&mut self) -> bool {
        self.next_token_is(|p| p.is_identifier() && !p.has_preceding_line_break())
    }

    // =========================================================================
    // Context
    // =========================================================================

    #[inline]
    pub(crate) fn in_context(&self, flag: u32) -> bool {
        self.context_flags & flag != 0
    }

    /// Run `f` with `set` flags added and `clear` flags removed.
    pub(crate) fn with_context<T>(
        &mut self,
        set: u32,
        clear: u32,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.context_flags;
        self.context_flags = (saved | set) & !clear;
        let result = f(self);
        self.context_flags = saved;
        result
    }

    /// Guard against unbounded recursion on deeply nested input.
    pub(crate) fn with_depth<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_PARSE_DEPTH {
            return Err(self.error("Maximum nesting depth exceeded."));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
