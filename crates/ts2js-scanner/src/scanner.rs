//! Scanner state machine.
//!
//! The scanner is pull-based: the parser calls `scan()` for the next token
//! and one of the `re_scan_*` methods when grammar context changes how the
//! current token must be read (a `/` that starts a regular expression, a `}`
//! that resumes a template, a `>` that is part of a shift operator, JSX text).
//!
//! Every token records two starts. `full_start` is where its leading trivia
//! begins (the end of the previous token) and `token_start` is its first
//! significant character. Consecutive tokens therefore tile the source text
//! without gaps, which is what lets the printer reproduce it byte for byte.

use std::sync::Arc;

use bitflags::bitflags;
use ts2js_common::diagnostics::{Diagnostic, diagnostic_codes, diagnostic_messages};

use crate::char_codes::{
    is_identifier_part, is_identifier_start, is_line_break, is_white_space_single_line,
};
use crate::{SyntaxKind, text_to_keyword};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TokenFlags: u16 {
        const PRECEDING_LINE_BREAK = 1 << 0;
        const UNTERMINATED = 1 << 1;
        /// Identifier spelled with a `\u` escape; never a keyword.
        const UNICODE_ESCAPE = 1 << 2;
        const PRECEDING_JSDOC_COMMENT = 1 << 3;
        const HEX_SPECIFIER = 1 << 4;
        const BINARY_OR_OCTAL_SPECIFIER = 1 << 5;
    }
}

/// Everything needed to rewind the scanner for speculative parsing.
#[derive(Clone, Copy, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    full_start: usize,
    token_start: usize,
    token: SyntaxKind,
    token_flags: TokenFlags,
    diagnostics_len: usize,
}

pub struct ScannerState {
    file_name: String,
    source: Arc<str>,
    /// Current position (end of the current token).
    pos: usize,
    full_start: usize,
    token_start: usize,
    token: SyntaxKind,
    token_flags: TokenFlags,
    diagnostics: Vec<Diagnostic>,
}

impl ScannerState {
    pub fn new(file_name: impl Into<String>, source: Arc<str>) -> Self {
        ScannerState {
            file_name: file_name.into(),
            source,
            pos: 0,
            full_start: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_flags: TokenFlags::empty(),
            diagnostics: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn source_text(&self) -> &Arc<str> {
        &self.source
    }

    #[inline]
    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    /// Start of the current token's leading trivia.
    #[inline]
    pub fn get_token_full_start(&self) -> u32 {
        self.full_start as u32
    }

    #[inline]
    pub fn get_token_start(&self) -> u32 {
        self.token_start as u32
    }

    #[inline]
    pub fn get_token_end(&self) -> u32 {
        self.pos as u32
    }

    #[inline]
    pub fn get_token_text(&self) -> &str {
        &self.source[self.token_start..self.pos]
    }

    /// Leading trivia of the current token.
    #[inline]
    pub fn get_token_trivia(&self) -> &str {
        &self.source[self.full_start..self.token_start]
    }

    #[inline]
    pub fn get_token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            full_start: self.full_start,
            token_start: self.token_start,
            token: self.token,
            token_flags: self.token_flags,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.full_start = snapshot.full_start;
        self.token_start = snapshot.token_start;
        self.token = snapshot.token;
        self.token_flags = snapshot.token_flags;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    /// Run `f` and rewind to the current token afterwards.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.save_state();
        let result = f(self);
        self.restore_state(snapshot);
        result
    }

    // =========================================================================
    // Character access
    // =========================================================================

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.source.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// ASCII byte at `pos`, 0 past the end.
    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn error(&mut self, start: usize, end: usize, message: &str, code: u32) {
        self.diagnostics.push(Diagnostic::error(
            self.file_name.clone(),
            start as u32,
            end.saturating_sub(start) as u32,
            message,
            code,
        ));
    }

    #[inline]
    fn finish(&mut self, kind: SyntaxKind, len: usize) -> SyntaxKind {
        self.pos += len;
        self.token = kind;
        kind
    }

    // =========================================================================
    // Main scan
    // =========================================================================

    pub fn scan(&mut self) -> SyntaxKind {
        use SyntaxKind::*;

        self.full_start = self.pos;
        self.token_flags = TokenFlags::empty();

        loop {
            self.token_start = self.pos;
            let Some(ch) = self.char_at(self.pos) else {
                self.token = EndOfFileToken;
                return EndOfFileToken;
            };

            if is_line_break(ch) {
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                self.pos += ch.len_utf8();
                continue;
            }
            if is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
                continue;
            }

            let next = self.byte_at(self.pos + 1);
            let next2 = self.byte_at(self.pos + 2);
            return match ch {
                '#' if self.pos == 0 && next == b'!' => {
                    self.skip_single_line_comment();
                    continue;
                }
                '/' if next == b'/' => {
                    self.skip_single_line_comment();
                    continue;
                }
                '/' if next == b'*' => {
                    self.skip_multi_line_comment();
                    continue;
                }
                '/' if next == b'=' => self.finish(SlashEqualsToken, 2),
                '/' => self.finish(SlashToken, 1),

                '"' | '\'' => self.scan_string(ch),
                '`' => {
                    self.pos += 1;
                    self.scan_template(true)
                }
                '0'..='9' => self.scan_number(),
                '.' if next.is_ascii_digit() => self.scan_number(),
                '.' if next == b'.' && next2 == b'.' => self.finish(DotDotDotToken, 3),
                '.' => self.finish(DotToken, 1),

                '{' => self.finish(OpenBraceToken, 1),
                '}' => self.finish(CloseBraceToken, 1),
                '(' => self.finish(OpenParenToken, 1),
                ')' => self.finish(CloseParenToken, 1),
                '[' => self.finish(OpenBracketToken, 1),
                ']' => self.finish(CloseBracketToken, 1),
                ';' => self.finish(SemicolonToken, 1),
                ',' => self.finish(CommaToken, 1),
                ':' => self.finish(ColonToken, 1),
                '~' => self.finish(TildeToken, 1),
                '@' => self.finish(AtToken, 1),

                '?' if next == b'.' && !next2.is_ascii_digit() => self.finish(QuestionDotToken, 2),
                '?' if next == b'?' && next2 == b'=' => self.finish(QuestionQuestionEqualsToken, 3),
                '?' if next == b'?' => self.finish(QuestionQuestionToken, 2),
                '?' => self.finish(QuestionToken, 1),

                '<' if next == b'<' && next2 == b'=' => self.finish(LessThanLessThanEqualsToken, 3),
                '<' if next == b'<' => self.finish(LessThanLessThanToken, 2),
                '<' if next == b'=' => self.finish(LessThanEqualsToken, 2),
                '<' => self.finish(LessThanToken, 1),
                // Always a single `>`; the parser re-scans in binary operator context
                // so that `a<b<c>>` closes two type argument lists.
                '>' => self.finish(GreaterThanToken, 1),

                '=' if next == b'=' && next2 == b'=' => self.finish(EqualsEqualsEqualsToken, 3),
                '=' if next == b'=' => self.finish(EqualsEqualsToken, 2),
                '=' if next == b'>' => self.finish(EqualsGreaterThanToken, 2),
                '=' => self.finish(EqualsToken, 1),

                '!' if next == b'=' && next2 == b'=' => {
                    self.finish(ExclamationEqualsEqualsToken, 3)
                }
                '!' if next == b'=' => self.finish(ExclamationEqualsToken, 2),
                '!' => self.finish(ExclamationToken, 1),

                '+' if next == b'+' => self.finish(PlusPlusToken, 2),
                '+' if next == b'=' => self.finish(PlusEqualsToken, 2),
                '+' => self.finish(PlusToken, 1),

                '-' if next == b'-' => self.finish(MinusMinusToken, 2),
                '-' if next == b'=' => self.finish(MinusEqualsToken, 2),
                '-' => self.finish(MinusToken, 1),

                '*' if next == b'*' && next2 == b'=' => {
                    self.finish(AsteriskAsteriskEqualsToken, 3)
                }
                '*' if next == b'*' => self.finish(AsteriskAsteriskToken, 2),
                '*' if next == b'=' => self.finish(AsteriskEqualsToken, 2),
                '*' => self.finish(AsteriskToken, 1),

                '%' if next == b'=' => self.finish(PercentEqualsToken, 2),
                '%' => self.finish(PercentToken, 1),

                '&' if next == b'&' && next2 == b'=' => {
                    self.finish(AmpersandAmpersandEqualsToken, 3)
                }
                '&' if next == b'&' => self.finish(AmpersandAmpersandToken, 2),
                '&' if next == b'=' => self.finish(AmpersandEqualsToken, 2),
                '&' => self.finish(AmpersandToken, 1),

                '|' if next == b'|' && next2 == b'=' => self.finish(BarBarEqualsToken, 3),
                '|' if next == b'|' => self.finish(BarBarToken, 2),
                '|' if next == b'=' => self.finish(BarEqualsToken, 2),
                '|' => self.finish(BarToken, 1),

                '^' if next == b'=' => self.finish(CaretEqualsToken, 2),
                '^' => self.finish(CaretToken, 1),

                '#' => self.scan_private_identifier(),
                '\\' => self.scan_identifier(),
                c if is_identifier_start(c) => self.scan_identifier(),

                c => {
                    let len = c.len_utf8();
                    self.error(
                        self.pos,
                        self.pos + len,
                        diagnostic_messages::INVALID_CHARACTER,
                        diagnostic_codes::INVALID_CHARACTER,
                    );
                    self.finish(Unknown, len)
                }
            };
        }
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    fn skip_single_line_comment(&mut self) {
        while let Some(ch) = self.char_at(self.pos) {
            if is_line_break(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_multi_line_comment(&mut self) {
        let start = self.pos;
        if self.byte_at(self.pos + 2) == b'*' && self.byte_at(self.pos + 3) != b'/' {
            self.token_flags |= TokenFlags::PRECEDING_JSDOC_COMMENT;
        }
        self.pos += 2;
        loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.error(
                    start,
                    self.pos,
                    diagnostic_messages::ASTERISK_SLASH_EXPECTED,
                    diagnostic_codes::ASTERISK_SLASH_EXPECTED,
                );
                return;
            };
            if ch == '*' && self.byte_at(self.pos + 1) == b'/' {
                self.pos += 2;
                return;
            }
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
            }
            self.pos += ch.len_utf8();
        }
    }

    // =========================================================================
    // Literals
    // =========================================================================

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.char_at(self.pos) {
                Some(ch) if ch == quote => {
                    self.pos += 1;
                    break;
                }
                Some('\\') => {
                    self.pos += 1;
                    self.skip_escaped_char();
                }
                Some('\n' | '\r') | None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(
                        start,
                        self.pos,
                        diagnostic_messages::UNTERMINATED_STRING_LITERAL,
                        diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                    );
                    break;
                }
                Some(ch) => self.pos += ch.len_utf8(),
            }
        }
        self.token = SyntaxKind::StringLiteral;
        self.token
    }

    /// Skip the character after a backslash (`\r\n` counts as one).
    fn skip_escaped_char(&mut self) {
        match self.char_at(self.pos) {
            Some('\r') if self.byte_at(self.pos + 1) == b'\n' => self.pos += 2,
            Some(ch) => self.pos += ch.len_utf8(),
            None => {}
        }
    }

    /// Scan template characters from the current position, which is just
    /// after a backtick (`from_backtick`) or a `}`.
    fn scan_template(&mut self, from_backtick: bool) -> SyntaxKind {
        use SyntaxKind::*;
        let kind = loop {
            match self.char_at(self.pos) {
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(
                        self.token_start,
                        self.pos,
                        diagnostic_messages::UNTERMINATED_TEMPLATE_LITERAL,
                        diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL,
                    );
                    break if from_backtick { NoSubstitutionTemplateLiteral } else { TemplateTail };
                }
                Some('`') => {
                    self.pos += 1;
                    break if from_backtick { NoSubstitutionTemplateLiteral } else { TemplateTail };
                }
                Some('$') if self.byte_at(self.pos + 1) == b'{' => {
                    self.pos += 2;
                    break if from_backtick { TemplateHead } else { TemplateMiddle };
                }
                Some('\\') => {
                    self.pos += 1;
                    self.skip_escaped_char();
                }
                Some(ch) => self.pos += ch.len_utf8(),
            }
        };
        self.token = kind;
        kind
    }

    fn scan_digits(&mut self, is_valid: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        loop {
            let b = self.byte_at(self.pos);
            if is_valid(b) || (b == b'_' && self.pos > start) {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.pos - start
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let first = self.byte_at(self.pos);
        let second = self.byte_at(self.pos + 1) | 0x20;

        if first == b'0' && matches!(second, b'x' | b'o' | b'b') {
            self.pos += 2;
            let count = match second {
                b'x' => {
                    self.token_flags |= TokenFlags::HEX_SPECIFIER;
                    self.scan_digits(|b| b.is_ascii_hexdigit())
                }
                b'o' => {
                    self.token_flags |= TokenFlags::BINARY_OR_OCTAL_SPECIFIER;
                    self.scan_digits(|b| (b'0'..=b'7').contains(&b))
                }
                _ => {
                    self.token_flags |= TokenFlags::BINARY_OR_OCTAL_SPECIFIER;
                    self.scan_digits(|b| b == b'0' || b == b'1')
                }
            };
            if count == 0 {
                self.error(
                    start,
                    self.pos,
                    diagnostic_messages::HEXADECIMAL_DIGIT_EXPECTED,
                    diagnostic_codes::HEXADECIMAL_DIGIT_EXPECTED,
                );
            }
        } else {
            self.scan_digits(|b| b.is_ascii_digit());
            if self.byte_at(self.pos) == b'.' {
                self.pos += 1;
                self.scan_digits(|b| b.is_ascii_digit());
            }
            if self.byte_at(self.pos) | 0x20 == b'e' {
                let sign = self.byte_at(self.pos + 1);
                let digits_at = if sign == b'+' || sign == b'-' { 2 } else { 1 };
                if self.byte_at(self.pos + digits_at).is_ascii_digit() {
                    self.pos += digits_at;
                    self.scan_digits(|b| b.is_ascii_digit());
                }
            }
        }

        if self.byte_at(self.pos) == b'n' {
            self.pos += 1;
            self.token = SyntaxKind::BigIntLiteral;
        } else {
            self.token = SyntaxKind::NumericLiteral;
        }
        self.token
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Consume identifier characters (including `\u` escapes) from `pos`.
    fn scan_identifier_parts(&mut self) {
        loop {
            match self.char_at(self.pos) {
                Some(ch) if is_identifier_part(ch) => self.pos += ch.len_utf8(),
                Some('\\') if self.byte_at(self.pos + 1) == b'u' => {
                    self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                    self.scan_unicode_escape();
                }
                _ => break,
            }
        }
    }

    /// `\uXXXX` or `\u{X...}`; `pos` is at the backslash.
    fn scan_unicode_escape(&mut self) {
        let start = self.pos;
        self.pos += 2;
        let valid = if self.byte_at(self.pos) == b'{' {
            self.pos += 1;
            let count = self.scan_digits(|b| b.is_ascii_hexdigit());
            if self.byte_at(self.pos) == b'}' {
                self.pos += 1;
                count > 0
            } else {
                false
            }
        } else {
            let mut count = 0;
            while count < 4 && self.byte_at(self.pos).is_ascii_hexdigit() {
                self.pos += 1;
                count += 1;
            }
            count == 4
        };
        if !valid {
            self.error(
                start,
                self.pos,
                diagnostic_messages::HEXADECIMAL_DIGIT_EXPECTED,
                diagnostic_codes::HEXADECIMAL_DIGIT_EXPECTED,
            );
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        self.scan_identifier_parts();
        if self.pos == self.token_start {
            // A lone backslash.
            self.error(
                self.pos,
                self.pos + 1,
                diagnostic_messages::INVALID_CHARACTER,
                diagnostic_codes::INVALID_CHARACTER,
            );
            return self.finish(SyntaxKind::Unknown, 1);
        }
        self.token = if self.token_flags.contains(TokenFlags::UNICODE_ESCAPE) {
            SyntaxKind::Identifier
        } else {
            text_to_keyword(self.get_token_text()).unwrap_or(SyntaxKind::Identifier)
        };
        self.token
    }

    fn scan_private_identifier(&mut self) -> SyntaxKind {
        match self.char_at(self.pos + 1) {
            Some(ch) if is_identifier_start(ch) || ch == '\\' => {
                self.pos += 1;
                self.scan_identifier_parts();
                self.token = SyntaxKind::PrivateIdentifier;
                self.token
            }
            _ => {
                self.error(
                    self.pos,
                    self.pos + 1,
                    diagnostic_messages::INVALID_CHARACTER,
                    diagnostic_codes::INVALID_CHARACTER,
                );
                self.finish(SyntaxKind::Unknown, 1)
            }
        }
    }

    // =========================================================================
    // Re-scans
    // =========================================================================

    /// Re-read a `/` or `/=` token as a regular expression literal.
    pub fn re_scan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        let mut p = self.token_start + 1;
        let mut in_class = false;
        loop {
            match self.char_at(p) {
                None => {
                    self.unterminated_regex(p);
                    break;
                }
                Some(ch) if is_line_break(ch) => {
                    self.unterminated_regex(p);
                    break;
                }
                Some('\\') => {
                    p += 1;
                    if let Some(ch) = self.char_at(p).filter(|ch| !is_line_break(*ch)) {
                        p += ch.len_utf8();
                    }
                }
                Some('/') if !in_class => {
                    p += 1;
                    break;
                }
                Some(ch) => {
                    if ch == '[' {
                        in_class = true;
                    } else if ch == ']' {
                        in_class = false;
                    }
                    p += ch.len_utf8();
                }
            }
        }
        while let Some(ch) = self.char_at(p).filter(|ch| is_identifier_part(*ch)) {
            p += ch.len_utf8();
        }
        self.pos = p;
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    fn unterminated_regex(&mut self, end: usize) {
        self.token_flags |= TokenFlags::UNTERMINATED;
        self.error(
            self.token_start,
            end,
            diagnostic_messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
            diagnostic_codes::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
        );
    }

    /// Re-read a `}` token as the continuation of a template literal.
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::CloseBraceToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.scan_template(false)
    }

    /// Combine a `>` with following `>` and `=` characters in expression context.
    pub fn re_scan_greater_token(&mut self) -> SyntaxKind {
        use SyntaxKind::*;
        if self.token != GreaterThanToken {
            return self.token;
        }
        let next = self.byte_at(self.pos);
        let next2 = self.byte_at(self.pos + 1);
        let next3 = self.byte_at(self.pos + 2);
        match (next, next2, next3) {
            (b'>', b'>', b'=') => self.finish(GreaterThanGreaterThanGreaterThanEqualsToken, 3),
            (b'>', b'>', _) => self.finish(GreaterThanGreaterThanGreaterThanToken, 2),
            (b'>', b'=', _) => self.finish(GreaterThanGreaterThanEqualsToken, 2),
            (b'>', _, _) => self.finish(GreaterThanGreaterThanToken, 1),
            (b'=', _, _) => self.finish(GreaterThanEqualsToken, 1),
            _ => GreaterThanToken,
        }
    }

    /// Scan a token in JSX children context: text up to the next `{` or `<`
    /// is a single `JsxText` token, and no trivia is skipped.
    pub fn scan_jsx_token(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::empty();
        match self.char_at(self.pos) {
            None => {
                self.token = SyntaxKind::EndOfFileToken;
                self.token
            }
            Some('<') if self.byte_at(self.pos + 1) == b'/' => {
                self.finish(SyntaxKind::LessThanSlashToken, 2)
            }
            Some('<') => self.finish(SyntaxKind::LessThanToken, 1),
            Some('{') => self.finish(SyntaxKind::OpenBraceToken, 1),
            Some(_) => {
                while let Some(ch) = self.char_at(self.pos) {
                    if ch == '{' || ch == '<' {
                        break;
                    }
                    self.pos += ch.len_utf8();
                }
                self.token = SyntaxKind::JsxText;
                self.token
            }
        }
    }

    /// Extend an identifier or keyword with `-` parts (`data-id`, `aria-label`).
    pub fn re_scan_jsx_identifier(&mut self) -> SyntaxKind {
        if !self.token.is_identifier_or_keyword() {
            return self.token;
        }
        while let Some(ch) = self.char_at(self.pos) {
            if ch == '-' || is_identifier_part(ch) {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        self.token = SyntaxKind::Identifier;
        self.token
    }

    /// JSX attribute strings have no escapes and may span lines.
    pub fn re_scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::StringLiteral {
            return self.token;
        }
        let token_start = self.token_start as u32;
        self.diagnostics.retain(|d| d.start < token_start);
        self.token_flags.remove(TokenFlags::UNTERMINATED);

        let Some(quote) = self.char_at(self.token_start) else {
            return self.token;
        };
        let mut p = self.token_start + 1;
        loop {
            match self.char_at(p) {
                Some(ch) if ch == quote => {
                    p += 1;
                    break;
                }
                Some(ch) => p += ch.len_utf8(),
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(
                        self.token_start,
                        p,
                        diagnostic_messages::UNTERMINATED_STRING_LITERAL,
                        diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                    );
                    break;
                }
            }
        }
        self.pos = p;
        self.token
    }
}
