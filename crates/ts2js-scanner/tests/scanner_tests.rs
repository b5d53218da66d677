//! Tests for the scanner state machine.

use std::sync::Arc;

use ts2js_scanner::literals::{cook_string_literal, parse_numeric_literal};
use ts2js_scanner::{ScannerState, SyntaxKind, text_to_keyword};

fn scanner(text: &str) -> ScannerState {
    ScannerState::new("test.ts", Arc::from(text))
}

fn tokens(text: &str) -> Vec<SyntaxKind> {
    let mut scanner = scanner(text);
    let mut out = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            return out;
        }
        out.push(kind);
    }
}

#[test]
fn test_text_to_keyword() {
    assert_eq!(text_to_keyword("break"), Some(SyntaxKind::BreakKeyword));
    assert_eq!(text_to_keyword("satisfies"), Some(SyntaxKind::SatisfiesKeyword));
    assert_eq!(text_to_keyword("foo"), None);
}

#[test]
fn test_keyword_classification() {
    assert!(SyntaxKind::ClassKeyword.is_reserved_word());
    assert!(!SyntaxKind::ClassKeyword.is_identifier_like());
    assert!(SyntaxKind::TypeKeyword.is_identifier_like());
    assert!(SyntaxKind::LetKeyword.is_identifier_like());
    assert!(SyntaxKind::ClassKeyword.is_identifier_or_keyword());
    assert!(!SyntaxKind::OpenBraceToken.is_identifier_or_keyword());
}

#[test]
fn test_token_text() {
    assert_eq!(SyntaxKind::EqualsGreaterThanToken.text(), Some("=>"));
    assert_eq!(SyntaxKind::InstanceOfKeyword.text(), Some("instanceof"));
    assert_eq!(SyntaxKind::Identifier.text(), None);
}

#[test]
fn test_positions_tile_the_source() {
    let text = "  let x /* c */ = 1;\n";
    let mut scanner = scanner(text);
    let mut last_end = 0;
    loop {
        let kind = scanner.scan();
        assert_eq!(scanner.get_token_full_start(), last_end);
        last_end = scanner.get_token_end();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
    }
    assert_eq!(last_end as usize, text.len());
}

#[test]
fn test_trivia_and_line_breaks() {
    let mut scanner = scanner("a // note\n  b");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.get_token_trivia(), " // note\n  ");
    assert_eq!(scanner.get_token_text(), "b");
}

#[test]
fn test_multi_line_comment_sets_line_break() {
    let mut scanner = scanner("a /*\n*/ b");
    scanner.scan();
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_shebang_is_trivia() {
    let mut scanner = scanner("#!/usr/bin/env node\nfoo");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_text(), "foo");
    assert_eq!(scanner.get_token_full_start(), 0);
}

#[test]
fn test_punctuation() {
    assert_eq!(
        tokens("a?.b ?? c ??= d => ...e"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionDotToken,
            SyntaxKind::Identifier,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::Identifier,
            SyntaxKind::QuestionQuestionEqualsToken,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_conditional_with_decimal_is_not_optional_chain() {
    assert_eq!(
        tokens("a?.5:1"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::ColonToken,
            SyntaxKind::NumericLiteral,
        ]
    );
}

#[test]
fn test_greater_than_is_always_single() {
    assert_eq!(
        tokens("a >>= b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::EqualsToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_re_scan_greater_token() {
    let mut scanner = scanner("a >>>= b");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(
        scanner.re_scan_greater_token(),
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
    );
    assert_eq!(scanner.get_token_text(), ">>>=");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_numbers() {
    let mut scanner = scanner("0x1F 1_000 1.5e-3 10n .5");
    for expected in ["0x1F", "1_000", "1.5e-3"] {
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.get_token_text(), expected);
    }
    assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_text(), ".5");
}

#[test]
fn test_strings_and_unterminated_string() {
    let mut scanner = scanner(r#"'it\'s' "open"#);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_text(), r"'it\'s'");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.diagnostics().len(), 1);
    assert_eq!(scanner.diagnostics()[0].code, 1002);
}

#[test]
fn test_template_scanning() {
    let mut scanner = scanner("`a${b}c${d}e`");
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.get_token_text(), "}c${");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    scanner.scan();
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_re_scan_slash_token() {
    let mut scanner = scanner("x = /[/]a\\/b/gi;");
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(scanner.re_scan_slash_token(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.get_token_text(), "/[/]a\\/b/gi");
    assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
}

#[test]
fn test_private_identifier() {
    let mut scanner = scanner("#count");
    assert_eq!(scanner.scan(), SyntaxKind::PrivateIdentifier);
    assert_eq!(scanner.get_token_text(), "#count");
}

#[test]
fn test_escaped_identifier_is_not_keyword() {
    let mut scanner = scanner("\\u0063lass");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_save_and_restore_state() {
    let mut scanner = scanner("a b c");
    scanner.scan();
    let snapshot = scanner.save_state();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.get_token_text(), "c");
    scanner.restore_state(snapshot);
    assert_eq!(scanner.get_token_text(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_text(), "b");
}

#[test]
fn test_look_ahead_rewinds() {
    let mut scanner = scanner("a b");
    scanner.scan();
    let next = scanner.look_ahead(|s| s.scan());
    assert_eq!(next, SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_text(), "a");
}

#[test]
fn test_jsx_text_and_identifiers() {
    let mut scanner = scanner("<div data-id=\"a\\b\">hi {x}</div>");
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.re_scan_jsx_identifier(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_text(), "data-id");
    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.re_scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_text(), "\"a\\b\"");
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    assert_eq!(scanner.get_token_text(), "hi ");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::OpenBraceToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanSlashToken);
}

#[test]
fn test_invalid_character_is_reported() {
    let mut scanner = scanner("a ¤ b");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.diagnostics()[0].code, 1127);
}

#[test]
fn test_parse_numeric_literal() {
    assert_eq!(parse_numeric_literal("0x10"), Some(16.0));
    assert_eq!(parse_numeric_literal("0b101"), Some(5.0));
    assert_eq!(parse_numeric_literal("1_000"), Some(1000.0));
    assert_eq!(parse_numeric_literal("017"), Some(15.0));
    assert_eq!(parse_numeric_literal("1e3"), Some(1000.0));
    assert_eq!(parse_numeric_literal(".5"), Some(0.5));
}

#[test]
fn test_cook_string_literal() {
    assert_eq!(cook_string_literal(r#""a\nb""#).as_deref(), Some("a\nb"));
    assert_eq!(cook_string_literal(r"'\x41B\u{43}'").as_deref(), Some("ABC"));
    assert_eq!(cook_string_literal("'unterminated"), None);
}
