//! Diagnostic types shared by the scanner, parser and transform.
//!
//! Lexical problems that do not prevent a tree from being built, and
//! constructs the transform had to leave in place, are reported as
//! `Diagnostic`s rather than errors: the file is still converted.

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 2,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }

    pub fn warning(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            ..Self::error(file, start, length, message, code)
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

pub mod diagnostic_codes {
    // Lexical (same numbers as tsc)
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const ASTERISK_SLASH_EXPECTED: u32 = 1010;
    pub const HEXADECIMAL_DIGIT_EXPECTED: u32 = 1125;
    pub const INVALID_CHARACTER: u32 = 1127;
    pub const UNTERMINATED_TEMPLATE_LITERAL: u32 = 1160;
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: u32 = 1161;

    // Strip warnings
    pub const NAMESPACE_WITH_RUNTIME_MEMBERS: u32 = 9001;
    pub const ENUM_MEMBER_NOT_LOWERABLE: u32 = 9002;
    pub const TYPE_SYNTAX_LEFT_IN_PLACE: u32 = 9003;
}

pub mod diagnostic_messages {
    pub const UNTERMINATED_STRING_LITERAL: &str = "Unterminated string literal.";
    pub const ASTERISK_SLASH_EXPECTED: &str = "'*/' expected.";
    pub const HEXADECIMAL_DIGIT_EXPECTED: &str = "Hexadecimal digit expected.";
    pub const INVALID_CHARACTER: &str = "Invalid character.";
    pub const UNTERMINATED_TEMPLATE_LITERAL: &str = "Unterminated template literal.";
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: &str =
        "Unterminated regular expression literal.";
    pub const NAMESPACE_WITH_RUNTIME_MEMBERS: &str =
        "Namespace '{0}' contains runtime members; it was left in place with its types stripped.";
    pub const ENUM_MEMBER_NOT_LOWERABLE: &str =
        "Enum '{0}' has a member whose value depends on a computed member; the enum was left in place.";
    pub const TYPE_SYNTAX_LEFT_IN_PLACE: &str = "Type syntax '{0}' was not recognized here and was left in place.";
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
