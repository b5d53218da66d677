//! Base types shared by the parser modules.

use std::path::Path;

use ts2js_common::LineMap;

/// Structural parse failure: the first place the grammar could not continue.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    /// Byte offset of the offending token.
    pub pos: u32,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl ParseError {
    /// Error at `pos`; line and column are filled in by `with_location`.
    pub fn at(pos: u32, message: impl Into<String>) -> Self {
        ParseError {
            pos,
            line: 0,
            column: 0,
            message: message.into(),
        }
    }

    pub fn with_location(mut self, text: &str) -> Self {
        let location = LineMap::build(text).location(text, self.pos);
        self.line = location.line;
        self.column = location.column;
        self
    }
}

pub type ParseResult<T = super::NodeIndex> = Result<T, ParseError>;

/// Whether `<` may start JSX (`.tsx`) or a type assertion (`.ts`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LanguageVariant {
    #[default]
    Standard,
    Jsx,
}

impl LanguageVariant {
    pub fn from_file_name(file_name: &str) -> Self {
        let is_tsx = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx") || ext.eq_ignore_ascii_case("jsx"));
        if is_tsx {
            LanguageVariant::Jsx
        } else {
            LanguageVariant::Standard
        }
    }
}
