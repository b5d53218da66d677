//! Scanner/tokenizer for ts2js.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine with trivia provenance
//! - `char_codes` - Character classification utilities

pub mod char_codes;

mod syntax_kind;
pub use syntax_kind::{SyntaxKind, text_to_keyword};

mod scanner;
pub use scanner::{ScannerSnapshot, ScannerState, TokenFlags};

pub mod literals;
