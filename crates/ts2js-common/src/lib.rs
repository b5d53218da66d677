//! Common types and utilities for the ts2js converter.
//!
//! This crate provides foundational types used across all ts2js crates:
//! - Position/line-map types for reporting (`LineMap`, `Location`)
//! - Comment scanning and classification for trivia handling
//! - Diagnostics shared by the scanner, parser and transform
//! - Indentation helpers used when code has to be synthesized
//! - Centralized limits

// Position/Location types for line/column source locations
pub mod position;
pub use position::{LineMap, Location};

// Comment parsing utilities
pub mod comments;
pub use comments::{CommentKind, CommentRange};

// Diagnostics (lexical problems, strip warnings)
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Indentation of original lines and the file's indent unit
pub mod indent;

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "tests/comments_tests.rs"]
mod comments_tests;

#[cfg(test)]
#[path = "tests/indent_tests.rs"]
mod indent_tests;
