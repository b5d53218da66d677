//! Lossless parser for ts2js.
//!
//! `parse()` turns typed source text into a concrete `SyntaxTree`: every
//! token is a leaf that owns its leading trivia, so an untouched subtree can
//! always be reproduced by slicing the original text.

pub mod parser;
pub use parser::{
    LanguageVariant, Node, NodeArena, NodeFlags, NodeIndex, NodeKind, NodeList, ParseError,
    ParseResult, ParserState,
};

mod tree;
pub use tree::{SyntaxTree, parse, parse_with_variant};
