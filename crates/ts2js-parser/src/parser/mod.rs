//! Parser - arena-allocated concrete syntax tree.
//!
//! `ParserState` is a recursive descent parser over `ScannerState` tokens.
//! Each grammar area lives in its own `state_*` file.

mod base;
pub use base::{LanguageVariant, ParseError, ParseResult};

mod node;
pub use node::{Node, NodeArena, NodeFlags, NodeIndex, NodeList};

mod node_kind;
pub use node_kind::NodeKind;

pub mod node_access;

mod state;
pub use state::ParserState;

mod state_expressions;
mod state_jsx;
mod state_statements;
mod state_declarations;
mod state_statements_class_members;
mod state_types;

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;

#[cfg(test)]
#[path = "tests/node_access_tests.rs"]
mod node_access_tests;
