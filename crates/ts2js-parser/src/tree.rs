//! Parsed file: the arena, its root and the text it was parsed from.

use std::sync::Arc;

use tracing::debug_span;
use ts2js_common::Diagnostic;

use crate::parser::{LanguageVariant, NodeArena, NodeIndex, NodeKind, ParseError, ParserState};

#[derive(Clone, Debug)]
pub struct SyntaxTree {
    pub file_name: String,
    pub source: Arc<str>,
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub variant: LanguageVariant,
    /// Non-fatal lexical diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.arena.count_kind(self.root, kind)
    }

    /// Original text of `node` without leading trivia.
    pub fn node_text(&self, node: NodeIndex) -> &str {
        self.arena.node_text(&self.source, node)
    }

    /// Same tree over a different arena (transform output).
    pub fn with_arena(&self, arena: NodeArena) -> SyntaxTree {
        SyntaxTree {
            file_name: self.file_name.clone(),
            source: Arc::clone(&self.source),
            arena,
            root: self.root,
            variant: self.variant,
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// Parse `text`, choosing JSX support from the file extension.
pub fn parse(file_name: &str, text: impl Into<Arc<str>>) -> Result<SyntaxTree, ParseError> {
    parse_with_variant(file_name, text, LanguageVariant::from_file_name(file_name))
}

pub fn parse_with_variant(
    file_name: &str,
    text: impl Into<Arc<str>>,
    variant: LanguageVariant,
) -> Result<SyntaxTree, ParseError> {
    let source: Arc<str> = text.into();
    let _span = debug_span!("parse", file = file_name, bytes = source.len()).entered();

    let mut state = ParserState::new(file_name, Arc::clone(&source), variant);
    let root = state
        .parse_source_file()
        .map_err(|err| err.with_location(&source))?;
    let (arena, diagnostics) = state.into_parts();
    Ok(SyntaxTree {
        file_name: file_name.to_string(),
        source,
        arena,
        root,
        variant,
        diagnostics,
    })
}
