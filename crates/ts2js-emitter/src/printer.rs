//! Lossless printer.
//!
//! A clean node is copied from the original text, trivia included. A dirty
//! node is printed child by child, so only the parts of the file the
//! transform touched are regenerated.

use tracing::debug_span;
use ts2js_parser::{NodeArena, NodeIndex, SyntaxTree};

use crate::source_writer::SourceWriter;

/// Print `tree` against `original`, the text it was parsed from.
pub fn print(tree: &SyntaxTree, original: &str) -> String {
    let _span = debug_span!("print", file = %tree.file_name).entered();
    let mut printer = Printer {
        arena: &tree.arena,
        source: original,
        writer: SourceWriter::with_capacity(original.len()),
    };
    printer.print_node(tree.root);
    printer.writer.into_string()
}

struct Printer<'a> {
    arena: &'a NodeArena,
    source: &'a str,
    writer: SourceWriter,
}

impl<'a> Printer<'a> {
    fn print_node(&mut self, index: NodeIndex) {
        let Some(node) = self.arena.get(index) else {
            return;
        };

        if node.is_synthetic() {
            self.writer.write_raw(node.leading_trivia.as_deref().unwrap_or(""));
            self.writer.write_raw(node.text.as_deref().unwrap_or(""));
            return;
        }

        if !node.is_dirty() {
            self.write_span(node.pos, node.end);
            return;
        }

        if node.kind.is_token() {
            match node.leading_trivia.as_deref() {
                Some(trivia) => self.writer.write_raw(trivia),
                None => self.write_span(node.pos, node.start),
            }
            self.write_span(node.start, node.end);
            return;
        }

        for &child in &node.children {
            self.print_node(child);
        }
    }

    fn write_span(&mut self, start: u32, end: u32) {
        let text = self.source.get(start as usize..end as usize).unwrap_or("");
        self.writer.write_raw(text);
    }
}
