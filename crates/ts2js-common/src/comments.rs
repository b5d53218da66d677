//! Comment Preservation
//!
//! Comments are not part of the tree: they live in the leading trivia of the
//! token that follows them. This module scans trivia text for comment ranges
//! and classifies them so the transform can decide which comments survive
//! when the code around them is removed.

use serde::{Deserialize, Serialize};

/// Kind of comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// comment`
    SingleLine,
    /// `/* comment */`
    MultiLine,
}

/// A range representing a comment in a piece of trivia text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRange {
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset)
    pub end: u32,
    pub kind: CommentKind,
    /// Whether a line break follows the comment before the next comment or code
    pub has_trailing_new_line: bool,
}

impl CommentRange {
    pub fn new(pos: u32, end: u32, kind: CommentKind, has_trailing_new_line: bool) -> Self {
        CommentRange {
            pos,
            end,
            kind,
            has_trailing_new_line,
        }
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.pos as usize;
        let end = self.end as usize;
        if end <= source.len() && start < end {
            &source[start..end]
        } else {
            ""
        }
    }

    pub fn is_multi_line(&self) -> bool {
        self.kind == CommentKind::MultiLine
    }
}

/// Extract all comment ranges from a trivia string.
///
/// The input is expected to contain only whitespace and comments (the leading
/// trivia of a token); anything else is skipped one character at a time.
pub fn get_comment_ranges(trivia: &str) -> Vec<CommentRange> {
    let mut comments = Vec::new();
    let bytes = trivia.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        let ch = bytes[pos];

        if ch == b'/' && pos + 1 < len {
            let next = bytes[pos + 1];

            if next == b'/' {
                let start = pos as u32;
                pos += 2;
                while pos < len && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
                    pos += 1;
                }
                comments.push(CommentRange::new(
                    start,
                    pos as u32,
                    CommentKind::SingleLine,
                    pos < len,
                ));
                continue;
            } else if next == b'*' {
                let start = pos as u32;
                pos += 2;
                let mut closed = false;
                while pos + 1 < len {
                    if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
                        pos += 2;
                        closed = true;
                        break;
                    }
                    pos += 1;
                }
                if !closed {
                    pos = len; // Unclosed comment - go to end
                }
                comments.push(CommentRange::new(
                    start,
                    pos as u32,
                    CommentKind::MultiLine,
                    has_line_break_before_code(&bytes[pos..]),
                ));
                continue;
            }
        }

        pos += 1;
    }

    comments
}

/// True when a line terminator appears in `rest` before any comment or code.
fn has_line_break_before_code(rest: &[u8]) -> bool {
    for &b in rest {
        match b {
            b'\n' | b'\r' => return true,
            b' ' | b'\t' | 0x0B | 0x0C => continue,
            _ => return false,
        }
    }
    false
}

/// True when the text contains a line terminator.
pub fn has_line_break(text: &str) -> bool {
    memchr::memchr2(b'\n', b'\r', text.as_bytes()).is_some()
        || text.contains(['\u{2028}', '\u{2029}'])
}

/// True when the trivia text contains at least one comment.
pub fn has_comments(trivia: &str) -> bool {
    trivia.contains("//") || trivia.contains("/*")
}

/// Check if a comment is a JSDoc comment.
pub fn is_jsdoc_comment(comment: &CommentRange, source: &str) -> bool {
    let text = comment.get_text(source);
    text.starts_with("/**") && !text.starts_with("/***") && text != "/**/"
}

/// Check if a comment is a triple-slash directive.
pub fn is_triple_slash_directive(comment: &CommentRange, source: &str) -> bool {
    let text = comment.get_text(source);
    text.starts_with("///")
}
