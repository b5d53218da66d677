//! Trivia bookkeeping for removed syntax.
//!
//! A removed node takes its tokens' leading trivia with it. Whatever of that
//! trivia has to survive is parked in `PendingTrivia` and merged into the
//! leading trivia of the next token that is kept.

use ts2js_common::comments::{
    CommentKind, get_comment_ranges, has_comments, has_line_break, is_jsdoc_comment,
    is_triple_slash_directive,
};

/// How the trivia of a removed node is carried over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// A whole statement, member or list element. Attached doc comments
    /// and line comments go with it.
    Unit,
    /// A modifier keyword in front of a kept declaration.
    Modifier,
    /// `<T>` at the start of an arrow function or type assertion.
    Prefix,
    /// Type syntax after runtime code: annotations, type arguments, `as T`,
    /// `!` and `?`. Comments inside stay where they were.
    Inline,
    /// Nothing survives, not even comments.
    Drop,
}

#[derive(Debug, Default)]
pub(crate) struct PendingTrivia {
    /// Comments lifted out of inline removals.
    inherited: String,
    /// Gap left by the first leading removal, and whether that removal had
    /// no kept sibling in front of it.
    collapse: Option<(String, bool)>,
}

impl PendingTrivia {
    pub(crate) fn is_empty(&self) -> bool {
        self.inherited.is_empty() && self.collapse.is_none()
    }

    /// Record a leading removal. Only the first gap in a run counts.
    pub(crate) fn collapse(&mut self, gap: String, first: bool) {
        if self.collapse.is_none() {
            self.collapse = Some((gap, first));
        }
    }

    pub(crate) fn inherit(&mut self, comments: &str) {
        self.inherited.push_str(comments);
    }

    /// Trivia for the next kept token, whose own trivia is `own`.
    pub(crate) fn apply(&mut self, own: &str, is_end_of_file: bool) -> String {
        let base = match self.collapse.take() {
            Some((gap, _)) if is_end_of_file => join_end_of_file(&gap, own),
            Some((gap, first)) => join(&gap, own, first),
            None => own.to_string(),
        };
        let mut inherited = std::mem::take(&mut self.inherited);
        if inherited.is_empty() {
            return base;
        }
        if base.is_empty() || !base.starts_with(char::is_whitespace) {
            // Keep the comment apart from the token it now precedes.
            if !inherited.ends_with(char::is_whitespace) {
                inherited.push(' ');
            }
        }
        inherited.push_str(&base);
        inherited
    }
}

/// Trivia of a token that follows a removed run of leading syntax.
///
/// `removed` is the effective trivia of the first removed token, `own` the
/// kept token's original trivia.
pub(crate) fn join(removed: &str, own: &str, first: bool) -> String {
    let removed_has_comments = has_comments(removed);
    if !first && !removed_has_comments {
        return own.to_string();
    }
    if removed.is_empty() {
        return own.trim_start().to_string();
    }
    if has_comments(own) {
        return format!("{removed}{}", own.trim_start());
    }
    match (last_line_break(removed), last_line_break(own)) {
        (Some(r), Some(o)) => format!("{}{}", &removed[..=r], &own[o + 1..]),
        (None, Some(_)) if !removed_has_comments => own.to_string(),
        _ => removed.to_string(),
    }
}

/// The end-of-file token keeps its own trivia; surviving comments of the
/// removed run go in front of it.
pub(crate) fn join_end_of_file(removed: &str, own: &str) -> String {
    if has_comments(removed) {
        format!("{removed}{}", own.trim_start())
    } else {
        own.to_string()
    }
}

fn last_line_break(text: &str) -> Option<usize> {
    memchr::memrchr2(b'\n', b'\r', text.as_bytes())
}

/// Leading trivia of a removed unit after dropping the comments attached to
/// it.
///
/// A comment is attached when no blank line separates it from the code that
/// follows. Attached `/** */` and `//` comments are dropped together with
/// the whitespace after them; triple-slash directives and plain block
/// comments stop the scan and are kept, as is everything before them.
pub(crate) fn unit_gap(trivia: &str) -> String {
    let comments = get_comment_ranges(trivia);
    let mut cut = trivia.len();
    for comment in comments.iter().rev() {
        let following = &trivia[comment.end as usize..cut];
        if count_line_breaks(following) >= 2 {
            break;
        }
        if is_triple_slash_directive(comment, trivia) {
            break;
        }
        let droppable = comment.kind == CommentKind::SingleLine || is_jsdoc_comment(comment, trivia);
        if !droppable {
            break;
        }
        cut = comment.pos as usize;
    }
    if cut == trivia.len() {
        return trivia.to_string();
    }
    trivia[..cut].to_string()
}

/// Comments of an inline removal, ready to sit in front of the next token.
pub(crate) fn inline_comments(trivia: &str) -> Option<String> {
    if !has_comments(trivia) {
        return None;
    }
    let mut piece = trivia.trim_end().to_string();
    let ends_in_line_comment = get_comment_ranges(&piece)
        .last()
        .is_some_and(|c| c.kind == CommentKind::SingleLine);
    if ends_in_line_comment {
        piece.push('\n');
    }
    Some(piece)
}

fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => count += 1,
            _ => {}
        }
        i += 1;
    }
    if count == 0 && has_line_break(text) {
        // U+2028 / U+2029
        return 1;
    }
    count
}

/// Whether two tokens would fuse into one if printed with nothing between
/// them.
pub(crate) fn needs_separator(previous: char, next: char) -> bool {
    let word = |c: char| c.is_alphanumeric() || c == '_' || c == '$' || c == '\\';
    (word(previous) && word(next))
        || (previous == '+' && next == '+')
        || (previous == '-' && next == '-')
        || (previous == '/' && next == '/')
}

/// Whether a statement starting with `first` would be read as a
/// continuation of an unterminated line before it.
pub(crate) fn continues_expression(first: char) -> bool {
    matches!(first, '(' | '[' | '`' | '+' | '-' | '/' | '<' | '*')
}
