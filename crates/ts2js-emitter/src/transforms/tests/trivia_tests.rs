use super::trivia::*;

#[test]
fn test_join_keeps_own_trivia_after_non_leading_removal() {
    assert_eq!(join("\n", "\n    ", false), "\n    ");
    assert_eq!(join(" ", " ", false), " ");
}

#[test]
fn test_join_with_empty_removed_trivia_trims_own() {
    assert_eq!(join("", "\n\n", true), "");
    assert_eq!(join("", " ", true), "");
}

#[test]
fn test_join_keeps_line_structure_of_removed_unit() {
    assert_eq!(join("\n\n", "\n    ", true), "\n\n    ");
    assert_eq!(join("\n// kept\n", "\n", true), "\n// kept\n");
}

#[test]
fn test_join_keeps_comments_of_both_sides() {
    assert_eq!(join("\n/* a */", "\n/* b */ ", true), "\n/* a *//* b */ ");
}

#[test]
fn test_join_end_of_file() {
    assert_eq!(join_end_of_file("\n", "\n"), "\n");
    assert_eq!(join_end_of_file("\n// tail\n", "\n"), "\n// tail\n");
}

#[test]
fn test_unit_gap_drops_attached_doc_comment() {
    assert_eq!(unit_gap("\n/** The shape. */\n"), "\n");
    assert_eq!(unit_gap("\n\n// about x\n// more\n"), "\n\n");
}

#[test]
fn test_unit_gap_keeps_detached_and_block_comments() {
    let detached = "\n// section\n\n";
    assert_eq!(unit_gap(detached), detached);
    let block = "\n/* license */\n";
    assert_eq!(unit_gap(block), block);
    let directive = "\n/// <reference path=\"a.d.ts\" />\n";
    assert_eq!(unit_gap(directive), directive);
}

#[test]
fn test_inline_comments() {
    assert_eq!(inline_comments(" /* c */ ").as_deref(), Some(" /* c */"));
    assert_eq!(inline_comments(" // c\n  ").as_deref(), Some(" // c\n"));
    assert_eq!(inline_comments("  "), None);
}

#[test]
fn test_pending_trivia_separates_inherited_comment() {
    let mut pending = PendingTrivia::default();
    assert!(pending.is_empty());
    pending.inherit(" /* c */");
    assert!(!pending.is_empty());
    assert_eq!(pending.apply("", false), " /* c */ ");
    assert!(pending.is_empty());

    pending.inherit(" /* c */");
    assert_eq!(pending.apply(" ", false), " /* c */ ");
}

#[test]
fn test_pending_trivia_first_gap_wins() {
    let mut pending = PendingTrivia::default();
    pending.collapse("\n\n".to_string(), true);
    pending.collapse("\n".to_string(), true);
    assert_eq!(pending.apply("\n", false), "\n\n");
}

#[test]
fn test_needs_separator() {
    assert!(needs_separator('t', 'x'));
    assert!(needs_separator('+', '+'));
    assert!(needs_separator('/', '/'));
    assert!(!needs_separator(')', 'x'));
    assert!(!needs_separator('a', ';'));
}
