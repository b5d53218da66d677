use crate::comments::*;

#[test]
fn test_single_and_multi_line_comments() {
    let trivia = "\n  // one\n  /* two */ ";
    let comments = get_comment_ranges(trivia);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].get_text(trivia), "// one");
    assert_eq!(comments[0].kind, CommentKind::SingleLine);
    assert!(comments[0].has_trailing_new_line);
    assert_eq!(comments[1].get_text(trivia), "/* two */");
    assert!(comments[1].is_multi_line());
    assert!(!comments[1].has_trailing_new_line);
}

#[test]
fn test_unclosed_multi_line_comment_runs_to_end() {
    let trivia = "/* open";
    let comments = get_comment_ranges(trivia);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].end as usize, trivia.len());
}

#[test]
fn test_jsdoc_classification() {
    let trivia = "/** doc */ /* plain */ /***/ /**/";
    let comments = get_comment_ranges(trivia);
    assert_eq!(comments.len(), 4);
    assert!(is_jsdoc_comment(&comments[0], trivia));
    assert!(!is_jsdoc_comment(&comments[1], trivia));
    assert!(!is_jsdoc_comment(&comments[2], trivia));
    assert!(!is_jsdoc_comment(&comments[3], trivia));
}

#[test]
fn test_triple_slash_directive() {
    let trivia = "/// <reference types=\"node\" />\n";
    let comments = get_comment_ranges(trivia);
    assert!(is_triple_slash_directive(&comments[0], trivia));
}

#[test]
fn test_has_line_break() {
    assert!(has_line_break(" \n "));
    assert!(has_line_break("\r"));
    assert!(!has_line_break("  /* x */ "));
}
