use crate::indent::*;
use crate::position::LineMap;

#[test]
fn test_line_indentation() {
    let text = "class A {\n    x = 1;\n\ty = 2;\n}";
    let x = text.find('x').unwrap() as u32;
    let y = text.find('y').unwrap() as u32;
    assert_eq!(line_indentation(text, x), "    ");
    assert_eq!(line_indentation(text, y), "\t");
    assert_eq!(line_indentation(text, 0), "");
}

#[test]
fn test_trailing_indentation() {
    assert_eq!(trailing_indentation("\n\n  "), Some("  "));
    assert_eq!(trailing_indentation(" "), None);
}

#[test]
fn test_detect_indent_unit() {
    assert_eq!(detect_indent_unit("a {\n  b {\n    c\n  }\n}"), "  ");
    assert_eq!(detect_indent_unit("a {\n    b\n}"), "    ");
    assert_eq!(detect_indent_unit("a {\n\tb\n}"), "\t");
    assert_eq!(detect_indent_unit("flat"), DEFAULT_INDENT_UNIT);
}

#[test]
fn test_line_map_locations() {
    let text = "ab\r\ncd\nef";
    let map = LineMap::build(text);
    assert_eq!(map.line_count(), 3);
    let loc = map.location(text, text.find('d').unwrap() as u32);
    assert_eq!((loc.line, loc.column), (2, 2));
    let loc = map.location(text, 0);
    assert_eq!((loc.line, loc.column), (1, 1));
}
