//! Indentation helpers.
//!
//! Code synthesized by the transform (lowered enums, parameter-property
//! assignments) is laid out with the indentation of the original line it
//! replaces and the indent unit the file already uses.

/// Default indent unit when a file gives no evidence of its own.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Return the leading whitespace of the line containing `pos`.
pub fn line_indentation(text: &str, pos: u32) -> &str {
    let pos = (pos as usize).min(text.len());
    let line_start = text[..pos]
        .rfind(['\n', '\r'])
        .map_or(0, |i| i + 1);
    let line = &text[line_start..];
    let width = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..width]
}

/// Return the indentation that follows the last line break of a trivia
/// string, or `None` when the trivia does not contain a line break.
pub fn trailing_indentation(trivia: &str) -> Option<&str> {
    trivia.rfind(['\n', '\r']).map(|i| &trivia[i + 1..])
}

/// Detect the indent unit used by a file.
///
/// Tabs win when the first indented line starts with a tab. Otherwise the
/// smallest positive indentation among lines that open a deeper level is
/// used, which handles both 2- and 4-space files.
pub fn detect_indent_unit(text: &str) -> String {
    let mut smallest: Option<usize> = None;
    let mut previous = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('\t') {
            if smallest.is_none() {
                return "\t".to_string();
            }
            continue;
        }
        let width = line.len() - line.trim_start_matches(' ').len();
        if width > previous {
            let step = width - previous;
            smallest = Some(smallest.map_or(step, |s| s.min(step)));
        }
        previous = width;
    }
    match smallest {
        Some(width) if width > 0 && width <= 8 => " ".repeat(width),
        _ => DEFAULT_INDENT_UNIT.to_string(),
    }
}
