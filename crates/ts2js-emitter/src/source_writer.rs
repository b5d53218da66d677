//! Output buffer with indentation tracking.
//!
//! The printer appends original text through `write_raw`; synthesized code
//! is written line by line with `write`/`write_line`, indented relative to
//! the line it replaces.

use ts2js_common::indent::DEFAULT_INDENT_UNIT;

#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    base_indent: String,
    indent_unit: String,
    indent_level: usize,
    /// Next `write` starts a new line and must emit indentation first.
    pending_indent: bool,
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new("", DEFAULT_INDENT_UNIT)
    }
}

impl SourceWriter {
    /// Writer whose continuation lines start with `base_indent`. The first
    /// line is assumed to be positioned already.
    pub fn new(base_indent: &str, indent_unit: &str) -> Self {
        SourceWriter {
            output: String::new(),
            base_indent: base_indent.to_string(),
            indent_unit: indent_unit.to_string(),
            indent_level: 0,
            pending_indent: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut writer = Self::default();
        writer.output.reserve(capacity);
        writer
    }

    /// Append text as-is; no indentation is inserted.
    pub fn write_raw(&mut self, text: &str) {
        self.output.push_str(text);
        if !text.is_empty() {
            self.pending_indent = false;
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_indent {
            self.output.push_str(&self.base_indent);
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.pending_indent = false;
        }
        self.output.push_str(text);
    }

    pub fn write_space(&mut self) {
        self.write(" ");
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.pending_indent = true;
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}
