//! Single-file conversion: parse, strip, print.

use tracing::debug;
use ts2js_common::Diagnostic;
use ts2js_emitter::{StripOptions, print, strip};
use ts2js_parser::{ParseError, parse};

#[derive(Clone, Debug)]
pub struct Conversion {
    /// JavaScript text.
    pub code: String,
    /// Lexical diagnostics and strip warnings. Neither stops the file from
    /// being converted.
    pub warnings: Vec<Diagnostic>,
}

/// Convert one file's text. `file_name` selects JSX parsing (`.tsx`) and is
/// used in diagnostics.
pub fn convert_source(file_name: &str, text: &str, options: &StripOptions) -> Result<Conversion, ParseError> {
    let tree = parse(file_name, text)?;
    let output = strip(&tree, options);
    let code = print(&output.tree, text);

    let mut warnings = tree.diagnostics;
    warnings.extend(output.warnings);
    debug!(
        file = file_name,
        input_bytes = text.len(),
        output_bytes = code.len(),
        warnings = warnings.len(),
        "converted"
    );
    Ok(Conversion { code, warnings })
}

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod convert_tests;
