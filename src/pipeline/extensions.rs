//! `.ts → .js`, `.tsx → .jsx`.

use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{}' has no JavaScript counterpart extension", .path.display())]
pub struct ExtensionError {
    pub path: PathBuf,
}

/// Path with its extension mapped to JavaScript. Case-insensitive; the new
/// extension is always lower case.
pub fn remap_extension(path: &Path) -> Result<PathBuf, ExtensionError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let mapped = match extension.as_deref() {
        Some("ts") => "js",
        Some("tsx") => "jsx",
        _ => {
            return Err(ExtensionError {
                path: path.to_path_buf(),
            });
        }
    };
    Ok(path.with_extension(mapped))
}
