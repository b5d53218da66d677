use std::path::{Path, PathBuf};

use ts2js_emitter::StripOptions;

/// Directories never descended into.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git"];

/// File name patterns of convertible sources. Matched case-insensitively.
pub const DEFAULT_EXTENSIONS: &[&str] = &["*.ts", "*.tsx"];

/// Everything `convert_directory` needs to know.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub root: PathBuf,
    /// Globs matched against directory names and root-relative directory
    /// paths.
    pub exclude: Vec<String>,
    /// Globs matched against file names.
    pub extensions: Vec<String>,
    /// Leave `*.d.ts` files alone.
    pub skip_declaration_files: bool,
    /// Worker threads; `None` lets rayon decide.
    pub jobs: Option<usize>,
    pub strip: StripOptions,
}

impl ConvertConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        ConvertConfig {
            root: root.as_ref().to_path_buf(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
            skip_declaration_files: true,
            jobs: None,
            strip: StripOptions::default(),
        }
    }
}
