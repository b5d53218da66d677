//! Source discovery.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{ConvertConfig, ConvertError};

/// Convertible files under `config.root`, sorted.
pub fn discover_sources(config: &ConvertConfig) -> Result<Vec<PathBuf>, ConvertError> {
    let excluded = build_glob_set(&config.exclude)?;
    let included = build_glob_set(&config.extensions)?;
    let root = config.root.as_path();

    let is_excluded_dir = |entry: &DirEntry| {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && (excluded.is_match(entry.file_name())
                || entry
                    .path()
                    .strip_prefix(root)
                    .is_ok_and(|relative| excluded.is_match(relative)))
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_excluded_dir(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ConvertError::Walk {
                    root: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !included.is_match(entry.file_name()) {
            continue;
        }
        if config.skip_declaration_files && is_declaration_file(entry.path()) {
            debug!(file = %entry.path().display(), "skipping declaration file");
            continue;
        }
        files.push(entry.into_path());
    }
    files.sort();
    debug!(count = files.len(), "discovered sources");
    Ok(files)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, ConvertError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(false)
            .build()
            .map_err(|source| ConvertError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ConvertError::InvalidPattern {
        pattern: patterns.join(","),
        source,
    })
}

/// `*.d.ts`, `*.d.tsx`, `*.d.mts` and friends.
fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            let name = name.to_ascii_lowercase();
            let Some((stem, _)) = name.rsplit_once('.') else {
                return false;
            };
            stem.ends_with(".d")
        })
}
