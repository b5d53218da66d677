//! `convert_directory`: the two-phase run.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};
use ts2js_common::Diagnostic;
use ts2js_emitter::StripOptions;

use super::{
    ConvertConfig, ConvertError, FileError, FileFailure, discover_sources, read_source_file,
    remap_extension,
};
use crate::convert::convert_source;

/// Worker stack size. The parser recurses once per nesting level.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Number of files discovered.
    pub discovered: usize,
    /// Written and renamed.
    pub converted: Vec<ConvertedFile>,
    /// Not converted; the file is untouched unless the write itself failed.
    pub failed: Vec<FileFailure>,
    /// Written with converted code but still carrying the old extension.
    pub rename_failed: Vec<FileFailure>,
    pub warnings: Vec<Diagnostic>,
}

impl ConvertReport {
    /// Files were found and not one of them was written.
    pub fn is_total_failure(&self) -> bool {
        self.discovered > 0 && self.failed.len() == self.discovered
    }

    /// Files whose content was converted, renamed or not.
    pub fn written_count(&self) -> usize {
        self.converted.len() + self.rename_failed.len()
    }
}

/// A file whose converted text is on disk and is waiting to be renamed.
struct WrittenFile {
    path: PathBuf,
    target: PathBuf,
    warnings: Vec<Diagnostic>,
}

/// Convert every source file under `config.root`.
pub fn convert_directory(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    let _span = info_span!("convert_directory", root = %config.root.display()).entered();

    if !config.root.exists() {
        return Err(ConvertError::MissingRoot(config.root.clone()));
    }
    if !config.root.is_dir() {
        return Err(ConvertError::NotADirectory(config.root.clone()));
    }

    let files = discover_sources(config)?;
    let mut report = ConvertReport {
        discovered: files.len(),
        ..ConvertReport::default()
    };

    let mut builder = rayon::ThreadPoolBuilder::new().stack_size(WORKER_STACK_SIZE);
    if let Some(jobs) = config.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;

    // Phase 1: convert and write. `collect` returns once every file is done.
    let outcomes: Vec<Result<WrittenFile, FileFailure>> = pool.install(|| {
        files
            .par_iter()
            .map(|path| write_converted(path, &config.strip))
            .collect()
    });

    let mut written = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(file) => written.push(file),
            Err(failure) => {
                warn!(file = %failure.path.display(), error = %failure.error, "conversion failed");
                report.failed.push(failure);
            }
        }
    }

    // Phase 2: rename.
    for file in written {
        report.warnings.extend(file.warnings);
        match rename(&file.path, &file.target) {
            Ok(()) => report.converted.push(ConvertedFile {
                source: file.path,
                target: file.target,
            }),
            Err(error) => {
                warn!(file = %file.path.display(), error = %error, "rename failed");
                report.rename_failed.push(FileFailure { path: file.path, error });
            }
        }
    }

    info!(
        discovered = report.discovered,
        converted = report.converted.len(),
        failed = report.failed.len(),
        rename_failed = report.rename_failed.len(),
        warnings = report.warnings.len(),
        "conversion finished"
    );
    Ok(report)
}

fn write_converted(path: &Path, options: &StripOptions) -> Result<WrittenFile, FileFailure> {
    let _span = info_span!("convert_file", file = %path.display()).entered();
    let fail = |error: FileError| FileFailure {
        path: path.to_path_buf(),
        error,
    };

    let target = remap_extension(path).map_err(|e| fail(e.into()))?;
    let text = read_source_file(path).map_err(|e| fail(FileError::Read(e)))?;
    let file_name = path.to_string_lossy();
    let conversion = convert_source(&file_name, &text, options).map_err(|e| fail(e.into()))?;
    for warning in &conversion.warnings {
        warn!(code = warning.code, start = warning.start, "{}", warning.message_text);
    }
    std::fs::write(path, &conversion.code).map_err(|e| fail(FileError::Write(e)))?;
    debug!(changed = conversion.code != text, "written");

    Ok(WrittenFile {
        path: path.to_path_buf(),
        target,
        warnings: conversion.warnings,
    })
}

fn rename(path: &Path, target: &Path) -> Result<(), FileError> {
    let rename_error = |source| FileError::Rename {
        target: target.to_path_buf(),
        source,
    };
    if target.exists() {
        return Err(rename_error(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "target already exists",
        )));
    }
    std::fs::rename(path, target).map_err(rename_error)
}
