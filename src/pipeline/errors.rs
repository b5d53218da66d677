use std::io;
use std::path::PathBuf;

use ts2js_parser::ParseError;

use super::extensions::ExtensionError;

/// Problems that stop a run before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("directory '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("failed to walk '{}': {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why one file was not (fully) converted.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read: {0}")]
    Read(#[source] io::Error),
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),
    #[error("failed to write: {0}")]
    Write(#[source] io::Error),
    #[error("converted, but failed to rename to '{}': {source}", .target.display())]
    Rename {
        target: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Extension(#[from] ExtensionError),
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: FileError,
}
