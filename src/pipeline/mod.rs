//! File pipeline.
//!
//! Discovery walks the root and keeps `*.ts`/`*.tsx` files outside excluded
//! directories. Every file is then converted and written back on a worker
//! pool. Only after all of those writes have finished are the written files
//! renamed, one by one, to `.js`/`.jsx`. A file that fails to read, parse or
//! write is reported and never renamed.

mod config;
pub use config::{ConvertConfig, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS};

mod discovery;
pub use discovery::discover_sources;

mod driver;
pub use driver::{ConvertReport, ConvertedFile, convert_directory};

mod errors;
pub use errors::{ConvertError, FileError, FileFailure};

mod extensions;
pub use extensions::{ExtensionError, remap_extension};

mod sources;
pub use sources::read_source_file;

#[cfg(test)]
#[path = "tests/extensions_tests.rs"]
mod extensions_tests;

#[cfg(test)]
#[path = "tests/sources_tests.rs"]
mod sources_tests;
