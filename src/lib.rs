//! ts2js: convert a TypeScript project to JavaScript in place.
//!
//! The single-file pipeline is `convert_source()`: parse into a lossless
//! tree, strip type-only syntax, print. `convert_directory()` runs it over
//! every source file under a root, writes each result back to its file and
//! then, once every write has been attempted, renames the converted files to
//! their JavaScript extension.

pub use ts2js_common as common;
pub use ts2js_emitter as emitter;
pub use ts2js_parser as parser;
pub use ts2js_scanner as scanner;

pub mod convert;
pub use convert::{Conversion, convert_source};

pub mod pipeline;
pub use pipeline::{
    ConvertConfig, ConvertError, ConvertReport, ConvertedFile, ExtensionError, FileError,
    FileFailure, convert_directory, discover_sources, read_source_file, remap_extension,
};

pub use ts2js_emitter::StripOptions;
pub use ts2js_parser::ParseError;
