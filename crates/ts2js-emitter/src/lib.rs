//! Type-stripping transform and lossless printer for ts2js.
//!
//! `strip()` removes type-only syntax from a `SyntaxTree` and marks every
//! node on the path to a change as dirty; `print()` then copies clean
//! subtrees verbatim from the original text and regenerates only the dirty
//! ones.

pub mod printer;
pub use printer::print;

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod transforms;
pub use transforms::{StripOptions, StripOutput, strip};
