//! Command-line surface of ts2js.
//!
//! The binary runs, in order: the branch guard, the directory conversion,
//! removal of TypeScript packages from the manifest and removal of
//! `tsconfig.json`. Only the first two can fail the run.

pub mod args;
pub mod driver;
pub mod manifest;
pub mod project;
pub mod reporter;
pub mod tracing_config;
pub mod vcs;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;

#[cfg(test)]
#[path = "tests/vcs_tests.rs"]
mod vcs_tests;

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod manifest_tests;

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
