//! Type-stripping transform.
//!
//! `strip()` works on a clone of the tree's arena. Removed syntax is
//! detached from its parent, rewritten syntax (lowered enums, `import x =`
//! and `export =`, parameter properties) is spliced in as synthetic text,
//! and every node on the path to a change is marked dirty for the printer.

use tracing::debug_span;
use ts2js_common::Diagnostic;
use ts2js_parser::SyntaxTree;

pub(crate) mod enum_lowering;
pub(crate) mod parameter_properties;
pub(crate) mod strip;
pub(crate) mod trivia;
pub(crate) mod usage;

use strip::Stripper;

#[derive(Clone, Debug)]
pub struct StripOptions {
    /// Drop import bindings that are only referenced from types.
    pub elide_type_only_imports: bool,
    /// Keep class fields that have a type but no initializer. Dropping them
    /// matches `useDefineForClassFields: false`.
    pub preserve_uninitialized_fields: bool,
    /// JSX factory; its root name counts as a runtime use in files with JSX.
    pub jsx_factory: String,
}

impl Default for StripOptions {
    fn default() -> Self {
        StripOptions {
            elide_type_only_imports: true,
            preserve_uninitialized_fields: false,
            jsx_factory: "React".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct StripOutput {
    /// Stripped tree over the original source text.
    pub tree: SyntaxTree,
    /// Constructs that were left in place.
    pub warnings: Vec<Diagnostic>,
}

/// Remove type-only syntax from `tree`. The input tree is not modified.
pub fn strip(tree: &SyntaxTree, options: &StripOptions) -> StripOutput {
    let _span = debug_span!("strip", file = %tree.file_name).entered();
    let mut stripper = Stripper::new(
        tree.arena.clone(),
        tree.root,
        &tree.source,
        &tree.file_name,
        options,
    );
    stripper.run(tree.root);
    let warnings = std::mem::take(&mut stripper.warnings);
    StripOutput {
        tree: tree.with_arena(stripper.arena),
        warnings,
    }
}

#[cfg(test)]
#[path = "tests/trivia_tests.rs"]
mod trivia_tests;

#[cfg(test)]
#[path = "tests/strip_policy_tests.rs"]
mod strip_policy_tests;

#[cfg(test)]
#[path = "tests/enum_lowering_tests.rs"]
mod enum_lowering_tests;
