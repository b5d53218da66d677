use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use ts2js::{ConvertConfig, StripOptions};

/// CLI arguments for the ts2js binary.
#[derive(Parser, Debug)]
#[command(
    name = "ts2js",
    version,
    about = "Convert a TypeScript project to JavaScript in place"
)]
pub struct CliArgs {
    /// Project directory to convert.
    pub directory: PathBuf,

    /// Skip removing TypeScript packages from package.json.
    #[arg(long = "no-packages")]
    pub no_packages: bool,

    /// Skip removing tsconfig.json.
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Convert on the current branch instead of creating one.
    #[arg(long = "no-branch")]
    pub no_branch: bool,

    /// Additional directories to skip (glob, matched against the directory
    /// name or its path relative to the project).
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Number of worker threads.
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Also convert `.d.ts` files.
    #[arg(long = "include-declarations")]
    pub include_declarations: bool,

    /// Keep imports that are only referenced from types.
    #[arg(long = "keep-unused-type-imports")]
    pub keep_unused_type_imports: bool,

    /// Keep class fields that have a type but no initializer.
    #[arg(long = "keep-uninitialized-fields")]
    pub keep_uninitialized_fields: bool,

    /// When to color the summary.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

impl CliArgs {
    pub fn convert_config(&self) -> ConvertConfig {
        let mut config = ConvertConfig::new(&self.directory);
        config.exclude.extend(self.exclude.iter().cloned());
        config.jobs = self.jobs;
        config.skip_declaration_files = !self.include_declarations;
        config.strip = StripOptions {
            elide_type_only_imports: !self.keep_unused_type_imports,
            preserve_uninitialized_fields: self.keep_uninitialized_fields,
            ..StripOptions::default()
        };
        config
    }
}
