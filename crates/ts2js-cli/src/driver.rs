use anyhow::Result;
use tracing::{info_span, warn};

use ts2js::{ConvertError, ConvertReport, convert_directory};

use crate::args::CliArgs;
use crate::manifest::{PackageManifest, remove_typescript_packages};
use crate::project::remove_ts_config;
use crate::vcs::{BranchAction, VersionControl, ensure_conversion_branch};

/// Everything one run did.
#[derive(Debug)]
pub struct RunSummary {
    /// `None` with `--no-branch`.
    pub branch: Option<BranchAction>,
    pub report: ConvertReport,
    pub removed_packages: Vec<String>,
    pub removed_config: bool,
    /// Collaborator failures that did not stop the run.
    pub problems: Vec<String>,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        if self.report.is_total_failure() { 1 } else { 0 }
    }
}

/// Branch guard, conversion, then project cleanup. Errors are returned only
/// for a missing root, a failed branch guard or a run that could not start;
/// cleanup is skipped when no file could be converted.
pub fn run(args: &CliArgs, vcs: &dyn VersionControl, manifest: &dyn PackageManifest) -> Result<RunSummary> {
    let _span = info_span!("run", root = %args.directory.display()).entered();
    let root = &args.directory;
    if !root.exists() {
        return Err(ConvertError::MissingRoot(root.clone()).into());
    }
    if !root.is_dir() {
        return Err(ConvertError::NotADirectory(root.clone()).into());
    }

    let branch = if args.no_branch {
        None
    } else {
        Some(ensure_conversion_branch(vcs)?)
    };

    let report = convert_directory(&args.convert_config())?;
    let mut summary = RunSummary {
        branch,
        report,
        removed_packages: Vec::new(),
        removed_config: false,
        problems: Vec::new(),
    };
    if summary.report.is_total_failure() {
        return Ok(summary);
    }

    if !args.no_packages {
        match remove_typescript_packages(manifest) {
            Ok(removed) => summary.removed_packages = removed,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "package removal failed");
                summary
                    .problems
                    .push(format!("failed to remove TypeScript packages: {err:#}"));
            }
        }
    }

    if !args.no_config {
        match remove_ts_config(root) {
            Ok(removed) => summary.removed_config = removed,
            Err(err) => {
                warn!(error = %err, "tsconfig.json removal failed");
                summary
                    .problems
                    .push(format!("failed to remove tsconfig.json: {err}"));
            }
        }
    }

    Ok(summary)
}
