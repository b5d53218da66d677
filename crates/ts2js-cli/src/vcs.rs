//! Branch guard.
//!
//! Conversion rewrites most of a project, so it runs on its own branch
//! unless the current one already looks like a conversion branch.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Branch created when the current one is not a conversion branch.
pub const CONVERSION_BRANCH: &str = "convert-ts-to-js";

pub trait VersionControl {
    fn current_branch(&self) -> Result<String>;
    fn checkout_new_branch(&self, name: &str) -> Result<()>;
}

/// `git` on the `PATH`, run against a working directory.
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        GitCli {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.dir)
            .args(args)
            .output()
            .context("failed to run git")?;
        if !output.status.success() {
            bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    fn current_branch(&self) -> Result<String> {
        // Works on a branch with no commits yet, unlike `rev-parse`.
        Ok(self.git(&["branch", "--show-current"])?.trim().to_string())
    }

    fn checkout_new_branch(&self, name: &str) -> Result<()> {
        self.git(&["checkout", "-b", name]).map(drop)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BranchAction {
    /// Already on a conversion branch.
    Kept(String),
    Created(String),
}

/// A branch whose name mentions `ts` or `js`, in any case.
pub fn is_conversion_branch(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.contains("ts") || name.contains("js")
}

pub fn ensure_conversion_branch(vcs: &dyn VersionControl) -> Result<BranchAction> {
    let current = vcs.current_branch().context("failed to read the current branch")?;
    if is_conversion_branch(&current) {
        info!(branch = %current, "already on a conversion branch");
        return Ok(BranchAction::Kept(current));
    }
    vcs.checkout_new_branch(CONVERSION_BRANCH)
        .with_context(|| format!("failed to create branch '{CONVERSION_BRANCH}'"))?;
    info!(branch = CONVERSION_BRANCH, "created branch");
    Ok(BranchAction::Created(CONVERSION_BRANCH.to_string()))
}
