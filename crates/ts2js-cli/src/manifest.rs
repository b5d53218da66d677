//! Removing TypeScript packages from `package.json`.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

pub const MANIFEST_FILE: &str = "package.json";

pub trait PackageManifest {
    /// Every name under `dependencies` and `devDependencies`.
    fn dependency_names(&self) -> Result<Vec<String>>;
    fn remove_dependencies(&self, names: &[String]) -> Result<()>;
}

/// `package.json` edited through `npm`.
pub struct NpmManifest {
    dir: PathBuf,
}

impl NpmManifest {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        NpmManifest {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl PackageManifest for NpmManifest {
    fn dependency_names(&self) -> Result<Vec<String>> {
        let path = self.dir.join(MANIFEST_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no manifest");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        let manifest: Value = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(dependency_names(&manifest))
    }

    fn remove_dependencies(&self, names: &[String]) -> Result<()> {
        let status = Command::new("npm")
            .arg("remove")
            .args(names)
            .current_dir(&self.dir)
            .status()
            .context("failed to run npm")?;
        if !status.success() {
            bail!("npm remove exited with {status}");
        }
        Ok(())
    }
}

/// Keys of the `dependencies` and `devDependencies` objects, in file order,
/// without duplicates.
pub fn dependency_names(manifest: &Value) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        let Some(entries) = manifest.get(section).and_then(Value::as_object) else {
            continue;
        };
        for name in entries.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// `typescript` itself and every `@types/*` package.
pub fn is_typescript_package(name: &str) -> bool {
    name == "typescript" || name.starts_with("@types/")
}

/// Remove the TypeScript packages the manifest lists. Returns the removed
/// names; when there are none `npm` is not run.
pub fn remove_typescript_packages(manifest: &dyn PackageManifest) -> Result<Vec<String>> {
    let targets: Vec<String> = manifest
        .dependency_names()?
        .into_iter()
        .filter(|name| is_typescript_package(name))
        .collect();
    if targets.is_empty() {
        debug!("no TypeScript packages to remove");
        return Ok(targets);
    }
    manifest.remove_dependencies(&targets)?;
    info!(count = targets.len(), "removed TypeScript packages");
    Ok(targets)
}
