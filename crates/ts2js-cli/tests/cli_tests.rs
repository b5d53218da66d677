//! End-to-end runs against a temporary project.

use anyhow::Result;
use clap::Parser;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use ts2js_cli::args::CliArgs;
use ts2js_cli::driver::run;
use ts2js_cli::manifest::PackageManifest;
use ts2js_cli::vcs::{BranchAction, VersionControl};

struct RecordingVcs {
    branch: String,
    checked_out: RefCell<Vec<String>>,
    queried: Cell<bool>,
}

impl RecordingVcs {
    fn on(branch: &str) -> Self {
        RecordingVcs {
            branch: branch.to_string(),
            checked_out: RefCell::new(Vec::new()),
            queried: Cell::new(false),
        }
    }
}

impl VersionControl for RecordingVcs {
    fn current_branch(&self) -> Result<String> {
        self.queried.set(true);
        Ok(self.branch.clone())
    }

    fn checkout_new_branch(&self, name: &str) -> Result<()> {
        self.checked_out.borrow_mut().push(name.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingManifest {
    removed: RefCell<Vec<String>>,
    broken: bool,
}

impl PackageManifest for RecordingManifest {
    fn dependency_names(&self) -> Result<Vec<String>> {
        if self.broken {
            anyhow::bail!("package.json is not valid JSON");
        }
        Ok(vec!["typescript".to_string(), "lodash".to_string()])
    }

    fn remove_dependencies(&self, names: &[String]) -> Result<()> {
        self.removed.borrow_mut().extend(names.iter().cloned());
        Ok(())
    }
}

fn project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("src")).expect("mkdir");
    fs::write(dir.path().join("src/index.ts"), "export const n: number = 1;\n").expect("write");
    fs::write(dir.path().join("tsconfig.json"), "{}\n").expect("write");
    dir
}

fn args(root: &Path, extra: &[&str]) -> CliArgs {
    let mut argv = vec!["ts2js".to_string(), root.display().to_string()];
    argv.extend(extra.iter().map(|s| s.to_string()));
    CliArgs::try_parse_from(argv).expect("parse")
}

#[test]
fn test_full_run() {
    let dir = project();
    let vcs = RecordingVcs::on("main");
    let manifest = RecordingManifest::default();

    let summary = run(&args(dir.path(), &[]), &vcs, &manifest).expect("run");
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(
        summary.branch,
        Some(BranchAction::Created("convert-ts-to-js".to_string()))
    );
    assert_eq!(*vcs.checked_out.borrow(), vec!["convert-ts-to-js"]);
    assert_eq!(summary.removed_packages, vec!["typescript"]);
    assert_eq!(*manifest.removed.borrow(), vec!["typescript"]);
    assert!(summary.removed_config);
    assert!(!dir.path().join("tsconfig.json").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("src/index.js")).expect("read"),
        "export const n = 1;\n"
    );
}

#[test]
fn test_skips_are_honored() {
    let dir = project();
    let vcs = RecordingVcs::on("main");
    let manifest = RecordingManifest::default();

    let summary = run(
        &args(dir.path(), &["--no-branch", "--no-packages", "--no-config"]),
        &vcs,
        &manifest,
    )
    .expect("run");
    assert!(summary.branch.is_none());
    assert!(!vcs.queried.get());
    assert!(manifest.removed.borrow().is_empty());
    assert!(dir.path().join("tsconfig.json").exists());
    assert!(dir.path().join("src/index.js").exists());
}

#[test]
fn test_missing_root_touches_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let vcs = RecordingVcs::on("main");
    let manifest = RecordingManifest::default();
    let err = run(&args(&dir.path().join("missing"), &[]), &vcs, &manifest).expect_err("missing");
    assert!(err.to_string().contains("does not exist"));
    assert!(!vcs.queried.get());
}

#[test]
fn test_total_failure_skips_cleanup() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("broken.ts"), "function (\n").expect("write");
    fs::write(dir.path().join("tsconfig.json"), "{}\n").expect("write");
    let vcs = RecordingVcs::on("ts-migration");
    let manifest = RecordingManifest::default();

    let summary = run(&args(dir.path(), &[]), &vcs, &manifest).expect("run");
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(summary.branch, Some(BranchAction::Kept("ts-migration".to_string())));
    assert!(manifest.removed.borrow().is_empty());
    assert!(dir.path().join("tsconfig.json").exists());
}

#[test]
fn test_manifest_failure_is_not_fatal() {
    let dir = project();
    let manifest = RecordingManifest {
        broken: true,
        ..RecordingManifest::default()
    };
    let summary = run(
        &args(dir.path(), &["--no-branch"]),
        &RecordingVcs::on("main"),
        &manifest,
    )
    .expect("run");
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(summary.problems.len(), 1);
    assert!(summary.problems[0].contains("not valid JSON"));
    assert!(summary.removed_config);
}

#[test]
fn test_binary_exit_codes() {
    let dir = project();
    let status = Command::new(env!("CARGO_BIN_EXE_ts2js"))
        .arg(dir.path())
        .args(["--no-branch", "--no-packages", "--color", "never"])
        .output()
        .expect("spawn");
    assert!(status.status.success());
    let stdout = String::from_utf8_lossy(&status.stdout);
    assert!(stdout.contains("Done: 1 file converted, 0 failed"));
    assert!(dir.path().join("src/index.js").exists());

    let missing = Command::new(env!("CARGO_BIN_EXE_ts2js"))
        .arg(dir.path().join("nope"))
        .arg("--no-branch")
        .output()
        .expect("spawn");
    assert_eq!(missing.status.code(), Some(1));
}
