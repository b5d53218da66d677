use super::driver::RunSummary;
use super::reporter::Reporter;
use super::vcs::BranchAction;
use std::io;
use std::path::{Path, PathBuf};
use ts2js::common::Diagnostic;
use ts2js::{ConvertReport, ConvertedFile, FileError, FileFailure};

fn summary(report: ConvertReport) -> RunSummary {
    RunSummary {
        branch: None,
        report,
        removed_packages: Vec::new(),
        removed_config: false,
        problems: Vec::new(),
    }
}

#[test]
fn test_clean_run() {
    let root = Path::new("/work/app");
    let mut s = summary(ConvertReport {
        discovered: 1,
        converted: vec![ConvertedFile {
            source: root.join("a.ts"),
            target: root.join("a.js"),
        }],
        ..ConvertReport::default()
    });
    s.branch = Some(BranchAction::Created("convert-ts-to-js".to_string()));
    s.removed_packages = vec!["typescript".to_string(), "@types/node".to_string()];
    s.removed_config = true;

    let output = Reporter::new(false).render(&s, root);
    assert_eq!(
        output,
        "Created branch convert-ts-to-js\n\
         Removed packages: typescript, @types/node\n\
         Removed tsconfig.json\n\
         Done: 1 file converted, 0 failed, 0 not renamed, 0 warnings\n"
    );
}

#[test]
fn test_failures_show_path_and_cause() {
    let root = Path::new("/work/app");
    let report = ConvertReport {
        discovered: 3,
        failed: vec![FileFailure {
            path: root.join("src/b.ts"),
            error: FileError::Read(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        }],
        rename_failed: vec![FileFailure {
            path: root.join("c.ts"),
            error: FileError::Rename {
                target: PathBuf::from("c.js"),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"),
            },
        }],
        warnings: vec![Diagnostic::warning(
            root.join("d.ts").to_string_lossy(),
            7,
            9,
            "Namespace 'N' has runtime members and was left in place.",
            9001,
        )],
        ..ConvertReport::default()
    };
    let mut s = summary(report);
    s.problems.push("failed to remove tsconfig.json: denied".to_string());

    let output = Reporter::new(false).render(&s, root);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "d.ts (offset 7): warning TS9001: Namespace 'N' has runtime members and was left in place.",
            "Failed to convert 1 file:",
            "  src/b.ts: failed to read: denied",
            "Converted but not renamed 1 file:",
            "  c.ts: converted, but failed to rename to 'c.js': target already exists",
            "warning: failed to remove tsconfig.json: denied",
            "Done: 0 files converted, 1 failed, 1 not renamed, 1 warning",
        ]
    );
}

#[test]
fn test_existing_branch_is_reported() {
    let mut s = summary(ConvertReport::default());
    s.branch = Some(BranchAction::Kept("convert-ts-to-js".to_string()));
    let output = Reporter::new(false).render(&s, Path::new("/r"));
    assert_eq!(
        output,
        "Converting on branch convert-ts-to-js\n\
         Done: 0 files converted, 0 failed, 0 not renamed, 0 warnings\n"
    );
}

#[test]
fn test_exit_code() {
    let root = Path::new("/r");
    let failed = || FileFailure {
        path: root.join("a.ts"),
        error: FileError::Write(io::Error::other("disk full")),
    };
    let total = summary(ConvertReport {
        discovered: 1,
        failed: vec![failed()],
        ..ConvertReport::default()
    });
    assert_eq!(total.exit_code(), 1);

    assert_eq!(summary(ConvertReport::default()).exit_code(), 0);
}
