//! Directory conversion against a temporary project.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use ts2js::{ConvertConfig, ConvertError, FileError, convert_directory, discover_sources};

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dir");
    }
    fs::write(path, text).expect("write");
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).expect("read")
}

#[test]
fn test_converts_and_renames() {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    write(root, "src/a.ts", "export const a: number = 1;\n");
    write(root, "src/view.tsx", "export const v = <div>{1 as number}</div>;\n");

    let report = convert_directory(&ConvertConfig::new(root)).expect("run");
    assert_eq!(report.discovered, 2);
    assert_eq!(report.converted.len(), 2);
    assert!(report.failed.is_empty());
    assert!(!report.is_total_failure());

    assert_eq!(read(root, "src/a.js"), "export const a = 1;\n");
    assert_eq!(read(root, "src/view.jsx"), "export const v = <div>{1}</div>;\n");
    assert!(!root.join("src/a.ts").exists());
    assert!(!root.join("src/view.tsx").exists());
}

#[test]
fn test_partial_failure_renames_only_converted_files() {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    write(root, "file1.ts", "let one: number = 1;\n");
    write(root, "file2.ts", "let two = ;\n");
    write(root, "file3.ts", "let three: number = 3;\n");

    let report = convert_directory(&ConvertConfig::new(root)).expect("run");
    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, root.join("file2.ts"));
    assert!(matches!(report.failed[0].error, FileError::Parse(_)));
    assert!(!report.is_total_failure());

    assert!(root.join("file1.js").exists());
    assert!(root.join("file3.js").exists());
    assert_eq!(read(root, "file2.ts"), "let two = ;\n");
    assert!(!root.join("file2.js").exists());
}

#[test]
fn test_every_file_failing_is_a_total_failure() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "bad.ts", "class {\n");
    let report = convert_directory(&ConvertConfig::new(dir.path())).expect("run");
    assert!(report.is_total_failure());
}

#[test]
fn test_existing_target_is_a_rename_failure() {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    write(root, "a.ts", "const a: string = \"\";\n");
    write(root, "a.js", "// hand-written\n");

    let report = convert_directory(&ConvertConfig::new(root)).expect("run");
    assert!(report.converted.is_empty());
    assert_eq!(report.rename_failed.len(), 1);
    assert!(matches!(report.rename_failed[0].error, FileError::Rename { .. }));
    assert_eq!(report.written_count(), 1);
    assert!(!report.is_total_failure());
    // Content is converted in place; the existing file is untouched.
    assert_eq!(read(root, "a.ts"), "const a = \"\";\n");
    assert_eq!(read(root, "a.js"), "// hand-written\n");
}

#[test]
fn test_discovery_skips_excluded_and_declaration_files() {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    write(root, "src/index.ts", "");
    write(root, "src/UPPER.TS", "");
    write(root, "src/types.d.ts", "");
    write(root, "src/readme.md", "");
    write(root, "node_modules/pkg/index.ts", "");
    write(root, "build/out.ts", "");

    let mut config = ConvertConfig::new(root);
    config.exclude.push("build".to_string());
    let files = discover_sources(&config).expect("discover");
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(root).expect("under root").to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![Path::new("src/UPPER.TS").to_path_buf(), Path::new("src/index.ts").to_path_buf()]
    );

    config.skip_declaration_files = false;
    assert_eq!(discover_sources(&config).expect("discover").len(), 3);
}

#[test]
fn test_missing_root() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope");
    let err = convert_directory(&ConvertConfig::new(&missing)).expect_err("missing");
    assert!(matches!(err, ConvertError::MissingRoot(_)));

    write(dir.path(), "file.ts", "");
    let err = convert_directory(&ConvertConfig::new(dir.path().join("file.ts"))).expect_err("file");
    assert!(matches!(err, ConvertError::NotADirectory(_)));
}

#[test]
fn test_invalid_exclude_pattern() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = ConvertConfig::new(dir.path());
    config.exclude.push("[".to_string());
    assert!(matches!(
        discover_sources(&config),
        Err(ConvertError::InvalidPattern { .. })
    ));
}

#[test]
fn test_single_worker() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.ts", "let a!: number;\n");
    let mut config = ConvertConfig::new(dir.path());
    config.jobs = Some(1);
    let report = convert_directory(&config).expect("run");
    assert_eq!(report.converted.len(), 1);
    assert_eq!(read(dir.path(), "a.js"), "let a;\n");
}
