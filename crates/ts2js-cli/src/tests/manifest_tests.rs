use super::manifest::{
    NpmManifest, PackageManifest, dependency_names, is_typescript_package, remove_typescript_packages,
};
use anyhow::Result;
use serde_json::json;
use std::cell::RefCell;
use tempfile::TempDir;

struct FakeManifest {
    names: Vec<String>,
    removed: RefCell<Option<Vec<String>>>,
}

impl PackageManifest for FakeManifest {
    fn dependency_names(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }

    fn remove_dependencies(&self, names: &[String]) -> Result<()> {
        *self.removed.borrow_mut() = Some(names.to_vec());
        Ok(())
    }
}

#[test]
fn test_dependency_names_from_both_sections() {
    let manifest = json!({
        "name": "app",
        "dependencies": { "react": "^18", "@types/react": "^18" },
        "devDependencies": { "typescript": "^5", "react": "^18", "@types/node": "^20" }
    });
    assert_eq!(
        dependency_names(&manifest),
        vec!["react", "@types/react", "typescript", "@types/node"]
    );
    assert!(dependency_names(&json!({ "name": "bare" })).is_empty());
}

#[test]
fn test_typescript_packages() {
    assert!(is_typescript_package("typescript"));
    assert!(is_typescript_package("@types/node"));
    assert!(!is_typescript_package("ts-node"));
    assert!(!is_typescript_package("@typescript-eslint/parser"));
}

#[test]
fn test_removes_only_typescript_packages() {
    let manifest = FakeManifest {
        names: vec!["react".into(), "typescript".into(), "@types/react".into()],
        removed: RefCell::new(None),
    };
    let removed = remove_typescript_packages(&manifest).expect("remove");
    assert_eq!(removed, vec!["typescript", "@types/react"]);
    assert_eq!(*manifest.removed.borrow(), Some(removed));
}

#[test]
fn test_nothing_to_remove_skips_npm() {
    let manifest = FakeManifest {
        names: vec!["react".into()],
        removed: RefCell::new(None),
    };
    assert!(remove_typescript_packages(&manifest).expect("remove").is_empty());
    assert!(manifest.removed.borrow().is_none());
}

#[test]
fn test_npm_manifest_reads_package_json() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = NpmManifest::new(dir.path());
    assert!(manifest.dependency_names().expect("missing is empty").is_empty());

    std::fs::write(
        dir.path().join("package.json"),
        r#"{ "devDependencies": { "typescript": "5.4.0" } }"#,
    )
    .expect("write");
    assert_eq!(manifest.dependency_names().expect("read"), vec!["typescript"]);

    std::fs::write(dir.path().join("package.json"), "{ not json").expect("write");
    assert!(manifest.dependency_names().is_err());
}
