use std::path::{Path, PathBuf};

use super::*;

#[test]
fn test_remap_extension() {
    assert_eq!(remap_extension(Path::new("a.ts")), Ok(PathBuf::from("a.js")));
    assert_eq!(remap_extension(Path::new("a/b.tsx")), Ok(PathBuf::from("a/b.jsx")));
    assert_eq!(remap_extension(Path::new("a.TS")), Ok(PathBuf::from("a.js")));
    assert_eq!(remap_extension(Path::new("a.Tsx")), Ok(PathBuf::from("a.jsx")));
    assert_eq!(remap_extension(Path::new("dir.ts/a.ts")), Ok(PathBuf::from("dir.ts/a.js")));
}

#[test]
fn test_remap_extension_rejects_other_extensions() {
    for name in ["a.js", "a.mts", "a", "a.ts.bak"] {
        let err = remap_extension(Path::new(name)).expect_err(name);
        assert_eq!(err.path, PathBuf::from(name));
    }
}
