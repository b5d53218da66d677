use std::io::{self, ErrorKind};
use std::path::Path;
use tracing::info;

pub const TS_CONFIG_FILE: &str = "tsconfig.json";

/// Delete `dir/tsconfig.json`. Returns `false` when there was none.
pub fn remove_ts_config(dir: &Path) -> io::Result<bool> {
    let path = dir.join(TS_CONFIG_FILE);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            info!(path = %path.display(), "removed");
            Ok(true)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
