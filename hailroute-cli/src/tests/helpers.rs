//! Test helpers for writing CLI input files and capturing output.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory with UTF-8 path helpers.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Parse captured stdout as JSON.
pub(super) fn output_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("output should be JSON")
}
