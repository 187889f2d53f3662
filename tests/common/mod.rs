use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DOMAIN_HEADER: &str = "Protein stable ID\tPfam ID\n";

/// Scratch directory holding the two analysis inputs.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

/// Star network: `hub` linked to `leaves` distinct proteins.
pub fn star_edges(hub: &str, leaves: usize) -> String {
    (0..leaves)
        .map(|i| format!("{hub} {hub}_L{i}\n"))
        .collect()
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}
