//! Filesystem listing seam used by the locator and loader.
//!
//! Discovery only ever needs four operations: list child directories, list
//! child files, test for a directory, and read a file. Routing them through
//! [`DomainFs`] lets unit tests drive the heuristics with an in-memory tree
//! instead of tempdir fixtures. Listings are returned sorted by name so that
//! "first match" and "last write wins" never depend on OS enumeration order.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read-only view over a directory tree.
pub trait DomainFs {
    /// Names of the immediate child directories of `path`, sorted lexically.
    ///
    /// Symlinks that resolve to directories are included. Fails when `path`
    /// cannot be read.
    fn list_directories(&self, path: &Path) -> Result<Vec<String>>;

    /// Names of the immediate child files of `path`, sorted lexically.
    fn list_files(&self, path: &Path) -> Result<Vec<String>>;

    /// True when `path` exists and is (or links to) a directory.
    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// [`DomainFs`] backed by the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    fn entries(&self, path: &Path, want_dirs: bool) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let listing =
            fs::read_dir(path).with_context(|| format!("reading directory {}", path.display()))?;
        for entry in listing {
            let entry = entry.with_context(|| format!("reading entry in {}", path.display()))?;
            let entry_path = entry.path();
            // `Path::is_dir` follows symlinks, so linked directories count.
            let is_dir = entry_path.is_dir();
            if is_dir != want_dirs || (!want_dirs && !entry_path.is_file()) {
                continue;
            }
            // Non-UTF-8 names cannot become mapping keys or domain names.
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl DomainFs for LocalFs {
    fn list_directories(&self, path: &Path) -> Result<Vec<String>> {
        self.entries(path, true)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<String>> {
        self.entries(path, false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
