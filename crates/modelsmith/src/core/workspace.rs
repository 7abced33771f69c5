//! Workspace abstraction for filesystem side effects
//!
//! Emitters write artifacts through this narrow capability instead of
//! touching the filesystem directly, so extraction and emission stay
//! unit-testable without real disk or archive I/O. [`DiskWorkspace`] backs a
//! real run; [`MemoryWorkspace`] backs tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::error::ModelError;

/// Narrow filesystem capability used by emitters
///
/// All paths are relative to the workspace root. Writes overwrite without
/// confirmation; directory creation is idempotent; removing a missing tree is
/// a no-op.
pub trait Workspace: Send + Sync {
    /// Create a directory and any missing parents
    fn create_dir_all(&mut self, path: &Path) -> Result<()>;

    /// Write a file, creating parent directories as needed
    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Remove a directory tree if it exists
    fn remove_tree(&mut self, path: &Path) -> Result<()>;
}

fn reject_absolute(path: &Path) -> Result<()> {
    if path.is_absolute() {
        return Err(ModelError::workspace_error(format!(
            "workspace paths must be relative, got '{}'",
            path.display()
        ))
        .into());
    }
    Ok(())
}

/// Workspace rooted at a real directory
pub struct DiskWorkspace {
    root: PathBuf,
}

impl DiskWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Workspace for DiskWorkspace {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        reject_absolute(path)?;
        fs::create_dir_all(self.resolve(path))?;
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        reject_absolute(path)?;
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, contents)?;
        Ok(())
    }

    fn remove_tree(&mut self, path: &Path) -> Result<()> {
        reject_absolute(path)?;
        let full = self.resolve(path);
        if full.exists() {
            fs::remove_dir_all(full)?;
        }
        Ok(())
    }
}

/// In-memory workspace for tests
///
/// Files are kept in path order so assertions see a stable listing.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a file's raw contents
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(|v| v.as_slice())
    }

    /// Get a file's contents as UTF-8 text
    pub fn file_text(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.file(path).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// All file paths in path order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(|p| p.as_path())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl Workspace for MemoryWorkspace {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        reject_absolute(path)
    }

    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        reject_absolute(path)?;
        self.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn remove_tree(&mut self, path: &Path) -> Result<()> {
        reject_absolute(path)?;
        self.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
