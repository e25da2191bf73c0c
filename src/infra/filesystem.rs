//! Filesystem operations
//!
//! Existence checks relative to the project directory, and file writes.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Answers whether a project file exists
pub trait FileChecker {
    /// `Ok(true)` if `path` names an existing regular file
    fn file_exists(&self, path: &str) -> io::Result<bool>;
}

/// Files of a project on local disk
#[derive(Debug, Clone)]
pub struct ProjectFiles {
    root: PathBuf,
}

impl ProjectFiles {
    /// Create a checker resolving relative paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileChecker for ProjectFiles {
    fn file_exists(&self, path: &str) -> io::Result<bool> {
        let full = self.root.join(path);
        if !full.try_exists()? {
            return Ok(false);
        }
        Ok(std::fs::metadata(&full)?.is_file())
    }
}

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
