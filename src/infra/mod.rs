//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem checks and external processes.
//! This module is the only place where side effects occur.

pub mod filesystem;
pub mod process;

use std::io;
use std::path::PathBuf;

pub use filesystem::{FileChecker, ProjectFiles};
pub use process::{ExecRunner, ProcessRunner, Redactor};

use crate::error::ExecError;

/// Production capabilities for one project directory
#[derive(Debug)]
pub struct PythonBuildUtils {
    runner: ProcessRunner,
    files: ProjectFiles,
}

impl PythonBuildUtils {
    /// Create utilities operating in `project_dir`
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        Self {
            runner: ProcessRunner::new(project_dir.clone()),
            files: ProjectFiles::new(project_dir),
        }
    }

    /// Mask `secret` in everything the runner logs
    #[must_use]
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.runner = self.runner.with_secret(secret);
        self
    }
}

impl ExecRunner for PythonBuildUtils {
    async fn run_executable(&mut self, program: &str, args: &[String]) -> Result<(), ExecError> {
        self.runner.run_executable(program, args).await
    }
}

impl FileChecker for PythonBuildUtils {
    fn file_exists(&self, path: &str) -> io::Result<bool> {
        self.files.file_exists(path)
    }
}
