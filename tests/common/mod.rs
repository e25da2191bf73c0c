//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Run pybuild in the project directory
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute pybuild")
    }

    /// Prepare a pybuild invocation in the project directory
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pybuild"));
        cmd.current_dir(self.path());
        cmd.args(args);
        for var in [
            "RUST_LOG",
            "PYBUILD_CREATE_BOM",
            "PYBUILD_PUBLISH",
            "PYBUILD_TARGET_REPOSITORY_USER",
            "PYBUILD_TARGET_REPOSITORY_PASSWORD",
            "PYBUILD_TARGET_REPOSITORY_URL",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined stdout and stderr of a run
#[allow(dead_code)]
pub fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

/// Minimal PEP 621 project descriptor
#[allow(dead_code)]
pub const SAMPLE_PYPROJECT: &str = r#"
[build-system]
requires = ["setuptools>=61"]
build-backend = "setuptools.build_meta"

[project]
name = "demo"
version = "1.0.0"
"#;

/// Legacy setuptools entry point
#[allow(dead_code)]
pub const SAMPLE_SETUP_PY: &str = "from setuptools import setup\nsetup()\n";

/// Stand-ins for python3, cyclonedx-bom and twine that record their arguments
#[cfg(unix)]
#[allow(dead_code)]
pub struct StubTools {
    dir: TempDir,
}

#[cfg(unix)]
#[allow(dead_code)]
impl StubTools {
    /// Install recording stubs for all three tools
    pub fn new() -> Self {
        let stubs = Self {
            dir: TempDir::new().expect("Failed to create stub directory"),
        };
        stubs.install("python3", "");
        stubs.install("cyclonedx-bom", "touch bom.xml\n");
        stubs.install("twine", "");
        stubs
    }

    /// Replace a stub; `body` runs after the invocation is recorded
    pub fn install(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             {{\n\
             printf '%s' \"{name}\"\n\
             for a in \"$@\"; do printf ' %s' \"$a\"; done\n\
             printf '\\n'\n\
             }} >> \"{log}\"\n\
             {body}",
            log = self.log_path().display(),
        );
        let path = self.dir.path().join(name);
        std::fs::write(&path, script).expect("Failed to write stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
    }

    /// File the stubs append their invocations to
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("invocations.log")
    }

    /// Recorded invocations, one line each
    pub fn invocations(&self) -> Vec<String> {
        match std::fs::read_to_string(self.log_path()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Put the stubs first on PATH for `cmd`
    pub fn apply(&self, cmd: &mut Command) {
        cmd.env("PATH", self.path_var());
    }

    fn path_var(&self) -> std::ffi::OsString {
        let mut paths = vec![self.dir.path().to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }
}
