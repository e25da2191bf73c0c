//! Error types for pybuild
//!
//! Domain-specific error types using thiserror.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single external program invocation
#[derive(Error, Debug)]
pub enum ExecError {
    /// Program could not be located on PATH
    #[error("executable '{program}' not found in PATH")]
    NotFound { program: String },

    /// Program could not be started or waited on
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Program ran and exited unsuccessfully
    #[error("'{program}' exited with {}", describe_exit(.code))]
    ExitStatus { program: String, code: Option<i32> },
}

impl ExecError {
    /// Name of the program the error belongs to
    pub fn program(&self) -> &str {
        match self {
            Self::NotFound { program }
            | Self::Spawn { program, .. }
            | Self::ExitStatus { program, .. } => program,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Failure of one step inside a phase
#[derive(Error, Debug)]
pub enum StepError {
    /// Installing a tool through pip failed
    #[error("failed to install '{tool}': {source}")]
    Install {
        tool: String,
        #[source]
        source: ExecError,
    },

    /// Running an installed tool failed
    #[error("failed to execute '{program}': {source}")]
    Execute {
        program: String,
        #[source]
        source: ExecError,
    },
}

/// Terminal errors of an orchestration run
#[derive(Error, Debug)]
pub enum PythonBuildError {
    /// The descriptor existence check itself failed
    #[error("failed to check for important file '{file}': {source}")]
    DescriptorCheck {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The project descriptor is missing
    #[error("cannot run without important file '{file}'")]
    MissingDescriptor { file: String },

    /// Build phase failed to set up its tool
    #[error("Python build failed with error: {0}")]
    Build(#[source] StepError),

    /// BOM phase failed
    #[error("BOM creation failed: {0}")]
    Bom(#[source] StepError),

    /// Publish phase failed
    #[error("failed to publish: {0}")]
    Publish(#[source] StepError),
}

impl PythonBuildError {
    /// Classification reported upstream alongside the fatal message
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DescriptorCheck { .. } | Self::MissingDescriptor { .. } => {
                ErrorCategory::Configuration
            }
            Self::Build(_) | Self::Bom(_) | Self::Publish(_) => ErrorCategory::Undefined,
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Configuration is inconsistent
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },
}

/// Upstream error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCategory {
    /// Anything not classified otherwise
    #[default]
    Undefined,
    /// The project or step configuration is wrong
    Configuration,
}

impl ErrorCategory {
    /// Classify an arbitrary error chain
    pub fn of(error: &anyhow::Error) -> Self {
        if let Some(e) = error.downcast_ref::<PythonBuildError>() {
            return e.category();
        }
        if error.downcast_ref::<ConfigError>().is_some() {
            return Self::Configuration;
        }
        Self::Undefined
    }

    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
