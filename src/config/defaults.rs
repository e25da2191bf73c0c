//! Default configuration values

/// Project descriptor that must exist before anything runs
pub const PROJECT_DESCRIPTOR: &str = "pyproject.toml";

/// Legacy setuptools descriptors; the build tool only runs if one exists
pub const LEGACY_DESCRIPTORS: &[&str] = &["setup.py", "setup.cfg"];

/// Project-local configuration file
pub const CONFIG_FILE: &str = ".pybuild.toml";

/// Name used for the step in logs and telemetry
pub const STEP_NAME: &str = "pythonBuild";

/// Placeholder written in place of secrets in logs
pub const REDACTED: &str = "****";

/// Secrets shorter than this are only masked where they form a whole word
pub const MIN_REDACTED_SECRET_LEN: usize = 4;
