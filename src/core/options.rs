//! Step configuration
//!
//! Reads build options from `.pybuild.toml` (or an explicit path) and
//! merges command-line overrides on top. Once a run starts the options
//! are never modified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::defaults::REDACTED;
use crate::error::ConfigError;

/// Options for one orchestration run
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonBuildOptions {
    /// Extra flags passed to `python3 -m build`
    pub build_flags: Vec<String>,

    /// Generate a CycloneDX BOM after building
    pub create_bom: bool,

    /// Upload source distributions with twine
    pub publish: bool,

    /// Repository user for twine
    pub target_repository_user: String,

    /// Repository password for twine
    pub target_repository_password: String,

    /// Repository URL for twine
    pub target_repository_url: String,
}

impl fmt::Debug for PythonBuildOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.target_repository_password.is_empty() {
            ""
        } else {
            REDACTED
        };
        f.debug_struct("PythonBuildOptions")
            .field("build_flags", &self.build_flags)
            .field("create_bom", &self.create_bom)
            .field("publish", &self.publish)
            .field("target_repository_user", &self.target_repository_user)
            .field("target_repository_password", &password)
            .field("target_repository_url", &self.target_repository_url)
            .finish()
    }
}

/// Values supplied on the command line; `None` leaves the file value
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub build_flags: Option<Vec<String>>,
    pub create_bom: Option<bool>,
    pub publish: Option<bool>,
    pub target_repository_user: Option<String>,
    pub target_repository_password: Option<String>,
    pub target_repository_url: Option<String>,
}

impl PythonBuildOptions {
    /// Parse options from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load options from a file
    ///
    /// A missing file yields the defaults unless `required` is set.
    pub fn load_from_path(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !path.exists() {
            if required {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    error: "file does not exist".to_string(),
                });
            }
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: OptionOverrides) -> Self {
        if let Some(flags) = overrides.build_flags {
            self.build_flags = flags;
        }
        if let Some(create_bom) = overrides.create_bom {
            self.create_bom = create_bom;
        }
        if let Some(publish) = overrides.publish {
            self.publish = publish;
        }
        if let Some(user) = overrides.target_repository_user {
            self.target_repository_user = user;
        }
        if let Some(password) = overrides.target_repository_password {
            self.target_repository_password = password;
        }
        if let Some(url) = overrides.target_repository_url {
            self.target_repository_url = url;
        }
        self
    }

    /// Reject option combinations that cannot work
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.publish {
            return Ok(());
        }
        if self.target_repository_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "publishing requires a target repository URL".to_string(),
            });
        }
        if self.target_repository_user.is_empty() || self.target_repository_password.is_empty() {
            tracing::warn!("Publishing without repository user or password; twine may prompt or fail");
        }
        Ok(())
    }
}
