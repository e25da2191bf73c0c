//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;
use crate::core::options::{OptionOverrides, PythonBuildOptions};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the project, then optionally create a BOM and publish
    Build {
        #[command(flatten)]
        step: StepArgs,

        /// Write step telemetry as JSON to this file
        #[arg(long, value_name = "PATH")]
        telemetry_file: Option<PathBuf>,
    },

    /// Validate configuration and project layout without running anything
    Check {
        #[command(flatten)]
        step: StepArgs,
    },
}

/// Options shared by every command that operates on a project
#[derive(Args, Debug, Clone, Default)]
pub struct StepArgs {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Config file (defaults to .pybuild.toml in the project directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra flag for `python3 -m build` (repeatable, replaces configured flags)
    #[arg(long = "build-flag", value_name = "FLAG", allow_hyphen_values = true)]
    pub build_flags: Vec<String>,

    /// Generate a CycloneDX BOM (bom.xml)
    #[arg(long, env = "PYBUILD_CREATE_BOM", num_args = 0..=1, default_missing_value = "true")]
    pub create_bom: Option<bool>,

    /// Upload dist/*.tar.gz with twine
    #[arg(long, env = "PYBUILD_PUBLISH", num_args = 0..=1, default_missing_value = "true")]
    pub publish: Option<bool>,

    /// Target repository user
    #[arg(long, env = "PYBUILD_TARGET_REPOSITORY_USER")]
    pub target_repository_user: Option<String>,

    /// Target repository password
    #[arg(long, env = "PYBUILD_TARGET_REPOSITORY_PASSWORD", hide_env_values = true)]
    pub target_repository_password: Option<String>,

    /// Target repository URL
    #[arg(long, env = "PYBUILD_TARGET_REPOSITORY_URL")]
    pub target_repository_url: Option<String>,
}

impl StepArgs {
    /// Resolve the project directory
    pub fn project_dir(&self) -> Result<PathBuf> {
        match &self.project_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Load, merge and validate the step options
    pub fn load_options(&self, project_dir: &Path) -> Result<PythonBuildOptions> {
        let (path, required) = match &self.config {
            Some(path) => (path.clone(), true),
            None => (project_dir.join(CONFIG_FILE), false),
        };

        let options = PythonBuildOptions::load_from_path(&path, required)?
            .with_overrides(self.overrides());
        options.validate()?;

        tracing::debug!("Effective options: {options:?}");
        Ok(options)
    }

    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            build_flags: (!self.build_flags.is_empty()).then(|| self.build_flags.clone()),
            create_bom: self.create_bom,
            publish: self.publish,
            target_repository_user: self.target_repository_user.clone(),
            target_repository_password: self.target_repository_password.clone(),
            target_repository_url: self.target_repository_url.clone(),
        }
    }
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build {
                step,
                telemetry_file,
            } => {
                let project_dir = step.project_dir()?;
                let options = step.load_options(&project_dir)?;
                build::execute(&project_dir, &options, telemetry_file.as_deref()).await
            }
            Self::Check { step } => {
                let project_dir = step.project_dir()?;
                let options = step.load_options(&project_dir)?;
                check::execute(&project_dir, &options)
            }
        }
    }
}
