//! Check command implementation
//!
//! Implements `pybuild check` to validate configuration and the project
//! layout without installing or running any tool.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::status;
use crate::config::defaults::{LEGACY_DESCRIPTORS, PROJECT_DESCRIPTOR};
use crate::config::tools::{BOM_FILENAME, DIST_GLOB};
use crate::core::options::PythonBuildOptions;
use crate::core::python_build::check_project_descriptor;
use crate::infra::{FileChecker, ProjectFiles};

/// Execute the check command
pub fn execute(project_dir: &Path, options: &PythonBuildOptions) -> Result<()> {
    tracing::info!("Checking project: {}", project_dir.display());

    let files = ProjectFiles::new(project_dir);
    check_project_descriptor(&files)?;

    println!("Checking project configuration...\n");
    println!("{} {PROJECT_DESCRIPTOR} found", status::SUCCESS);

    let legacy: Vec<&str> = LEGACY_DESCRIPTORS
        .iter()
        .copied()
        .filter(|name| files.file_exists(name).unwrap_or(false))
        .collect();
    if legacy.is_empty() {
        println!(
            "{} No setup.py or setup.cfg; build tool will be installed but not run",
            status::INFO
        );
    } else {
        println!("{} Will build from {}", status::SUCCESS, legacy.join(", "));
    }

    if options.create_bom {
        println!("{} Will create BOM ({BOM_FILENAME})", status::SUCCESS);
    }
    if options.publish {
        println!(
            "{} Will publish {DIST_GLOB} to {}",
            status::SUCCESS,
            options.target_repository_url
        );
    }

    println!("\n{} Configuration is valid", status::SUCCESS);
    Ok(())
}
