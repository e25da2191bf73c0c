//! Build command implementation
//!
//! Implements `pybuild build`: runs the orchestrator against the real
//! process runner, fills in telemetry and prints a summary.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::cli::output;
use crate::core::options::PythonBuildOptions;
use crate::core::python_build::run_python_build;
use crate::core::telemetry::TelemetryData;
use crate::infra::PythonBuildUtils;

/// Execute the build command
pub async fn execute(
    project_dir: &Path,
    options: &PythonBuildOptions,
    telemetry_file: Option<&Path>,
) -> Result<()> {
    tracing::info!("Building Python project in {}", project_dir.display());

    let mut utils =
        PythonBuildUtils::new(project_dir).with_secret(&options.target_repository_password);
    let mut telemetry = TelemetryData::default();
    let started = Instant::now();

    let result = run_python_build(options, &mut utils).await;

    match &result {
        Ok(report) => {
            telemetry.record_success(report, started.elapsed());
            output::print_summary(report);
        }
        Err(e) => telemetry.record_failure(e.category(), started.elapsed()),
    }

    if let Some(path) = telemetry_file {
        if let Err(e) = telemetry.write_to(path) {
            tracing::warn!("Could not write telemetry: {e}");
        }
    }

    result.map(|_| ()).map_err(anyhow::Error::from)
}
