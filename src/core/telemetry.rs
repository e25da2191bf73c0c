//! Step telemetry
//!
//! A flat record filled in by the command wrapper after a run and written
//! as JSON. The orchestrator never reads it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::config::defaults::STEP_NAME;
use crate::core::python_build::RunReport;
use crate::error::{ErrorCategory, FilesystemError};
use crate::infra::filesystem;

/// Telemetry for one step execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryData {
    pub step_name: String,
    pub duration_ms: u64,
    pub success: bool,
    /// `built`, `skipped` or `failed`; absent if the build phase never finished
    pub build_outcome: Option<String>,
    pub bom_created: bool,
    pub published: bool,
    pub error_category: Option<String>,
}

impl Default for TelemetryData {
    fn default() -> Self {
        Self {
            step_name: STEP_NAME.to_string(),
            duration_ms: 0,
            success: false,
            build_outcome: None,
            bom_created: false,
            published: false,
            error_category: None,
        }
    }
}

impl TelemetryData {
    /// Record a completed run
    pub fn record_success(&mut self, report: &RunReport, elapsed: Duration) {
        self.duration_ms = duration_ms(elapsed);
        self.success = true;
        self.build_outcome = Some(report.build.as_str().to_string());
        self.bom_created = report.bom_created;
        self.published = report.published;
        self.error_category = None;
    }

    /// Record a failed run
    pub fn record_failure(&mut self, category: ErrorCategory, elapsed: Duration) {
        self.duration_ms = duration_ms(elapsed);
        self.success = false;
        self.error_category = Some(category.as_str().to_string());
    }

    /// Write the record as pretty JSON
    pub fn write_to(&self, path: &Path) -> Result<(), FilesystemError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| FilesystemError::WriteFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        filesystem::write_file(path, &content)
    }
}

fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
