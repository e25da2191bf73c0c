//! Core business logic module
//!
//! Orchestration and configuration for the build step. Processes and the
//! filesystem are reached only through the capabilities in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`options`] - Step options and their loading
//! - [`python_build`] - Build, BOM and publish orchestration
//! - [`telemetry`] - Per-run telemetry record

pub mod options;
pub mod python_build;
pub mod telemetry;
