//! pybuild - Build, BOM and publish wrapper for Python packages
//!
//! Drives `python3 -m build`, `cyclonedx-bom` and `twine` in a fixed
//! sequence, gated by configuration flags and marker files.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Orchestration logic (no direct I/O)
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
