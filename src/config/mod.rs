//! Configuration constants
//!
//! File names, tool names and fixed command-line fragments.

pub mod defaults;
pub mod tools;
