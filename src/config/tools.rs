//! External tool names and fixed arguments

/// Python interpreter used for pip and the build module
pub const PYTHON: &str = "python3";

/// Installer invocation every install command starts from
pub const PIP_INSTALL_BASE: &[&str] = &["-m", "pip", "install", "--upgrade"];

/// PyPA build frontend
pub const BUILD_TOOL: &str = "build";

/// Arguments that run the build frontend through the interpreter
pub const BUILD_BASE: &[&str] = &["-m", "build"];

/// CycloneDX BOM generator package and executable
pub const BOM_TOOL: &str = "cyclonedx-bom";

/// BOM output file written into the project directory
pub const BOM_FILENAME: &str = "bom.xml";

/// Upload tool package and executable
pub const PUBLISH_TOOL: &str = "twine";

/// Source distributions uploaded by the publish phase
pub const DIST_GLOB: &str = "dist/*.tar.gz";
