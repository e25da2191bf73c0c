//! Build orchestration logic
//!
//! Sequences the precondition check, the build phase, and the optional BOM
//! and publish phases. All process and filesystem access goes through the
//! [`ExecRunner`] and [`FileChecker`] capabilities.
//!
//! Tool installation always aborts the run. A failing `python3 -m build`
//! does not: it is logged and reported as [`BuildOutcome::Failed`] so the
//! BOM and publish phases still get their chance.

use crate::config::defaults::{LEGACY_DESCRIPTORS, PROJECT_DESCRIPTOR};
use crate::config::tools::{
    BOM_FILENAME, BOM_TOOL, BUILD_BASE, BUILD_TOOL, DIST_GLOB, PIP_INSTALL_BASE, PUBLISH_TOOL,
    PYTHON,
};
use crate::core::options::PythonBuildOptions;
use crate::error::{ExecError, PythonBuildError, StepError};
use crate::infra::{ExecRunner, FileChecker};

/// Installer invocation shared by every phase
///
/// The base is immutable; each phase derives its own argument list so an
/// install command only ever names one tool.
#[derive(Debug, Clone, Copy)]
pub struct InstallCommand {
    base: &'static [&'static str],
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self {
            base: PIP_INSTALL_BASE,
        }
    }
}

impl InstallCommand {
    /// Arguments installing exactly `tool`
    pub fn args_for(&self, tool: &str) -> Vec<String> {
        self.base
            .iter()
            .map(|s| (*s).to_string())
            .chain(std::iter::once(tool.to_string()))
            .collect()
    }

    /// Install `tool` through the interpreter
    async fn install<R: ExecRunner>(&self, runner: &mut R, tool: &str) -> Result<(), StepError> {
        runner
            .run_executable(PYTHON, &self.args_for(tool))
            .await
            .map_err(|source| StepError::Install {
                tool: tool.to_string(),
                source,
            })
    }
}

/// States the run passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreconditionChecked,
    Built,
    BomCreated,
    Published,
    Done,
}

/// Result of the build phase
#[derive(Debug)]
pub enum BuildOutcome {
    /// `python3 -m build` ran and succeeded
    Built,
    /// No legacy descriptor, so the build tool was not invoked
    Skipped,
    /// The build ran and failed; the run continued
    Failed(ExecError),
}

impl BuildOutcome {
    /// Short label for summaries and telemetry
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Skipped => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

/// What a successful run did
#[derive(Debug)]
pub struct RunReport {
    /// States reached, in order
    pub stages: Vec<Stage>,
    pub build: BuildOutcome,
    pub bom_created: bool,
    pub published: bool,
}

/// Run the whole step against `utils`
pub async fn run_python_build<U>(
    options: &PythonBuildOptions,
    utils: &mut U,
) -> Result<RunReport, PythonBuildError>
where
    U: ExecRunner + FileChecker,
{
    let install = InstallCommand::default();
    let mut stages = Vec::with_capacity(5);

    check_project_descriptor(&*utils)?;
    stages.push(Stage::PreconditionChecked);

    let build = build_execute(options, utils, install)
        .await
        .map_err(PythonBuildError::Build)?;
    stages.push(Stage::Built);

    let mut bom_created = false;
    if options.create_bom {
        run_bom_creation(utils, install)
            .await
            .map_err(PythonBuildError::Bom)?;
        bom_created = true;
        stages.push(Stage::BomCreated);
    }

    let mut published = false;
    if options.publish {
        publish_with_twine(options, utils, install)
            .await
            .map_err(PythonBuildError::Publish)?;
        published = true;
        stages.push(Stage::Published);
    }

    stages.push(Stage::Done);
    Ok(RunReport {
        stages,
        build,
        bom_created,
        published,
    })
}

/// Fail unless the project descriptor exists
pub fn check_project_descriptor<F: FileChecker>(files: &F) -> Result<(), PythonBuildError> {
    let exists = files
        .file_exists(PROJECT_DESCRIPTOR)
        .map_err(|source| PythonBuildError::DescriptorCheck {
            file: PROJECT_DESCRIPTOR.to_string(),
            source,
        })?;
    if !exists {
        return Err(PythonBuildError::MissingDescriptor {
            file: PROJECT_DESCRIPTOR.to_string(),
        });
    }
    Ok(())
}

fn has_legacy_descriptor<F: FileChecker>(files: &F) -> bool {
    LEGACY_DESCRIPTORS
        .iter()
        .any(|name| match files.file_exists(name) {
            Ok(exists) => exists,
            Err(e) => {
                tracing::debug!("Could not check for {name}, treating as absent: {e}");
                false
            }
        })
}

async fn build_execute<U>(
    options: &PythonBuildOptions,
    utils: &mut U,
    install: InstallCommand,
) -> Result<BuildOutcome, StepError>
where
    U: ExecRunner + FileChecker,
{
    install.install(utils, BUILD_TOOL).await?;

    if !has_legacy_descriptor(&*utils) {
        tracing::info!("No setup.py or setup.cfg found, skipping python build");
        return Ok(BuildOutcome::Skipped);
    }

    let mut flags: Vec<String> = BUILD_BASE.iter().map(|s| (*s).to_string()).collect();
    flags.extend(options.build_flags.iter().cloned());

    tracing::info!("starting building python project");
    match utils.run_executable(PYTHON, &flags).await {
        Ok(()) => Ok(BuildOutcome::Built),
        Err(e) => {
            tracing::error!("building python project failed: {e}");
            Ok(BuildOutcome::Failed(e))
        }
    }
}

async fn run_bom_creation<R: ExecRunner>(
    runner: &mut R,
    install: InstallCommand,
) -> Result<(), StepError> {
    install.install(runner, BOM_TOOL).await?;

    let args = ["--e", "--output", BOM_FILENAME].map(String::from);
    runner
        .run_executable(BOM_TOOL, &args)
        .await
        .map_err(|source| StepError::Execute {
            program: BOM_TOOL.to_string(),
            source,
        })?;
    tracing::info!("BOM written to {BOM_FILENAME}");
    Ok(())
}

async fn publish_with_twine<R: ExecRunner>(
    options: &PythonBuildOptions,
    runner: &mut R,
    install: InstallCommand,
) -> Result<(), StepError> {
    install.install(runner, PUBLISH_TOOL).await?;

    let args = vec![
        "upload".to_string(),
        "--username".to_string(),
        options.target_repository_user.clone(),
        "--password".to_string(),
        options.target_repository_password.clone(),
        "--repository-url".to_string(),
        options.target_repository_url.clone(),
        DIST_GLOB.to_string(),
    ];
    runner
        .run_executable(PUBLISH_TOOL, &args)
        .await
        .map_err(|source| StepError::Execute {
            program: PUBLISH_TOOL.to_string(),
            source,
        })
}
