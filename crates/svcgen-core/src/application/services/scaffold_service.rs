//! Scaffold Service - main application orchestrator.
//!
//! This service runs the whole pipeline for one service name:
//! 1. Ensure the generator CLI is installed
//! 2. Create the project
//! 3. Generate module, service and controller
//! 4. Overwrite the generated controller
//! 5. Remove generated test stubs (best-effort)
//!
//! Every failure before step 5 aborts the run. Nothing is retried and
//! nothing is rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandExecutor, Filesystem, ProgressSink, SilentProgress},
    },
    domain::{CleanupPolicy, CommandSpec, ScaffoldPlan, ServiceName, Step, Toolchain},
    error::ScaffoldResult,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub service: ServiceName,
    pub project_dir: PathBuf,
    /// Controller file, absolute or relative to the invocation directory.
    pub controller_path: PathBuf,
    /// `true` when the generator CLI had to be installed.
    pub tool_installed: bool,
    /// Every command line that ran, in order.
    pub commands: Vec<String>,
    /// Stubs removed, relative to the project directory.
    pub removed_stubs: Vec<PathBuf>,
    /// Stubs that matched but could not be removed.
    pub failed_removals: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn new(plan: &ScaffoldPlan) -> Self {
        Self {
            service: plan.service.clone(),
            project_dir: plan.project_dir.clone(),
            controller_path: plan.controller_file(),
            tool_installed: false,
            commands: Vec::new(),
            removed_stubs: Vec::new(),
            failed_removals: Vec::new(),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    executor: Box<dyn CommandExecutor>,
    filesystem: Box<dyn Filesystem>,
    progress: Box<dyn ProgressSink>,
    toolchain: Toolchain,
    cleanup: CleanupPolicy,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Progress messages are discarded and test-stub cleanup uses the
    /// default pattern until overridden with [`Self::with_progress`] and
    /// [`Self::with_cleanup`].
    pub fn new(
        executor: Box<dyn CommandExecutor>,
        filesystem: Box<dyn Filesystem>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            executor,
            filesystem,
            progress: Box::new(SilentProgress),
            toolchain,
            cleanup: CleanupPolicy::default(),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_cleanup(mut self, cleanup: CleanupPolicy) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Resolve the plan for `name` without running anything.
    pub fn plan(
        &self,
        name: &ServiceName,
        workdir: impl AsRef<Path>,
    ) -> ScaffoldResult<ScaffoldPlan> {
        self.toolchain.validate()?;
        Ok(ScaffoldPlan::new(name, &self.toolchain, &self.cleanup, workdir))
    }

    /// Scaffold a new service project under `workdir`.
    #[instrument(
        skip_all,
        fields(service = %name, workdir = %workdir.as_ref().display())
    )]
    pub fn scaffold(
        &self,
        name: &ServiceName,
        workdir: impl AsRef<Path>,
    ) -> ScaffoldResult<ScaffoldReport> {
        let plan = self.plan(name, workdir)?;
        let mut report = ScaffoldReport::new(&plan);

        if self.filesystem.exists(&plan.project_dir) {
            return Err(ApplicationError::ProjectExists {
                path: plan.project_dir.clone(),
            }
            .into());
        }

        // 1. Generator CLI
        self.announce(Step::EnsureTool, &plan.service);
        self.ensure_tool(&plan, &mut report)?;

        // 2. Project skeleton
        self.announce(Step::CreateProject, &plan.service);
        self.run_step(Step::CreateProject, &plan.create_project, &mut report)?;

        // 3. Module, service, controller
        for (step, command) in &plan.generate {
            self.announce(*step, &plan.service);
            self.run_step(*step, command, &mut report)?;
        }

        // 4. Controller template
        self.announce(Step::WriteController, &plan.service);
        self.write_controller(&plan)?;

        // 5. Test stubs
        if plan.cleanup.enabled {
            self.announce(Step::RemoveTestStubs, &plan.service);
            self.remove_test_stubs(&plan, &mut report);
        } else {
            debug!("Test stub cleanup disabled");
        }

        info!(
            commands = report.commands.len(),
            removed = report.removed_stubs.len(),
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn announce(&self, step: Step, name: &ServiceName) {
        debug!(step = %step, "Step started");
        if let Some(message) = step.progress_message(name) {
            self.progress.step_started(step, &message);
        }
    }

    /// Install the generator CLI if it is not already present.
    fn ensure_tool(&self, plan: &ScaffoldPlan, report: &mut ScaffoldReport) -> ScaffoldResult<()> {
        report.commands.push(plan.check_tool.to_string());
        if self.executor.run(&plan.check_tool)?.is_success() {
            info!(package = %self.toolchain.cli_package, "Generator CLI already installed");
            return Ok(());
        }

        info!(package = %self.toolchain.cli_package, "Generator CLI missing, installing");
        report.commands.push(plan.install_tool.to_string());
        let outcome = self.executor.run(&plan.install_tool)?;
        if !outcome.is_success() {
            return Err(ApplicationError::ToolInstallFailed {
                package: self.toolchain.cli_package.clone(),
                code: outcome.code,
            }
            .into());
        }
        report.tool_installed = true;
        Ok(())
    }

    fn run_step(
        &self,
        step: Step,
        command: &CommandSpec,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<()> {
        debug!(command = %command, cwd = %command.cwd.display(), "Running command");
        report.commands.push(command.to_string());

        let outcome = self.executor.run(command)?;
        if !outcome.is_success() {
            return Err(ApplicationError::CommandFailed {
                step,
                command: command.to_string(),
                code: outcome.code,
            }
            .into());
        }
        Ok(())
    }

    fn write_controller(&self, plan: &ScaffoldPlan) -> ScaffoldResult<()> {
        let path = plan.controller_file();
        if let Some(parent) = path.parent() {
            if !self.filesystem.exists(parent) {
                warn!(path = %parent.display(), "Generated controller directory missing, creating it");
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(&path, &plan.controller_source)?;
        info!(path = %path.display(), "Controller written");
        Ok(())
    }

    /// Best-effort: failures are logged and recorded, never returned.
    fn remove_test_stubs(&self, plan: &ScaffoldPlan, report: &mut ScaffoldReport) {
        let pattern = &plan.cleanup.pattern;
        let root = plan.project_dir.join(&pattern.root);

        if !self.filesystem.exists(&root) {
            warn!(path = %root.display(), "Stub root missing, nothing to remove");
            return;
        }

        let files = match self.filesystem.list_files(&root) {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, path = %root.display(), "Could not list test stubs");
                return;
            }
        };

        for file in files {
            let relative = pattern.root.join(&file);
            if !pattern.matches(&relative) {
                continue;
            }
            match self.filesystem.remove_file(&plan.project_dir.join(&relative)) {
                Ok(()) => {
                    debug!(path = %relative.display(), "Removed test stub");
                    report.removed_stubs.push(relative);
                }
                Err(e) => {
                    warn!(error = %e, path = %relative.display(), "Could not remove test stub");
                    report.failed_removals.push(relative);
                }
            }
        }
    }
}
