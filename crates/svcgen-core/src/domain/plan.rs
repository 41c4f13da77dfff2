//! The scaffolding plan: every external command and path, resolved up front.
//!
//! Building a [`ScaffoldPlan`] performs no I/O. The application layer walks
//! the plan in order and hands each [`CommandSpec`] to a `CommandExecutor`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    controller::{controller_path, render_controller},
    error::DomainError,
    service_name::ServiceName,
    stub_pattern::CleanupPolicy,
};

// ── Toolchain ────────────────────────────────────────────────────────────────

/// External programs and flags the pipeline delegates to.
///
/// The defaults are the stock NestJS setup: `npm` for the global install,
/// `nest` for generation, npm as the project's package manager, and no git
/// repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    /// Node package manager used for the global CLI install.
    pub npm: String,
    /// The NestJS CLI executable.
    pub nest: String,
    /// Package providing `nest`.
    pub cli_package: String,
    /// Passed to `nest new -p`.
    pub package_manager: String,
    /// Adds `--skip-git` to `nest new`.
    pub skip_git: bool,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npm: "npm".into(),
            nest: "nest".into(),
            cli_package: "@nestjs/cli".into(),
            package_manager: "npm".into(),
            skip_git: true,
        }
    }
}

impl Toolchain {
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("npm", &self.npm),
            ("nest", &self.nest),
            ("cli_package", &self.cli_package),
            ("package_manager", &self.package_manager),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidToolchain {
                    field,
                    reason: "value cannot be empty".into(),
                });
            }
        }
        Ok(())
    }
}

// ── CommandSpec ──────────────────────────────────────────────────────────────

/// One external invocation: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Step ─────────────────────────────────────────────────────────────────────

/// A stage of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    EnsureTool,
    CreateProject,
    GenerateModule,
    GenerateService,
    GenerateController,
    WriteController,
    RemoveTestStubs,
}

impl Step {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnsureTool => "ensure-tool",
            Self::CreateProject => "create-project",
            Self::GenerateModule => "generate-module",
            Self::GenerateService => "generate-service",
            Self::GenerateController => "generate-controller",
            Self::WriteController => "write-controller",
            Self::RemoveTestStubs => "remove-test-stubs",
        }
    }

    /// Console message announcing the step, if it has one.
    ///
    /// The three generate steps share the message emitted before the first.
    pub fn progress_message(&self, name: &ServiceName) -> Option<String> {
        match self {
            Self::EnsureTool => Some("Installing NestJS CLI...".into()),
            Self::CreateProject => Some(format!("Creating NestJS project {name}...")),
            Self::GenerateModule => Some(format!(
                "Generating module, service, and controller for {name}..."
            )),
            Self::RemoveTestStubs => Some("Removing test files...".into()),
            Self::GenerateService | Self::GenerateController | Self::WriteController => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ScaffoldPlan ─────────────────────────────────────────────────────────────

/// Everything one run will execute, fully resolved for a service name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub service: ServiceName,
    /// Directory the run was started from; `nest new` runs here.
    pub workdir: PathBuf,
    /// `<workdir>/<service>`; every step after project creation runs here.
    pub project_dir: PathBuf,
    pub check_tool: CommandSpec,
    pub install_tool: CommandSpec,
    pub create_project: CommandSpec,
    pub generate: Vec<(Step, CommandSpec)>,
    /// Controller location relative to `project_dir`.
    pub controller_path: PathBuf,
    pub controller_source: String,
    pub cleanup: CleanupPolicy,
}

impl ScaffoldPlan {
    pub fn new(
        service: &ServiceName,
        toolchain: &Toolchain,
        cleanup: &CleanupPolicy,
        workdir: impl AsRef<Path>,
    ) -> Self {
        let workdir = workdir.as_ref().to_path_buf();
        let project_dir = workdir.join(service.as_str());

        let check_tool = CommandSpec::new(&toolchain.npm, &workdir)
            .arg("list")
            .arg("-g")
            .arg(&toolchain.cli_package);
        let install_tool = CommandSpec::new(&toolchain.npm, &workdir)
            .arg("install")
            .arg("-g")
            .arg(&toolchain.cli_package);

        let mut create_project = CommandSpec::new(&toolchain.nest, &workdir)
            .arg("new")
            .arg(service.as_str())
            .arg("-p")
            .arg(&toolchain.package_manager);
        if toolchain.skip_git {
            create_project = create_project.arg("--skip-git");
        }

        let generate = [
            (Step::GenerateModule, "module"),
            (Step::GenerateService, "service"),
            (Step::GenerateController, "controller"),
        ]
        .into_iter()
        .map(|(step, schematic)| {
            let cmd = CommandSpec::new(&toolchain.nest, &project_dir)
                .arg("generate")
                .arg(schematic)
                .arg(service.as_str());
            (step, cmd)
        })
        .collect();

        Self {
            service: service.clone(),
            workdir,
            project_dir,
            check_tool,
            install_tool,
            create_project,
            generate,
            controller_path: controller_path(service),
            controller_source: render_controller(service),
            cleanup: cleanup.clone(),
        }
    }

    /// Absolute (or workdir-relative) path of the controller file.
    pub fn controller_file(&self) -> PathBuf {
        self.project_dir.join(&self.controller_path)
    }

    /// Human-readable outline of the run, one line per action.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{}  (install with: {} if missing)", self.check_tool, self.install_tool),
            format!("{}  (in {})", self.create_project, self.workdir.display()),
        ];
        for (_, cmd) in &self.generate {
            lines.push(format!("{}  (in {})", cmd, cmd.cwd.display()));
        }
        lines.push(format!("write {}", self.controller_file().display()));
        if self.cleanup.enabled {
            lines.push(format!(
                "remove {} under {}",
                self.cleanup.pattern,
                self.project_dir.display()
            ));
        }
        lines
    }
}
