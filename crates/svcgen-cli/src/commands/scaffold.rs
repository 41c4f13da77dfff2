//! The default command: scaffold a NestJS service.
//!
//! Responsibility: wire the process/filesystem adapters into the core
//! scaffold service, run it, and display results. No business logic lives
//! here.

use std::path::Path;

use tracing::{info, instrument};

use svcgen_adapters::{LocalFilesystem, ProcessExecutor};
use svcgen_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::ServiceName,
};

use crate::{
    cli::{OutputFormat, ScaffoldArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a scaffolding run for `name` in the current directory.
///
/// Dispatch sequence:
/// 1. Build the service from config
/// 2. Early-exit with the plan if `--dry-run`
/// 3. Run the pipeline
/// 4. Report (success line, or the JSON report)
#[instrument(skip_all, fields(service = %name))]
pub fn execute(
    name: ServiceName,
    args: &ScaffoldArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workdir = std::env::current_dir()
        .with_cli_context(|| "cannot determine the current directory")?;

    // 1. Adapters
    let service = ScaffoldService::new(
        Box::new(ProcessExecutor::new()),
        Box::new(LocalFilesystem::new()),
        config.toolchain.clone(),
    )
    .with_cleanup(config.cleanup_policy())
    .with_progress(Box::new(output.clone()));

    // 2. Dry run: describe but do not execute.
    if args.dry_run {
        return show_plan(&service, &name, &workdir, &output);
    }

    // 3. Scaffold
    info!(path = %workdir.display(), "Scaffold started");
    let report = service.scaffold(&name, &workdir)?;
    info!(
        removed = report.removed_stubs.len(),
        failed = report.failed_removals.len(),
        "Scaffold completed"
    );

    // 4. Report
    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    warn_failed_removals(&report, &output)?;
    let done = format!("Service {name} created successfully");
    if output.format() == OutputFormat::Plain {
        output.print(&done)?;
    } else {
        output.success(&done)?;
    }
    Ok(())
}

fn show_plan(
    service: &ScaffoldService,
    name: &ServiceName,
    workdir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(name, workdir)?;

    if output.format() == OutputFormat::Json {
        output.json(&plan.describe())?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{name}' at {}",
        plan.project_dir.display()
    ))?;
    for line in plan.describe() {
        output.print(&format!("  {line}"))?;
    }
    Ok(())
}

fn warn_failed_removals(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if report.failed_removals.is_empty() {
        return Ok(());
    }
    output.info("Some test files could not be removed:")?;
    for path in &report.failed_removals {
        output.print(&format!("  {}", path.display()))?;
    }
    Ok(())
}
