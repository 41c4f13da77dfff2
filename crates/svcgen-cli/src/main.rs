//! # svcgen
//!
//! Scaffolds a NestJS service: project, module, service and controller in
//! one command.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Validate the service name. Nothing else happens if it is missing.
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`].
//! 6. Run the scaffold (or print the configuration).
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! |  1   | Missing service name, failed command, internal |
//! |  2   | Invalid input or existing project directory    |
//! |  4   | Configuration error                            |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use svcgen_core::domain::ServiceName;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    match run(&cli) {
        Ok(()) => {
            info!("svcgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &cli.global),
    }
}

/// Steps 3 to 6 of the startup sequence.
#[instrument(skip_all)]
fn run(cli: &Cli) -> CliResult<()> {
    // ── 3. Service name ───────────────────────────────────────────────────
    let name = if cli.scaffold.show_config {
        None
    } else {
        let raw = cli.scaffold.name.clone().unwrap_or_default();
        Some(ServiceName::parse(raw).map_err(svcgen_core::error::ScaffoldError::from)?)
    };

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::load(cli.global.config.as_ref())
        .with_cli_context(|| "failed to load configuration")?;

    // ── 5. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 6. Dispatch ───────────────────────────────────────────────────────
    match name {
        None => commands::show_config::execute(&config, &output),
        Some(name) => commands::scaffold::execute(name, &cli.scaffold, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let msg = if !global.no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
