//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a NestJS service module",
    long_about = "svcgen installs the NestJS CLI if needed, creates a project named \
                  after the service, generates its module, service and controller, \
                  replaces the controller with a minimal GET route and removes the \
                  generated test stubs.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen orders\n\
        \x20 svcgen orderService --dry-run\n\
        \x20 svcgen payments -vv --config ./svcgen.toml\n\
        \x20 svcgen --show-config",
)]
pub struct Cli {
    /// Logging and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to scaffold.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for the scaffolding run.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Service name. Names the project directory, the generated module,
    /// service and controller, and the controller's route.
    ///
    /// Optional at the parser level so a missing name is reported by svcgen
    /// itself (exit code 1) rather than by clap.
    #[arg(value_name = "SERVICE_NAME", help = "Name of the service to create")]
    pub name: Option<String>,

    /// Print the resolved commands without running anything.
    #[arg(long = "dry-run", help = "Show what would run without running it")]
    pub dry_run: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(
        long = "show-config",
        conflicts_with_all = ["name", "dry_run"],
        help = "Print the effective configuration and exit"
    )]
    pub show_config: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
