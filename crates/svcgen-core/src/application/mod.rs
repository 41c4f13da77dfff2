//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer walks the plan built by `crate::domain` and drives
//! the ports; it decides nothing about command lines or file content itself.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandExecutor, ExitOutcome, Filesystem, ProgressSink, SilentProgress};

pub use error::ApplicationError;
