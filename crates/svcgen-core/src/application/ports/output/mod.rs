//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{CommandSpec, Step};
use crate::error::ScaffoldResult;

/// How an external command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub const fn success() -> Self {
        Self { code: Some(0) }
    }

    pub const fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `svcgen_adapters::executor::ProcessExecutor` (production)
/// - `svcgen_adapters::executor::RecordingExecutor` (testing)
///
/// ## Design Notes
///
/// - Blocks until the process exits; output is not captured
/// - `command.cwd` is applied per call, the process-wide working directory
///   is never changed
/// - A non-zero exit is an `Ok` outcome; `Err` means the program could not
///   be started
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor: Send + Sync {
    fn run(&self, command: &CommandSpec) -> ScaffoldResult<ExitOutcome>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ScaffoldResult<()>;

    /// Every file below `root`, recursively, as paths relative to `root`.
    fn list_files(&self, root: &Path) -> ScaffoldResult<Vec<PathBuf>>;
}

/// Port for user-facing progress messages.
pub trait ProgressSink: Send + Sync {
    fn step_started(&self, step: Step, message: &str);
}

/// Progress sink that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn step_started(&self, _step: Step, _message: &str) {}
}
