//! Application layer errors.
//!
//! These errors represent failures while running the pipeline, not invalid
//! input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Step;
use crate::error::ErrorCategory;

/// Errors that occur while orchestrating the scaffolding pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The generator CLI was missing and installing it failed.
    #[error("Failed to install {package} ({})", describe_code(.code))]
    ToolInstallFailed { package: String, code: Option<i32> },

    /// An external command exited unsuccessfully.
    #[error("Step '{step}' failed: `{command}` ({})", describe_code(.code))]
    CommandFailed {
        step: Step,
        command: String,
        code: Option<i32>,
    },

    /// An external command could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    /// Project directory already present before `nest new` ran.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter state is unavailable")]
    LockPoisoned,
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolInstallFailed { package, .. } => vec![
                format!("Install it manually: npm install -g {}", package),
                "Check your network connection and npm registry settings".into(),
                "Global installs may need elevated permissions".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command failed: {}", command),
                "Check the command output above for details".into(),
                "The project directory may be partially scaffolded; remove it before retrying"
                    .into(),
            ],
            Self::CommandSpawnFailed { command, .. } => vec![
                format!("Could not start: {}", command),
                "Ensure the program is installed and in your PATH".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different service name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolInstallFailed { .. }
            | Self::CommandFailed { .. }
            | Self::CommandSpawnFailed { .. } => ErrorCategory::ExternalTool,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
