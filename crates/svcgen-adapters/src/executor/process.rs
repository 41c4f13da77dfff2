//! Production executor using `std::process::Command`.

use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use svcgen_core::{
    application::{
        ApplicationError,
        ports::{CommandExecutor, ExitOutcome},
    },
    domain::CommandSpec,
    error::ScaffoldResult,
};

/// Runs commands as child processes with inherited stdio.
///
/// On Windows the command goes through `cmd /C`, since `npm` and `nest`
/// are installed as `.cmd` shims that `CreateProcess` does not resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &CommandSpec) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&command.program);
            cmd
        } else {
            Command::new(&command.program)
        };
        cmd.args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl CommandExecutor for ProcessExecutor {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &CommandSpec) -> ScaffoldResult<ExitOutcome> {
        // A missing cwd also spawns as NotFound; report the directory instead.
        if !command.cwd.is_dir() {
            return Err(ApplicationError::CommandSpawnFailed {
                command: command.to_string(),
                reason: format!(
                    "working directory {} does not exist",
                    command.cwd.display()
                ),
            }
            .into());
        }

        let status = Self::build(command)
            .status()
            .map_err(|e| map_spawn_error(command, e))?;

        debug!(code = ?status.code(), success = status.success(), "Command exited");
        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}

fn map_spawn_error(command: &CommandSpec, e: io::Error) -> svcgen_core::error::ScaffoldError {
    let reason = if e.kind() == io::ErrorKind::NotFound {
        format!("'{}' not found ({e})", command.program)
    } else {
        e.to_string()
    };
    ApplicationError::CommandSpawnFailed {
        command: command.to_string(),
        reason,
    }
    .into()
}
