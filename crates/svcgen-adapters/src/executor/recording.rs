//! Recording executor for testing.

use std::sync::{Arc, Mutex};

use svcgen_core::{
    application::{
        ApplicationError,
        ports::{CommandExecutor, ExitOutcome},
    },
    domain::CommandSpec,
    error::ScaffoldResult,
};

/// Records every command and answers with scripted outcomes.
///
/// Commands succeed unless a failure was registered for a prefix of their
/// command line with [`RecordingExecutor::fail_on`]. Clones share state, so
/// a test can keep one handle and give the other to the service.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<CommandSpec>,
    failures: Vec<(String, ExitOutcome)>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands whose line starts with `prefix` exit with `code`.
    pub fn fail_on(self, prefix: impl Into<String>, code: i32) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner
                .failures
                .push((prefix.into(), ExitOutcome::failure(code)));
        }
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// Command lines run so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn run(&self, command: &CommandSpec) -> ScaffoldResult<ExitOutcome> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.calls.push(command.clone());

        let line = command.to_string();
        let outcome = inner
            .failures
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map_or(ExitOutcome::success(), |(_, outcome)| *outcome);
        Ok(outcome)
    }
}
