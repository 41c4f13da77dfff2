//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `svcgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CommandExecutor`: External program invocation
//!   - `Filesystem`: File operations
//!   - `ProgressSink`: Console progress messages
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandExecutor, ExitOutcome, Filesystem, ProgressSink, SilentProgress};

#[cfg(test)]
pub use output::{MockCommandExecutor, MockFilesystem};
