//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen-core::application::ports`.
//! It contains all process spawning and filesystem I/O.

pub mod executor;
pub mod filesystem;

// Re-export commonly used adapters
pub use executor::{ProcessExecutor, RecordingExecutor};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
