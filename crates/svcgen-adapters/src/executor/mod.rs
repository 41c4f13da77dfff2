//! Command executor adapters.

mod process;
mod recording;

pub use process::ProcessExecutor;
pub use recording::RecordingExecutor;
