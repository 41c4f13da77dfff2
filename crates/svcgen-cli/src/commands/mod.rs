//! Command handlers. Each one turns parsed arguments into calls on the core
//! service and renders the outcome.

pub mod scaffold;
pub mod show_config;
