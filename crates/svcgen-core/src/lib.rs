//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! service scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │      Runs the scaffolding pipeline      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (CommandExecutor, Filesystem, Progress) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     svcgen-adapters (Infrastructure)    │
//! │ (ProcessExecutor, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceName, ScaffoldPlan, controller) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcgen_core::{
//!     application::ScaffoldService,
//!     domain::{ServiceName, Toolchain},
//! };
//!
//! let name = ServiceName::parse("orders").unwrap();
//!
//! // Adapters come from `svcgen-adapters`.
//! let service = ScaffoldService::new(executor, filesystem, Toolchain::default());
//! let report = service.scaffold(&name, ".").unwrap();
//! println!("{}", report.controller_path.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{CommandExecutor, ExitOutcome, Filesystem, ProgressSink, SilentProgress},
    };
    pub use crate::domain::{
        CleanupPolicy, CommandSpec, ScaffoldPlan, ServiceName, Step, TestStubPattern, Toolchain,
        controller_path, render_controller,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}
