//! Core domain layer for svcgen.
//!
//! This module contains pure logic with ZERO I/O. Running commands and
//! touching the filesystem are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: building a plan or rendering the controller never touches
//!   the filesystem or spawns a process
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod controller;
pub mod error;
pub mod plan;
pub mod service_name;
pub mod stub_pattern;

pub use controller::{controller_path, render_controller};
pub use error::{DomainError, ErrorCategory};
pub use plan::{CommandSpec, ScaffoldPlan, Step, Toolchain};
pub use service_name::{ServiceName, capitalize_first};
pub use stub_pattern::{CleanupPolicy, TestStubPattern};
