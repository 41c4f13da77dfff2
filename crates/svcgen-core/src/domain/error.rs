// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Please provide a service name")]
    MissingServiceName,

    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Invalid toolchain setting '{field}': {reason}")]
    InvalidToolchain { field: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingServiceName => vec![
                "Pass the service name as the first argument".into(),
                "Example: svcgen orders".into(),
            ],
            Self::InvalidServiceName { name, reason } => vec![
                format!("Service name '{}' is invalid: {}", name, reason),
                "Use a single identifier such as 'orders' or 'orderService'".into(),
            ],
            Self::InvalidToolchain { field, .. } => vec![
                format!("Check the 'toolchain.{}' setting in your config", field),
                "Remove the key to fall back to the built-in default".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingServiceName => ErrorCategory::MissingInput,
            Self::InvalidServiceName { .. } => ErrorCategory::Validation,
            Self::InvalidToolchain { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MissingInput,
    Validation,
    Configuration,
}
