//! The service name value object.
//!
//! A `ServiceName` names the generated project directory, the NestJS
//! module/service/controller triad, and the controller's route. The only
//! derived value is [`ServiceName::capitalized`], used for the class name.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated, non-empty service identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validate a raw command-line argument.
    ///
    /// The value is not trimmed. It becomes a directory name, a path
    /// component of the controller file and a command-line argument to the
    /// generator, so only ASCII letters, digits, `_` and `-` are allowed and
    /// it may not start with `-` (it would be read as a flag).
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(DomainError::MissingServiceName);
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid(&raw, "name cannot contain path separators"));
        }
        if raw.starts_with('.') {
            return Err(invalid(&raw, "name cannot start with '.'"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid(&raw, "name cannot contain whitespace"));
        }
        if raw.starts_with('-') {
            return Err(invalid(&raw, "name cannot start with '-'"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(invalid(
                &raw,
                &format!("'{bad}' is not allowed; use letters, digits, '_' or '-'"),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased (`orderService` →
    /// `OrderService`).
    pub fn capitalized(&self) -> String {
        capitalize_first(&self.0)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-case the first character only; the rest of the string is kept as is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidServiceName {
        name: name.into(),
        reason: reason.into(),
    }
}
