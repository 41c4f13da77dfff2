//! Test-stub matching for the cleanup step.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Files the generator emits as test stubs: `<root>/**/*<suffix>`.
///
/// The glob is read the way a plain POSIX shell expands it: `**` is a single
/// `*`, so only files exactly one directory below `root` match, and neither
/// the directory nor the file may be hidden. `src/app.controller.spec.ts`
/// and `src/a/b/x.spec.ts` are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStubPattern {
    pub root: PathBuf,
    pub suffix: String,
}

impl TestStubPattern {
    pub fn new(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    /// Whether `relative` (a file path relative to the project directory)
    /// is a test stub.
    pub fn matches(&self, relative: &Path) -> bool {
        let Ok(rest) = relative.strip_prefix(&self.root) else {
            return false;
        };

        let mut parts = rest.components();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Component::Normal(dir)), Some(Component::Normal(file)), None) => {
                is_visible(dir)
                    && is_visible(file)
                    && file
                        .to_str()
                        .is_some_and(|n| n.len() > self.suffix.len() && n.ends_with(&self.suffix))
            }
            _ => false,
        }
    }
}

fn is_visible(name: &OsStr) -> bool {
    !name.as_encoded_bytes().starts_with(b".")
}

impl Default for TestStubPattern {
    fn default() -> Self {
        Self::new("src", ".spec.ts")
    }
}

impl std::fmt::Display for TestStubPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/**/*{}", self.root.display(), self.suffix)
    }
}

/// Whether, and what, the cleanup step removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPolicy {
    pub enabled: bool,
    pub pattern: TestStubPattern,
}

impl Default for CleanupPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: TestStubPattern::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(path: &str) -> bool {
        TestStubPattern::default().matches(Path::new(path))
    }

    #[test]
    fn matches_specs_one_level_below_root() {
        assert!(matches("src/orders/orders.service.spec.ts"));
        assert!(matches("src/orders/orders.controller.spec.ts"));
    }

    #[test]
    fn keeps_specs_directly_under_root() {
        assert!(!matches("src/app.controller.spec.ts"));
    }

    #[test]
    fn keeps_specs_deeper_than_one_level() {
        assert!(!matches("src/a/b/deep.spec.ts"));
        assert!(!matches("src/a/b/c/deep.spec.ts"));
    }

    #[test]
    fn hidden_entries_are_not_matched() {
        assert!(!matches("src/.cache/orders.spec.ts"));
        assert!(!matches("src/orders/.orders.spec.ts"));
    }

    #[test]
    fn ignores_files_outside_root() {
        assert!(!matches("test/app.e2e-spec.ts"));
        assert!(!matches("app.controller.spec.ts"));
        assert!(!matches("srcx/app.controller.spec.ts"));
    }

    #[test]
    fn ignores_non_spec_sources() {
        assert!(!matches("src/main.ts"));
        assert!(!matches("src/orders/orders.controller.ts"));
        assert!(!matches("src/orders/orders.spec.ts.bak"));
    }

    #[test]
    fn bare_suffix_is_not_a_stub() {
        assert!(!matches("src/orders/.spec.ts"));
    }

    #[test]
    fn display_reads_like_a_glob() {
        assert_eq!(TestStubPattern::default().to_string(), "src/**/*.spec.ts");
    }
}
