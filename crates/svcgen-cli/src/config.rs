//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resolved
//! [`Toolchain`] and [`CleanupPolicy`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`SVCGEN_TOOLCHAIN__NEST=...`, `__` separates
//!    sections from keys)
//! 2. Config file (`--config FILE`, otherwise [`AppConfig::config_path`] if
//!    it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use svcgen_core::domain::{CleanupPolicy, TestStubPattern, Toolchain};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "SVCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External programs and flags.
    pub toolchain: Toolchain,
    /// Test-stub removal.
    pub cleanup: CleanupConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    pub enabled: bool,
    pub root: PathBuf,
    pub suffix: String,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        let policy = CleanupPolicy::default();
        Self {
            enabled: policy.enabled,
            root: policy.pattern.root,
            suffix: policy.pattern.suffix,
        }
    }
}

impl From<&CleanupConfig> for CleanupPolicy {
    fn from(cfg: &CleanupConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            pattern: TestStubPattern::new(cfg.root.clone(), cfg.suffix.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".svcgen.toml"))
    }

    pub fn cleanup_policy(&self) -> CleanupPolicy {
        CleanupPolicy::from(&self.cleanup)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serialising configuration")
    }
}
