//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged at the call-site, in `commands::generate`)
//! 2. Config file (`--config`, or the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generation, mirrored by `generate` flags.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// The `[defaults]` section: every generation field, all optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub app_name: Option<String>,
    pub package_name: Option<String>,
    pub server_url: Option<String>,
    pub domain: Option<String>,
    pub version_code: Option<u32>,
    pub version_name: Option<String>,
    pub min_sdk: Option<u32>,
    pub target_sdk: Option<u32>,
    pub compile_sdk: Option<u32>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config_file` (the `--config` flag) or the
    /// default location.  A missing file is not an error — built-in defaults
    /// apply; a file that exists but does not parse is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("parsing config file '{}'", path.display()))
    }

    /// Serialise to the given path, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self).context("serialising configuration")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("creating config directory '{}'", parent.display())
                })?;
            }
        }

        std::fs::write(path, text)
            .with_context(|| format!("writing config file '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.droidwrap.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "droidwrap", "droidwrap")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".droidwrap.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_unset() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.app_name.is_none());
        assert!(cfg.defaults.server_url.is_none());
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let missing = PathBuf::from("/nonexistent/droidwrap-test/config.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert!(cfg.defaults.package_name.is_none());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [defaults]
            server_url = "https://example.com"
            min_sdk = 26
            "#,
        )
        .unwrap();

        assert_eq!(cfg.defaults.server_url.as_deref(), Some("https://example.com"));
        assert_eq!(cfg.defaults.min_sdk, Some(26));
        assert!(cfg.defaults.app_name.is_none());
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let mut cfg = AppConfig::default();
        cfg.defaults.app_name = Some("My Clinic".into());
        cfg.defaults.version_code = Some(7);
        cfg.save(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.defaults.app_name.as_deref(), Some("My Clinic"));
        assert_eq!(loaded.defaults.version_code, Some(7));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
