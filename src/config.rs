//! Configuration file support for dashboard-sync.
//!
//! Settings come from `dashboard-sync.config.yml` (or an explicit
//! `--config` path, YAML or TOML), layered over built-in defaults. CLI flags
//! are applied on top via [`SettingsOverrides`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::freshness::domain::TimeRange;
use crate::freshness::policies::View;
use crate::shared::error::SyncError;
use crate::shared::security::validate_config_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dashboard-sync.config.yml";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PUSH_URL: &str = "ws://localhost:5000/ws";

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
const DEFAULT_FEED_INTERVAL_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub push_url: Option<String>,
    pub view: Option<String>,
    pub time_range: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub feed_interval_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub push_enabled: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub push_url: String,
    pub view: View,
    pub time_range: TimeRange,
    pub refresh_interval: Duration,
    pub feed_interval: Duration,
    pub request_timeout: Duration,
    pub push_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            push_url: DEFAULT_PUSH_URL.to_string(),
            view: View::default(),
            time_range: TimeRange::default(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            feed_interval: Duration::from_secs(DEFAULT_FEED_INTERVAL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            push_enabled: true,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub api_base_url: Option<String>,
    pub view: Option<View>,
    pub time_range: Option<TimeRange>,
    pub refresh_interval_secs: Option<u64>,
    pub disable_push: bool,
}

impl Settings {
    /// Applies a parsed config file over the defaults.
    pub fn from_config(config: &ConfigFile, path: &Path) -> Result<Self> {
        let invalid = |reason: String, hint: &str| SyncError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
            hint: hint.to_string(),
        };
        let mut settings = Settings::default();

        if let Some(url) = &config.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(url) = &config.push_url {
            settings.push_url = url.clone();
        }
        if let Some(view) = &config.view {
            settings.view = view
                .parse()
                .map_err(|e: String| invalid(e, "Use one of: analytics, shipping, overview"))?;
        }
        if let Some(range) = &config.time_range {
            settings.time_range = range
                .parse()
                .map_err(|e: String| invalid(e, "Use one of: 7d, 30d, 90d, 1y"))?;
        }
        if let Some(secs) = config.refresh_interval_secs {
            settings.refresh_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = config.feed_interval_secs {
            settings.feed_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = config.request_timeout_secs {
            settings.request_timeout = Duration::from_secs(secs);
        }
        if let Some(enabled) = config.push_enabled {
            settings.push_enabled = enabled;
        }

        settings
            .validate()
            .map_err(|reason| invalid(reason, "Fix the value in the config file or override it with a CLI flag"))?;
        Ok(settings)
    }

    /// Applies CLI overrides and re-validates.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Result<Self> {
        if let Some(url) = &overrides.api_base_url {
            self.api_base_url = url.clone();
        }
        if let Some(view) = overrides.view {
            self.view = view;
        }
        if let Some(range) = overrides.time_range {
            self.time_range = range;
        }
        if let Some(secs) = overrides.refresh_interval_secs {
            self.refresh_interval = Duration::from_secs(secs);
        }
        if overrides.disable_push {
            self.push_enabled = false;
        }

        self.validate().map_err(SyncError::validation)?;
        Ok(self)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            ));
        }
        if !(self.push_url.starts_with("ws://") || self.push_url.starts_with("wss://")) {
            return Err(format!(
                "push_url must start with ws:// or wss://, got '{}'",
                self.push_url
            ));
        }
        for (name, value) in [
            ("refresh_interval_secs", self.refresh_interval),
            ("feed_interval_secs", self.feed_interval),
            ("request_timeout_secs", self.request_timeout),
        ] {
            if value.is_zero() {
                return Err(format!("{} must be greater than zero", name));
            }
        }
        Ok(())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_config_file(path)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let config: ConfigFile = if is_toml {
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
                path.display()
            )
        })?
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    warn_unknown_fields(&config, path);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(ConfigFile, PathBuf)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if std::fs::symlink_metadata(&config_path).is_err() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config, config_path)))
}

/// Resolves settings: explicit `--config` path, else a discovered file in
/// `dir`, else defaults; CLI overrides last.
pub fn load_settings(
    explicit: Option<&Path>,
    dir: &Path,
    overrides: &SettingsOverrides,
) -> Result<Settings> {
    let settings = match explicit {
        Some(path) => {
            let config = load_config_from_path(path)?;
            Settings::from_config(&config, path)?
        }
        None => match discover_config(dir)? {
            Some((config, path)) => {
                tracing::debug!(path = %path.display(), "using discovered config file");
                Settings::from_config(&config, &path)?
            }
            None => Settings::default(),
        },
    };
    settings.with_overrides(overrides)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile, path: &Path) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(
            path = %path.display(),
            "Unknown config field '{}' will be ignored",
            key
        );
    }
}
