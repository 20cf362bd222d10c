//! Configuration management for careerwatch.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default desktop user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default `Accept` header sent with every request.
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Main application configuration.
///
/// This is loaded from `~/.config/careerwatch/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Static HTTP fetch settings
    pub fetch: FetchConfig,
    /// Headless browser settings for the rendering fallback
    pub browser: BrowserConfig,
    /// Run-level scheduling settings
    pub scanning: ScanningConfig,
    /// URL list and report locations
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `CAREERWATCH_RETRIES`: Override static fetch attempts
    /// - `CAREERWATCH_HEADLESS`: Override browser headless mode (true/false)
    /// - `CAREERWATCH_URL_FILE`: Override the URL list location
    /// - `CAREERWATCH_REPORT_PATH`: Override the HTML report location
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CAREERWATCH_RETRIES") {
            if let Ok(retries) = val.parse() {
                self.fetch.retries = retries;
                tracing::debug!("Override fetch.retries from env: {}", retries);
            }
        }

        if let Some(val) = lookup("CAREERWATCH_HEADLESS") {
            if let Ok(headless) = val.parse() {
                self.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        if let Some(val) = lookup("CAREERWATCH_URL_FILE") {
            tracing::debug!("Override storage.url_file from env: {}", val);
            self.storage.url_file = PathBuf::from(val);
        }

        if let Some(val) = lookup("CAREERWATCH_REPORT_PATH") {
            tracing::debug!("Override storage.report_path from env: {}", val);
            self.storage.report_path = PathBuf::from(val);
        }
    }

    /// Check values that would make a run meaningless.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fetch.retries == 0 {
            return Err(invalid("fetch.retries", "must be at least 1"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(invalid("fetch.timeout_secs", "must be greater than 0"));
        }
        if self.browser.navigation_timeout_secs == 0 {
            return Err(invalid(
                "browser.navigation_timeout_secs",
                "must be greater than 0",
            ));
        }
        if self.scanning.concurrent_scans == 0 {
            return Err(invalid("scanning.concurrent_scans", "must be at least 1"));
        }
        if self.scanning.target_timeout_secs == 0 {
            return Err(invalid(
                "scanning.target_timeout_secs",
                "must be greater than 0",
            ));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(invalid("fetch.user_agent", "must not be empty"));
        }
        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| invalid("config_path", "no parent directory"))?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/careerwatch/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "careerwatch", "careerwatch")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Static HTTP fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Static fetch attempts per target (at least 1)
    pub retries: u32,
    /// Per-attempt request timeout in seconds
    pub timeout_secs: u64,
    /// Fixed delay between failed attempts in milliseconds
    pub retry_delay_ms: u64,
    /// User agent string
    pub user_agent: String,
    /// Accept header value
    pub accept: String,
    /// Pick a random common desktop user agent per request instead of `user_agent`
    pub randomize_user_agent: bool,
}

impl FetchConfig {
    /// Per-attempt request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay between failed attempts.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            timeout_secs: 30,
            retry_delay_ms: 2000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            randomize_user_agent: false,
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
    /// Wait after the load event for asynchronous content, in milliseconds
    pub settle_delay_ms: u64,
    /// Wait after scrolling for lazy-loaded content, in milliseconds
    pub scroll_delay_ms: u64,
}

impl BrowserConfig {
    /// Upper bound on a single navigation.
    #[must_use]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    /// Settle delay after the load event.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Delay after scrolling to the bottom.
    #[must_use]
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout_secs: 30,
            settle_delay_ms: 5000,
            scroll_delay_ms: 2000,
        }
    }
}

/// Scanning behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanningConfig {
    /// Number of targets evaluated at once (1 = strictly sequential)
    pub concurrent_scans: u32,
    /// Upper bound on one target's whole evaluation, in seconds
    pub target_timeout_secs: u64,
}

impl ScanningConfig {
    /// Upper bound on one target's evaluation.
    #[must_use]
    pub fn target_timeout(&self) -> Duration {
        Duration::from_secs(self.target_timeout_secs)
    }
}

impl Default for ScanningConfig {
    fn default() -> Self {
        Self {
            concurrent_scans: 1,
            target_timeout_secs: 120,
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Line-oriented `company:url` list
    pub url_file: PathBuf,
    /// HTML report written at the end of each search
    pub report_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url_file: PathBuf::from("career_urls.txt"),
            report_path: PathBuf::from("report.html"),
        }
    }
}
