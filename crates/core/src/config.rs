//! Console configuration
//!
//! Values come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`CATALOG_ADMIN_CONFIG`, or `catalog-admin.toml` in the
//!    working directory when present)
//! 3. Environment variables, with a `.env` file loaded via `dotenvy`
//!
//! ```toml
//! api_base_url = "http://127.0.0.1:8000"
//! page_size = 50
//! search_debounce_ms = 500
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConsoleError, ConsoleResult};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "catalog-admin.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "CATALOG_ADMIN_CONFIG";

/// Runtime configuration shared by the desktop UI and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Origin of the catalog REST API (env `CATALOG_API_URL`)
    pub api_base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    /// (env `CATALOG_REQUEST_TIMEOUT_SECS`)
    pub request_timeout_secs: Option<u64>,
    /// Rows per product page (env `CATALOG_PAGE_SIZE`)
    pub page_size: u64,
    /// Quiet interval before a search reloads the list
    pub search_debounce_ms: u64,
    /// How long the upload success state stays visible
    pub upload_success_dwell_ms: u64,
    /// How long the upload failure state stays visible
    pub upload_failure_dwell_ms: u64,
    /// Maximum toasts kept on screen
    pub notification_limit: usize,
    /// Lifetime of a non-error toast
    pub notification_ttl_ms: u64,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: None,
            page_size: 50,
            search_debounce_ms: 500,
            upload_success_dwell_ms: 2000,
            upload_failure_dwell_ms: 3000,
            notification_limit: 5,
            notification_ttl_ms: 4000,
            log_filter: "info".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from the file and environment layers
    pub fn load() -> ConsoleResult<Self> {
        // A missing .env is normal
        let _ = dotenvy::dotenv();

        let mut config = match config_file_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!("Loading config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Parse TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> ConsoleResult<Self> {
        toml::from_str(text).map_err(|e| ConsoleError::config(e.to_string()))
    }

    /// Apply environment-style overrides from a lookup function
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConsoleResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CATALOG_API_URL") {
            self.api_base_url = url;
        }
        if let Some(secs) = lookup("CATALOG_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = Some(parse_number("CATALOG_REQUEST_TIMEOUT_SECS", &secs)?);
        }
        if let Some(size) = lookup("CATALOG_PAGE_SIZE") {
            self.page_size = parse_number("CATALOG_PAGE_SIZE", &size)?;
        }
        if let Some(filter) = lookup("CATALOG_LOG") {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// Reject values the console cannot work with
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConsoleError::config("api_base_url must not be empty"));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ConsoleError::config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.page_size == 0 {
            return Err(ConsoleError::config("page_size must be at least 1"));
        }
        if self.notification_limit == 0 {
            return Err(ConsoleError::config("notification_limit must be at least 1"));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn upload_success_dwell(&self) -> Duration {
        Duration::from_millis(self.upload_success_dwell_ms)
    }

    pub fn upload_failure_dwell(&self) -> Duration {
        Duration::from_millis(self.upload_failure_dwell_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

/// Resolve which config file to read, if any
fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.exists().then_some(default)
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> ConsoleResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConsoleError::config(format!("{} must be a number, got '{}'", key, value)))
}

// ============================================================================
// Tests
// ============================================================================
