//! Configuration management for blockdown.
//!
//! Parses `blockdown.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings can be applied during load
//! via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `notion.token` and `notion.api_url` support `${VAR}` and
//! `${VAR:-default}`. When no token is configured at all, the
//! `NOTION_TOKEN` environment variable is used.
//!
//! ```toml
//! [notion]
//! token = "${NOTION_TOKEN}"
//! api_url = "https://api.notion.com/v1/"
//! version = "2021-05-13"
//! page_size = 100
//! timeout_secs = 30
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blockdown.toml";

/// Environment variable consulted when no token is configured.
pub const TOKEN_ENV_VAR: &str = "NOTION_TOKEN";

/// Largest page size the API accepts.
const MAX_PAGE_SIZE: u32 = 100;

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the integration token.
    pub token: Option<String>,
    /// Override the API base URL.
    pub api_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion API configuration.
    pub notion: NotionConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Notion API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Internal integration token.
    pub token: String,
    /// API base URL.
    pub api_url: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// Page size for paginated endpoints.
    pub page_size: u32,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: "https://api.notion.com/v1/".to_owned(),
            version: "2021-05-13".to_owned(),
            page_size: MAX_PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl NotionConfig {
    /// Validate the connection settings. The token is checked separately by
    /// [`Config::require_token`], since rendering needs no token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api_url, "notion.api_url")?;
        require_http_url(&self.api_url, "notion.api_url")?;
        require_non_empty(&self.version, "notion.version")?;

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Validation(format!(
                "notion.page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "notion.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.token`").
        field: String,
        /// Error message (e.g., "${`NOTION_TOKEN`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `blockdown.toml` in the current directory and its parents, falling
    /// back to defaults when none exists.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let start = std::env::current_dir().unwrap_or_default();
        Self::load_from(config_path, &start, cli_settings)
    }

    /// [`Config::load`] with an explicit discovery starting directory.
    pub fn load_from(
        config_path: Option<&Path>,
        search_from: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = discover_config(search_from) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        let no_overrides = CliSettings::default();
        let overrides = cli_settings.unwrap_or(&no_overrides);
        config.expand_env_vars(overrides)?;

        if config.notion.token.is_empty()
            && let Ok(token) = std::env::var(TOKEN_ENV_VAR)
        {
            config.notion.token = token;
        }

        config.apply_cli_settings(overrides);

        config.validate()?;
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(token) = &settings.token {
            self.notion.token.clone_from(token);
        }
        if let Some(api_url) = &settings.api_url {
            self.notion.api_url.clone_from(api_url);
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.notion.validate()
    }

    /// Get the Notion configuration, requiring a non-empty token.
    pub fn require_token(&self) -> Result<&NotionConfig, ConfigError> {
        if self.notion.token.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "notion.token required (set it in {CONFIG_FILENAME}, \
                 export {TOKEN_ENV_VAR}, or pass --token)"
            )));
        }
        Ok(&self.notion)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Expand `${VAR}` references in fields the CLI does not override.
    fn expand_env_vars(&mut self, overrides: &CliSettings) -> Result<(), ConfigError> {
        if overrides.token.is_none() {
            self.notion.token = expand::expand_env(&self.notion.token, "notion.token")?;
        }
        if overrides.api_url.is_none() {
            self.notion.api_url = expand::expand_env(&self.notion.api_url, "notion.api_url")?;
        }
        Ok(())
    }
}

/// Search for the config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
