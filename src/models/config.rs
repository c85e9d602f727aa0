//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::PageSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source site settings
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Marker-region selectors
    #[serde(default)]
    pub selectors: PageSelectors,

    /// Envelope output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::validation("http.max_concurrent must be > 0"));
        }
        if self.source.allowed_host.trim().is_empty() {
            return Err(AppError::validation("source.allowed_host is empty"));
        }

        let origin = Url::parse(&self.source.origin)
            .map_err(|e| AppError::validation(format!("source.origin: {e}")))?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(AppError::validation(
                "source.origin must be an http(s) URL",
            ));
        }

        self.selectors.validate()
    }
}

/// The site every URL is resolved against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Origin used for relative links and the directory page
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Host suffix a requested city URL must carry
    #[serde(default = "defaults::allowed_host")]
    pub allowed_host: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            origin: defaults::origin(),
            allowed_host: defaults::allowed_host(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Accept header for HTTP requests
    #[serde(default = "defaults::accept")]
    pub accept: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent requests for batch fetches
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            accept: defaults::accept(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Envelope output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON
    #[serde(default)]
    pub pretty: bool,
}

mod defaults {
    pub fn origin() -> String {
        crate::DEFAULT_ORIGIN.into()
    }
    pub fn allowed_host() -> String {
        "travelsafe-abroad.com".into()
    }

    pub fn user_agent() -> String {
        "CitiesInfoCollectionBot/1.0 (+https://github.com/your-org/cities-info-collection)".into()
    }
    pub fn accept() -> String {
        "text/html,application/xhtml+xml".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        4
    }
}
