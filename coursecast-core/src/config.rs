//! Centralized configuration for Coursecast.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::mode::RuntimeMode;
use crate::{CoursecastError, Result};

/// Central configuration for all Coursecast components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct CoursecastConfig {
    pub search: SearchConfig,
    pub server: ServerConfig,
    pub runtime_mode: RuntimeMode,
}

/// Search backend communication settings.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Origin of the backend that serves the search endpoint
    pub base_url: String,
    /// Path of the keyword search endpoint
    pub endpoint_path: String,
    /// Transport timeout for one search request
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Thumbnail resolution shown on result cards
    pub thumbnail: ThumbnailVariant,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            endpoint_path: "/api/get-videos".to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: "coursecast/0.1.0",
            thumbnail: ThumbnailVariant::High,
        }
    }
}

impl SearchConfig {
    /// Full URL of the keyword search endpoint.
    ///
    /// # Errors
    ///
    /// - `CoursecastError::Configuration` - Base URL or endpoint path does not form a valid URL
    pub fn search_url(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url).map_err(|e| CoursecastError::Configuration {
            reason: format!("invalid base url '{}': {e}", self.base_url),
        })?;

        // Url::join drops the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(self.endpoint_path.trim_start_matches('/'))
            .map_err(|e| CoursecastError::Configuration {
                reason: format!("invalid endpoint path '{}': {e}", self.endpoint_path),
            })
    }
}

/// Development server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Resolution of the thumbnail a result card displays.
///
/// The backend sends both a high and a medium resolution URL; the
/// caller picks which one ends up on the card and in its sub-form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailVariant {
    #[default]
    High,
    Medium,
}

impl std::fmt::Display for ThumbnailVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThumbnailVariant::High => write!(f, "high"),
            ThumbnailVariant::Medium => write!(f, "medium"),
        }
    }
}

impl std::str::FromStr for ThumbnailVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(ThumbnailVariant::High),
            "medium" => Ok(ThumbnailVariant::Medium),
            _ => Err(format!("Invalid thumbnail variant: {s}")),
        }
    }
}

impl CoursecastConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("COURSECAST_BASE_URL") {
            config.search.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("COURSECAST_TIMEOUT_SECS") {
            match parse_timeout_secs(&timeout) {
                Some(request_timeout) => config.search.request_timeout = request_timeout,
                None => tracing::warn!("Ignoring COURSECAST_TIMEOUT_SECS={timeout}"),
            }
        }

        if let Ok(variant) = std::env::var("COURSECAST_THUMBNAIL") {
            match variant.parse::<ThumbnailVariant>() {
                Ok(variant) => config.search.thumbnail = variant,
                Err(e) => tracing::warn!("Ignoring COURSECAST_THUMBNAIL: {e}"),
            }
        }

        if let Ok(host) = std::env::var("COURSECAST_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("COURSECAST_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(_) => tracing::warn!("Ignoring COURSECAST_PORT={port}"),
            }
        }

        if let Ok(mode) = std::env::var("COURSECAST_MODE") {
            match mode.parse::<RuntimeMode>() {
                Ok(mode) => config.runtime_mode = mode,
                Err(e) => tracing::warn!("Ignoring COURSECAST_MODE: {e}"),
            }
        }

        config
    }

    /// Creates a configuration for offline development with demo data.
    pub fn for_development() -> Self {
        Self {
            runtime_mode: RuntimeMode::Development,
            ..Default::default()
        }
    }
}

/// Whole seconds, at least one.
fn parse_timeout_secs(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(seconds) => Some(Duration::from_secs(seconds)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = CoursecastConfig::default();

        assert_eq!(config.search.endpoint_path, "/api/get-videos");
        assert_eq!(config.search.request_timeout, Duration::from_secs(10));
        assert_eq!(config.search.thumbnail, ThumbnailVariant::High);
        assert_eq!(config.server.port, 3000);
        assert!(config.runtime_mode.is_production());
        assert!(CoursecastConfig::for_development().runtime_mode.is_development());
    }

    #[test]
    fn test_search_url_joins_base_and_path() {
        let config = SearchConfig {
            base_url: "http://localhost:8080".to_string(),
            ..Default::default()
        };

        assert_eq!(
            config.search_url().unwrap().as_str(),
            "http://localhost:8080/api/get-videos"
        );
    }

    #[test]
    fn test_search_url_keeps_base_path_prefix() {
        for base_url in ["http://backend.test/academy", "http://backend.test/academy/"] {
            let config = SearchConfig {
                base_url: base_url.to_string(),
                ..Default::default()
            };

            assert_eq!(
                config.search_url().unwrap().as_str(),
                "http://backend.test/academy/api/get-videos"
            );
        }
    }

    #[test]
    fn test_timeout_must_be_positive() {
        assert_eq!(parse_timeout_secs("3"), Some(Duration::from_secs(3)));
        assert_eq!(parse_timeout_secs("0"), None);
        assert_eq!(parse_timeout_secs("-1"), None);
        assert_eq!(parse_timeout_secs("soon"), None);
    }

    #[test]
    fn test_search_url_rejects_bad_base() {
        let config = SearchConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            config.search_url(),
            Err(CoursecastError::Configuration { .. })
        ));
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("COURSECAST_BASE_URL", "http://backend.test");
            std::env::set_var("COURSECAST_TIMEOUT_SECS", "3");
            std::env::set_var("COURSECAST_THUMBNAIL", "medium");
            std::env::set_var("COURSECAST_PORT", "not-a-port");
            std::env::set_var("COURSECAST_MODE", "dev");
        }

        let config = CoursecastConfig::from_env();

        assert_eq!(config.search.base_url, "http://backend.test");
        assert_eq!(config.search.request_timeout, Duration::from_secs(3));
        assert_eq!(config.search.thumbnail, ThumbnailVariant::Medium);
        assert_eq!(config.server.port, 3000);
        assert!(config.runtime_mode.is_development());

        // Cleanup
        unsafe {
            std::env::remove_var("COURSECAST_BASE_URL");
            std::env::remove_var("COURSECAST_TIMEOUT_SECS");
            std::env::remove_var("COURSECAST_THUMBNAIL");
            std::env::remove_var("COURSECAST_PORT");
            std::env::remove_var("COURSECAST_MODE");
        }
    }
}
