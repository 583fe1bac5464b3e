//! Client configuration for the VaultNotes API endpoint.

use thiserror::Error;

use crate::util::{is_http_url, normalize_text_option};

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "VAULTNOTES_API_URL";

/// Default endpoint for local development against the reference backend.
const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,
    #[error("API base URL must include http:// or https://")]
    InvalidScheme,
}

/// Runtime configuration resolved before the UI starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolve configuration from the environment. An unset, empty, or
    /// malformed variable falls back to the local development endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let url = normalize_text_option(std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = match normalize_base_url(&url) {
            Ok(normalized) => normalized,
            Err(error) => {
                tracing::warn!("Ignoring invalid {API_URL_ENV} value {url:?}: {error}");
                DEFAULT_API_URL.to_string()
            }
        };
        Self { api_base_url }
    }

    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url.into())?,
        })
    }
}

/// Trim a base URL and strip any trailing slash so endpoint paths can be
/// appended verbatim.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !is_http_url(trimmed) {
        return Err(ConfigError::InvalidScheme);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        let normalized = normalize_base_url("https://notes.example.com/").unwrap();
        assert_eq!(normalized, "https://notes.example.com");
    }

    #[test]
    fn normalize_base_url_requires_http_scheme() {
        assert!(normalize_base_url("notes.example.com").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("http://localhost:8000").is_ok());
    }
}
