//! AI configuration from environment variables.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model. Must accept image input.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Default rate limit between requests in milliseconds.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 500;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    /// Model name, e.g. "openai/gpt-4o-mini".
    pub model: String,
    pub base_url: String,
    /// Directory for caching responses.
    pub cache_dir: PathBuf,
    /// If true, only use cache, error if not cached.
    pub offline: bool,
    /// Milliseconds to wait between requests.
    pub rate_limit_ms: u64,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENROUTER_API_KEY`: API key for OpenRouter
    ///
    /// Optional:
    /// - `DISHPRINT_AI_MODEL`: Model name (default: "openai/gpt-4o-mini")
    /// - `DISHPRINT_AI_BASE_URL`: API base URL (default: "https://openrouter.ai/api/v1")
    /// - `DISHPRINT_AI_CACHE_DIR`: Cache directory (default: "~/.dishprint/ai-cache")
    /// - `DISHPRINT_AI_OFFLINE`: Use cache only (default: false)
    /// - `DISHPRINT_AI_RATE_LIMIT_MS`: Rate limit in ms (default: 500)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENROUTER_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let model = lookup("DISHPRINT_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url =
            lookup("DISHPRINT_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let cache_dir = lookup("DISHPRINT_AI_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_cache_dir);

        let offline = lookup("DISHPRINT_AI_OFFLINE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let rate_limit_ms = match lookup("DISHPRINT_AI_RATE_LIMIT_MS") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DISHPRINT_AI_RATE_LIMIT_MS".to_string(),
                value: v,
            })?,
            None => DEFAULT_RATE_LIMIT_MS,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            cache_dir,
            offline,
            rate_limit_ms,
        })
    }

    /// Get the default cache directory: ~/.dishprint/ai-cache
    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".dishprint").join("ai-cache"))
            .unwrap_or_else(|| PathBuf::from("data/ai-cache"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AiConfig::from_lookup(lookup(&[("OPENROUTER_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.offline);
        assert_eq!(config.rate_limit_ms, DEFAULT_RATE_LIMIT_MS);
    }

    #[test]
    fn test_overrides() {
        let config = AiConfig::from_lookup(lookup(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("DISHPRINT_AI_MODEL", "google/gemini-2.5-flash"),
            ("DISHPRINT_AI_CACHE_DIR", "/tmp/dishprint-cache"),
            ("DISHPRINT_AI_OFFLINE", "1"),
            ("DISHPRINT_AI_RATE_LIMIT_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.model, "google/gemini-2.5-flash");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/dishprint-cache"));
        assert!(config.offline);
        assert_eq!(config.rate_limit_ms, 0);
    }

    #[test]
    fn test_missing_api_key() {
        let err = AiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string())
        );
    }

    #[test]
    fn test_invalid_rate_limit() {
        let err = AiConfig::from_lookup(lookup(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("DISHPRINT_AI_RATE_LIMIT_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
