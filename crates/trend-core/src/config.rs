//! Centralized configuration for the trend notifier.
//!
//! Compile-time constants are grouped per concern. Runtime secrets and
//! endpoint overrides are resolved once from the environment into
//! [`Settings`].

use std::path::PathBuf;
use std::time::Duration;

/// Trend source (Papers with Code) configuration.
pub struct TrendSourceConfig;

impl TrendSourceConfig {
    pub const API_BASE: &'static str = "https://paperswithcode.com/api/v1/";
    pub const SEARCH_PATH: &'static str = "search/";
    pub const PAPER_URL_BASE: &'static str = "https://paperswithcode.com/paper/";
    /// Per-run processing cap, applied after the fetch.
    pub const MAX_PAPERS_PER_RUN: usize = 20;
}

/// Translation provider configuration.
pub struct TranslationConfig;

impl TranslationConfig {
    pub const TARGET_LANGUAGE: &'static str = "ja";
    pub const DEEPL_API_URL: &'static str = "https://api.deepl.com/v2/translate";
    pub const GCP_TRANSLATE_URL: &'static str =
        "https://translation.googleapis.com/language/translate/v2";
}

/// Notification (Slack webhook) configuration.
pub struct NotifyConfig;

impl NotifyConfig {
    pub const CHANNEL: &'static str = "#paper";
    pub const ICON_EMOJI: &'static str = ":ghost:";
    pub const TITLE_PREFIX: &'static str = "PapersWithCode Trend Papers";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &'static str = "paper-trend/0.1";
}

/// Shared directory and path configurations.
pub struct PathsConfig;

impl PathsConfig {
    pub const CACHE_DIR_NAME: &'static str = ".cache";
    pub const CACHE_FILENAME: &'static str = "trend.json";

    /// Default cache location, relative to the working directory.
    pub fn default_cache_path() -> PathBuf {
        PathBuf::from(Self::CACHE_DIR_NAME).join(Self::CACHE_FILENAME)
    }
}

/// Environment variable names read by [`Settings::from_env`].
pub mod env_keys {
    pub const SLACK_WEBHOOK: &str = "SLACK_WEBHOOK";
    pub const DEEPL_TOKEN: &str = "DEEPL_TOKEN";
    pub const GCP_API_KEY: &str = "GCP_API_KEY";
    pub const PWC_API_BASE: &str = "PWC_API_BASE";
    pub const DEEPL_API_URL: &str = "DEEPL_API_URL";
    pub const GCP_TRANSLATE_URL: &str = "GCP_TRANSLATE_URL";
}

/// Runtime settings resolved once at process start.
///
/// Missing credentials are not an error here: the component that needs one
/// reports it on every call and the pipeline degrades around it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub slack_webhook: Option<String>,
    pub deepl_token: Option<String>,
    pub gcp_api_key: Option<String>,
    pub trend_api_base: String,
    pub deepl_api_url: String,
    pub gcp_translate_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slack_webhook: None,
            deepl_token: None,
            gcp_api_key: None,
            trend_api_base: TrendSourceConfig::API_BASE.to_string(),
            deepl_api_url: TranslationConfig::DEEPL_API_URL.to_string(),
            gcp_translate_url: TranslationConfig::GCP_TRANSLATE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            slack_webhook: read(env_keys::SLACK_WEBHOOK),
            deepl_token: read(env_keys::DEEPL_TOKEN),
            gcp_api_key: read(env_keys::GCP_API_KEY),
            trend_api_base: read(env_keys::PWC_API_BASE).unwrap_or(defaults.trend_api_base),
            deepl_api_url: read(env_keys::DEEPL_API_URL).unwrap_or(defaults.deepl_api_url),
            gcp_translate_url: read(env_keys::GCP_TRANSLATE_URL)
                .unwrap_or(defaults.gcp_translate_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::from_lookup(|_| None);
        assert!(settings.slack_webhook.is_none());
        assert!(settings.deepl_token.is_none());
        assert!(settings.gcp_api_key.is_none());
        assert_eq!(settings.trend_api_base, TrendSourceConfig::API_BASE);
        assert_eq!(settings.deepl_api_url, TranslationConfig::DEEPL_API_URL);
    }

    #[test]
    fn test_blank_values_are_absent() {
        let settings = Settings::from_lookup(lookup_from(&[
            (env_keys::DEEPL_TOKEN, "   "),
            (env_keys::GCP_API_KEY, " key-123 "),
            (env_keys::PWC_API_BASE, ""),
        ]));
        assert!(settings.deepl_token.is_none());
        assert_eq!(settings.gcp_api_key.as_deref(), Some("key-123"));
        assert_eq!(settings.trend_api_base, TrendSourceConfig::API_BASE);
    }

    #[test]
    fn test_endpoint_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (env_keys::SLACK_WEBHOOK, "https://hooks.example.com/x"),
            (env_keys::DEEPL_API_URL, "http://127.0.0.1:9000/deepl"),
        ]));
        assert_eq!(
            settings.slack_webhook.as_deref(),
            Some("https://hooks.example.com/x")
        );
        assert_eq!(settings.deepl_api_url, "http://127.0.0.1:9000/deepl");
    }

    #[test]
    fn test_default_cache_path() {
        assert_eq!(
            PathsConfig::default_cache_path(),
            PathBuf::from(".cache").join("trend.json")
        );
    }
}
