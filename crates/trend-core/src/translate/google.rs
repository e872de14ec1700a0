//! Google Cloud Translation (v2) provider.

use super::Translator;
use crate::config::env_keys;
use crate::network::HttpClient;
use crate::{Result, TrendError};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

const SERVICE: &str = "GCP";

#[derive(Debug, Serialize)]
struct GoogleRequest<'a> {
    q: &'a str,
    target: &'a str,
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    data: GoogleData,
}

#[derive(Debug, Deserialize)]
struct GoogleData {
    #[serde(default)]
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
}

/// Translator backed by the Google Cloud Translation v2 REST API.
///
/// The API key travels as the `key` query parameter.
pub struct GoogleTranslator {
    http: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleTranslator {
    pub fn new(http: HttpClient, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            api_key,
        }
    }

    fn request_url(&self, api_key: &str) -> Result<Url> {
        Url::parse_with_params(&self.api_url, &[("key", api_key)]).map_err(|e| {
            TrendError::Config {
                message: format!("invalid {} URL {}: {}", SERVICE, self.api_url, e),
            }
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn try_translate(&self, text: &str, target_language: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TrendError::MissingCredential {
                service: SERVICE.to_string(),
                name: env_keys::GCP_API_KEY.to_string(),
            })?;

        let url = self.request_url(api_key)?;
        let body = GoogleRequest {
            q: text,
            target: target_language,
        };

        let response = self.http.post_json(url.as_str(), &body).await?;
        let response = HttpClient::ensure_success(response, SERVICE).await?;
        let parsed: GoogleResponse = response
            .json()
            .await
            .map_err(|e| {
                TrendError::unexpected(SERVICE, format!("invalid body: {}", e.without_url()))
            })?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TrendError::unexpected(SERVICE, "no translations in response"))
    }
}
