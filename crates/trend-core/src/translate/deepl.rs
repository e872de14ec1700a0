//! DeepL translation provider.

use super::Translator;
use crate::config::env_keys;
use crate::network::HttpClient;
use crate::{Result, TrendError};
use async_trait::async_trait;
use serde::Deserialize;

const SERVICE: &str = "DeepL";

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    text: String,
}

/// Translator backed by the DeepL `v2/translate` endpoint.
pub struct DeepLTranslator {
    http: HttpClient,
    api_url: String,
    auth_key: Option<String>,
}

impl DeepLTranslator {
    pub fn new(http: HttpClient, api_url: impl Into<String>, auth_key: Option<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            auth_key,
        }
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn try_translate(&self, text: &str, target_language: &str) -> Result<String> {
        let auth_key = self
            .auth_key
            .as_deref()
            .ok_or_else(|| TrendError::MissingCredential {
                service: SERVICE.to_string(),
                name: env_keys::DEEPL_TOKEN.to_string(),
            })?;

        // DeepL expects upper-case language codes ("JA").
        let target = target_language.to_uppercase();
        let form = [
            ("auth_key", auth_key),
            ("text", text),
            ("target_lang", target.as_str()),
        ];

        let response = self.http.post_form(&self.api_url, &form).await?;
        let response = HttpClient::ensure_success(response, SERVICE).await?;
        let body: DeepLResponse = response
            .json()
            .await
            .map_err(|e| TrendError::unexpected(SERVICE, format!("invalid body: {}", e)))?;

        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| TrendError::unexpected(SERVICE, "no translations in response"))
    }
}
