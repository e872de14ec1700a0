//! Builder that wires the production clients into a [`Pipeline`].

use super::{Pipeline, RunOptions};
use crate::config::{PathsConfig, Settings, TranslationConfig};
use crate::network::HttpClient;
use crate::notify::{LogNotifier, SlackNotifier};
use crate::source::PapersWithCodeClient;
use crate::translate::{DeepLTranslator, GoogleTranslator, TranslationChain};
use crate::Result;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, warn};

/// Builder for a pipeline backed by Papers with Code, DeepL, Google and Slack.
///
/// # Example
///
/// ```rust,ignore
/// use trend_core::{Pipeline, Settings};
///
/// let pipeline = Pipeline::builder(Settings::from_env())
///     .cache_path(".cache/trend.json")
///     .dry_run(true)
///     .build()?;
/// let report = pipeline.run().await?;
/// ```
pub struct PipelineBuilder {
    settings: Settings,
    cache_path: PathBuf,
    options: RunOptions,
    dry_run: bool,
}

impl PipelineBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache_path: PathsConfig::default_cache_path(),
            options: RunOptions::default(),
            dry_run: false,
        }
    }

    /// Where the dedup cache lives.
    ///
    /// Default: `.cache/trend.json` relative to the working directory.
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Cap on papers considered per run.
    ///
    /// Default: 20
    pub fn max_papers(mut self, max_papers: usize) -> Self {
        self.options.max_papers = max_papers;
        self
    }

    /// Pin the fetch date instead of using the local date.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.options.today = Some(date);
        self
    }

    /// Log messages instead of posting them to Slack.
    ///
    /// The cache is still updated.
    pub fn dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        let http = HttpClient::new()?;
        let settings = self.settings;

        if settings.deepl_token.is_none() {
            warn!("DeepL token not configured; DeepL translations will be skipped");
        }
        if settings.gcp_api_key.is_none() {
            warn!("GCP API key not configured; GCP translations will be skipped");
        }

        let source = PapersWithCodeClient::new(http.clone(), settings.trend_api_base.clone());
        let translator = TranslationChain::new(TranslationConfig::TARGET_LANGUAGE)
            .with_provider(DeepLTranslator::new(
                http.clone(),
                settings.deepl_api_url.clone(),
                settings.deepl_token.clone(),
            ))
            .with_provider(GoogleTranslator::new(
                http.clone(),
                settings.gcp_translate_url.clone(),
                settings.gcp_api_key.clone(),
            ));

        let pipeline = if self.dry_run {
            info!("Dry run: messages will be logged, not posted");
            Pipeline::new(source, translator, LogNotifier, self.cache_path)
        } else {
            if settings.slack_webhook.is_none() {
                warn!("Slack webhook not configured; notifications will fail");
            }
            let notifier = SlackNotifier::new(http, settings.slack_webhook.clone());
            Pipeline::new(source, translator, notifier, self.cache_path)
        };

        Ok(pipeline.with_options(self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let pipeline = Pipeline::builder(Settings::default()).build().unwrap();
        assert_eq!(pipeline.cache_path(), PathsConfig::default_cache_path());
        assert_eq!(pipeline.options().max_papers, 20);
        assert!(pipeline.options().today.is_none());
        assert_eq!(pipeline.translator.provider_names(), vec!["DeepL", "GCP"]);
        assert_eq!(pipeline.translator.target_language(), "ja");
    }

    #[test]
    fn test_builder_overrides() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let pipeline = Pipeline::builder(Settings::default())
            .cache_path("/tmp/elsewhere.json")
            .max_papers(5)
            .today(date)
            .dry_run(true)
            .build()
            .unwrap();
        assert_eq!(pipeline.cache_path(), PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(pipeline.options().max_papers, 5);
        assert_eq!(pipeline.options().today, Some(date));
        assert_eq!(pipeline.notifier.name(), "log");
    }
}
