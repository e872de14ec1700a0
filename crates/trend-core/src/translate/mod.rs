//! Abstract translation with a fixed-priority provider chain.
//!
//! Each provider implements [`Translator`]. [`TranslationChain`] asks them in
//! order and keeps the first non-empty answer, so adding a provider never
//! touches the pipeline.

mod deepl;
mod google;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;

use crate::Result;
use async_trait::async_trait;
use std::fmt;
use tracing::{error, info, warn};

/// A remote machine-translation provider.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider name, used for provenance and logging.
    fn name(&self) -> &'static str;

    /// Translate `text` into `target_language`, reporting why it failed.
    async fn try_translate(&self, text: &str, target_language: &str) -> Result<String>;

    /// Translate `text`, treating any failure as "no translation".
    async fn translate(&self, text: &str, target_language: &str) -> String {
        match self.try_translate(text, target_language).await {
            Ok(translated) => translated,
            Err(e) if e.is_remote() => {
                warn!("{}: {}", self.name(), e);
                String::new()
            }
            Err(e) => {
                error!("{}: {}", self.name(), e);
                String::new()
            }
        }
    }
}

/// Which provider produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Provider(&'static str),
    None,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Provider(name) => f.write_str(name),
            Provenance::None => f.write_str("none"),
        }
    }
}

/// Translated abstract plus the provider that produced it.
///
/// Empty `text` with [`Provenance::None`] means every provider failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedAbstract {
    pub text: String,
    pub provenance: Provenance,
}

impl TranslatedAbstract {
    pub fn untranslated() -> Self {
        Self {
            text: String::new(),
            provenance: Provenance::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text as shown to readers, with a `Translated by ...` line appended.
    pub fn display_text(&self) -> String {
        match self.provenance {
            Provenance::Provider(name) if !self.text.is_empty() => {
                format!("{}\nTranslated by {}", self.text, name)
            }
            _ => self.text.clone(),
        }
    }
}

/// Providers tried in priority order until one returns non-empty text.
pub struct TranslationChain {
    providers: Vec<Box<dyn Translator>>,
    target_language: String,
}

impl TranslationChain {
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            providers: Vec::new(),
            target_language: target_language.into(),
        }
    }

    /// Append a provider with lower priority than those already added.
    pub fn with_provider(mut self, provider: impl Translator + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Translate with the first provider that yields non-empty output.
    ///
    /// Later providers are not called once one succeeds.
    pub async fn translate(&self, text: &str) -> TranslatedAbstract {
        for provider in &self.providers {
            let translated = provider.translate(text, &self.target_language).await;
            if !translated.is_empty() {
                info!("Translated by {}", provider.name());
                return TranslatedAbstract {
                    text: translated,
                    provenance: Provenance::Provider(provider.name()),
                };
            }
        }

        warn!("All translation providers failed");
        TranslatedAbstract::untranslated()
    }
}
