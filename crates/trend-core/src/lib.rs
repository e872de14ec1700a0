//! Trend Core - headless library behind the trending-paper notifier.
//!
//! Fetches the current trending papers, drops the ones already announced,
//! translates the remaining abstracts through a provider fallback chain and
//! posts one message per paper to a chat webhook. State between runs is a
//! single JSON dedup file.
//!
//! # Example
//!
//! ```rust,ignore
//! use trend_core::{Pipeline, Settings};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> trend_core::Result<()> {
//!     let pipeline = Pipeline::builder(Settings::from_env()).build()?;
//!     let report = pipeline.run().await?;
//!     println!("Notified {} papers", report.notified_count());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod network;
pub mod notify;
pub mod pipeline;
pub mod source;
pub mod translate;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use cache::CacheStore;
pub use config::Settings;
pub use error::{Result, TrendError};
pub use network::HttpClient;
pub use notify::{LogNotifier, Notifier, SlackMessage, SlackNotifier};
pub use pipeline::{
    Delivery, PaperOutcome, PaperReport, Pipeline, PipelineBuilder, RunOptions, RunOutcome,
    RunReport,
};
pub use source::{PaperRecord, PapersWithCodeClient, TrendEntry, TrendSource};
pub use translate::{
    DeepLTranslator, GoogleTranslator, Provenance, TranslatedAbstract, TranslationChain,
    Translator,
};
