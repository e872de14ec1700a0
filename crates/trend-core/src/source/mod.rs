//! Trending paper sources.
//!
//! A source yields papers in the provider's rank order. Fetch failures never
//! escape [`TrendSource::fetch_trending`]; they are logged and the run sees
//! an empty list, which the pipeline treats as "nothing to do".

mod client;
mod types;

pub use client::PapersWithCodeClient;
pub use types::{paper_url, PaperRecord, TrendEntry};

use crate::Result;
use async_trait::async_trait;
use tracing::error;

/// A remote ranking of trending papers.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    /// Fetch the current trending set, reporting why a fetch failed.
    async fn try_fetch_trending(&self) -> Result<Vec<TrendEntry>>;

    /// Fetch the current trending set, absorbing failures into an empty list.
    async fn fetch_trending(&self) -> Vec<TrendEntry> {
        match self.try_fetch_trending().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("{}: failed to fetch trending papers: {}", self.name(), e);
                Vec::new()
            }
        }
    }
}
