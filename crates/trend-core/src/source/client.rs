//! Papers with Code trending search client.

use super::types::{PaperRecord, RawResult, SearchResponse, TrendEntry};
use super::TrendSource;
use crate::config::TrendSourceConfig;
use crate::network::HttpClient;
use crate::{Result, TrendError};
use async_trait::async_trait;
use tracing::{debug, info, warn};

const SERVICE: &str = "PapersWithCode";

/// Client for the Papers with Code search endpoint.
pub struct PapersWithCodeClient {
    http: HttpClient,
    base_url: String,
}

impl PapersWithCodeClient {
    /// Create a client against `base_url` (e.g. `https://paperswithcode.com/api/v1/`).
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { http, base_url }
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, TrendSourceConfig::SEARCH_PATH)
    }
}

#[async_trait]
impl TrendSource for PapersWithCodeClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn try_fetch_trending(&self) -> Result<Vec<TrendEntry>> {
        let url = self.search_url();
        let response = self.http.get(&url).await?;
        let response = HttpClient::ensure_success(response, SERVICE).await?;

        let body: SearchResponse = response.json().await.map_err(|e| {
            TrendError::unexpected(SERVICE, format!("invalid search body: {}", e))
        })?;

        let entries = parse_results(body.results);
        info!("Fetched {} trending papers from {}", entries.len(), SERVICE);
        Ok(entries)
    }
}

/// Convert raw results to entries, dropping any that lack required fields.
fn parse_results(results: Vec<serde_json::Value>) -> Vec<TrendEntry> {
    results
        .into_iter()
        .enumerate()
        .filter_map(|(rank, raw)| {
            match serde_json::from_value::<RawResult>(raw.clone()) {
                Ok(parsed) => Some(TrendEntry {
                    rank,
                    record: PaperRecord::from(parsed.paper),
                    raw,
                }),
                Err(e) => {
                    warn!("Skipping malformed trend result #{}: {}", rank, e);
                    None
                }
            }
        })
        .inspect(|entry| debug!("Trend entry {}", entry.id()))
        .collect()
}
