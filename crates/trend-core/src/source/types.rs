//! Paper records and the trend API response shapes they are built from.

use crate::config::TrendSourceConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A trending paper, as handed to the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    /// Publication date exactly as the provider formats it.
    pub published: String,
    /// English abstract.
    pub abstract_text: String,
    /// Canonical paper page, derived from `id`.
    pub url: String,
}

impl PaperRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        published: impl Into<String>,
        abstract_text: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let url = paper_url(&id);
        Self {
            id,
            title: title.into(),
            published: published.into(),
            abstract_text: abstract_text.into(),
            url,
        }
    }
}

/// Canonical paper page URL for an id.
pub fn paper_url(id: &str) -> String {
    format!("{}{}", TrendSourceConfig::PAPER_URL_BASE, id)
}

/// One ranked result: the parsed record plus the raw JSON it came from.
///
/// The raw value is what the dedup cache stores. `rank` is the zero-based
/// position in the provider's result list, counting results that were
/// dropped as malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendEntry {
    pub rank: usize,
    pub record: PaperRecord,
    pub raw: Value,
}

impl TrendEntry {
    /// Build an entry whose raw value mirrors the trend API layout.
    pub fn from_record(rank: usize, record: PaperRecord) -> Self {
        let raw = serde_json::json!({
            "paper": {
                "id": record.id,
                "title": record.title,
                "published": record.published,
                "abstract": record.abstract_text,
            }
        });
        Self { rank, record, raw }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Top-level body of `GET search/`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// The nested `paper` object of one search result.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPaper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawResult {
    pub paper: RawPaper,
}

impl From<RawPaper> for PaperRecord {
    fn from(raw: RawPaper) -> Self {
        PaperRecord::new(
            raw.id,
            raw.title,
            raw.published.unwrap_or_default(),
            raw.abstract_text.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_derived_from_id() {
        let record = PaperRecord::new("p1", "Test Paper", "2024-01-01", "A method for X.");
        assert_eq!(record.url, "https://paperswithcode.com/paper/p1");
    }

    #[test]
    fn test_raw_result_parses_nullable_fields() {
        let raw: RawResult = serde_json::from_value(json!({
            "paper": {
                "id": "p9",
                "title": "Untitled",
                "published": null,
                "abstract": "Short."
            },
            "repository": null
        }))
        .unwrap();
        let record = PaperRecord::from(raw.paper);
        assert_eq!(record.published, "");
        assert_eq!(record.abstract_text, "Short.");
    }

    #[test]
    fn test_entry_from_record_mirrors_api_layout() {
        let entry = TrendEntry::from_record(4, PaperRecord::new("p1", "T", "2024-01-01", "A"));
        assert_eq!(entry.id(), "p1");
        assert_eq!(entry.rank, 4);
        assert_eq!(entry.raw["paper"]["abstract"], "A");
    }
}
