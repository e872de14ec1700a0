//! The per-run workflow: fetch, dedup, translate, notify, persist.
//!
//! A run is strictly sequential. The cache is loaded after a successful
//! fetch, mutated in memory, and written back once at the end. Papers are
//! marked as processed *before* they are translated and announced, so a
//! failed notification still suppresses the paper on later runs. If the
//! process dies mid-run nothing is written and the next run repeats the work.

mod builder;
mod report;

pub use builder::PipelineBuilder;
pub use report::{Delivery, PaperOutcome, PaperReport, RunOutcome, RunReport};

use crate::cache::CacheStore;
use crate::config::{Settings, TrendSourceConfig};
use crate::notify::{paper_message, Notifier};
use crate::source::{TrendEntry, TrendSource};
use crate::translate::TranslationChain;
use crate::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Per-run knobs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Cap on papers considered per run, cached ones included.
    pub max_papers: usize,
    /// Fetch date override; defaults to the local date at run start.
    pub today: Option<NaiveDate>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_papers: TrendSourceConfig::MAX_PAPERS_PER_RUN,
            today: None,
        }
    }
}

/// Wires a trend source, a translation chain and a notifier to a cache file.
pub struct Pipeline {
    source: Box<dyn TrendSource>,
    translator: TranslationChain,
    notifier: Box<dyn Notifier>,
    cache_path: PathBuf,
    options: RunOptions,
}

impl Pipeline {
    pub fn new(
        source: impl TrendSource + 'static,
        translator: TranslationChain,
        notifier: impl Notifier + 'static,
        cache_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: Box::new(source),
            translator,
            notifier: Box::new(notifier),
            cache_path: cache_path.into(),
            options: RunOptions::default(),
        }
    }

    /// Start a builder that wires the production clients from `settings`.
    pub fn builder(settings: Settings) -> PipelineBuilder {
        PipelineBuilder::new(settings)
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Execute one run.
    ///
    /// Remote failures are absorbed and show up in the report. Only a cache
    /// that cannot be read or written fails the run.
    pub async fn run(&self) -> Result<RunReport> {
        let fetch_date = self
            .options
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        info!("Starting trend run for {}", fetch_date);

        let entries = self.source.fetch_trending().await;
        if entries.is_empty() {
            error!("No results from {}", self.source.name());
            return Ok(RunReport::no_results(fetch_date));
        }
        let fetched = entries.len();

        let mut cache = CacheStore::load(&self.cache_path)?;
        let before = cache.len();

        let mut papers = Vec::new();
        // The cap counts provider positions, including results dropped as malformed.
        let max_papers = self.options.max_papers;
        for entry in entries.into_iter().take_while(|e| e.rank < max_papers) {
            papers.push(self.process(entry, &mut cache, fetch_date).await);
        }

        cache.persist()?;

        let report = RunReport {
            fetch_date,
            outcome: RunOutcome::Completed,
            fetched,
            papers,
        };
        info!(
            "Run finished: {} fetched, {} notified, {} skipped, {} new cache entries",
            report.fetched,
            report.notified_count(),
            report.skipped_count(),
            cache.len() - before
        );
        Ok(report)
    }

    async fn process(
        &self,
        entry: TrendEntry,
        cache: &mut CacheStore,
        fetch_date: NaiveDate,
    ) -> PaperReport {
        let TrendEntry { record, raw, .. } = entry;

        if cache.contains(&record.id) {
            debug!("Skipping cached paper {}", record.id);
            return PaperReport {
                id: record.id,
                title: record.title,
                outcome: PaperOutcome::Skipped,
            };
        }
        cache.insert(record.id.clone(), raw);

        let translated = self.translator.translate(&record.abstract_text).await;
        if translated.is_empty() {
            warn!("No translation for {}", record.title);
        } else {
            info!("Translated: {} by {}", record.title, translated.provenance);
        }

        let message = paper_message(&record, &translated, fetch_date);
        let delivery = match self.notifier.post_message(&message).await {
            Ok(status) => Delivery::Status(status),
            Err(e) => {
                error!("{}: failed to post {}: {}", self.notifier.name(), record.id, e);
                Delivery::Failed(e.to_string())
            }
        };

        PaperReport {
            id: record.id,
            title: record.title,
            outcome: PaperOutcome::Notified {
                provenance: translated.provenance,
                delivery,
            },
        }
    }
}
