//! Structured outcome of a pipeline run.

use crate::translate::Provenance;
use chrono::NaiveDate;

/// How the run as a whole ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The source returned nothing; the cache was not read or written.
    NoResults,
    /// Papers were processed and the cache was persisted.
    Completed,
}

/// What happened to the notification for one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The sink answered with this status code (success or not).
    Status(u16),
    /// The request never produced a status.
    Failed(String),
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        matches!(self, Delivery::Status(code) if (200..300).contains(code))
    }
}

/// What happened to one paper within the per-run cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperOutcome {
    /// Already in the cache from an earlier run.
    Skipped,
    /// Cached, translated and handed to the notifier.
    Notified {
        provenance: Provenance,
        delivery: Delivery,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperReport {
    pub id: String,
    pub title: String,
    pub outcome: PaperOutcome,
}

/// Summary of one run, in the order papers were considered.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub fetch_date: NaiveDate,
    pub outcome: RunOutcome,
    /// Number of papers the source returned before the cap.
    pub fetched: usize,
    pub papers: Vec<PaperReport>,
}

impl RunReport {
    pub(crate) fn no_results(fetch_date: NaiveDate) -> Self {
        Self {
            fetch_date,
            outcome: RunOutcome::NoResults,
            fetched: 0,
            papers: Vec::new(),
        }
    }

    pub fn notified(&self) -> impl Iterator<Item = &PaperReport> {
        self.papers
            .iter()
            .filter(|p| matches!(p.outcome, PaperOutcome::Notified { .. }))
    }

    pub fn notified_count(&self) -> usize {
        self.notified().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.papers
            .iter()
            .filter(|p| p.outcome == PaperOutcome::Skipped)
            .count()
    }

    /// Papers whose notification did not get a 2xx answer.
    pub fn failed_deliveries(&self) -> usize {
        self.papers
            .iter()
            .filter(|p| match &p.outcome {
                PaperOutcome::Notified { delivery, .. } => !delivery.is_success(),
                PaperOutcome::Skipped => false,
            })
            .count()
    }
}
