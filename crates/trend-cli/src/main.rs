//! Paper Trend - scheduled job that announces trending papers.
//!
//! Fetches the trending papers, translates new abstracts into Japanese and
//! posts one Slack message per paper. Meant to be run from cron or a CI
//! schedule; every remote failure is logged and absorbed.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use trend_core::config::{PathsConfig, TrendSourceConfig};
use trend_core::{Pipeline, RunOutcome, Settings};

#[derive(Parser, Debug)]
#[command(name = "paper-trend")]
#[command(about = "Post translated trending papers to Slack")]
struct Args {
    /// Dedup cache file
    #[arg(long, default_value_os_t = PathsConfig::default_cache_path())]
    cache_path: PathBuf,

    /// Maximum number of papers considered per run
    #[arg(long, default_value_t = TrendSourceConfig::MAX_PAPERS_PER_RUN)]
    max_papers: usize,

    /// Log messages instead of posting them
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    let pipeline = Pipeline::builder(Settings::from_env())
        .cache_path(&args.cache_path)
        .max_papers(args.max_papers)
        .dry_run(args.dry_run)
        .build()
        .context("failed to set up pipeline")?;

    let report = pipeline
        .run()
        .await
        .with_context(|| format!("trend run failed ({})", args.cache_path.display()))?;

    match report.outcome {
        RunOutcome::NoResults => info!("Nothing to announce"),
        RunOutcome::Completed => info!(
            "Announced {} papers ({} already seen, {} deliveries failed)",
            report.notified_count(),
            report.skipped_count(),
            report.failed_deliveries()
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["paper-trend"]).unwrap();
        assert_eq!(args.cache_path, PathBuf::from(".cache").join("trend.json"));
        assert_eq!(args.max_papers, 20);
        assert!(!args.dry_run);
        assert!(!args.debug);
    }

    #[test]
    fn test_custom_args() {
        let args = Args::try_parse_from([
            "paper-trend",
            "--cache-path",
            "/var/lib/trend.json",
            "--max-papers",
            "5",
            "--dry-run",
            "-d",
        ])
        .unwrap();
        assert_eq!(args.cache_path, PathBuf::from("/var/lib/trend.json"));
        assert_eq!(args.max_papers, 5);
        assert!(args.dry_run);
        assert!(args.debug);
    }
}
