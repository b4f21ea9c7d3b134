// src/pipeline.rs
//! The full run: fetch, enumerate, search, report.

use crate::apis;
use crate::config::Config;
use crate::discovery;
use crate::fetch::{self, CloneBackend, FetchReport};
use crate::report::{self, ReportFiles, UsageTable};
use crate::search::{self, SearchProvider, SearchStats};
use anyhow::Result;
use tracing::{info, warn};

/// Everything one completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub fetch: FetchReport,
    pub files_searched: usize,
    pub apis: Vec<String>,
    pub stats: SearchStats,
    pub table: UsageTable,
    pub reports: ReportFiles,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// No repository was available after fetching; nothing was searched.
    Aborted(FetchReport),
    Completed(RunSummary),
}

/// Runs the pipeline with the given clone and search backends.
///
/// Per-repository and per-search failures are logged and skipped.
///
/// # Errors
/// Returns error if the repositories root or the results directory cannot
/// be created or written.
pub fn run(
    config: &Config,
    cloner: &dyn CloneBackend,
    provider: &dyn SearchProvider,
) -> Result<RunOutcome> {
    let fetched = fetch::fetch_all(&config.repo_list, &config.apps_root, cloner)?;
    if !fetched.has_repositories() {
        warn!("No repository available under {}", config.apps_root.display());
        return Ok(RunOutcome::Aborted(fetched));
    }

    println!("Looking for projects in '{}'", config.apps_root.display());
    let files = discovery::discover(&config.apps_root, &config.scan);

    let apis = apis::load_api_list(&config.api_list);
    println!("Searching for {} APIs in {} source files", apis.len(), files.len());
    info!("Searching with {} in batches of {}", provider.name(), config.search.batch_size);

    let (results, stats) = search::search_all(&apis, &files, config.search.batch_size, provider);
    let table = UsageTable::from_results(&results);

    report::console::print_counts(&table)?;
    let reports = report::write_reports(&table, &config.results_root, config.report.columns)?;

    Ok(RunOutcome::Completed(RunSummary {
        fetch: fetched,
        files_searched: files.len(),
        apis,
        stats,
        table,
        reports,
    }))
}
