// src/search/mod.rs
//! Batch search driver and the providers it can run.

pub mod builtin;
pub mod grep;
pub mod parse;

pub use self::builtin::BuiltinProvider;
pub use self::grep::GrepProvider;
use crate::config::{SearchConfig, SearchEngine};
use crate::error::SearchError;
use crate::types::SearchResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Searches one batch of files for one API.
pub trait SearchProvider {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Returns every whole-word, case-sensitive match of `api` in `batch`.
    /// Result paths are relative to the repositories root.
    ///
    /// # Errors
    /// Returns error if the search could not be performed at all.
    fn search(&self, api: &str, batch: &[PathBuf]) -> Result<Vec<SearchResult>, SearchError>;
}

/// Builds the provider selected by the config, rooted at `root`.
#[must_use]
pub fn provider_for(config: &SearchConfig, root: &Path) -> Box<dyn SearchProvider> {
    match config.engine {
        SearchEngine::Grep => Box::new(GrepProvider::new(
            config.grep.clone(),
            root,
            config.count_each_occurrence,
        )),
        SearchEngine::Builtin => Box::new(BuiltinProvider::new(root, config.count_each_occurrence)),
    }
}

/// Splits `files` into consecutive batches of at most `size` paths.
pub fn batches(files: &[PathBuf], size: usize) -> impl Iterator<Item = &[PathBuf]> {
    files.chunks(size.max(1))
}

/// Counters for one search pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub batches: usize,
    pub invocations: usize,
    pub failures: usize,
}

/// Runs every API over every batch, batches outermost.
///
/// A failed (API, batch) pair is logged and contributes nothing.
pub fn search_all(
    apis: &[String],
    files: &[PathBuf],
    batch_size: usize,
    provider: &dyn SearchProvider,
) -> (Vec<SearchResult>, SearchStats) {
    let mut results = Vec::new();
    let mut stats = SearchStats::default();

    for batch in batches(files, batch_size) {
        if batch.is_empty() {
            continue;
        }
        stats.batches += 1;
        for api in apis {
            stats.invocations += 1;
            match provider.search(api, batch) {
                Ok(found) => {
                    debug!(
                        "{}: {} matches for '{api}' in batch {} ({} files)",
                        provider.name(),
                        found.len(),
                        stats.batches,
                        batch.len()
                    );
                    results.extend(found);
                }
                Err(e) => {
                    stats.failures += 1;
                    warn!("{} failed while searching {api}: {e}", provider.name());
                }
            }
        }
    }

    info!(
        "Search finished: {} results, {} invocations, {} failures",
        results.len(),
        stats.invocations,
        stats.failures
    );
    (results, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        calls: RefCell<Vec<(String, usize)>>,
        fail_on: Option<&'static str>,
    }

    impl SearchProvider for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn search(&self, api: &str, batch: &[PathBuf]) -> Result<Vec<SearchResult>, SearchError> {
            self.calls.borrow_mut().push((api.to_string(), batch.len()));
            if self.fail_on == Some(api) {
                return Err(SearchError::Exit {
                    command: "recorder".into(),
                    status: "status 2".into(),
                    stderr: String::new(),
                });
            }
            Ok(batch
                .iter()
                .map(|p| SearchResult::new(p.clone(), 1, api, api))
                .collect())
        }
    }

    fn files(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("p/{i}.cmake"))).collect()
    }

    #[test]
    fn batches_cover_every_file_once_in_order() {
        for (n, b) in [(0, 3), (1, 3), (3, 3), (7, 3), (10_001, 10_000)] {
            let all = files(n);
            let parts: Vec<&[PathBuf]> = batches(&all, b).collect();
            assert_eq!(parts.len(), (n + b - 1) / b);
            assert!(parts.iter().all(|p| !p.is_empty() && p.len() <= b));
            let flat: Vec<PathBuf> = parts.concat();
            assert_eq!(flat, all);
        }
    }

    #[test]
    fn every_api_runs_per_batch_and_failures_are_skipped() {
        let provider = Recorder { calls: RefCell::new(Vec::new()), fail_on: Some("bad") };
        let apis = vec!["foo".to_string(), "bad".to_string()];
        let (results, stats) = search_all(&apis, &files(5), 2, &provider);

        assert_eq!(stats.batches, 3);
        assert_eq!(stats.invocations, 6);
        assert_eq!(stats.failures, 3);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.api_name == "foo"));

        let calls = provider.calls.borrow();
        let order: Vec<(&str, usize)> = calls.iter().map(|(a, n)| (a.as_str(), *n)).collect();
        assert_eq!(
            order,
            vec![("foo", 2), ("bad", 2), ("foo", 2), ("bad", 2), ("foo", 1), ("bad", 1)]
        );
    }

    #[test]
    fn no_files_means_no_invocations() {
        let provider = Recorder { calls: RefCell::new(Vec::new()), fail_on: None };
        let (results, stats) = search_all(&["foo".to_string()], &[], 10, &provider);
        assert!(results.is_empty());
        assert_eq!(stats.invocations, 0);
        assert!(provider.calls.borrow().is_empty());
    }
}
