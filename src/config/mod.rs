// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    ColumnPolicy, Config, FetchConfig, ReportConfig, ScanConfig, SearchConfig, SearchEngine,
};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `app-grep.toml` (or the named file) on top of the defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        io::load(explicit)
    }

    /// Rejects values the pipeline cannot run with.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.batch_size == 0 {
            return Err(ConfigError::Invalid("search.batch_size must be at least 1".into()));
        }
        if self.fetch.depth == 0 {
            return Err(ConfigError::Invalid("fetch.depth must be at least 1".into()));
        }
        if self.scan.patterns.iter().all(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid("scan.patterns must not be empty".into()));
        }
        Ok(())
    }

    /// Anchors every relative path at `base`.
    ///
    /// Search output is stripped of the repositories root, so that root must
    /// be absolute before any file is enumerated.
    pub fn anchor_paths(&mut self, base: &Path) {
        for p in [
            &mut self.repo_list,
            &mut self.api_list,
            &mut self.apps_root,
            &mut self.results_root,
            &mut self.log_file,
        ] {
            *p = anchor(base, p);
        }
    }
}

fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
