use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration, read from `app-grep.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_repo_list")]
    pub repo_list: PathBuf,
    #[serde(default = "default_api_list")]
    pub api_list: PathBuf,
    #[serde(default = "default_apps_root")]
    pub apps_root: PathBuf,
    #[serde(default = "default_results_root")]
    pub results_root: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_list: default_repo_list(),
            api_list: default_api_list(),
            apps_root: default_apps_root(),
            results_root: default_results_root(),
            log_file: default_log_file(),
            fetch: FetchConfig::default(),
            scan: ScanConfig::default(),
            search: SearchConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

fn default_repo_list() -> PathBuf { PathBuf::from("repo.txt") }
fn default_api_list() -> PathBuf { PathBuf::from("api.txt") }
fn default_apps_root() -> PathBuf { PathBuf::from("apps") }
fn default_results_root() -> PathBuf { PathBuf::from("results") }
fn default_log_file() -> PathBuf { PathBuf::from("search.log") }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Program used for cloning.
    #[serde(default = "default_git")]
    pub git: String,
    /// History depth passed to `git clone --depth`.
    #[serde(default = "default_depth")]
    pub depth: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { git: default_git(), depth: default_depth() }
    }
}

fn default_git() -> String { "git".to_string() }
const fn default_depth() -> u32 { 1 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// `.ext` patterns match by extension, anything else by exact file name.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
    /// Directory names never descended into.
    #[serde(default = "default_prune_dirs")]
    pub prune_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { patterns: default_patterns(), prune_dirs: default_prune_dirs() }
    }
}

fn default_patterns() -> Vec<String> {
    vec![".cmake".into(), "CMakeLists.txt".into()]
}

fn default_prune_dirs() -> Vec<String> {
    vec![".git".into()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Shell out to `grep` per (API, batch).
    Grep,
    /// Search files in-process.
    Builtin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_engine")]
    pub engine: SearchEngine,
    /// Program used by the `grep` engine.
    #[serde(default = "default_grep")]
    pub grep: String,
    /// Maximum number of paths handed to one search invocation.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Count every occurrence on a line instead of one match per line.
    #[serde(default)]
    pub count_each_occurrence: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            grep: default_grep(),
            batch_size: default_batch_size(),
            count_each_occurrence: false,
        }
    }
}

const fn default_engine() -> SearchEngine { SearchEngine::Grep }
fn default_grep() -> String { "grep".to_string() }
const fn default_batch_size() -> usize { 10_000 }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnPolicy {
    /// Every project seen under any API, zero-filled.
    Union,
    /// Only the projects of the first aggregated API.
    FirstApi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_columns")]
    pub columns: ColumnPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { columns: default_columns() }
    }
}

const fn default_columns() -> ColumnPolicy { ColumnPolicy::Union }
