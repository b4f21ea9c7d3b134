use crate::config::{ColumnPolicy, Config, SearchEngine};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "app-grep",
    version,
    about = "Count literal API usages across a corpus of cloned repositories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub opts: GlobalOpts,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Fetch repositories, search every API and write the reports (default)
    Run,
    /// Clone missing repositories and stop
    Fetch,
    /// List the files that would be searched
    Files,
    /// Print the effective configuration as TOML
    Config,
}

/// Options that override `app-grep.toml`.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Config file [default: app-grep.toml if present]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// File listing repository URLs
    #[arg(long, global = true, value_name = "FILE")]
    pub repo_list: Option<PathBuf>,
    /// File listing API names, one per line
    #[arg(long, global = true, value_name = "FILE")]
    pub api_list: Option<PathBuf>,
    /// Directory holding cloned repositories
    #[arg(long, global = true, value_name = "DIR")]
    pub apps_root: Option<PathBuf>,
    /// Directory recreated for the CSV reports
    #[arg(long, global = true, value_name = "DIR")]
    pub results: Option<PathBuf>,
    /// Diagnostic log, truncated each run
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    /// Files handed to one search invocation
    #[arg(long, global = true, value_name = "N")]
    pub batch_size: Option<usize>,
    #[arg(long, global = true, value_enum)]
    pub engine: Option<SearchEngine>,
    /// Summary column policy
    #[arg(long, global = true, value_enum)]
    pub columns: Option<ColumnPolicy>,
    /// Count every occurrence instead of matching lines
    #[arg(long, global = true)]
    pub each_occurrence: bool,
    /// Mirror the log on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(p) = &self.repo_list {
            config.repo_list.clone_from(p);
        }
        if let Some(p) = &self.api_list {
            config.api_list.clone_from(p);
        }
        if let Some(p) = &self.apps_root {
            config.apps_root.clone_from(p);
        }
        if let Some(p) = &self.results {
            config.results_root.clone_from(p);
        }
        if let Some(p) = &self.log_file {
            config.log_file.clone_from(p);
        }
        if let Some(n) = self.batch_size {
            config.search.batch_size = n;
        }
        if let Some(engine) = self.engine {
            config.search.engine = engine;
        }
        if let Some(columns) = self.columns {
            config.report.columns = columns;
        }
        if self.each_occurrence {
            config.search.count_each_occurrence = true;
        }
    }
}
