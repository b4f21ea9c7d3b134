// src/cli/handlers.rs
use super::args::GlobalOpts;
use crate::config::Config;
use crate::discovery;
use crate::exit::AppGrepExit;
use crate::fetch::{self, FetchReport, GitCli};
use crate::logging;
use crate::pipeline::{self, RunOutcome};
use crate::search;
use crate::types::display_path;
use anyhow::{Context, Result};
use colored::Colorize;

/// Loads the config file, applies flags, validates and anchors relative
/// paths at the working directory.
///
/// # Errors
/// Returns error on an unreadable or invalid config.
pub fn prepare(opts: &GlobalOpts) -> Result<Config> {
    let mut config = Config::load(opts.config.as_deref())?;
    opts.apply(&mut config);
    config.validate()?;

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    config.anchor_paths(&cwd);
    Ok(config)
}

/// Starts the run's log file.
///
/// # Errors
/// Returns error if the log file cannot be created.
pub fn start_logging(config: &Config, verbose: bool) -> Result<()> {
    logging::init(&config.log_file, verbose)
}

/// Handles the full run.
///
/// # Errors
/// Returns error if reports cannot be written.
pub fn handle_run(config: &Config) -> Result<AppGrepExit> {
    let cloner = GitCli::from_config(&config.fetch);
    let provider = search::provider_for(&config.search, &config.apps_root);

    match pipeline::run(config, &cloner, provider.as_ref())? {
        RunOutcome::Aborted(_) => {
            println!("{}", "Couldn't clone any repo".red());
            println!("See {}", config.log_file.display());
            println!("{}", "Abort!".red().bold());
        }
        RunOutcome::Completed(summary) => {
            if summary.table.is_empty() {
                println!("{}", "No matches found.".yellow());
            }
            if summary.stats.failures > 0 {
                println!(
                    "{} {} of {} searches failed, see {}",
                    "warning:".yellow().bold(),
                    summary.stats.failures,
                    summary.stats.invocations,
                    config.log_file.display()
                );
            }
            println!(
                "{} {} matches, {} report files in {}",
                "Done.".green().bold(),
                summary.table.total_matches(),
                summary.reports.count(),
                config.results_root.display()
            );
        }
    }
    Ok(AppGrepExit::Success)
}

/// Handles the fetch command.
///
/// # Errors
/// Returns error if the repositories root cannot be created.
pub fn handle_fetch(config: &Config) -> Result<AppGrepExit> {
    let cloner = GitCli::from_config(&config.fetch);
    let report = fetch::fetch_all(&config.repo_list, &config.apps_root, &cloner)?;
    print_fetch_report(&report);
    if !report.has_repositories() {
        println!("{}", "Couldn't clone any repo".red());
        println!("See {}", config.log_file.display());
    }
    Ok(AppGrepExit::Success)
}

fn print_fetch_report(report: &FetchReport) {
    if report.list_missing {
        println!("{}", "Repository list not found; using existing clones.".yellow());
    }
    println!(
        "{} cloned, {} already present, {} rejected, {} failed",
        report.cloned.len().to_string().green(),
        report.present.len(),
        report.rejected.len().to_string().yellow(),
        report.failed.len().to_string().red()
    );
    if report.has_repositories() && !report.cloned_any() {
        println!("Nothing new to clone.");
    }
}

/// Handles the files command.
#[must_use]
pub fn handle_files(config: &Config) -> AppGrepExit {
    let files = discovery::discover(&config.apps_root, &config.scan);
    for f in &files {
        let rel = f.strip_prefix(&config.apps_root).unwrap_or(f);
        println!("{}", display_path(rel));
    }
    println!("{} files", files.len());
    AppGrepExit::Success
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the config cannot be serialized.
pub fn handle_config(config: &Config) -> Result<AppGrepExit> {
    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{text}");
    Ok(AppGrepExit::Success)
}
