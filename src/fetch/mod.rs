// src/fetch/mod.rs
//! Repository fetching: read the URL list and shallow-clone what is missing.

pub mod git;

pub use self::git::GitCli;
use crate::error::FetchError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Suffix every accepted repository URL must carry.
pub const CLONE_SUFFIX: &str = ".git";

/// Anything that can materialize `url` as `dest_root/name`.
pub trait CloneBackend {
    /// # Errors
    /// Returns error if the clone could not be performed.
    fn clone_repo(&self, url: &str, dest_root: &Path, name: &str) -> Result<(), FetchError>;
}

/// Outcome of one fetch step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Repository names cloned by this invocation.
    pub cloned: Vec<String>,
    /// Repository names whose directory already existed.
    pub present: Vec<String>,
    /// URLs skipped for lacking the clone suffix.
    pub rejected: Vec<String>,
    /// URLs whose clone failed.
    pub failed: Vec<String>,
    /// The list file was absent or unreadable.
    pub list_missing: bool,
}

impl FetchReport {
    /// Repositories on disk after this step.
    #[must_use]
    pub fn available(&self) -> usize {
        self.cloned.len() + self.present.len()
    }

    #[must_use]
    pub fn has_repositories(&self) -> bool {
        self.available() > 0
    }

    #[must_use]
    pub fn cloned_any(&self) -> bool {
        !self.cloned.is_empty()
    }
}

/// Ensures every repository listed in `list_path` exists under `dest_root`.
///
/// Individual failures are logged and recorded in the report; they never
/// abort the step.
///
/// # Errors
/// Returns error only if `dest_root` cannot be created or listed.
pub fn fetch_all(
    list_path: &Path,
    dest_root: &Path,
    backend: &dyn CloneBackend,
) -> Result<FetchReport> {
    fs::create_dir_all(dest_root)
        .with_context(|| format!("Failed to create {}", dest_root.display()))?;

    let mut report = FetchReport::default();

    let Some(content) = read_list(list_path) else {
        report.list_missing = true;
        report.present = existing_projects(dest_root)?;
        info!(
            "Using {} existing repositories under {}",
            report.present.len(),
            dest_root.display()
        );
        return Ok(report);
    };

    for url in list_entries(&content) {
        fetch_one(url, dest_root, backend, &mut report);
    }

    info!(
        "Fetch: {} cloned, {} present, {} rejected, {} failed",
        report.cloned.len(),
        report.present.len(),
        report.rejected.len(),
        report.failed.len()
    );
    Ok(report)
}

fn read_list(list_path: &Path) -> Option<String> {
    if !list_path.is_file() {
        warn!("Missing file: {}", list_path.display());
        return None;
    }
    match fs::read_to_string(list_path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Failed to read {}: {e}", list_path.display());
            None
        }
    }
}

/// Non-blank, non-comment lines of a repository list, trimmed.
pub fn list_entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

fn fetch_one(url: &str, dest_root: &Path, backend: &dyn CloneBackend, report: &mut FetchReport) {
    let Some(name) = repo_name_from_url(url) else {
        debug!("Unsupported URI: '{url}'");
        report.rejected.push(url.to_string());
        return;
    };

    let target = dest_root.join(&name);
    if target.exists() {
        debug!("{} exists. NOT cloning {url}", target.display());
        report.present.push(name);
        return;
    }

    print!("Cloning {url}... ");
    let _ = std::io::stdout().flush();

    match backend.clone_repo(url, dest_root, &name) {
        Ok(()) => {
            println!("{}", "done".green());
            report.cloned.push(name);
        }
        Err(e) => {
            println!("{}", "failed".red());
            debug!("Failed to clone {url}: {e}");
            report.failed.push(url.to_string());
        }
    }
}

/// Local directory name for a clone URL: the last path segment without `.git`.
///
/// Handles `https://host/owner/name.git`, `host:owner/name.git` and plain
/// filesystem paths. Returns `None` for URLs lacking the suffix.
#[must_use]
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let stem = url.trim_end_matches('/').strip_suffix(CLONE_SUFFIX)?;
    let name = stem.rsplit(['/', '\\', ':']).next().unwrap_or(stem);
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

fn existing_projects(dest_root: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dest_root)
        .with_context(|| format!("Failed to list {}", dest_root.display()))?
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_from_common_url_shapes() {
        assert_eq!(
            repo_name_from_url("https://github.com/madler/zlib.git").as_deref(),
            Some("zlib")
        );
        assert_eq!(
            repo_name_from_url("git@github.com:madler/zlib.git").as_deref(),
            Some("zlib")
        );
        assert_eq!(repo_name_from_url("git@host:zlib.git").as_deref(), Some("zlib"));
        assert_eq!(repo_name_from_url("/srv/mirror/fmt.git").as_deref(), Some("fmt"));
    }

    #[test]
    fn urls_without_suffix_have_no_name() {
        assert_eq!(repo_name_from_url("https://github.com/madler/zlib"), None);
        assert_eq!(repo_name_from_url("https://github.com/madler/zlib.tar.gz"), None);
        assert_eq!(repo_name_from_url("https://host/.git"), None);
    }

    #[test]
    fn list_entries_skip_comments_and_blanks() {
        let content = "# header\n\n  https://a/x.git  \n#https://a/y.git\nhttps://a/z.git\n";
        let entries: Vec<&str> = list_entries(content).collect();
        assert_eq!(entries, vec!["https://a/x.git", "https://a/z.git"]);
    }
}
