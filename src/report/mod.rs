// src/report/mod.rs
//! Console summary and CSV reports.

pub mod console;
pub mod csv;
pub mod table;

pub use self::table::UsageTable;
use crate::config::ColumnPolicy;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const SUMMARY_FILE: &str = "top.csv";

/// Files produced by one report pass.
#[derive(Debug, Clone, Default)]
pub struct ReportFiles {
    pub summary: PathBuf,
    pub projects: Vec<PathBuf>,
}

impl ReportFiles {
    #[must_use]
    pub fn count(&self) -> usize {
        self.projects.len() + 1
    }
}

/// Deletes and recreates `dir`.
///
/// # Errors
/// Returns error if the directory cannot be removed or created.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("Failed to remove {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

/// Writes `top.csv` and one `<project>.csv` per matched project into a
/// freshly recreated `dir`.
///
/// # Errors
/// Returns error if the directory or any report file cannot be written.
pub fn write_reports(table: &UsageTable, dir: &Path, policy: ColumnPolicy) -> Result<ReportFiles> {
    recreate_dir(dir)?;

    let columns = table.columns(policy);
    let dropped = table.projects().len().saturating_sub(columns.len());
    if dropped > 0 {
        warn!("{dropped} projects are not summary columns under the {policy:?} policy");
    }

    let summary = dir.join(SUMMARY_FILE);
    write_file(&summary, &csv::render_summary(&columns, &table.summary_rows(&columns)))?;

    let mut files = ReportFiles { summary, projects: Vec::new() };
    for project in table.projects() {
        let path = dir.join(project_file_name(&project));
        write_file(&path, &csv::render_detail(&table.detail_rows(&project)))?;
        files.projects.push(path);
    }
    Ok(files)
}

/// `<project>.csv`, renamed when it would clobber the summary.
#[must_use]
pub fn project_file_name(project: &str) -> String {
    let name = format!("{project}.csv");
    if name == SUMMARY_FILE {
        warn!("Project '{project}' collides with {SUMMARY_FILE}; writing {project}.project.csv");
        return format!("{project}.project.csv");
    }
    name
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
