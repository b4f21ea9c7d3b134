// src/report/console.rs
use super::table::UsageTable;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

/// Renders the per-API, per-project match counts.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_counts(table: &UsageTable, colored: bool) -> Result<String> {
    let mut out = String::new();
    for api in table.apis() {
        if colored {
            writeln!(out, "{}", api.api.bold())?;
        } else {
            writeln!(out, "{}", api.api)?;
        }
        for p in &api.projects {
            writeln!(out, "  {}: {}", p.project, p.locations.len())?;
        }
    }
    Ok(out)
}

/// Prints the counts to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_counts(table: &UsageTable) -> Result<()> {
    print!("{}", render_counts(table, true)?);
    Ok(())
}
