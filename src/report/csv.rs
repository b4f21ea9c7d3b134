// src/report/csv.rs
//! Comma-separated rendering with RFC 4180 quoting.

use super::table::{DetailRow, SummaryRow};

pub const DETAIL_HEADER: [&str; 3] = ["API", "Source File Path", "Line number"];

/// Renders `top.csv`: `API` followed by one column per project.
#[must_use]
pub fn render_summary(columns: &[String], rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    let header: Vec<&str> = std::iter::once("API")
        .chain(columns.iter().map(String::as_str))
        .collect();
    push_row(&mut out, &header);

    for row in rows {
        let counts: Vec<String> = row.counts.iter().map(ToString::to_string).collect();
        let fields: Vec<&str> = std::iter::once(row.api.as_str())
            .chain(counts.iter().map(String::as_str))
            .collect();
        push_row(&mut out, &fields);
    }
    out
}

/// Renders one `<project>.csv`.
#[must_use]
pub fn render_detail(rows: &[DetailRow]) -> String {
    let mut out = String::new();
    push_row(&mut out, &DETAIL_HEADER);
    for row in rows {
        let line = row.line_number.to_string();
        push_row(&mut out, &[row.api.as_str(), row.file_path.as_str(), line.as_str()]);
    }
    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    let escaped: Vec<String> = fields.iter().map(|f| escape_csv_field(f)).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

/// Quotes fields containing commas, double quotes or line breaks; inner
/// quotes are doubled.
#[must_use]
pub fn escape_csv_field(s: &str) -> String {
    let needs_quoting = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');

    if needs_quoting {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
