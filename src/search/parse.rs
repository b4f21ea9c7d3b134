// src/search/parse.rs
//! Decoding of `path:line:text` search output.

use crate::types::SearchResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Converts raw search output into results for `api`.
///
/// Lines that are not UTF-8, lack a field, or carry a non-positive line
/// number are logged and dropped; later lines are still parsed. Paths under
/// `root` are made relative to it.
#[must_use]
pub fn parse_output(raw: &[u8], root: &Path, api: &str) -> Vec<SearchResult> {
    raw.split(|b| *b == b'\n')
        .filter_map(decode_line)
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_line(line, root, api))
        .collect()
}

fn decode_line(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(line) => Some(line),
        Err(e) => {
            debug!(
                "Not processing search result due to decode error: {e} ({})",
                String::from_utf8_lossy(bytes)
            );
            None
        }
    }
}

/// Parses one `path:line:text` record.
///
/// When the path is terminated by NUL (grep `--null`) the path may itself
/// contain colons; otherwise it ends at the first colon.
#[must_use]
pub fn parse_line(line: &str, root: &Path, api: &str) -> Option<SearchResult> {
    let (path, lineno, text) = match line.split_once('\0') {
        Some((path, rest)) => {
            let Some((lineno, text)) = rest.split_once(':') else {
                debug!("Missing line number after file name: {line}");
                return None;
            };
            (path, lineno, text)
        }
        None => {
            let mut fields = line.splitn(3, ':');
            let (Some(path), Some(lineno), Some(text)) = (fields.next(), fields.next(), fields.next())
            else {
                debug!("Missing search output format (filename:lineno:result): {line}");
                return None;
            };
            (path, lineno, text)
        }
    };

    let line_number = match lineno.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            debug!("Invalid line number '{lineno}' in search output: {line}");
            return None;
        }
    };

    if path.is_empty() {
        debug!("Empty path in search output: {line}");
        return None;
    }

    Some(SearchResult::new(
        relative_to(Path::new(path), root),
        line_number,
        api,
        text,
    ))
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
