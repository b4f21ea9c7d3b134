// src/apis.rs
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads one API name per line, trimmed, in file order.
///
/// A missing or unreadable file yields an empty list; blank lines are
/// skipped since an empty pattern would match every line.
#[must_use]
pub fn load_api_list(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_api_list(&content),
        Err(e) => {
            warn!("Failed to read API list file {}: {e}", path.display());
            Vec::new()
        }
    }
}

#[must_use]
pub fn parse_api_list(content: &str) -> Vec<String> {
    let mut apis = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let api = line.trim();
        if api.is_empty() {
            debug!("Skipping blank API entry on line {}", idx + 1);
            continue;
        }
        apis.push(api.to_string());
    }
    apis
}
