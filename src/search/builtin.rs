// src/search/builtin.rs
//! In-process search with `grep -nHwF` semantics.
//!
//! Output is rendered in grep's `--null` record format and decoded by the
//! same parser, so both providers produce identical records.

use super::parse::parse_output;
use super::SearchProvider;
use crate::error::SearchError;
use crate::types::SearchResult;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Finds whole-word, case-sensitive occurrences of a literal.
pub struct WordFinder {
    needle: Regex,
}

impl WordFinder {
    /// # Errors
    /// Returns error if the escaped literal cannot be compiled.
    pub fn new(literal: &str) -> Result<Self, regex::Error> {
        Ok(Self { needle: Regex::new(&regex::escape(literal))? })
    }

    /// Number of occurrences in `line` that are not embedded in a longer word.
    #[must_use]
    pub fn count(&self, line: &str) -> usize {
        let mut count = 0;
        let mut start = 0;
        while let Some(m) = self.needle.find_at(line, start) {
            if m.start() == m.end() {
                break;
            }
            if is_word_bounded(line, m.start(), m.end()) {
                count += 1;
                start = m.end();
            } else {
                // Retry one character later; a bounded match may overlap this one.
                start = m.start() + line[m.start()..].chars().next().map_or(1, char::len_utf8);
            }
            if start > line.len() {
                break;
            }
        }
        count
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_bounded(line: &str, start: usize, end: usize) -> bool {
    let before = line[..start].chars().next_back();
    let after = line[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Reads each file of the batch and matches it line by line.
pub struct BuiltinProvider {
    root: PathBuf,
    each_occurrence: bool,
}

impl BuiltinProvider {
    #[must_use]
    pub fn new(root: &Path, each_occurrence: bool) -> Self {
        Self { root: root.to_path_buf(), each_occurrence }
    }

    /// Appends grep `--null` records for `path`. Unreadable files and
    /// lines that are not UTF-8 produce nothing, as they would after
    /// decoding grep's output.
    fn render_file(&self, finder: &WordFinder, api: &str, path: &Path, out: &mut Vec<u8>) {
        let Some(shown) = path.to_str() else {
            debug!("Skipping non UTF-8 path {}", path.display());
            return;
        };
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                warn!("Skipped while searching '{api}': {}: {e}", path.display());
                return;
            }
        };

        for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let Ok(line) = std::str::from_utf8(raw) else {
                continue;
            };
            let hits = finder.count(line);
            if hits == 0 {
                continue;
            }
            let lineno = idx + 1;
            if self.each_occurrence {
                for _ in 0..hits {
                    let _ = writeln!(out, "{shown}\0{lineno}:{api}");
                }
            } else {
                let _ = writeln!(out, "{shown}\0{lineno}:{line}");
            }
        }
    }
}

impl SearchProvider for BuiltinProvider {
    fn name(&self) -> &str {
        "builtin"
    }

    fn search(&self, api: &str, batch: &[PathBuf]) -> Result<Vec<SearchResult>, SearchError> {
        if batch.is_empty() || api.is_empty() {
            return Ok(Vec::new());
        }
        let finder = WordFinder::new(api)?;
        let mut raw = Vec::new();
        for path in batch {
            self.render_file(&finder, api, path, &mut raw);
        }
        Ok(parse_output(&raw, &self.root, api))
    }
}
