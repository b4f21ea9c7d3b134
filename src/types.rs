// src/types.rs
use std::path::{Component, Path, PathBuf};

/// A single match reported by a search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Path relative to the repositories root. Its first segment is the project.
    pub file_path: PathBuf,
    /// 1-based line number as reported by the search tool.
    pub line_number: usize,
    /// The API whose search produced this match.
    pub api_name: String,
    /// Matched text as reported by the tool. Not written to reports.
    pub text: String,
}

impl SearchResult {
    #[must_use]
    pub fn new(file_path: PathBuf, line_number: usize, api_name: &str, text: &str) -> Self {
        Self {
            file_path,
            line_number,
            api_name: api_name.to_string(),
            text: text.to_string(),
        }
    }

    /// Project this match belongs to.
    #[must_use]
    pub fn project_name(&self) -> String {
        project_name_of(&self.file_path)
    }
}

/// Returns the first segment of a root-relative path.
///
/// `proj/src/a.c` yields `proj`. Leading `./` and root components are skipped;
/// an empty path yields an empty string.
#[must_use]
pub fn project_name_of(path: &Path) -> String {
    path.components()
        .find_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Forward-slash rendering of a path, used in reports and console output.
#[must_use]
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Result of an external command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub command: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: String,
    pub duration_ms: u64,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Lossy text rendering of stdout for diagnostics.
    #[must_use]
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}
