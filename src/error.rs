// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// A single repository could not be cloned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Exit { command: String, status: String },
}

/// A single (API, batch) search invocation failed.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Renders an optional exit code the way diagnostics print it.
#[must_use]
pub fn describe_status(code: Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| format!("status {c}"))
}
