// src/config/io.rs
use super::types::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "app-grep.toml";

/// Reads the config file if one applies.
///
/// An explicitly named file must exist. Without one, `app-grep.toml` in the
/// working directory is used when present and defaults otherwise.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(p) => p,
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if !p.is_file() {
                return Ok(Config::default());
            }
            p
        }
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content, path)
}

/// Parses config text; `path` is used for error messages only.
///
/// # Errors
/// Returns error on malformed TOML or mistyped values.
pub fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        source,
        path: path.to_path_buf(),
    })
}
