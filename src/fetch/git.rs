// src/fetch/git.rs
use super::CloneBackend;
use crate::config::FetchConfig;
use crate::error::{describe_status, FetchError};
use crate::process::CommandRunner;
use std::path::Path;
use tracing::debug;

/// Clones with the `git` command line.
pub struct GitCli {
    program: String,
    depth: u32,
}

impl GitCli {
    #[must_use]
    pub fn new(program: impl Into<String>, depth: u32) -> Self {
        Self { program: program.into(), depth }
    }

    #[must_use]
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.git.clone(), config.depth)
    }
}

impl CloneBackend for GitCli {
    fn clone_repo(&self, url: &str, dest_root: &Path, name: &str) -> Result<(), FetchError> {
        let depth = self.depth.to_string();
        let args = ["clone", "--depth", depth.as_str(), url, name];
        let output = CommandRunner::new(&self.program)
            .current_dir(dest_root)
            .run(args)
            .map_err(|source| FetchError::Spawn {
                command: format!("{} {}", self.program, args.join(" ")),
                source,
            })?;

        if output.success() {
            debug!("{} finished in {}ms", output.command, output.duration_ms);
            return Ok(());
        }

        debug!("Non-zero return code for command: '{}'", output.command);
        debug!("stdout: {}", output.stdout_lossy().trim_end());
        debug!("stderr: {}", output.stderr.trim_end());
        Err(FetchError::Exit {
            command: output.command,
            status: describe_status(output.exit_code),
        })
    }
}
