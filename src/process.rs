// src/process.rs
use crate::types::CommandOutput;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Maximum number of arguments echoed back in diagnostics.
const MAX_ECHOED_ARGS: usize = 8;

/// Runs one external program to completion and captures its output.
pub struct CommandRunner<'a> {
    program: &'a str,
    cwd: Option<&'a Path>,
}

impl<'a> CommandRunner<'a> {
    #[must_use]
    pub fn new(program: &'a str) -> Self {
        Self { program, cwd: None }
    }

    #[must_use]
    pub fn current_dir(mut self, cwd: &'a Path) -> Self {
        self.cwd = Some(cwd);
        self
    }

    /// Blocks until the program exits.
    ///
    /// # Errors
    /// Returns the spawn error if the program could not be launched. A
    /// non-zero exit is not an error here; callers inspect `exit_code`.
    pub fn run<I, S>(&self, args: I) -> io::Result<CommandOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let command = self.describe(&args);
        let start = Instant::now();

        let mut cmd = Command::new(self.program);
        cmd.args(&args).stdin(Stdio::null());
        if let Some(cwd) = self.cwd {
            cmd.current_dir(cwd);
        }
        let output = cmd.output()?;

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;

        Ok(CommandOutput {
            command,
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms,
        })
    }

    /// Human-readable command line, truncated for batches of thousands of paths.
    fn describe<S: AsRef<OsStr>>(&self, args: &[S]) -> String {
        let mut parts = vec![self.program.to_string()];
        parts.extend(
            args.iter()
                .take(MAX_ECHOED_ARGS)
                .map(|a| a.as_ref().to_string_lossy().into_owned()),
        );
        if args.len() > MAX_ECHOED_ARGS {
            parts.push(format!("... ({} more)", args.len() - MAX_ECHOED_ARGS));
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_truncates_long_argument_lists() {
        let runner = CommandRunner::new("grep");
        let args: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let text = runner.describe(&args);
        assert!(text.starts_with("grep f0 f1"));
        assert!(text.ends_with("... (12 more)"));
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let runner = CommandRunner::new("definitely-not-a-real-program-app-grep");
        assert!(runner.run(["--version"]).is_err());
    }
}
