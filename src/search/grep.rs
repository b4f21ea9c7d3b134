// src/search/grep.rs
use super::parse::parse_output;
use super::SearchProvider;
use crate::error::{describe_status, SearchError};
use crate::process::CommandRunner;
use crate::types::SearchResult;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `grep` exits with 1 when nothing matched.
const GREP_NO_MATCH: i32 = 1;

/// `grep` exits with 2 on any error, including a single unreadable file.
const GREP_TROUBLE: i32 = 2;

/// Runs an external `grep` per (API, batch).
pub struct GrepProvider {
    program: String,
    root: PathBuf,
    each_occurrence: bool,
}

impl GrepProvider {
    #[must_use]
    pub fn new(program: impl Into<String>, root: &Path, each_occurrence: bool) -> Self {
        Self {
            program: program.into(),
            root: root.to_path_buf(),
            each_occurrence,
        }
    }

    /// Line-numbered, file-prefixed, whole-word, fixed-string search.
    /// Binary files are read as text and file names end in NUL.
    fn build_args(&self, api: &str, batch: &[PathBuf]) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-n".into(), "-H".into(), "-w".into(), "-F".into()];
        args.push("--binary-files=text".into());
        args.push("--null".into());
        if self.each_occurrence {
            args.push("-o".into());
        }
        args.push("-e".into());
        args.push(api.into());
        args.push("--".into());
        args.extend(batch.iter().map(|p| p.as_os_str().to_os_string()));
        args
    }
}

impl SearchProvider for GrepProvider {
    fn name(&self) -> &str {
        &self.program
    }

    fn search(&self, api: &str, batch: &[PathBuf]) -> Result<Vec<SearchResult>, SearchError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let args = self.build_args(api, batch);
        let output = CommandRunner::new(&self.program)
            .current_dir(&self.root)
            .run(&args)
            .map_err(|source| SearchError::Spawn {
                command: format!("{} -e {api}", self.program),
                source,
            })?;

        match output.exit_code {
            Some(0) => Ok(parse_output(&output.stdout, &self.root, api)),
            Some(GREP_NO_MATCH) => {
                debug!("No match for '{api}' in {} files", batch.len());
                Ok(Vec::new())
            }
            Some(GREP_TROUBLE) if only_file_errors(&output.stderr, batch) => {
                for line in output.stderr.lines() {
                    warn!("Skipped while searching '{api}': {line}");
                }
                Ok(parse_output(&output.stdout, &self.root, api))
            }
            code => {
                debug!("Non-zero return code for command: '{}'", output.command);
                debug!("stdout: {}", output.stdout_lossy().trim_end());
                debug!("stderr: {}", output.stderr.trim_end());
                Err(SearchError::Exit {
                    command: output.command,
                    status: describe_status(code),
                    stderr: output.stderr.trim().to_string(),
                })
            }
        }
    }
}

/// True when every diagnostic names a file of `batch`; grep then searched
/// the remaining files and its stdout is complete for them.
fn only_file_errors(stderr: &str, batch: &[PathBuf]) -> bool {
    let mut lines = stderr.lines().filter(|l| !l.trim().is_empty()).peekable();
    if lines.peek().is_none() {
        return false;
    }
    lines.all(|line| {
        let Some((_, rest)) = line.split_once(": ") else {
            return false;
        };
        batch.iter().any(|p| {
            rest.strip_prefix(p.to_string_lossy().as_ref())
                .is_some_and(|r| r.starts_with(": "))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_put_files_after_pattern_terminator() {
        let p = GrepProvider::new("grep", Path::new("/apps"), false);
        let args = p.build_args("-weird", &[PathBuf::from("/apps/a/x.cmake")]);
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "-n",
                "-H",
                "-w",
                "-F",
                "--binary-files=text",
                "--null",
                "-e",
                "-weird",
                "--",
                "/apps/a/x.cmake"
            ]
        );
    }

    #[test]
    fn each_occurrence_adds_only_matching() {
        let p = GrepProvider::new("grep", Path::new("/apps"), true);
        let args = p.build_args("foo", &[]);
        assert!(args.iter().any(|a| a == "-o"));
    }

    #[test]
    fn empty_batch_short_circuits() {
        let p = GrepProvider::new("definitely-not-a-real-program-app-grep", Path::new("/"), false);
        assert!(p.search("foo", &[]).unwrap().is_empty());
    }

    #[test]
    fn per_file_errors_are_recognized() {
        let batch = vec![PathBuf::from("/apps/p/gone.cmake"), PathBuf::from("/apps/p/a.cmake")];
        let stderr = "grep: /apps/p/gone.cmake: No such file or directory\n";
        assert!(only_file_errors(stderr, &batch));
        assert!(!only_file_errors("grep: invalid option -- 'Q'\n", &batch));
        assert!(!only_file_errors("", &batch));
        assert!(!only_file_errors("grep: /elsewhere/x.cmake: Permission denied\n", &batch));
    }
}
