// src/discovery.rs
use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File-name allow-list.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    extensions: Vec<String>,
    names: Vec<String>,
}

impl FileMatcher {
    /// Patterns starting with `.` match the final extension, others the
    /// whole file name. Blank patterns are ignored.
    #[must_use]
    pub fn new(patterns: &[String]) -> Self {
        let mut extensions = Vec::new();
        let mut names = Vec::new();
        for p in patterns.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            match p.strip_prefix('.') {
                Some(ext) => extensions.push(ext.to_string()),
                None => names.push(p.to_string()),
            }
        }
        Self { extensions, names }
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if self.names.iter().any(|n| n == name) {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Walks `root` recursively and returns every allow-listed file.
///
/// Returned paths are `root` joined with the file's relative path. Symlinked
/// files are included; symlinked directories are not followed. Walk errors
/// are logged and skipped.
#[must_use]
pub fn discover(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let matcher = FileMatcher::new(&config.patterns);
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(e, &config.prune_dirs));

    let (paths, error_count) = accumulate_walker(walker, &matcher);
    if error_count > 0 {
        warn!("Encountered {error_count} errors during file walk of {}", root.display());
    }
    debug!("Discovered {} candidate files under {}", paths.len(), root.display());
    paths
}

fn should_prune(entry: &walkdir::DirEntry, prune_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && prune_dirs
            .iter()
            .any(|d| entry.file_name().to_str() == Some(d.as_str()))
}

/// Regular files, and symlinks resolving to one. Directory links are not
/// descended into.
fn is_searchable_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn accumulate_walker<I>(walker: I, matcher: &FileMatcher) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if is_searchable_file(&entry) && matcher.matches(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                debug!("Walk error: {e}");
                errors += 1;
            }
        }
    }
    (paths, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> FileMatcher {
        FileMatcher::new(&[".cmake".into(), "CMakeLists.txt".into(), "  ".into()])
    }

    #[test]
    fn extension_and_exact_name() {
        let m = matcher();
        assert!(m.matches(Path::new("p/cmake/FindZ.cmake")));
        assert!(m.matches(Path::new("p/CMakeLists.txt")));
        assert!(!m.matches(Path::new("p/notes.txt")));
        assert!(!m.matches(Path::new("p/cmakelists.txt")));
        assert!(!m.matches(Path::new("p/file.cmake.in")));
        assert!(!m.matches(Path::new("p/cmake")));
    }

    #[test]
    fn blank_patterns_are_ignored() {
        let m = matcher();
        assert_eq!(m.extensions, vec!["cmake".to_string()]);
        assert_eq!(m.names, vec!["CMakeLists.txt".to_string()]);
    }
}
