// tests/unit_search.rs
use app_grep_core::search::{BuiltinProvider, GrepProvider, SearchProvider};
use app_grep_core::types::SearchResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn grep_available() -> bool {
    Command::new("grep").arg("--version").output().is_ok()
}

fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(&p, content).unwrap();
    p
}

/// A batch with a vanished file, a file holding a NUL byte and a project
/// directory whose name contains a colon.
fn mixed_batch() -> (TempDir, Vec<PathBuf>) {
    let d = tempfile::tempdir().unwrap();
    let r = d.path();
    let batch = vec![
        r.join("p/gone.cmake"),
        write(r, "p/CMakeLists.txt", b"project(p)\nfind_package(foo)\n"),
        write(r, "p/x.cmake", b"foo\n\0bin foo\nfoobar\n"),
        write(r, "q:r/CMakeLists.txt", b"set(A foo) # foo\n"),
    ];
    (d, batch)
}

fn by_both(api: &str, each_occurrence: bool) -> Option<(Vec<SearchResult>, Vec<SearchResult>)> {
    if !grep_available() {
        return None;
    }
    let (d, batch) = mixed_batch();
    let grep = GrepProvider::new("grep", d.path(), each_occurrence)
        .search(api, &batch)
        .unwrap();
    let builtin = BuiltinProvider::new(d.path(), each_occurrence)
        .search(api, &batch)
        .unwrap();
    Some((grep, builtin))
}

#[test]
fn test_providers_agree_on_lines() {
    let Some((grep, builtin)) = by_both("foo", false) else {
        return;
    };
    assert_eq!(grep, builtin);

    let found: Vec<(String, usize)> = builtin
        .iter()
        .map(|r| (r.file_path.to_string_lossy().into_owned(), r.line_number))
        .collect();
    assert_eq!(
        found,
        vec![
            ("p/CMakeLists.txt".to_string(), 2),
            ("p/x.cmake".to_string(), 1),
            ("p/x.cmake".to_string(), 2),
            ("q:r/CMakeLists.txt".to_string(), 1),
        ]
    );
    assert_eq!(builtin[3].project_name(), "q:r");
}

#[test]
fn test_providers_agree_on_occurrences() {
    let Some((grep, builtin)) = by_both("foo", true) else {
        return;
    };
    assert_eq!(grep, builtin);
    assert_eq!(builtin.len(), 5);
}

#[test]
fn test_missing_file_keeps_rest_of_batch() {
    let (d, batch) = mixed_batch();
    let results = BuiltinProvider::new(d.path(), false)
        .search("find_package", &batch)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file_path, PathBuf::from("p/CMakeLists.txt"));

    if grep_available() {
        let results = GrepProvider::new("grep", d.path(), false)
            .search("find_package", &batch)
            .unwrap();
        assert_eq!(results.len(), 1);
    }
}

#[test]
fn test_grep_that_cannot_start_fails_the_pair() {
    if !grep_available() {
        return;
    }
    let (d, batch) = mixed_batch();
    let err = GrepProvider::new("grep", &d.path().join("no-such-dir"), false)
        .search("foo", &batch)
        .unwrap_err();
    assert!(err.to_string().contains("grep"));
}
