// tests/unit_config.rs
use app_grep_core::config::{io, ColumnPolicy, Config, SearchEngine};
use app_grep_core::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

fn parse(content: &str) -> Config {
    io::parse_toml(content, Path::new("app-grep.toml")).unwrap()
}

#[test]
fn test_defaults() {
    let c = Config::new();
    assert_eq!(c.repo_list, PathBuf::from("repo.txt"));
    assert_eq!(c.api_list, PathBuf::from("api.txt"));
    assert_eq!(c.apps_root, PathBuf::from("apps"));
    assert_eq!(c.results_root, PathBuf::from("results"));
    assert_eq!(c.log_file, PathBuf::from("search.log"));
    assert_eq!(c.search.batch_size, 10_000);
    assert_eq!(c.search.engine, SearchEngine::Grep);
    assert!(!c.search.count_each_occurrence);
    assert_eq!(c.scan.patterns, vec![".cmake", "CMakeLists.txt"]);
    assert_eq!(c.scan.prune_dirs, vec![".git"]);
    assert_eq!(c.fetch.depth, 1);
    assert_eq!(c.report.columns, ColumnPolicy::Union);
    assert!(c.validate().is_ok());
}

#[test]
fn test_empty_file_is_defaults() {
    let c = parse("");
    assert_eq!(c.search.batch_size, 10_000);
    assert_eq!(c.apps_root, PathBuf::from("apps"));
}

#[test]
fn test_load_toml() {
    let c = parse(
        r#"
apps_root = "corpus"

[scan]
patterns = [".h", ".cu"]
prune_dirs = []

[search]
engine = "builtin"
batch_size = 500

[report]
columns = "first-api"
"#,
    );
    assert_eq!(c.apps_root, PathBuf::from("corpus"));
    assert_eq!(c.scan.patterns, vec![".h", ".cu"]);
    assert!(c.scan.prune_dirs.is_empty());
    assert_eq!(c.search.engine, SearchEngine::Builtin);
    assert_eq!(c.search.batch_size, 500);
    assert_eq!(c.search.grep, "grep");
    assert_eq!(c.report.columns, ColumnPolicy::FirstApi);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = io::parse_toml("[search]\nbatch_size = \"many\"", Path::new("x.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_validate_rejects_zero_batch() {
    let mut c = Config::new();
    c.search.batch_size = 0;
    assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_empty_patterns() {
    let mut c = Config::new();
    c.scan.patterns = vec![" ".into()];
    assert!(c.validate().is_err());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&d.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_explicit_file_is_read() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("custom.toml");
    fs::write(&path, "[fetch]\ndepth = 3\n").unwrap();
    let c = Config::load(Some(&path)).unwrap();
    assert_eq!(c.fetch.depth, 3);
    assert_eq!(c.fetch.git, "git");
}
