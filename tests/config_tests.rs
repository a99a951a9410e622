//! Integration tests for search configuration files

use std::fs;

use noughts::{
    Error,
    search::{DEFAULT_MAX_DEPTH, RootWindow, SearchConfig},
};
use tempfile::tempdir;

#[test]
fn test_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("search.json");

    let config = SearchConfig::new()
        .with_max_depth(5)
        .with_root_window(RootWindow::Seeded)
        .with_root_checks(false);
    config.to_json_file(&path).unwrap();

    let loaded = SearchConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"root_window\": \"seeded\""));
}

#[test]
fn test_missing_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "max_depth": 3 }"#).unwrap();

    let loaded = SearchConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded.max_depth, 3);
    assert_eq!(loaded.root_window, RootWindow::Full);
    assert!(loaded.check_root_successors);
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let loaded = SearchConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(loaded, SearchConfig::default());
}

#[test]
fn test_missing_file_reports_operation() {
    let dir = tempdir().unwrap();
    let err = SearchConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("open config file"));
}

#[test]
fn test_malformed_json_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "root_window": "sideways" }"#).unwrap();

    let err = SearchConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_excessive_depth_in_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deep.json");
    fs::write(&path, r#"{ "max_depth": 1000 }"#).unwrap();

    let err = SearchConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}
