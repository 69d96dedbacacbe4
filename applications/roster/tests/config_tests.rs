//! Configuration loading from file and environment.

use roster::config::RosterConfig;
use roster::AppError;
use roster_list::FetchStrategy;
use std::fs;

fn env(vars: &[(&str, &str)]) -> config::Environment {
    let mut map = config::Map::new();
    for (key, value) in vars {
        map.insert((*key).to_string(), (*value).to_string());
    }

    config::Environment::with_prefix("ROSTER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(Some(map))
}

#[test]
fn test_empty_sources_yield_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "").unwrap();

    let config = RosterConfig::load_with_env(Some(&path), env(&[])).unwrap();

    assert_eq!(config.catalog.base_url, "https://rickandmortyapi.com/api");
    assert_eq!(config.catalog.timeout_secs, 30);
    assert_eq!(config.list.first_id, 1);
    assert_eq!(config.list.count, 10);
    assert_eq!(config.list.strategy, FetchStrategy::Sequential);
}

#[test]
fn test_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(
        &path,
        r#"
[catalog]
base_url = "http://localhost:9000/api"
timeout_secs = 5

[list]
count = 3
strategy = "concurrent"
"#,
    )
    .unwrap();

    let config = RosterConfig::load_with_env(Some(&path), env(&[])).unwrap();

    assert_eq!(config.catalog.base_url, "http://localhost:9000/api");
    assert_eq!(config.catalog.timeout_secs, 5);
    assert_eq!(config.catalog.connect_timeout_secs, 10);
    assert_eq!(config.list.count, 3);
    assert_eq!(config.list.strategy, FetchStrategy::Concurrent);

    let options = config.list_options();
    assert_eq!(options.ids().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "[list]\ncount = 3\n").unwrap();

    let config = RosterConfig::load_with_env(
        Some(&path),
        env(&[
            ("ROSTER_LIST__COUNT", "7"),
            ("ROSTER_CATALOG__BASE_URL", "http://catalog.test/api"),
        ]),
    )
    .unwrap();

    assert_eq!(config.list.count, 7);
    assert_eq!(config.catalog.base_url, "http://catalog.test/api");
}

#[test]
fn test_oversized_count_from_environment_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "").unwrap();

    let config =
        RosterConfig::load_with_env(Some(&path), env(&[("ROSTER_LIST__COUNT", "4294967295")]))
            .unwrap();

    assert_eq!(config.list.count, u32::MAX);
    match config.validate() {
        Err(AppError::Config(msg)) => assert!(msg.contains("count")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    match RosterConfig::load_with_env(Some(&path), env(&[])) {
        Err(AppError::Config(msg)) => assert!(msg.contains("missing.toml")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_invalid_strategy_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "[list]\nstrategy = \"parallel\"\n").unwrap();

    assert!(matches!(
        RosterConfig::load_with_env(Some(&path), env(&[])),
        Err(AppError::Config(_))
    ));
}
