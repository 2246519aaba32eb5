//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! turning it into a running backend selection.

use std::io::Write;

use agenda_infra::{config, select_repository};
use chrono::NaiveDate;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "backend": {
            "url": "https://xyz.supabase.co",
            "api_key": "anon-key",
            "table": "agendamentos_teste"
        },
        "server": { "bind_addr": "0.0.0.0:8081" },
        "session": { "path": "/tmp/agenda_user.json" }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config");

    assert_eq!(config.backend.table, "agendamentos_teste");
    assert_eq!(config.backend.timeout_secs, 15);
    assert_eq!(config.server.bind_addr, "0.0.0.0:8081");
    assert!(config.accounts.is_empty());

    let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    let repository = select_repository(&config.backend, today).expect("repository");
    assert_eq!(repository.backend_name(), "rest");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_empty_toml_file_is_all_defaults() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config");
    assert_eq!(config, agenda_domain::Config::default());

    std::fs::remove_file(path).ok();
}
