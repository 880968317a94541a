//! Integration-level unit tests for the SettingsEngine public API.
//!
//! Covers default loading, persistence through `set_settings`, partial files,
//! a blank database path and malformed JSON.

use barky::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use barky::types::errors::SettingsError;
use barky::types::settings::Settings;
use tempfile::TempDir;

/// Helper: a SettingsEngine whose config file lives in `dir`.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, Settings::default());
    assert!(settings.database_path.ends_with("bookmarks.db"));
    assert_eq!(settings.log_level, "warn");
}

#[test]
fn test_set_settings_persists_changes() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("custom.db").to_string_lossy().to_string();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_settings(Settings {
                database_path: db_path.clone(),
                log_level: "debug".to_string(),
            })
            .unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.database_path, db_path);
    assert_eq!(loaded.log_level, "debug");
}

#[test]
fn test_save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();
    assert!(path.exists());
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"log_level": "info"}"#).unwrap();

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.log_level, "info");
    assert_eq!(loaded.database_path, Settings::default().database_path);
}

#[test]
fn test_blank_database_path_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"database_path": "  ", "log_level": "info"}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.database_path, Settings::default().database_path);
    assert_eq!(loaded.log_level, "info");
    assert_eq!(*engine.get_settings(), loaded);
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    let err = engine.load().unwrap_err();
    assert!(matches!(err, SettingsError::SerializationError(_)));
    assert_eq!(*engine.get_settings(), Settings::default());
}

#[test]
fn test_config_path_is_reported() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    assert!(engine.get_config_path().ends_with("settings.json"));
}
