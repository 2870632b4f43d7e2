use crate::store::Settings;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_are_sensible() {
    let settings = Settings::default();

    assert_eq!(settings.gym_name, "النادي الرياضي");
    assert!(settings.data_file.ends_with("gym.json"));
    assert!(
        !settings.data_file.to_string_lossy().contains('~'),
        "default path must be tilde-expanded"
    );
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.gym_name = "نادي القوة".to_string();
    settings.currency = "ر.س".to_string();
    settings.data_file = PathBuf::from("/tmp/elsewhere/gym.json");
    settings.save(&path).unwrap();

    let loaded = Settings::load_or_default(&path);
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, "{not json").unwrap();

    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_partial_document_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{"gym_name": "نادي النخبة"}"#).unwrap();

    let loaded = Settings::load_or_default(&path);
    assert_eq!(loaded.gym_name, "نادي النخبة");
    assert_eq!(loaded.currency, Settings::default().currency);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("settings.json");

    Settings::default().save(&path).unwrap();
    assert!(path.exists());
}
