//! Theme sessions backed by settings files on disk.

use std::fs;
use std::sync::Arc;

use hexmon::prelude::*;
use parking_lot::Mutex;

fn config_in(dir: &std::path::Path, file: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.theme.settings_file = Some(dir.join(file));
    config
}

#[test]
fn test_theme_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "settings.json");

    {
        let session = ThemeSession::open(&config).unwrap();
        assert_eq!(session.start().unwrap().name(), "light");
        session.manager().set_theme("dark").unwrap();
    }

    let text = fs::read_to_string(dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["theme"], "dark");

    let session = ThemeSession::open(&config).unwrap();
    let applied = session.start().unwrap();
    assert_eq!(applied.name(), "dark");
    assert!(session.css().contains("--color-background: #121212;"));
}

#[test]
fn test_toml_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "settings.toml");

    let session = ThemeSession::open(&config).unwrap();
    session.start().unwrap();
    session.manager().toggle_theme().unwrap();
    session.manager().toggle_theme().unwrap();

    let text = fs::read_to_string(dir.path().join("settings.toml")).unwrap();
    assert!(text.contains("theme = \"blue\""), "unexpected settings: {text}");
}

#[test]
fn test_other_settings_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"refreshSeconds": 5, "theme": "blue"}"#).unwrap();
    let config = config_in(dir.path(), "settings.json");

    let session = ThemeSession::open(&config).unwrap();
    assert_eq!(session.start().unwrap().name(), "blue");
    session.manager().set_theme("light").unwrap();

    let reopened = SettingsStore::open(&path, SettingsFormat::Json).unwrap();
    assert_eq!(reopened.get::<i64>("refreshSeconds"), Some(5));
    assert_eq!(reopened.get::<String>("theme").as_deref(), Some("light"));
}

#[test]
fn test_extra_theme_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("hexmon.toml");
    let settings_path = dir.path().join("settings.json");
    fs::write(
        &config_path,
        format!(
            r##"
[theme]
default = "sepia"
settings_file = "{}"

[[theme.extra]]
name = "sepia"
[theme.extra.colors]
primary = "#704214"
secondary = "#a0522d"
background = "#f4ecd8"
surface = "#fbf6ea"
text = "#3b2f2f"
textSecondary = "#6b5b4b"
border = "#d8c8a8"
success = "#556b2f"
warning = "#cd853f"
error = "#8b0000"
"##,
            settings_path.display()
        ),
    )
    .unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    let session = ThemeSession::open(&config).unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session
        .manager()
        .theme_changed()
        .connect(move |theme| sink.lock().push(theme.name().to_string()));

    assert_eq!(session.start().unwrap().name(), "sepia");
    // sepia is last, so toggling wraps to the first built-in
    assert_eq!(session.manager().toggle_theme().unwrap().name(), "light");
    assert_eq!(session.manager().set_theme("nope").unwrap().name(), "sepia");

    assert_eq!(*seen.lock(), vec!["sepia", "light", "sepia"]);
}

#[test]
fn test_unwritable_settings_file_reports_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "settings.json");
    let session = ThemeSession::open(&config).unwrap();
    session.start().unwrap();

    // Replace the settings file with a directory so the next write fails.
    fs::remove_file(dir.path().join("settings.json")).unwrap();
    fs::create_dir(dir.path().join("settings.json")).unwrap();

    let notified = Arc::new(Mutex::new(0));
    let counter = notified.clone();
    session
        .manager()
        .theme_changed()
        .connect(move |_| *counter.lock() += 1);

    let err = session.manager().set_theme("dark").unwrap_err();
    assert!(err.is_storage());
    assert_eq!(session.manager().current_name(), "dark");
    assert_eq!(
        session.style().property("--color-background").as_deref(),
        Some("#121212")
    );
    assert_eq!(*notified.lock(), 0);
}

#[test]
fn test_settings_file_with_nulls_still_starts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"theme": "dark", "lastAlarm": null}"#,
    )
    .unwrap();
    let config = config_in(dir.path(), "settings.json");

    let session = ThemeSession::open(&config).unwrap();
    assert_eq!(session.start().unwrap().name(), "dark");
    session.manager().set_theme("blue").unwrap();

    let text = fs::read_to_string(dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["theme"], "blue");
    assert!(json["lastAlarm"].is_null());
}

#[test]
fn test_storage_key_without_segments_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    for key in ["", ".", "/"] {
        let mut config = config_in(dir.path(), "settings.json");
        config.theme.storage_key = key.to_string();

        let err = ThemeSession::open(&config).unwrap_err();
        assert!(
            matches!(err, Error::Config(ConfigError::InvalidStorageKey { .. })),
            "key {key:?}: {err}"
        );
    }
    assert!(!dir.path().join("settings.json").exists());
}
