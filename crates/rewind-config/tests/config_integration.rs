use rewind_config::{AppConfig, HintStyle};

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config, AppConfig::default());

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["max_history"], 50);
}

#[test]
fn test_create_makes_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rewind").join("rewind.json");

    AppConfig::load_or_create(&path);
    assert!(path.exists());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.json");
    let json = r#"{
        "max_history": 12,
        "shortcuts_enabled": false,
        "hint_style": "mac",
        "timeline_max_visible": 4
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.max_history, 12);
    assert!(!config.shortcuts_enabled);
    assert_eq!(config.hint_style, HintStyle::Mac);
    assert_eq!(config.timeline_max_visible, 4);
    assert!(config.show_shortcut_hints);
}

#[test]
fn test_broken_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config, AppConfig::default());

    // The broken file is left for the user to fix.
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_load_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.json");
    std::fs::write(&path, r#"{"max_history": "lots"}"#).unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
fn test_sanitize_applied_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.json");
    std::fs::write(&path, r#"{"max_history": 0, "timeline_max_visible": 0}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.max_history, 1);
    assert_eq!(config.timeline_max_visible, 1);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.json");

    let config = AppConfig {
        max_history: 7,
        hint_style: HintStyle::Mac,
        show_shortcut_hints: false,
        ..Default::default()
    };
    config.save(&path).unwrap();

    let loaded = AppConfig::load_or_create(&path);
    assert_eq!(loaded, config);
}
