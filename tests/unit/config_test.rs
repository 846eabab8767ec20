//! Tests for configuration loading

use std::fs;

use taskdeck::config::GlobalConfig;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = GlobalConfig::default();

    assert!(config.ui.color);
    assert_eq!(config.ui.prompt, "> ");
    assert_eq!(config.ui.time_format, "%H:%M");
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();

    let config = GlobalConfig::load_from(&temp.path().join("nope.toml"));
    assert!(config.ui.color);
    assert_eq!(config.ui.prompt, "> ");
}

#[test]
fn test_load_from_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r"[ui]
color = false
",
    )
    .unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(!config.ui.color);
    assert_eq!(config.ui.prompt, "> ");
    assert_eq!(config.ui.time_format, "%H:%M");
}

#[test]
fn test_load_from_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"[ui]
color = false
prompt = "task> "
time_format = "%H:%M:%S"
"#,
    )
    .unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(!config.ui.color);
    assert_eq!(config.ui.prompt, "task> ");
    assert_eq!(config.ui.time_format, "%H:%M:%S");
}

#[test]
fn test_load_from_malformed_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "not valid toml [[[").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(config.ui.color);
    assert_eq!(config.ui.prompt, "> ");
}
