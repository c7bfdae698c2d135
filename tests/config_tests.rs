//! Tests for scene config loading

use std::path::Path;
use std::time::Duration;

use dicespin::dice3d::{SceneConfig, DEFAULT_CONFIG_PATH};

#[test]
fn test_bundled_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
    let config = SceneConfig::load_from_file(&path, true).unwrap();

    let defaults = SceneConfig::default();
    assert_eq!(config.camera, defaults.camera);
    assert_eq!(config.lights, defaults.lights);
    assert_eq!(config.dice, defaults.dice);
    assert_eq!(config.sound, defaults.sound);
    assert_eq!(config.hint, defaults.hint);
    assert_eq!(config.camera_panel, defaults.camera_panel);
    // No font ships with the repo; the hint uses the built-in one.
    assert_eq!(config.hint.font_path, None);
}

#[test]
fn test_missing_optional_config_uses_defaults() {
    let config = SceneConfig::load_from_file(Path::new("does/not/exist.ron"), false).unwrap();
    assert_eq!(config, SceneConfig::default());
    assert_eq!(config.dice.roll_duration(), Duration::from_millis(2000));
}

#[test]
fn test_missing_required_config_is_an_error() {
    let err = SceneConfig::load_from_file(Path::new("does/not/exist.ron"), true).unwrap_err();
    assert!(err.contains("Failed to read scene config"));
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = std::env::temp_dir().join("dicespin-config-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.ron");
    std::fs::write(&path, "(sound: (volume: 3.0))").unwrap();

    let err = SceneConfig::load_from_file(&path, true).unwrap_err();
    assert!(err.contains("sound.volume"));
    assert!(err.contains("bad.ron"));
}
