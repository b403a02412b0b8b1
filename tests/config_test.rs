//! Tests for loading configuration files.

use std::io::Write;
use strictly_games::{Config, LogConfig, Player};

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[display]
title = "Office Tournament"
x_glyph = "✕"
o_glyph = "◯"

[log]
filter = "strictly_tictactoe=debug"
file = "/tmp/ttt.log"
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).expect("valid config");
    assert_eq!(config.display().title(), "Office Tournament");
    assert_eq!(config.display().glyph(Player::X), "✕");
    assert_eq!(config.display().glyph(Player::O), "◯");
    assert_eq!(config.log().filter(), "strictly_tictactoe=debug");
    assert_eq!(config.log().file().to_str(), Some("/tmp/ttt.log"));
}

#[test]
fn test_empty_file_is_all_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = Config::from_file(file.path()).expect("empty config");
    assert_eq!(config, Config::default());
    assert_eq!(config.log(), &LogConfig::default());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display\nx_glyph = ").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
