//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;
use versus::{DEFAULT_CONFIG_PATH, VersusConfig};
use versus_core::{Difficulty, Symbol};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_parses_full_file() {
    let file = write_config(
        r#"
difficulty = "hard"
thinking_delay_ms = 1200
player_name = "Alice"
bot_name = "HAL"
log_file = "game.log"
seed = 42
"#,
    );

    let config = VersusConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.thinking_delay_ms(), 1200);
    assert_eq!(config.player_name(), "Alice");
    assert_eq!(config.bot_name(), "HAL");
    assert_eq!(config.log_file(), Path::new("game.log"));
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("bot_name = \"Robo\"\n");

    let config = VersusConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(*config.thinking_delay_ms(), 500);
    assert_eq!(config.player_name(), "Player");
    assert_eq!(config.bot_name(), "Robo");
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = VersusConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("difficulty = \"impossible\"\n");

    let err = VersusConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_replace_only_given_values() {
    let mut config = VersusConfig::default();
    config.apply_overrides(Some(Difficulty::Easy), None, Some(7));

    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.thinking_delay_ms(), 500);
    assert_eq!(*config.seed(), Some(7));

    config.apply_overrides(None, Some(0), None);
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.thinking_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_builds_session_settings_and_players() {
    let file = write_config(
        r#"
difficulty = "easy"
thinking_delay_ms = 250
player_name = "Alice"
seed = 3
"#,
    );
    let config = VersusConfig::from_file(file.path()).unwrap();

    let session = config.session_config();
    assert_eq!(session.difficulty, Difficulty::Easy);
    assert_eq!(session.thinking_delay, Duration::from_millis(250));
    assert_eq!(session.seed, Some(3));

    let players = config.players();
    assert_eq!(players.name(Symbol::X), "Alice");
    assert_eq!(players.name(Symbol::O), "Bot");
}

#[test]
fn test_blank_names_fall_back_to_defaults() {
    let file = write_config("player_name = \"   \"\nbot_name = \"\"\n");
    let config = VersusConfig::from_file(file.path()).unwrap();

    let players = config.players();
    assert_eq!(players.name(Symbol::X), "Player");
    assert_eq!(players.name(Symbol::O), "Bot");
}

#[test]
fn test_load_without_path_uses_working_directory() {
    let original = std::env::current_dir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    // No file yet: defaults.
    let defaults = VersusConfig::load(None);

    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_PATH),
        "difficulty = \"hard\"\nbot_name = \"HAL\"\n",
    )
    .unwrap();
    let from_file = VersusConfig::load(None);

    std::env::set_current_dir(original).unwrap();

    assert_eq!(defaults.unwrap(), VersusConfig::default());
    let from_file = from_file.unwrap();
    assert_eq!(*from_file.difficulty(), Difficulty::Hard);
    assert_eq!(from_file.bot_name(), "HAL");
}
