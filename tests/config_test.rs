//! Tests for TOML configuration loading.

use std::io::Write;
use std::sync::{Arc, Mutex};
use tictactoe_tally::{GameConfig, PlayerConfig, Seat, logging};
use tracing_subscriber::EnvFilter;

#[test]
fn test_defaults_match_cat_and_dog() {
    let config = GameConfig::default();
    let roster = config.roster();
    assert_eq!(roster.player(Seat::First).name(), "Player 1");
    assert_eq!(roster.player(Seat::First).marker().as_str(), "🐱");
    assert_eq!(roster.player(Seat::Second).marker().as_str(), "🐶");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "game.log"

[first]
name = "Ada"
marker = "X"

[second]
name = "Bea"
marker = "O"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.first(), &PlayerConfig::new("Ada", "X"));
    assert_eq!(config.second().marker(), "O");
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let config = GameConfig::from_toml_str("[second]\nname = \"Bea\"\nmarker = \"O\"\n").unwrap();
    assert_eq!(config.first(), GameConfig::default().first());
    assert_eq!(config.second().name(), "Bea");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_duplicate_markers_rejected() {
    let err = GameConfig::from_toml_str(
        "[first]\nname = \"A\"\nmarker = \"X\"\n[second]\nname = \"B\"\nmarker = \"X\"\n",
    )
    .unwrap_err();
    assert!(err.message.contains("marker"));
}

#[test]
fn test_empty_name_rejected() {
    let config = GameConfig::new(PlayerConfig::new(" ", "X"), PlayerConfig::new("B", "O"));
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_toml_rejected() {
    let err = GameConfig::from_toml_str("[first\nname = ").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_config_fallback_is_logged_by_startup_subscriber() {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = logging::subscriber(
        move || writer.clone(),
        EnvFilter::new("info"),
        false,
    );
    let dir = tempfile::tempdir().unwrap();

    let config = tracing::subscriber::with_default(subscriber, || {
        GameConfig::load_or_default(dir.path().join("absent.toml"))
    })
    .unwrap();

    assert_eq!(config, GameConfig::default());
    let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("Config file not found, using defaults"));
}
