use std::time::Duration;

use folio::app::settings::{read_settings, Settings};

#[test]
fn defaults_are_sensible() {
    let s = Settings::default();
    assert_eq!(s.theme, "light");
    assert!(s.autoplay);
    assert_eq!(s.autoplay_interval(), Duration::from_millis(3000));
    assert_eq!(s.transition(), Duration::from_millis(500));
    assert!(s.content_path.is_none());
}

#[test]
fn toml_round_trip_preserves_settings() {
    let mut s = Settings::default();
    s.theme = "dark".to_string();
    s.autoplay = false;
    s.autoplay_interval_ms = 1500;
    let doc = s.to_toml().expect("serialize");
    let back = read_settings::from_toml(&doc).expect("parse");
    assert_eq!(back, s);
}

#[test]
fn file_round_trip_through_explicit_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let mut s = Settings::default();
    s.transition_ms = 250;
    s.save_to(&path).expect("save");
    let back = read_settings::load_from(&path).expect("load");
    assert_eq!(back, s);
}

#[test]
fn partial_settings_file_falls_back_to_defaults() {
    let s = read_settings::from_toml("theme = \"dark\"\n").expect("parse");
    assert_eq!(s.theme, "dark");
    assert!(s.autoplay);
    assert_eq!(s.autoplay_interval_ms, 3000);
}

#[test]
fn unknown_keys_are_ignored() {
    let s = read_settings::from_toml("future_option = true\n").expect("parse");
    assert_eq!(s, Settings::default());
}
