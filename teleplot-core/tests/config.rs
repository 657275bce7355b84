use teleplot_core::{ConfigError, SessionConfig, DEFAULT_SCRIPT};

#[test]
fn defaults_match_the_documented_values() {
    let config = SessionConfig::default();
    assert_eq!(config.script_path, DEFAULT_SCRIPT);
    assert_eq!(config.tick_interval_ms, 40);
    assert_eq!(config.warmup_ticks, 250);
    assert_eq!(config.steady_ticks, 25);
    assert_eq!(config.queue_capacity, None);
    config.validate().expect("defaults are valid");
}

#[test]
fn zero_tick_interval_is_rejected() {
    let mut config = SessionConfig::new("script.sh");
    config.tick_interval_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroTickInterval)
    ));
}

#[test]
fn zero_thresholds_are_rejected() {
    let mut config = SessionConfig::new("script.sh");
    config.steady_ticks = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");

    let mut config = SessionConfig::new("demo/fast.sh");
    config.tick_interval_ms = 20;
    config.steady_ticks = 10;
    config.queue_capacity = Some(4096);
    config.save(&path).expect("save");

    let loaded = SessionConfig::load(&path).expect("load");
    assert_eq!(loaded.script_path, "demo/fast.sh");
    assert_eq!(loaded.tick_interval_ms, 20);
    assert_eq!(loaded.warmup_ticks, 250);
    assert_eq!(loaded.steady_ticks, 10);
    assert_eq!(loaded.queue_capacity, Some(4096));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"script_path": "only/path.sh"}"#).expect("write");

    let loaded = SessionConfig::load(&path).expect("load");
    assert_eq!(loaded.script_path, "only/path.sh");
    assert_eq!(loaded.tick_interval_ms, 40);
    assert_eq!(loaded.warmup_ticks, 250);
}

#[test]
fn load_rejects_invalid_thresholds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"script_path": "x.sh", "warmup_ticks": 0}"#).expect("write");
    assert!(matches!(
        SessionConfig::load(&path),
        Err(ConfigError::ZeroTimeout)
    ));
}
