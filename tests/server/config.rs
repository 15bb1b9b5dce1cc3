use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use ticker_snapshot::SnapError;
use ticker_snapshot::server::ServerConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_without_variables() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    assert_eq!(config.fetch_timeout, Duration::from_secs(30));
    assert_eq!(config.max_sessions, 4);
    assert_eq!(config.ema_period, 12);
}

#[test]
fn variables_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("SNAP_HOST", "127.0.0.1"),
        ("SNAP_PORT", " 8080 "),
        ("SNAP_TIMEOUT_SECS", "5"),
        ("SNAP_MAX_SESSIONS", "2"),
        ("SNAP_EMA_PERIOD", "20"),
        ("SNAP_RULES", "/etc/snap/rules.json"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    assert_eq!(config.max_sessions, 2);
    assert_eq!(config.ema_period, 20);
    assert_eq!(config.rules_path.as_deref(), Some(Path::new("/etc/snap/rules.json")));
    assert!(config.lexicon_path.is_none());
}

#[test]
fn malformed_numbers_are_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SNAP_PORT", "http")])).unwrap_err();
    match err {
        SnapError::Config(msg) => assert!(msg.contains("SNAP_PORT"), "{msg}"),
        other => panic!("expected config error, got {other:?}"),
    }
    assert!(ServerConfig::from_lookup(lookup(&[("SNAP_MAX_SESSIONS", "-1")])).is_err());
}

#[test]
fn assembler_rejects_zero_sessions() {
    let config = ServerConfig {
        max_sessions: 0,
        ..ServerConfig::default()
    };
    assert!(matches!(config.assembler(), Err(SnapError::Config(_))));
}

#[test]
fn assembler_loads_rule_and_lexicon_files() {
    let dir = std::env::temp_dir().join(format!("snap-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let rules = dir.join("rules.json");
    std::fs::write(&rules, r#"{"prices":{"min_columns":5}}"#).unwrap();
    let lexicon = dir.join("lexicon.tsv");
    let mut f = std::fs::File::create(&lexicon).unwrap();
    writeln!(f, "rally\t2").unwrap();
    drop(f);

    let config = ServerConfig {
        rules_path: Some(rules.clone()),
        lexicon_path: Some(lexicon.clone()),
        ..ServerConfig::default()
    };
    assert!(config.assembler().is_ok());

    // a selector that does not parse fails startup
    std::fs::write(&rules, r#"{"news":{"candidate":"a[["}}"#).unwrap();
    assert!(matches!(config.assembler(), Err(SnapError::Selector { .. })));

    let missing = ServerConfig {
        lexicon_path: Some(dir.join("absent.tsv")),
        ..ServerConfig::default()
    };
    assert!(matches!(missing.assembler(), Err(SnapError::Io(_))));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn market_terms_are_opt_in() {
    assert!(!ServerConfig::from_lookup(lookup(&[])).unwrap().market_terms);

    let config = ServerConfig::from_lookup(lookup(&[("SNAP_MARKET_TERMS", "true")])).unwrap();
    assert!(config.market_terms);
    assert!(config.assembler().is_ok());

    let err = ServerConfig::from_lookup(lookup(&[("SNAP_MARKET_TERMS", "yes")])).unwrap_err();
    assert!(matches!(err, SnapError::Config(msg) if msg.contains("SNAP_MARKET_TERMS")));
}
