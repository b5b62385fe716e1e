use super::*;

#[test]
fn default_config_enables_everything() {
    let config = Config::default();
    assert!(config.checks.is_empty());
    assert!(!config.analysis.strict);
    assert_eq!(config.scan.extensions, vec!["html", "htm"]);
}

#[test]
fn checks_table_parses_into_enablement_map() {
    let config: Config = toml::from_str(
        r#"
        [checks]
        "title-length" = true
        "twitter-card" = false
    "#,
    )
    .unwrap();

    assert_eq!(config.checks.get("title-length"), Some(&true));
    assert_eq!(config.checks.get("twitter-card"), Some(&false));
    assert_eq!(config.checks.get("unlisted"), None);
}

#[test]
fn analysis_section_parses() {
    let config: Config = toml::from_str(
        r#"
        [analysis]
        focus_keyword = "sourdough"
        strict = true
    "#,
    )
    .unwrap();

    assert_eq!(config.analysis.focus_keyword.as_deref(), Some("sourdough"));
    assert!(config.analysis.strict);
}

#[test]
fn scan_section_parses_with_defaults() {
    let config: Config = toml::from_str(
        r#"
        [scan]
        exclude = ["**/drafts/**"]
    "#,
    )
    .unwrap();

    assert_eq!(config.scan.extensions, vec!["html", "htm"]);
    assert_eq!(config.scan.exclude, vec!["**/drafts/**"]);
}

#[test]
fn unknown_top_level_keys_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[no_such_section]\nx = 1\n");
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.checks.insert("open-graph".to_string(), false);
    config.analysis.strict = true;

    let serialized = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed, config);
}
