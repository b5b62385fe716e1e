use super::*;
use crate::config::Config;

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn unknown_check_ids_are_tolerated() {
    let mut config = Config::default();
    config.checks.insert("removed-in-v2".to_string(), false);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let mut config = Config::default();
    config.scan.exclude.push("[unclosed".to_string());

    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, crate::SeoGuardError::InvalidPattern { .. }));
}

#[test]
fn empty_extensions_are_rejected() {
    let mut config = Config::default();
    config.scan.extensions.clear();
    assert!(validate_config(&config).is_err());
}

#[test]
fn dotted_extensions_are_rejected() {
    let mut config = Config::default();
    config.scan.extensions = vec![".html".to_string()];
    assert!(validate_config(&config).is_err());
}

#[test]
fn blank_focus_keyword_is_rejected() {
    let mut config = Config::default();
    config.analysis.focus_keyword = Some("   ".to_string());
    assert!(validate_config(&config).is_err());
}
