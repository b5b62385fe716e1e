use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = SeoGuardError::Config("invalid extension".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid extension");
}

#[test]
fn error_display_document_read() {
    let err = SeoGuardError::DocumentRead {
        path: PathBuf::from("page.html"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("page.html"));
}

#[test]
fn error_display_invalid_pattern() {
    let glob_err = globset::Glob::new("[bad").unwrap_err();
    let err = SeoGuardError::InvalidPattern {
        pattern: "[bad".to_string(),
        source: glob_err,
    };
    assert!(err.to_string().contains("[bad"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::other("boom");
    let err: SeoGuardError = io_err.into();
    assert!(matches!(err, SeoGuardError::Io(_)));
}

#[test]
fn error_from_toml_parse() {
    let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
    let err: SeoGuardError = toml_err.into();
    assert!(matches!(err, SeoGuardError::TomlParse(_)));
}

#[test]
fn document_read_preserves_source() {
    let err = SeoGuardError::DocumentRead {
        path: PathBuf::from("page.html"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let source = std::error::Error::source(&err);
    assert!(source.is_some());
}
