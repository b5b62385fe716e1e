use super::*;

#[test]
fn output_format_parses_known_names() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
}

#[test]
fn output_format_parsing_is_case_insensitive() {
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("Text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
}

#[test]
fn output_format_rejects_unknown_names() {
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_defaults_to_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
