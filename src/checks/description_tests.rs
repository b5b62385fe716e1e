use super::*;

fn run_with_description(description: &str) -> CheckResult {
    let context = Context::new("<p>body</p>").with_meta_description(description);
    MetaDescriptionCheck.run(&context)
}

#[test]
fn missing_description_fails() {
    let result = run_with_description("");
    assert!(result.is_failed());
    assert_eq!(result.details["length"], 0);
}

#[test]
fn ideal_length_passes() {
    let result = run_with_description(&"d".repeat(140));
    assert!(result.is_passed());
    assert_eq!(result.details["length"], 140);
}

#[test]
fn short_description_warns() {
    assert!(run_with_description(&"d".repeat(80)).is_warning());
}

#[test]
fn long_description_warns() {
    assert!(run_with_description(&"d".repeat(200)).is_warning());
}

#[test]
fn boundaries_are_inclusive() {
    assert!(run_with_description(&"d".repeat(120)).is_passed());
    assert!(run_with_description(&"d".repeat(160)).is_passed());
    assert!(run_with_description(&"d".repeat(119)).is_warning());
    assert!(run_with_description(&"d".repeat(161)).is_warning());
}

#[test]
fn meta_tag_fallback_is_used() {
    let html = format!(
        r#"<meta name="description" content="{}">"#,
        "d".repeat(130)
    );
    let context = Context::new(html);
    assert!(MetaDescriptionCheck.run(&context).is_passed());
}
