use super::*;

#[test]
fn missing_canonical_fails() {
    let context = Context::new("<p>page</p>");
    assert!(CanonicalCheck.run(&context).is_failed());
}

#[test]
fn absolute_https_canonical_passes() {
    let context = Context::new("<p>page</p>").with_canonical("https://example.com/post/1");
    let result = CanonicalCheck.run(&context);
    assert!(result.is_passed());
    assert_eq!(result.details["url"], "https://example.com/post/1");
}

#[test]
fn relative_canonical_fails() {
    let context = Context::new("<p>page</p>").with_canonical("/post/1");
    assert!(CanonicalCheck.run(&context).is_failed());
}

#[test]
fn non_http_scheme_fails() {
    let context = Context::new("<p>page</p>").with_canonical("ftp://example.com/file");
    assert!(CanonicalCheck.run(&context).is_failed());
}

#[test]
fn canonical_link_element_is_picked_up() {
    let html = r#"<head><link rel="canonical" href="https://example.com/"></head>"#;
    assert!(CanonicalCheck.run(&Context::new(html)).is_passed());
}

#[test]
fn missing_robots_directive_warns() {
    let context = Context::new("<p>page</p>");
    assert!(RobotsCheck.run(&context).is_warning());
}

#[test]
fn noindex_fails() {
    let context = Context::new("<p>page</p>").with_robots("noindex, follow");
    assert!(RobotsCheck.run(&context).is_failed());
}

#[test]
fn noindex_dominates_nofollow() {
    let context = Context::new("<p>page</p>").with_robots("noindex, nofollow");
    assert!(RobotsCheck.run(&context).is_failed());
}

#[test]
fn nofollow_without_noindex_warns() {
    let context = Context::new("<p>page</p>").with_robots("index, nofollow");
    assert!(RobotsCheck.run(&context).is_warning());
}

#[test]
fn index_follow_passes() {
    let context = Context::new("<p>page</p>").with_robots("index, follow");
    let result = RobotsCheck.run(&context);
    assert!(result.is_passed());
    assert_eq!(result.details["directive"], "index, follow");
}

#[test]
fn token_match_is_case_insensitive_and_whitespace_tolerant() {
    let context = Context::new("<p>page</p>").with_robots("  NOINDEX ,follow");
    assert!(RobotsCheck.run(&context).is_failed());
}

#[test]
fn meta_robots_tag_is_used_as_fallback() {
    let html = r#"<meta name="robots" content="noindex">"#;
    assert!(RobotsCheck.run(&Context::new(html)).is_failed());
}
