use super::*;

fn filler(words: usize) -> String {
    let mut body = String::from("<p>");
    for i in 0..words {
        body.push_str(&format!("word{i} "));
    }
    body.push_str("</p>");
    body
}

#[test]
fn short_content_is_exempt_from_link_density() {
    let html = filler(100);
    let result = InternalLinkCheck.run(&Context::new(html));
    assert!(result.is_passed());
    assert_eq!(result.details["required"], 0);
}

#[test]
fn one_link_per_two_hundred_words_passes() {
    let html = format!("{}<a href=\"/related-post\">related</a>", filler(200));
    let result = InternalLinkCheck.run(&Context::new(html));
    assert!(result.is_passed());
    assert_eq!(result.details["required"], 1);
    assert_eq!(result.details["links"], 1);
}

#[test]
fn placeholder_anchor_does_not_count() {
    let html = format!("{}<a href=\"#\">placeholder</a>", filler(200));
    let result = InternalLinkCheck.run(&Context::new(html));
    assert!(result.is_failed());
    assert_eq!(result.details["links"], 0);
}

#[test]
fn mailto_tel_and_javascript_links_do_not_count() {
    let html = format!(
        "{}<a href=\"mailto:a@b.c\">m</a><a href=\"tel:123\">t</a><a href=\"javascript:void(0)\">j</a>",
        filler(200)
    );
    let result = InternalLinkCheck.run(&Context::new(html));
    assert!(result.is_failed());
    assert_eq!(result.details["links"], 0);
}

#[test]
fn too_few_links_for_long_content_warns() {
    // 700 words require ceil(700/300) = 3 links.
    let html = format!("{}<a href=\"/one\">one</a>", filler(700));
    let result = InternalLinkCheck.run(&Context::new(html));
    assert!(result.is_warning());
    assert_eq!(result.details["required"], 3);
    assert_eq!(result.details["links"], 1);
}

#[test]
fn fragment_links_do_not_count() {
    let html = format!("{}<a href=\"#section-2\">jump</a>", filler(200));
    let result = InternalLinkCheck.run(&Context::new(html));
    assert_eq!(result.details["links"], 0);
}

#[test]
fn anchor_without_href_does_not_count() {
    let html = format!("{}<a>nameless</a>", filler(200));
    let result = InternalLinkCheck.run(&Context::new(html));
    assert_eq!(result.details["links"], 0);
}

#[test]
fn thin_content_fails_length_check() {
    let result = ContentLengthCheck.run(&Context::new(filler(50)));
    assert!(result.is_failed());
    assert_eq!(result.details["words"], 50);
}

#[test]
fn short_content_warns_length_check() {
    assert!(ContentLengthCheck.run(&Context::new(filler(200))).is_warning());
}

#[test]
fn substantial_content_passes_length_check() {
    assert!(ContentLengthCheck.run(&Context::new(filler(350))).is_passed());
}

#[test]
fn empty_document_fails_length_check() {
    let result = ContentLengthCheck.run(&Context::new(""));
    assert!(result.is_failed());
    assert_eq!(result.details["words"], 0);
}
