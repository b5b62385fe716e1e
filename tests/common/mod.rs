#![allow(dead_code)]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fmt::Write;

use assert_cmd::Command;

pub fn cmd() -> Command {
    Command::cargo_bin("seo-guard").expect("binary should exist")
}

/// A document that avoids every failing condition: sized title, declared
/// canonical, social tags, structured data, and enough well-structured body
/// copy. Several checks still warn (no robots directive, no focus keyword),
/// so the overall verdict is WARNING, which exits 0 outside strict mode.
#[must_use]
pub fn good_page() -> String {
    let mut body = String::new();
    for i in 0..6 {
        let _ = write!(body, "<p>Paragraph {i} starts here. ");
        for j in 0..8 {
            let _ = write!(body, "Useful sentence number {j} adds substance. ");
        }
        body.push_str("</p>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>A thorough guide to publishing well-structured pages</title>
<meta name="description" content="Learn the publishing habits that keep long-form articles readable, discoverable and easy for both people and crawlers to navigate.">
<link rel="canonical" href="https://example.com/guide">
<meta property="og:title" content="A thorough guide">
<meta property="og:description" content="Publishing habits for readable articles.">
<meta property="og:image" content="https://example.com/cover.png">
<meta property="og:url" content="https://example.com/guide">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="A thorough guide">
<meta name="twitter:description" content="Publishing habits for readable articles.">
<script type="application/ld+json">
{{"@context": "https://schema.org", "@type": "Organization", "name": "Example"}}
</script>
<script type="application/ld+json">
{{"@context": "https://schema.org", "@type": "WebSite", "name": "Example"}}
</script>
<script type="application/ld+json">
{{"@context": "https://schema.org", "@type": "BlogPosting", "headline": "A thorough guide"}}
</script>
</head>
<body>
<h1>A thorough guide to publishing</h1>
<h2>Why does structure matter? What do readers expect?</h2>
{body}
<ul><li>Keep paragraphs short</li><li>Link related articles</li></ul>
<p>Related reading: <a href="/archive">the archive</a> and <a href="/style-guide">our style guide</a>.</p>
</body>
</html>
"#
    )
}

/// A minimal page that fails several checks: no title, no description, no
/// canonical, no structured data, almost no content.
#[must_use]
pub fn bare_page() -> String {
    "<html><body><p>hi</p></body></html>".to_string()
}
