use std::cell::OnceCell;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";
const META_SELECTOR_STR: &str = "meta";
const LINK_SELECTOR_STR: &str = "link";
const IMG_SELECTOR_STR: &str = "img";
const ANCHOR_SELECTOR_STR: &str = "a";
const JSON_LD_SELECTOR_STR: &str = "script[type='application/ld+json']";
const BODY_SELECTOR_STR: &str = "body";
const PARAGRAPH_SELECTOR_STR: &str = "p";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).expect("title selector is a compile-time constant")
});

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(HEADING_SELECTOR_STR).expect("heading selector is a compile-time constant")
});

static META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_SELECTOR_STR).expect("meta selector is a compile-time constant")
});

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LINK_SELECTOR_STR).expect("link selector is a compile-time constant")
});

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(IMG_SELECTOR_STR).expect("img selector is a compile-time constant")
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("anchor selector is a compile-time constant")
});

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(JSON_LD_SELECTOR_STR).expect("json-ld selector is a compile-time constant")
});

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(BODY_SELECTOR_STR).expect("body selector is a compile-time constant")
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PARAGRAPH_SELECTOR_STR).expect("paragraph selector is a compile-time constant")
});

/// One heading element in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1–6.
    pub level: u8,
    /// Normalized text content.
    pub text: String,
}

/// One `<img>` element in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    /// `None` when the `alt` attribute is absent, `Some("")` when present but empty.
    pub alt: Option<String>,
}

impl Image {
    /// Whether this image carries a non-empty `alt` text.
    #[must_use]
    pub fn has_alt_text(&self) -> bool {
        self.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty())
    }
}

/// One `<a>` element in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: Option<String>,
    pub text: String,
}

/// Parsed-and-extracted feature view of one document, shared read-only by
/// every check in a run.
///
/// Construction is cheap: the DOM parse and all derived features are computed
/// on first access and memoized. Accessors never fail on malformed input;
/// they degrade to empty values and let each check decide how to treat
/// absence.
pub struct Context {
    document_id: Option<u64>,
    raw_html: String,
    title_hint: String,
    meta_description_hint: String,
    canonical_hint: Option<String>,
    robots_hint: Option<String>,
    focus_keyword: Option<String>,

    dom: OnceCell<Option<Html>>,
    plain_text: OnceCell<String>,
    headings: OnceCell<Vec<Heading>>,
    images: OnceCell<Vec<Image>>,
    anchors: OnceCell<Vec<Anchor>>,
    json_ld: OnceCell<Vec<String>>,
    paragraphs: OnceCell<Vec<String>>,
}

impl Context {
    #[must_use]
    pub fn new(raw_html: impl Into<String>) -> Self {
        Self {
            document_id: None,
            raw_html: raw_html.into(),
            title_hint: String::new(),
            meta_description_hint: String::new(),
            canonical_hint: None,
            robots_hint: None,
            focus_keyword: None,
            dom: OnceCell::new(),
            plain_text: OnceCell::new(),
            headings: OnceCell::new(),
            images: OnceCell::new(),
            anchors: OnceCell::new(),
            json_ld: OnceCell::new(),
            paragraphs: OnceCell::new(),
        }
    }

    #[must_use]
    pub const fn with_document_id(mut self, id: u64) -> Self {
        self.document_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title_hint = title.into();
        self
    }

    #[must_use]
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description_hint = description.into();
        self
    }

    #[must_use]
    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical_hint = Some(canonical.into());
        self
    }

    #[must_use]
    pub fn with_robots(mut self, robots: impl Into<String>) -> Self {
        self.robots_hint = Some(robots.into());
        self
    }

    #[must_use]
    pub fn with_focus_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.focus_keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub const fn document_id(&self) -> Option<u64> {
        self.document_id
    }

    #[must_use]
    pub fn raw_html(&self) -> &str {
        &self.raw_html
    }

    #[must_use]
    pub fn focus_keyword(&self) -> Option<&str> {
        self.focus_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// The parsed DOM, or `None` for empty input. Parsed exactly once.
    pub fn dom(&self) -> Option<&Html> {
        self.dom
            .get_or_init(|| {
                if self.raw_html.trim().is_empty() {
                    None
                } else {
                    Some(Html::parse_document(&self.raw_html))
                }
            })
            .as_ref()
    }

    /// Effective title: explicit hint, then first `<title>` element, then empty.
    #[must_use]
    pub fn title(&self) -> String {
        let hint = self.title_hint.trim();
        if !hint.is_empty() {
            return hint.to_string();
        }
        self.dom()
            .and_then(|dom| dom.select(&TITLE_SELECTOR).next())
            .map(|el| normalize_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default()
    }

    /// Effective meta description: explicit hint, then
    /// `<meta name="description">`, then empty.
    #[must_use]
    pub fn meta_description(&self) -> String {
        let hint = self.meta_description_hint.trim();
        if !hint.is_empty() {
            return hint.to_string();
        }
        self.meta_content("name", "description")
    }

    /// Effective canonical URL: explicit hint, then `<link rel="canonical">`.
    #[must_use]
    pub fn canonical(&self) -> Option<String> {
        if let Some(hint) = self.canonical_hint.as_deref() {
            let hint = hint.trim();
            if !hint.is_empty() {
                return Some(hint.to_string());
            }
        }
        self.link_href("canonical")
    }

    /// Effective robots directive: explicit hint, then `<meta name="robots">`.
    #[must_use]
    pub fn robots(&self) -> Option<String> {
        if let Some(hint) = self.robots_hint.as_deref() {
            let hint = hint.trim();
            if !hint.is_empty() {
                return Some(hint.to_string());
            }
        }
        let dom_value = self.meta_content("name", "robots");
        if dom_value.is_empty() {
            None
        } else {
            Some(dom_value)
        }
    }

    /// The `content` of the first `<meta>` whose attribute `attr` equals
    /// `value` (case-sensitive on the value). Empty string when absent.
    #[must_use]
    pub fn meta_content(&self, attr: &str, value: &str) -> String {
        let Some(dom) = self.dom() else {
            return String::new();
        };
        dom.select(&META_SELECTOR)
            .find(|el| el.value().attr(attr) == Some(value))
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.trim().to_string())
            .unwrap_or_default()
    }

    /// The `href` of the first `<link>` whose `rel` token list contains
    /// `rel_value` (ASCII case-insensitive).
    #[must_use]
    pub fn link_href(&self, rel_value: &str) -> Option<String> {
        let dom = self.dom()?;
        dom.select(&LINK_SELECTOR)
            .find(|el| {
                el.value().attr("rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case(rel_value))
                })
            })
            .and_then(|el| el.value().attr("href"))
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty())
    }

    /// All non-empty headings H1–H6 in document order. The ordering is
    /// load-bearing for hierarchy-jump detection.
    #[must_use]
    pub fn ordered_headings(&self) -> &[Heading] {
        self.headings.get_or_init(|| {
            let Some(dom) = self.dom() else {
                return Vec::new();
            };
            dom.select(&HEADING_SELECTOR)
                .filter_map(|el| {
                    let level = heading_level(el.value().name())?;
                    let text = normalize_whitespace(&el.text().collect::<String>());
                    if text.is_empty() {
                        None
                    } else {
                        Some(Heading { level, text })
                    }
                })
                .collect()
        })
    }

    /// All `<img>` elements in document order.
    #[must_use]
    pub fn images(&self) -> &[Image] {
        self.images.get_or_init(|| {
            let Some(dom) = self.dom() else {
                return Vec::new();
            };
            dom.select(&IMG_SELECTOR)
                .map(|el| Image {
                    src: el.value().attr("src").unwrap_or_default().to_string(),
                    alt: el.value().attr("alt").map(ToString::to_string),
                })
                .collect()
        })
    }

    /// All `<a>` elements in document order.
    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        self.anchors.get_or_init(|| {
            let Some(dom) = self.dom() else {
                return Vec::new();
            };
            dom.select(&ANCHOR_SELECTOR)
                .map(|el| Anchor {
                    href: el.value().attr("href").map(ToString::to_string),
                    text: normalize_whitespace(&el.text().collect::<String>()),
                })
                .collect()
        })
    }

    /// Raw text of every `<script type="application/ld+json">` block, left
    /// unparsed so one malformed block cannot break unrelated checks.
    #[must_use]
    pub fn json_ld_blocks(&self) -> &[String] {
        self.json_ld.get_or_init(|| {
            let Some(dom) = self.dom() else {
                return Vec::new();
            };
            dom.select(&JSON_LD_SELECTOR)
                .map(|el| el.text().collect::<String>())
                .filter(|block| !block.trim().is_empty())
                .collect()
        })
    }

    /// Tag-stripped, whitespace-normalized text of the document body
    /// (falls back to the whole document when there is no `<body>`).
    /// Script, style, noscript and template contents are excluded.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        self.plain_text.get_or_init(|| {
            let Some(dom) = self.dom() else {
                return String::new();
            };
            let root = dom
                .select(&BODY_SELECTOR)
                .next()
                .unwrap_or_else(|| dom.root_element());
            let mut out = String::new();
            collect_text(root, &mut out);
            normalize_whitespace(&out)
        })
    }

    /// Number of whitespace-separated words in `plain_text()`.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }

    /// Normalized, non-empty `<p>` texts in document order.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        self.paragraphs.get_or_init(|| {
            let Some(dom) = self.dom() else {
                return Vec::new();
            };
            dom.select(&PARAGRAPH_SELECTOR)
                .map(|el| normalize_whitespace(&el.text().collect::<String>()))
                .filter(|text| !text.is_empty())
                .collect()
        })
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("document_id", &self.document_id)
            .field("raw_html_len", &self.raw_html.len())
            .field("focus_keyword", &self.focus_keyword)
            .finish_non_exhaustive()
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if !matches!(name, "script" | "style" | "noscript" | "template") {
                collect_text(child_el, out);
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
