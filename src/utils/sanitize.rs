//! Allow-list HTML sanitizer for rich-text project descriptions
//!
//! Descriptions are rendered as markup by the presentation layer, so
//! everything stored in the catalog must already be safe: script and
//! style elements are dropped with their content, unknown tags are
//! stripped, and all attributes except an http(s) `href` on anchors are
//! discarded.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "b", "i", "u", "a", "ul", "ol", "li", "code",
];

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script regex"));
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("style regex"));
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?([a-zA-Z][a-zA-Z0-9]*)\b[^>]*/?>").expect("tag regex"));
static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)href\s*=\s*["']([^"']*)["']"#).expect("href regex"));

/// Reduce an HTML fragment to the allow-listed subset.
pub fn clean_html(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(input, "");
    let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");
    let without_comments = COMMENT.replace_all(&without_styles, "");

    TAG.replace_all(&without_comments, |caps: &Captures| rewrite_tag(caps))
        .into_owned()
}

fn rewrite_tag(caps: &Captures) -> String {
    let raw = &caps[0];
    let name = caps[1].to_lowercase();

    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return String::new();
    }

    if raw.starts_with("</") {
        return format!("</{}>", name);
    }

    // Attributes are scrubbed; anchors keep an href when the scheme is
    // plain http(s).
    if name == "a" {
        if let Some(href) = HREF.captures(raw).map(|c| c[1].to_string()) {
            if is_safe_href(&href) {
                return format!("<a href=\"{}\">", href);
            }
        }
        return "<a>".to_string();
    }

    format!("<{}>", name)
}

fn is_safe_href(href: &str) -> bool {
    let lower = href.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
