// src/extract.rs
// =============================================================================
// Link extraction from raw page content.
//
// This is deliberately regex-based pattern matching, not a DOM: we only need
// the href values and bare text URLs, and a full parse would drag in
// browser-grade error recovery we don't want deciding what counts as a link.
//
// Only the document body is scanned. Links in <head> (stylesheets, schemas,
// scripts) are not user-navigable, so they are not our problem.
// =============================================================================

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// First <body ...> to last </body>, case-insensitive, dot matches newlines.
static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap());

// Anchor href values: double-quoted, single-quoted or unquoted.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*?\shref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>]+))"#).unwrap()
});

// Bare URLs in text: http(s) scheme or a www. prefix with a dotted domain,
// followed by an optional path that doesn't end in trailing punctuation.
static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)[\w-]+(?:\.[\w-]+)+(?:[\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?")
        .unwrap()
});

/// Extracts the ordered sequence of links found in the page content.
///
/// Two patterns are recognized: anchor-tag href values, and bare URLs in the
/// body text that are not already part of an href attribute. Links come back
/// in document order and duplicates are kept; deduplication is the crawl
/// engine's job.
///
/// A page without a `<body>` tag yields no links rather than an error, so
/// one malformed page can't abort a multi-resource run.
pub fn extract_links(content: &str) -> Vec<String> {
    let Some(body) = page_body(content) else {
        return Vec::new();
    };

    // (position, link) pairs so the two passes can be merged in document order.
    let mut found: Vec<(usize, String)> = Vec::new();
    let mut href_spans: Vec<Range<usize>> = Vec::new();

    for captures in HREF_RE.captures_iter(body) {
        let value = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3))
            .unwrap();
        href_spans.push(value.range());

        if is_link(value.as_str()) {
            found.push((value.start(), value.as_str().to_string()));
        }
    }

    for bare in BARE_URL_RE.find_iter(body) {
        if inside_href(&href_spans, bare.start()) || quoted_or_mid_url(body, bare.start()) {
            continue;
        }
        found.push((bare.start(), bare.as_str().to_string()));
    }

    found.sort_by_key(|(position, _)| *position);
    found.into_iter().map(|(_, link)| link).collect()
}

/// The scanned region: between the first `<body>` and the last `</body>`.
fn page_body(content: &str) -> Option<&str> {
    BODY_RE
        .captures(content)
        .map(|captures| captures.get(1).unwrap().as_str())
}

// An href value is a link when it has one of the shapes the crawler
// understands: rooted path, absolute http(s), or bare www domain. Everything
// else (fragments, mailto:, javascript:, page-relative paths) is skipped.
fn is_link(href: &str) -> bool {
    href.starts_with('/') || href.starts_with("http") || href.starts_with("www")
}

fn inside_href(href_spans: &[Range<usize>], position: usize) -> bool {
    href_spans.iter().any(|span| span.contains(&position))
}

// A bare match right after a quote is an attribute value of some other tag,
// and one right after a slash is the tail of a longer URL.
fn quoted_or_mid_url(body: &str, position: usize) -> bool {
    body[..position]
        .chars()
        .next_back()
        .is_some_and(|preceding| matches!(preceding, '"' | '\'' | '/'))
}
