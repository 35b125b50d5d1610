// src/normalize.rs
// =============================================================================
// Link normalization and internal/external classification.
//
// Two links count as "the same page" iff their canonical forms are
// byte-equal, so everything the engine stores in its visited set goes
// through canonicalize() first.
// =============================================================================

/// Resolves a raw link against its source and normalizes the result.
///
/// Rules, in order:
/// - `"/"` is the site root, i.e. the source itself
/// - a leading `/` resolves against the source (site-root relative)
/// - anything else is already absolute and passes through unchanged
/// - a result starting with `www` gets `http://` prefixed; we always start
///   from plain HTTP and let the server redirect to HTTPS, not the other
///   way around
/// - one trailing `/` is stripped so `http://x.com/` and `http://x.com`
///   canonicalize identically
pub fn canonicalize(source_link: &str, raw_link: &str) -> String {
    let mut full = if raw_link == "/" {
        source_link.to_string()
    } else if raw_link.starts_with('/') {
        format!("{source_link}{raw_link}")
    } else {
        raw_link.to_string()
    };

    if full.starts_with("www") {
        full.insert_str(0, "http://");
    }

    if full.ends_with('/') {
        full.pop();
    }

    full
}

/// Classifies a raw link as internal (same site as its source) or external.
///
/// A link is internal iff it starts with `/`, or the source is known and
/// the link starts with the source verbatim. The prefix match is not
/// domain-aware: `http://example.com.evil.com` classifies as internal to
/// `http://example.com`. Known limitation, kept for compatibility.
pub fn is_internal(raw_link: &str, source_link: Option<&str>) -> bool {
    raw_link.starts_with('/') || source_link.is_some_and(|source| raw_link.starts_with(source))
}

/// Forces a scheme onto a user-supplied URL. HTTP clients refuse
/// scheme-less URLs, and sites with encryption redirect HTTP to HTTPS.
pub fn ensure_http_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
