// src/links/normalize.rs
// =============================================================================
// This module turns raw hrefs into absolute URLs and keeps only the ones that
// belong to the site being crawled.
//
// The rules are intentionally simple string rules, not full URL resolution:
// - "/path"          -> origin + "/path"   (plain concatenation)
// - "http..."        -> used as-is         (http:// and https://)
// - anything else    -> dropped            (relative paths, mailto:, #frag, "")
//
// "Same site" is also a string check: the URL must start with the origin.
// That means "https://example.com.evil.net" counts as in scope for
// "https://example.com".
// =============================================================================

use tracing::trace;
use url::Url;

use super::Anchor;

// Returns the origin of a URL as "scheme://host[:port]" with no path
//
// `Url` normalizes hosts and ports when it parses, so the origin is too:
// - default ports are omitted: https://example.com:443/a -> https://example.com
// - IDN hosts are punycode: https://bücher.de/ -> https://xn--bcher-kva.de
//
// Absolute hrefs are compared as written, so a page linking to its own
// Unicode hostname (https://bücher.de/x) doesn't pass the prefix filter.
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

// Resolves one href against an origin
//
// Examples (base = "https://example.com"):
//   "/docs"                  -> Some("https://example.com/docs")
//   "//cdn.example.com/x.js" -> Some("https://example.com//cdn.example.com/x.js")
//   "https://other.com/"     -> Some("https://other.com/")
//   "docs/intro"             -> None
//   "mailto:me@example.com"  -> None
pub fn resolve(base: &str, href: &str) -> Option<String> {
    if href.starts_with('/') {
        Some(format!("{}{}", base, href))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}

pub fn same_origin(base: &str, url: &str) -> bool {
    url.starts_with(base)
}

// Resolves and filters a page's anchors in one pass, keeping document order
pub fn hrefs(base: &str, anchors: &[Anchor]) -> Vec<String> {
    let mut urls = Vec::new();
    for anchor in anchors {
        match resolve(base, &anchor.href) {
            Some(url) if same_origin(base, &url) => urls.push(url),
            Some(url) => trace!("off-origin link {:?} ({:?})", url, anchor.text),
            None => trace!("unresolvable href {:?} ({:?})", anchor.href, anchor.text),
        }
    }
    urls
}
