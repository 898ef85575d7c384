// src/links/extract.rs
// =============================================================================
// This module extracts anchors (<a> elements) from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model) tree
// - Is built on html5ever, so broken markup (unclosed tags, stray end tags,
//   bad nesting) is repaired instead of rejected
//
// Instead of a CSS selector we walk the tree ourselves, because:
// - the text of an anchor is only its *direct* text children
// - we must not look for links inside an <a> once we found one
// - an <a> without href is reported, not silently filtered out
//
// Rust concepts:
// - Enums with data: scraper::Node is Element | Text | Comment | ...
// - Explicit stacks: deep documents can't overflow the call stack
// - Result<T, E> per item: one bad anchor doesn't spoil the page
// =============================================================================

use scraper::{Html, Node};
use std::io::Read;
use thiserror::Error;
use tracing::debug;

// A raw link as found in the document
//
// href may be relative, absolute, "mailto:", "#top" or even empty;
// deciding what to do with it is the normalizer's job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// Failure to turn a byte stream into a document at all.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read HTML stream: {0}")]
    Read(#[from] std::io::Error),
}

/// Failure to turn a single `<a>` element into an [`Anchor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    #[error("<a> element without an href attribute (text: {text:?})")]
    MissingHref { text: String },
}

// Reads a whole HTML stream and returns every valid anchor in document order
//
// Parameters:
//   reader: anything readable, e.g. a response body (&[u8]) or a file
//
// Returns:
//   Ok(anchors) - possibly empty, possibly shorter than the number of <a> tags
//   Err(ParseError) - only when the stream can't be read
//
// Bytes that aren't valid UTF-8 (Latin-1, windows-1252 pages) become U+FFFD,
// so hrefs and surrounding markup survive.
//
// Example:
//   "<a href='/a'>A</a><a>no href</a><a href='/b'> B </a>"
//   -> [Anchor { "/a", "A" }, Anchor { "/b", "B" }]
pub fn extract<R: Read>(mut reader: R) -> Result<Vec<Anchor>, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let html = String::from_utf8_lossy(&bytes);

    let document = Html::parse_document(&html);

    let mut valid = Vec::new();
    for result in anchors(&document) {
        match result {
            Ok(anchor) => valid.push(anchor),
            Err(e) => debug!("skipping anchor: {}", e),
        }
    }

    Ok(valid)
}

// Walks the document tree depth-first, pre-order, and yields one result per
// <a> element
//
// The walk uses an explicit stack. Children are pushed in reverse so that the
// first child is popped first, which keeps document order.
pub fn anchors(document: &Html) -> Vec<Result<Anchor, AnchorError>> {
    let mut found = Vec::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node.value() {
            if element.name() == "a" {
                let text = direct_text(node.children().map(|child| child.value()));
                // Nested anchors are not searched for
                found.push(match element.attr("href") {
                    Some(href) => Ok(Anchor {
                        href: href.to_string(),
                        text,
                    }),
                    None => Err(AnchorError::MissingHref { text }),
                });
                continue;
            }
        }

        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }

    found
}

// Concatenates the text nodes among an element's children and trims it
//
// Text inside nested elements (<a><b>bold</b> plain</a>) is ignored,
// only " plain" counts here.
fn direct_text<'a>(children: impl Iterator<Item = &'a Node>) -> String {
    let mut text = String::new();
    for child in children {
        if let Node::Text(data) = child {
            text.push_str(data);
        }
    }
    text.trim().to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why read the whole stream first?
//    - html5ever wants the complete document as a string
//    - Pages are small enough to hold in memory
//    - Reading up front separates I/O errors from parsing, which never fails
//
// 2. What is `impl Iterator<Item = &'a Node>`?
//    - "Some iterator that yields references to nodes"
//    - The caller decides which iterator; we don't care about its real type
//    - The lifetime 'a ties the references to the document they came from
//
// 3. Why return Vec<Result<...>> from anchors()?
//    - Each anchor can fail on its own
//    - The caller decides whether to log, count, or ignore the failures
//    - extract() chooses to log and keep going
//
// 4. What does String::from_utf8_lossy return?
//    - A Cow<str>: borrowed when the bytes were already UTF-8, owned otherwise
//    - Invalid sequences are replaced, never rejected
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(href: &str, text: &str) -> Anchor {
        Anchor {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extract_in_document_order() {
        let html = r#"
            <html><body>
              <a href="/dog">Something in a span</a>
              <div><p><a href="https://example.com/cat">Cat</a></p></div>
              <a href="/dog-cat">dog cat</a>
            </body></html>
        "#;
        let links = extract(html.as_bytes()).unwrap();
        assert_eq!(
            links,
            vec![
                anchor("/dog", "Something in a span"),
                anchor("https://example.com/cat", "Cat"),
                anchor("/dog-cat", "dog cat"),
            ]
        );
    }

    #[test]
    fn test_text_is_direct_children_only() {
        let html = r#"<a href="/x">  Hello <strong>bold</strong> world  </a>"#;
        let links = extract(html.as_bytes()).unwrap();
        assert_eq!(links, vec![anchor("/x", "Hello  world")]);
    }

    #[test]
    fn test_missing_href_is_skipped_not_fatal() {
        let html = r#"<a href="/a">A</a><a name="top">Top</a><a href="/b">B</a>"#;
        let links = extract(html.as_bytes()).unwrap();
        assert_eq!(links, vec![anchor("/a", "A"), anchor("/b", "B")]);
    }

    #[test]
    fn test_anchors_reports_missing_href() {
        let document = Html::parse_document(r#"<a href="/a">A</a><a> Top </a>"#);
        let results = anchors(&document);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], Ok(anchor("/a", "A")));
        assert_eq!(
            results[1],
            Err(AnchorError::MissingHref {
                text: "Top".to_string()
            })
        );
    }

    #[test]
    fn test_first_href_wins() {
        let html = r#"<a href="/first" href="/second">x</a>"#;
        let links = extract(html.as_bytes()).unwrap();
        assert_eq!(links, vec![anchor("/first", "x")]);
    }

    #[test]
    fn test_empty_href_is_kept() {
        let html = r#"<a href="">empty</a>"#;
        let links = extract(html.as_bytes()).unwrap();
        assert_eq!(links, vec![anchor("", "empty")]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let html = r#"<p><a href="/one">one</p><a href="/two">two</b></i><div>"#;
        let links = extract(html.as_bytes()).unwrap();
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/one", "/two"]);
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 5_000;
        let html = format!(
            "{}<a href=\"/deep\">deep</a>{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let links = extract(html.as_bytes()).unwrap();
        assert_eq!(links, vec![anchor("/deep", "deep")]);
    }

    #[test]
    fn test_no_anchors() {
        let links = extract("<p>nothing here</p>".as_bytes()).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_latin1_page_keeps_its_links() {
        let bytes: &[u8] =
            b"<meta charset=\"iso-8859-1\"><p>caf\xE9</p><a href=\"/a\">A</a><a href=\"/b\">B</a>";
        let links = extract(bytes).unwrap();
        assert_eq!(links, vec![anchor("/a", "A"), anchor("/b", "B")]);
    }

    #[test]
    fn test_latin1_anchor_text_is_replaced_not_dropped() {
        let bytes: &[u8] = b"<a href=\"/caf\xE9\">Caf\xE9</a>";
        let links = extract(bytes).unwrap();
        assert_eq!(links, vec![anchor("/caf\u{FFFD}", "Caf\u{FFFD}")]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            ))
        }
    }

    #[test]
    fn test_unreadable_stream_is_parse_error() {
        assert!(matches!(extract(FailingReader), Err(ParseError::Read(_))));
    }
}
