// src/sitemap.rs
// =============================================================================
// This module renders the crawl result as a sitemap document.
//
// Output shape (https://www.sitemaps.org/protocol.html):
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
//
// We describe the document with plain structs and let quick-xml's serde
// serializer write it. quick-xml also escapes characters like & in URLs.
// =============================================================================

use quick_xml::errors::serialize::SeError;
use quick_xml::se::Serializer;
use serde::Serialize;
use thiserror::Error;

pub const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to serialize sitemap: {0}")]
    Serialize(#[from] SeError),
}

// The <urlset> root element
//
// Field names starting with '@' become XML attributes in quick-xml.
#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
pub struct Sitemap {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    urls: Vec<Entry>,
}

// One <url><loc>...</loc></url> entry
#[derive(Debug, Serialize)]
struct Entry {
    loc: String,
}

impl Sitemap {
    // Builds a sitemap with one entry per URL, in iteration order
    //
    // Pass a BTreeSet to get sorted, reproducible output.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Sitemap {
            xmlns: XMLNS,
            urls: urls.into_iter().map(|loc| Entry { loc: loc.into() }).collect(),
        }
    }

    // Renders the full document, XML declaration included
    pub fn to_xml(&self) -> Result<String, SitemapError> {
        let mut xml = String::from(XML_HEADER);
        xml.push('\n');

        let mut serializer = Serializer::new(&mut xml);
        serializer.indent(' ', 2);
        self.serialize(serializer)?;

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_document_has_header_and_namespace() {
        let xml = Sitemap::from_urls(["https://example.com"]).to_xml().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"
        ));
        assert!(xml.contains("<loc>https://example.com</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_one_entry_per_url_in_set_order() {
        let visited: BTreeSet<String> = ["https://a.com/b", "https://a.com", "https://a.com/a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let xml = Sitemap::from_urls(&visited).to_xml().unwrap();
        assert_eq!(xml.matches("<url>").count(), 3);

        let first = xml.find("<loc>https://a.com</loc>").unwrap();
        let second = xml.find("<loc>https://a.com/a</loc>").unwrap();
        let third = xml.find("<loc>https://a.com/b</loc>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_entries_are_indented() {
        let xml = Sitemap::from_urls(["https://a.com"]).to_xml().unwrap();
        assert!(xml.contains("\n  <url>\n    <loc>https://a.com</loc>\n  </url>\n"));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let xml = Sitemap::from_urls(["https://a.com/?x=1&y=2"]).to_xml().unwrap();
        assert!(xml.contains("<loc>https://a.com/?x=1&amp;y=2</loc>"));
    }
}
