// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// The crawler doesn't use reqwest directly. It goes through the `Fetcher`
// trait, so tests can hand it an in-memory website instead of the network.
//
// What a fetch gives back:
// - the final URL after redirects (needed to know which site we landed on)
// - the raw body bytes
//
// What counts as an error:
// - transport failures only (DNS, connection refused, TLS, body read)
// - an HTTP 404 or 500 is still a page with a body, so it is returned as Ok
//
// Rust concepts:
// - Traits: describe behaviour that several types can implement
// - impl Future in traits: "this method is async" without extra crates
// - Box<dyn Error>: store any error type behind one pointer
// =============================================================================

use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

// A downloaded page
#[derive(Debug, Clone)]
pub struct Page {
    /// The URL the response actually came from (after redirects)
    pub url: Url,
    pub body: Vec<u8>,
}

/// A transport-level failure while fetching `url`.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl FetchError {
    pub fn new(url: &str, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        FetchError {
            url: url.to_string(),
            source: source.into(),
        }
    }
}

// Anything that can turn a URL into a Page
//
// Implementations must follow redirects themselves and report the final URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Page, FetchError>>;
}

// The real fetcher, backed by a reqwest Client
//
// One client is reused for the whole crawl (connection pooling).
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client
    //
    // Parameters:
    //   timeout: per-request timeout; None means wait forever
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        let final_url = response.url().clone();
        debug!(
            "GET {} -> {} (HTTP {})",
            url,
            final_url,
            response.status().as_u16()
        );

        // bytes() consumes the response, so the connection is released here
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        Ok(Page {
            url: final_url,
            body: body.to_vec(),
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawler logic (BFS, dedup, depth) is the interesting part to test
//    - Tests can implement Fetcher with a HashMap of fake pages
//    - No network needed, tests are fast and deterministic
//
// 2. What is `impl Future<Output = ...>` in a trait?
//    - It says "fetch returns something you can .await"
//    - Implementations may simply write `async fn fetch(...)`
//    - Supported natively since Rust 1.75
//
// 3. Why is a 404 not an error?
//    - The server answered; the body is still HTML we can read links from
//    - Only "we couldn't talk to the server at all" stops the crawl
// -----------------------------------------------------------------------------
