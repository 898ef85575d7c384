// src/crawl/frontier.rs
// =============================================================================
// This module implements website crawling with a breadth-first approach.
//
// How it works:
// 1. Start with the seed URL as the only member of the frontier
// 2. Each round takes the whole frontier as "current" and starts a new one
// 3. Every current URL that wasn't visited yet is marked visited and fetched
// 4. Same-origin links on that page that aren't visited go into the new frontier
// 5. Repeat for rounds 0..=max_depth, or until the frontier runs dry
//
// Depth semantics:
// - max_depth = 0 still runs one round, so the seed's direct links are
//   discovered (and appear in the result) but never fetched
// - max_depth = N runs N + 1 rounds
//
// The result is every URL that was ever marked visited, seed included.
//
// Rust concepts:
// - BTreeSet: a sorted set, so output order is stable between runs
// - std::mem::take: move a value out and leave an empty one behind
// - Generics: bfs works with any Fetcher (real HTTP or a test double)
// =============================================================================

use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use super::fetch::{FetchError, Fetcher};
use crate::links;

// Crawls a website breadth-first, starting from a seed URL
//
// Parameters:
//   fetcher: how pages are downloaded
//   max_depth: last round index (rounds run 0..=max_depth)
//   seed: the first URL, used verbatim as the first visited entry
//
// Returns:
//   Ok(visited) - every URL marked visited, sorted
//   Err(FetchError) - the first transport failure; the crawl stops there
pub async fn bfs<F: Fetcher>(
    fetcher: &F,
    max_depth: usize,
    seed: &str,
) -> Result<BTreeSet<String>, FetchError> {
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut frontier: BTreeSet<String> = BTreeSet::from([seed.to_string()]);

    info!("crawling {} (depth {})", seed, max_depth);

    for round in 0..=max_depth {
        if frontier.is_empty() {
            debug!("frontier empty after {} round(s)", round);
            break;
        }

        let current = std::mem::take(&mut frontier);
        info!("round {}: {} url(s) in frontier", round, current.len());

        for url in current {
            // A URL can be queued at one level and visited before its turn
            if visited.contains(&url) {
                continue;
            }
            visited.insert(url.clone());

            for link in page_links(fetcher, &url).await? {
                if !visited.contains(&link) {
                    frontier.insert(link);
                }
            }
        }
    }

    // Links discovered in the last round are part of the sitemap
    // but were never fetched
    visited.extend(frontier);

    info!("crawl finished: {} page(s)", visited.len());
    Ok(visited)
}

// Fetches one page and returns its same-origin links, in document order
//
// The origin is taken from the *final* URL, so a seed that redirects from
// http:// to https:// keeps crawling on https://.
//
// A page that can't be parsed yields no links; only fetch errors propagate.
pub async fn page_links<F: Fetcher>(fetcher: &F, url: &str) -> Result<Vec<String>, FetchError> {
    let page = fetcher.fetch(url).await?;
    let base = links::origin_of(&page.url);

    let anchors = match links::extract(page.body.as_slice()) {
        Ok(anchors) => anchors,
        Err(e) => {
            warn!("could not parse {}: {}", url, e);
            return Ok(Vec::new());
        }
    };
    // The body is released as soon as extraction is done
    drop(page);

    let found = links::hrefs(&base, &anchors);
    debug!(
        "{}: {} anchor(s), {} in scope for {}",
        url,
        anchors.len(),
        found.len(),
        base
    );
    Ok(found)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two sets instead of a VecDeque?
//    - Each round is one whole BFS layer, so a set per layer is enough
//    - Sets also remove duplicates inside a layer for free
//
// 2. Why check `visited` twice?
//    - When adding: don't queue what we already fetched
//    - When popping: a URL may have been queued twice in the same layer
//      (from two different pages) or fetched earlier in the same round
//
// 3. What does `?` do inside the loop?
//    - A fetch error leaves bfs() immediately with Err
//    - The caller (main) treats that as fatal: no sitemap is printed
// -----------------------------------------------------------------------------
