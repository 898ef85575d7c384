// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL, one layer per round
// - Same-origin restriction (doesn't crawl external sites)
// - Configurable number of rounds
// - Pluggable page fetching (reqwest in production, in-memory in tests)
//
// Rust concepts:
// - Async programming: fetches are awaited one after another
// - Collections: BTreeSet for the visited set and each frontier layer
// =============================================================================

mod fetch;
mod frontier;

// Re-export the pieces main.rs needs
pub use fetch::HttpFetcher;
pub use frontier::bfs;
