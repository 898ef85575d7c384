// src/links/mod.rs
// =============================================================================
// This module turns raw HTML into crawlable URLs.
//
// Submodules:
// - extract: Parses HTML and pulls out every <a> element (href + text)
// - normalize: Turns hrefs into absolute URLs and keeps same-origin ones
//
// The crawler only talks to this file's re-exports, so it never needs to know
// whether a link was dropped because the markup was broken or because it
// pointed somewhere else.
// =============================================================================

mod extract;
mod normalize;

pub use extract::{extract, Anchor};
pub use normalize::{hrefs, origin_of};
