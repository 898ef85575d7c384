// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool has no subcommands, just three flags:
//   --url      where to start crawling
//   --depth    how many BFS rounds to run (rounds 0..=depth)
//   --timeout  optional per-request timeout in seconds
//
// Logging verbosity is controlled by RUST_LOG (see main.rs), not by a flag.
// =============================================================================

use clap::Parser;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://gophercises.com";

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Crawl a website breadth-first and print an XML sitemap",
    long_about = "sitemap-builder starts at --url, follows same-origin links breadth-first \
                  for --depth + 1 rounds, and prints a sitemap.org XML document to stdout. \
                  Progress and errors are logged to stderr."
)]
pub struct Cli {
    /// The URL that you want to build a sitemap for
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// The depth of the sitemap
    ///
    /// Depth 0 = fetch the seed, list it and its direct links
    /// Depth 1 = also fetch those links and list what they point to
    /// etc.
    ///
    /// Pages found in the last round are listed in the sitemap but not fetched.
    #[arg(long, default_value_t = 3)]
    pub depth: usize,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
