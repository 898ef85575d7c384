// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (to stderr, so stdout only carries the sitemap)
// 2. Parse command-line arguments using clap
// 3. Crawl the site breadth-first
// 4. Print the sitemap XML to stdout
// 5. Exit with proper code (0 = sitemap printed, 1 = fatal error)
//
// Any fetch error is fatal: the crawl stops and nothing is printed.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - BFS over the site, page fetching
mod links; // src/links/ - anchor extraction and URL filtering
mod sitemap; // src/sitemap.rs - XML output

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

// The crawl is sequential: one request at a time, so one thread is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; RUST_LOG overrides the default "info" level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // The seed is used verbatim later; parsing only checks it's a real URL
    Url::parse(&cli.url).with_context(|| format!("invalid --url '{}'", cli.url))?;

    let fetcher =
        crawl::HttpFetcher::new(cli.timeout()).context("failed to build HTTP client")?;

    let visited = crawl::bfs(&fetcher, cli.depth, &cli.url).await?;

    let xml = sitemap::Sitemap::from_urls(&visited).to_xml()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(xml.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    info!("wrote sitemap with {} url(s)", visited.len());
    Ok(())
}
