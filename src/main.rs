// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, written to stderr)
// 3. Crawl the site in fetch mode or enumerate mode
// 4. Write the markdown file, or print the discovered URLs
// 5. Exit with proper code (0 = ran to completion, 1 = fatal error)
//
// Pages that fail to download do NOT change the exit code; they are logged
// and the crawl moves on.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - crawl settings
mod crawl; // src/crawl/ - traversal engine
mod extract; // src/extract/ - links and text from HTML
mod fetch; // src/fetch/ - HTTP requests
mod output; // src/output.rs - output file and reports

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use cli::Cli;
use config::{CrawlConfig, CrawlMode};
use crawl::{parse_start_url, CrawlOutcome, Crawler};
use fetch::{Fetcher, HttpFetcher};
use output::{print_paths, CrawlReport};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins over -v/-q when set
fn init_logging(cli: &Cli) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let start = parse_start_url(&cli.url)?;
    let config = CrawlConfig::from_cli(&cli);
    let fetcher = HttpFetcher::new(&config.user_agent)?;

    crawl_site(fetcher, start, config, Path::new(&cli.output), cli.json).await
}

// Crawls, then either prints the discovered URLs (no file is written) or
// saves the pages to `output`. Pages that failed to fetch don't make this
// return an error; only a failed write does.
async fn crawl_site<F: Fetcher>(
    fetcher: F,
    start: Url,
    config: CrawlConfig,
    output: &Path,
    json: bool,
) -> Result<()> {
    let mode = config.mode;
    let outcome = Crawler::new(fetcher, start, config).run().await;

    match mode {
        CrawlMode::Enumerate => print_paths(&outcome.discovered, json),
        CrawlMode::Fetch => save_pages(&outcome, output, json),
    }
}

fn save_pages(outcome: &CrawlOutcome, output: &Path, json: bool) -> Result<()> {
    if outcome.pages.is_empty() {
        warn!("no pages were retrieved, writing an empty file");
    }

    outcome.pages.write_to(output)?;

    if json {
        return CrawlReport {
            output: output.display().to_string(),
            pages: outcome.pages.urls().collect(),
            visited: outcome.visited,
            failures: &outcome.failures,
        }
        .print();
    }

    println!("All content saved to {}", output.display());
    println!(
        "📄 {} page(s) saved, {} failed",
        outcome.pages.len(),
        outcome.failures.len()
    );
    Ok(())
}
