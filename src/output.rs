// src/output.rs
// =============================================================================
// Everything the crawl hands back to the user.
//
// - PageCollector: markdown of every fetched page, in fetch order, and the
//   single output file built from it
// - print_paths: the enumerate-mode listing on stdout
// - CrawlReport: the optional --json summary
//
// The output file is written once, after the crawl finishes. A write
// failure is fatal for the program (the crawl results only live in memory).
// =============================================================================

use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::crawl::FetchFailure;

// Page records keyed by normalized URL
//
// IndexMap iterates in insertion order, which is the order pages were
// fetched and therefore the order they appear in the output.
#[derive(Debug, Default)]
pub struct PageCollector {
    pages: IndexMap<String, String>,
}

impl PageCollector {
    pub fn insert(&mut self, url: &str, content: String) {
        self.pages.insert(url.to_string(), content);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    // Renders every page as:
    //
    //   ## Page: <url>
    //
    //   <content>
    //
    //   ---
    //
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (url, content) in &self.pages {
            out.push_str("## Page: ");
            out.push_str(url);
            out.push_str("\n\n");
            out.push_str(content);
            out.push_str("\n\n---\n\n");
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write output file {}", path.display()))
    }
}

// Prints discovered URLs to stdout, one per line or as a JSON array
pub fn print_paths(urls: &IndexSet<String>, json: bool) -> Result<()> {
    if json {
        let list: Vec<&String> = urls.iter().collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for url in urls {
            println!("{}", url);
        }
    }
    Ok(())
}

// Summary of a fetch-mode crawl, printed with --json
#[derive(Debug, Serialize)]
pub struct CrawlReport<'a> {
    pub output: String,
    pub pages: Vec<&'a str>,
    pub visited: usize,
    pub failures: &'a [FetchFailure],
}

impl CrawlReport<'_> {
    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}
