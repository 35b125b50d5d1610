// src/main.rs
// =============================================================================
// Entry point.
//
// 1. Parse command-line arguments with clap
// 2. Build one crawl engine per resource and run them sequentially
// 3. Render the dead-link reports as a table or JSON
// 4. Exit with 0 (clean), 1 (dead links found) or 2 (a crawl failed)
// =============================================================================

mod checker;
mod cli;
mod crawl;
mod extract;
mod normalize;
mod provider;

use anyhow::{anyhow, Result};
use clap::Parser;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use checker::LivenessChecker;
use cli::{Cli, Commands};
use crawl::{CrawlConfig, Crawler, DeadLink};
use provider::{FileProvider, HtmlProvider, ResourceProvider, WebProvider};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

/// Everything crawled for one resource, ready for rendering.
#[derive(Debug, Serialize)]
struct CrawlReport {
    resource: String,
    links_visited: usize,
    pages_visited: usize,
    dead_links: Vec<DeadLink>,
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("link-warden/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let mut reports = Vec::new();
    let mut failures = 0usize;

    match cli.command {
        Commands::Url {
            urls,
            throttle,
            no_recurse,
        } => {
            let config = CrawlConfig {
                throttle: throttle.map(Duration::from_secs),
                recurse: !no_recurse,
            };

            for url in urls {
                let resource = normalize::ensure_http_scheme(url.trim());
                if let Err(error) = Url::parse(&resource) {
                    eprintln!("Error: invalid URL '{url}': {error}");
                    failures += 1;
                    continue;
                }

                let mut crawler = Crawler::new(
                    WebProvider::new(client.clone()),
                    resource.clone(),
                    LivenessChecker::new(client.clone()),
                    config.clone(),
                );
                collect_report(&mut crawler, &resource, &mut reports, &mut failures).await;
            }
        }

        Commands::File { paths } => {
            // Internal links in a file are routes of some site we can't
            // resolve from disk: check the start page's links, never descend.
            let config = CrawlConfig {
                recurse: false,
                ..CrawlConfig::default()
            };

            for path in paths {
                let resource = path.display().to_string();
                let mut crawler = Crawler::new(
                    FileProvider,
                    resource.clone(),
                    LivenessChecker::new(client.clone()),
                    config.clone(),
                );
                collect_report(&mut crawler, &resource, &mut reports, &mut failures).await;
            }
        }

        Commands::Html { content } => {
            let content = match content {
                Some(content) => content,
                None => std::io::read_to_string(std::io::stdin())
                    .map_err(|error| anyhow!("failed to read HTML from stdin: {error}"))?,
            };

            // Same as the file scan: literal HTML has no site to descend into.
            let config = CrawlConfig {
                recurse: false,
                ..CrawlConfig::default()
            };

            let mut crawler = Crawler::new(
                HtmlProvider,
                content,
                LivenessChecker::new(client.clone()),
                config,
            );
            collect_report(&mut crawler, "inline HTML", &mut reports, &mut failures).await;
        }
    }

    print_results(&reports, cli.json)?;

    let dead_total: usize = reports.iter().map(|report| report.dead_links.len()).sum();
    Ok(if failures > 0 {
        2
    } else if dead_total > 0 {
        1
    } else {
        0
    })
}

// Runs one crawl and records either its report or its failure. A failed
// root never stops the remaining resources.
async fn collect_report<P: ResourceProvider>(
    crawler: &mut Crawler<P>,
    label: &str,
    reports: &mut Vec<CrawlReport>,
    failures: &mut usize,
) {
    println!("🔍 Crawling {label}");

    match crawler.crawl().await {
        Ok(()) => reports.push(CrawlReport {
            resource: label.to_string(),
            links_visited: crawler.links_visited(),
            pages_visited: crawler.pages_visited(),
            dead_links: crawler.dead_links().to_vec(),
        }),
        Err(error) => {
            eprintln!("Error: {error}");
            *failures += 1;
        }
    }
}

fn print_results(reports: &[CrawlReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            print_table(report);
        }
    }
    Ok(())
}

// Human-readable table of one resource's dead links.
fn print_table(report: &CrawlReport) {
    println!();
    println!("📄 {}", report.resource);

    if report.dead_links.is_empty() {
        println!("   ✅ No dead links found");
    } else {
        println!("{:<60} {:<40}", "LINK", "REASON");
        println!("{}", "=".repeat(100));
        for dead in &report.dead_links {
            println!("{:<60} {:<40}", truncate(&dead.link, 57), dead.reason);
        }
    }

    println!(
        "📊 {} dead link(s), {} link(s) visited, {} page(s) crawled",
        report.dead_links.len(),
        report.links_visited,
        report.pages_visited
    );
}

// Cuts at a character boundary; links can carry multi-byte UTF-8.
fn truncate(link: &str, max: usize) -> String {
    match link.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &link[..cut]),
        None => link.to_string(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}
