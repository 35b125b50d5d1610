// src/cli.rs
// =============================================================================
// Command-line interface, one subcommand per resource kind.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-warden",
    version,
    about = "Crawl a website, a local HTML file or raw HTML and report dead links"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output the report as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level, including the transport causes of dead verdicts
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recursively crawl one or more websites
    ///
    /// Example: link-warden url http://example.com
    Url {
        /// Website URLs to crawl (http:// is assumed when no scheme is given)
        #[arg(required = true)]
        urls: Vec<String>,

        /// Pause for this many seconds after every 10th fetch
        #[arg(long, value_name = "SECONDS")]
        throttle: Option<u64>,

        /// Check the links on the start page without recursing into them
        #[arg(long)]
        no_recurse: bool,
    },

    /// Scan local HTML files; only their external links are checked
    ///
    /// Example: link-warden file docs/index.html
    File {
        /// Paths of the HTML files to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Scan literal HTML content; only its external links are checked
    ///
    /// Example: cat page.html | link-warden html
    Html {
        /// The HTML content; read from stdin when omitted
        content: Option<String>,
    },
}
