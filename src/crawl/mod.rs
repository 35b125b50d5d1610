// src/crawl/mod.rs
// =============================================================================
// The crawl engine: depth-first traversal of the reachable internal graph,
// with a visited set to guarantee termination and a dead-link accumulator
// for the report.
// =============================================================================

mod engine;

pub use engine::{CrawlConfig, CrawlError, Crawler, DeadLink};
