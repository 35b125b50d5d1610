// src/crawl/engine.rs
// =============================================================================
// The crawl engine.
//
// One engine instance owns one crawl session: a visited set of canonical
// links, the dead-link records in discovery order, and a pair of counters.
// crawl() resets the session, verifies the root (fail-fast), then walks the
// internal graph depth-first in document order. Every newly discovered link
// is liveness checked when the resource kind supports it; only links that
// are internal and not dead are recursed into.
//
// The traversal is sequential on purpose: document-order, depth-first
// recursion is what makes the dead-link report deterministic.
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::checker::{DeadReason, LivenessChecker, Verdict};
use crate::extract;
use crate::normalize;
use crate::provider::ResourceProvider;

// Fetches between throttle pauses; page fetches and link checks both count.
const THROTTLE_EVERY: usize = 10;

/// Terminal crawl failures. Everything else degrades to a dead-link record
/// or an empty page and never escapes `crawl()`.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("the root resource ({resource}) is not reachable: {reason}")]
    RootUnreachable { resource: String, reason: DeadReason },

    #[error("the root file ({path}) does not exist")]
    RootFileMissing { path: String },
}

/// One entry of the dead-link report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadLink {
    pub link: String,
    #[serde(flatten)]
    pub reason: DeadReason,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Cooperative delay inserted after every 10th fetch, to stay clear of
    /// remote rate limiters.
    pub throttle: Option<Duration>,
    /// When false, links on the start page are checked but never recursed
    /// into.
    pub recurse: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            throttle: None,
            recurse: true,
        }
    }
}

/// Per-session mutable state, reset on every crawl() call.
#[derive(Debug, Default)]
struct Session {
    visited: HashSet<String>,
    dead_links: Vec<DeadLink>,
    pages_visited: usize,
    fetches: usize,
}

/// The crawl engine, generic over the resource kind's capability record.
///
/// Session state never leaves the instance; concurrent crawls need distinct
/// engines, which the `&mut self` receiver on [`Crawler::crawl`] enforces.
pub struct Crawler<P: ResourceProvider> {
    provider: P,
    resource: String,
    checker: LivenessChecker,
    config: CrawlConfig,
    session: Session,
}

impl<P: ResourceProvider> Crawler<P> {
    pub fn new(provider: P, resource: String, checker: LivenessChecker, config: CrawlConfig) -> Self {
        Self {
            provider,
            resource,
            checker,
            config,
            session: Session::default(),
        }
    }

    /// Crawls the resource and accumulates the dead-link report.
    ///
    /// The session is cleared first, so calling this twice against an
    /// unchanged site reproduces an identical report. Fails only when root
    /// verification fails, in which case no traversal happens and the
    /// report stays empty.
    pub async fn crawl(&mut self) -> Result<(), CrawlError> {
        self.session = Session::default();

        self.provider.verify_root(&self.resource).await?;

        let root = self
            .provider
            .resolve(&self.resource, self.provider.root_route());
        self.session.visited.insert(root);

        let root_route = self.provider.root_route().map(String::from);
        self.crawl_route(root_route).await;

        info!("visited {} link(s)", self.session.visited.len());
        Ok(())
    }

    /// Dead links found by the last crawl, in discovery order.
    pub fn dead_links(&self) -> &[DeadLink] {
        &self.session.dead_links
    }

    /// Canonical links visited by the last crawl.
    pub fn links_visited(&self) -> usize {
        self.session.visited.len()
    }

    /// Pages whose content was fetched and scanned by the last crawl.
    pub fn pages_visited(&self) -> usize {
        self.session.pages_visited
    }

    // The recursive step. Async recursion needs an explicitly boxed future;
    // the traversal itself is the same depth-first walk it would be as a
    // plain recursive function.
    fn crawl_route(&mut self, route: Option<String>) -> BoxFuture<'_, ()> {
        async move {
            let page_link = self.provider.resolve(&self.resource, route.as_deref());

            let content = match self.provider.fetch_content(&page_link).await {
                Ok(content) => content,
                Err(error) => {
                    // Silent-empty: the page yields no links, the crawl
                    // goes on.
                    warn!("failed to get page content for {page_link}: {error:#}");
                    return;
                }
            };
            self.session.pages_visited += 1;
            self.throttle_tick().await;

            let links = extract::extract_links(&content);
            debug!("crawling {page_link}: found {} link(s)", links.len());

            for link in links {
                let full_link = self.provider.resolve(&self.resource, Some(link.as_str()));

                // Mark-and-test in one step; this gate also keeps the dead
                // list free of duplicates.
                if !self.session.visited.insert(full_link.clone()) {
                    continue;
                }

                if self.provider.is_link_checkable(&full_link) {
                    let verdict = self.checker.check(&full_link).await;
                    self.throttle_tick().await;

                    if let Verdict::Dead(reason) = verdict {
                        debug!("dead link {full_link}: {reason}");
                        self.session.dead_links.push(DeadLink {
                            link: full_link,
                            reason,
                        });
                        continue;
                    }
                }

                if self.config.recurse && normalize::is_internal(&link, Some(self.resource.as_str()))
                {
                    self.crawl_route(Some(link)).await;
                }
            }
        }
        .boxed()
    }

    async fn throttle_tick(&mut self) {
        self.session.fetches += 1;
        if let Some(delay) = self.config.throttle {
            if self.session.fetches % THROTTLE_EVERY == 0 {
                debug!("throttling for {delay:?}");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
