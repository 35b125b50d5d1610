// src/provider/mod.rs
// =============================================================================
// Content providers: one per resource kind (web page, local file, literal
// HTML). The crawl engine is generic over this trait, so a provider is a
// small capability record — fetch, root verification, root route, link
// eligibility, link resolution — and nothing else. Providers never recurse
// and never classify.
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;

use crate::crawl::CrawlError;

mod file;
mod html;
mod web;

pub use file::FileProvider;
pub use html::HtmlProvider;
pub use web::WebProvider;

/// What a resource kind must supply for the crawl engine to traverse it.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Fetches raw content for a fully resolved link. Failures here are the
    /// engine's silent-empty category: the page simply yields no links.
    async fn fetch_content(&self, link: &str) -> Result<String>;

    /// Verifies the crawl root before any traversal. A failure aborts the
    /// whole session, so this is the one place a liveness result escalates.
    async fn verify_root(&self, resource: &str) -> Result<(), CrawlError>;

    /// Route of the root page. `None` means the resource identifier already
    /// is the full link and needs no further resolution.
    fn root_route(&self) -> Option<&'static str>;

    /// Whether a discovered link should be liveness checked. File and
    /// literal-HTML resources only check external links; their internal
    /// links have nothing to answer a GET.
    fn is_link_checkable(&self, link: &str) -> bool;

    /// Resolves a raw link (or the root route) against the resource.
    fn resolve(&self, source: &str, route: Option<&str>) -> String;
}
