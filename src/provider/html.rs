// src/provider/html.rs
// =============================================================================
// Literal-HTML content provider: the resource identifier IS the page
// content. There is no meaningful liveness concept for a string you already
// hold, so root verification is a no-op and only external links are checked.
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;

use crate::crawl::CrawlError;
use crate::normalize;
use crate::provider::ResourceProvider;

pub struct HtmlProvider;

#[async_trait]
impl ResourceProvider for HtmlProvider {
    async fn fetch_content(&self, link: &str) -> Result<String> {
        Ok(link.to_string())
    }

    async fn verify_root(&self, _resource: &str) -> Result<(), CrawlError> {
        Ok(())
    }

    fn root_route(&self) -> Option<&'static str> {
        None
    }

    fn is_link_checkable(&self, link: &str) -> bool {
        !normalize::is_internal(link, None)
    }

    fn resolve(&self, source: &str, route: Option<&str>) -> String {
        route.unwrap_or(source).to_string()
    }
}
