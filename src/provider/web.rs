// src/provider/web.rs
// =============================================================================
// Network content provider: pages are fetched over HTTP and every
// discovered link — internal or external — can be liveness checked.
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::checker::{LivenessChecker, Verdict};
use crate::crawl::CrawlError;
use crate::normalize;
use crate::provider::ResourceProvider;

pub struct WebProvider {
    client: Client,
    checker: LivenessChecker,
}

impl WebProvider {
    pub fn new(client: Client) -> Self {
        let checker = LivenessChecker::new(client.clone());
        Self { client, checker }
    }
}

#[async_trait]
impl ResourceProvider for WebProvider {
    async fn fetch_content(&self, link: &str) -> Result<String> {
        let response = self.client.get(link).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn verify_root(&self, resource: &str) -> Result<(), CrawlError> {
        match self.checker.check(resource).await {
            Verdict::Alive => Ok(()),
            Verdict::Dead(reason) => Err(CrawlError::RootUnreachable {
                resource: resource.to_string(),
                reason,
            }),
        }
    }

    fn root_route(&self) -> Option<&'static str> {
        Some("/")
    }

    fn is_link_checkable(&self, _link: &str) -> bool {
        true
    }

    fn resolve(&self, source: &str, route: Option<&str>) -> String {
        match route {
            Some(link) => normalize::canonicalize(source, link),
            None => source.to_string(),
        }
    }
}
