// src/provider/file.rs
// =============================================================================
// Filesystem content provider: the resource is a path to a local HTML file.
// Internal links in a file point at routes of some site we can't resolve
// from disk, so only external links get liveness checked.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::warn;
use scraper::Html;
use std::path::Path;

use crate::crawl::CrawlError;
use crate::normalize;
use crate::provider::ResourceProvider;

pub struct FileProvider;

#[async_trait]
impl ResourceProvider for FileProvider {
    async fn fetch_content(&self, link: &str) -> Result<String> {
        let content = tokio::fs::read_to_string(link)
            .await
            .with_context(|| format!("failed to read {link}"))?;

        // The scraper is expected to run over HTML. A file that doesn't
        // parse cleanly yields no links instead of garbage matches.
        if !Html::parse_document(&content).errors.is_empty() {
            warn!("{link} is not well-formed HTML, skipping its content");
            return Ok(String::new());
        }

        Ok(content)
    }

    async fn verify_root(&self, resource: &str) -> Result<(), CrawlError> {
        if Path::new(resource).is_file() {
            Ok(())
        } else {
            Err(CrawlError::RootFileMissing {
                path: resource.to_string(),
            })
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_PAGE: &str = "<!DOCTYPE html><html><head><title>t</title></head>\
                              <body><a href=\"http://example.com\">x</a></body></html>";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_well_formed_html() {
        let file = write_temp(VALID_PAGE);
        let content = FileProvider
            .fetch_content(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(content, VALID_PAGE);
    }

    #[tokio::test]
    async fn malformed_html_yields_empty_content() {
        // No doctype and a stray null byte; html5ever reports parse errors.
        let file = write_temp("<html><body>\u{0}</body></html>");
        let content = FileProvider
            .fetch_content(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn missing_file_fails_fetch() {
        assert!(FileProvider
            .fetch_content("/no/such/file.html")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn existing_root_passes_verification() {
        let file = write_temp(VALID_PAGE);
        assert!(FileProvider
            .verify_root(file.path().to_str().unwrap())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn missing_root_fails_verification() {
        let error = FileProvider
            .verify_root("/no/such/file.html")
            .await
            .unwrap_err();
        assert!(matches!(error, CrawlError::RootFileMissing { .. }));
    }

    #[test]
    fn only_external_links_are_checkable() {
        assert!(FileProvider.is_link_checkable("http://example.com"));
        assert!(FileProvider.is_link_checkable("www.example.com"));
        assert!(!FileProvider.is_link_checkable("/internal"));
    }

    #[test]
    fn links_resolve_to_themselves() {
        assert_eq!(
            FileProvider.resolve("page.html", Some("http://example.com")),
            "http://example.com"
        );
        assert_eq!(FileProvider.resolve("page.html", None), "page.html");
    }
}
